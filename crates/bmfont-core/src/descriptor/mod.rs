//! BMFont text descriptor parsing.
//!
//! The descriptor is a line-oriented format produced by bitmap font
//! generators:
//!
//! ```text
//! info face="Arial" size=32 bold=0 italic=0 padding=0,0,0,0 spacing=1,1
//! common lineHeight=32 base=26 scaleW=256 scaleH=256 pages=1
//! page id=0 file="arial_0.png"
//! chars count=2
//! char id=65 x=0 y=0 width=8 height=10 xoffset=1 yoffset=2 xadvance=10 page=0 chnl=15
//! char id=66 x=8 y=0 width=9 height=10 xoffset=0 yoffset=0 xadvance=12 page=0 chnl=15
//! kernings count=1
//! kerning first=65 second=66 amount=-2
//! ```
//!
//! Unknown record kinds and unknown keys are ignored. Missing or malformed
//! required fields abort the parse.

mod tokenizer;


use log::trace;
use serde::Serialize;

use crate::error::DescriptorError;
use crate::geometry::{Point, Rect};
use tokenizer::{tokenize, RawRecord};

/// Optional `info` header describing how the font was generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InfoRecord {
    pub face: String,
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
    /// Padding around each glyph: up, right, down, left.
    pub padding: [i32; 4],
    /// Spacing between glyphs in the atlas: horizontal, vertical.
    pub spacing: [i32; 2],
}

/// The `common` header shared by every glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommonRecord {
    /// Distance in pixels between successive lines.
    pub line_height: i32,
    /// Distance from the top of a line to the baseline.
    pub base: i32,
    /// Atlas page width.
    pub scale_w: i32,
    /// Atlas page height.
    pub scale_h: i32,
    /// Declared page count.
    pub pages: u32,
}

/// One atlas page image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    pub id: u32,
    pub file: String,
}

/// A character definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharRecord {
    pub id: char,
    /// Glyph rectangle within its atlas page.
    pub bounds: Rect,
    /// Displacement from the cursor when drawing.
    pub offset: Point,
    /// Cursor advance after drawing.
    pub x_advance: i32,
    pub page: u32,
    /// Texture channel mask (15 = all channels).
    pub channel: u32,
}

/// A kerning pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KerningRecord {
    pub first: char,
    pub second: char,
    pub amount: i32,
}

/// The parsed contents of a descriptor, records in file order.
///
/// Duplicate `char` and `kerning` records are kept as they appear; consumers
/// that build maps from them get last-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontDescriptor {
    pub info: Option<InfoRecord>,
    pub common: CommonRecord,
    pub pages: Vec<PageRecord>,
    pub chars: Vec<CharRecord>,
    pub kernings: Vec<KerningRecord>,
}

impl FontDescriptor {
    /// Parses BMFont text.
    pub fn parse(text: &str) -> Result<Self, DescriptorError> {
        parse_descriptor(text)
    }

    /// Line height from the `common` header.
    pub fn line_height(&self) -> i32 {
        self.common.line_height
    }

    /// File name of page `id`, if declared.
    pub fn page_file(&self, id: u32) -> Option<&str> {
        self.pages
            .iter()
            .rev()
            .find(|p| p.id == id)
            .map(|p| p.file.as_str())
    }
}

/// Parses BMFont text into a [`FontDescriptor`].
pub fn parse_descriptor(text: &str) -> Result<FontDescriptor, DescriptorError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut info = None;
    let mut common: Option<CommonRecord> = None;
    let mut pages = Vec::new();
    let mut chars = Vec::new();
    let mut kernings = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let Some(record) = tokenize(idx + 1, line) else {
            continue;
        };

        match record.tag {
            "info" => {
                record.check_well_formed()?;
                info = Some(parse_info(&record)?);
            }
            "common" => {
                record.check_well_formed()?;
                if common.is_some() {
                    return Err(DescriptorError::DuplicateCommon { line: record.line });
                }
                common = Some(parse_common(&record)?);
            }
            "page" => {
                record.check_well_formed()?;
                pages.push(parse_page(&record)?);
            }
            "char" => {
                record.check_well_formed()?;
                chars.push(parse_char(&record)?);
            }
            "kerning" => {
                record.check_well_formed()?;
                kernings.push(parse_kerning(&record)?);
            }
            // Count hints; the records themselves are authoritative.
            "chars" | "kernings" => {}
            other => {
                trace!("line {}: ignoring unknown record `{}`", record.line, other);
            }
        }
    }

    Ok(FontDescriptor {
        info,
        common: common.ok_or(DescriptorError::MissingCommon)?,
        pages,
        chars,
        kernings,
    })
}

fn parse_info(record: &RawRecord<'_>) -> Result<InfoRecord, DescriptorError> {
    Ok(InfoRecord {
        face: record.get("face").unwrap_or_default().to_string(),
        size: record.parse("size")?.unwrap_or(0),
        bold: record.parse_flag("bold")?.unwrap_or(false),
        italic: record.parse_flag("italic")?.unwrap_or(false),
        padding: record.parse_list::<4>("padding")?.unwrap_or_default(),
        spacing: record.parse_list::<2>("spacing")?.unwrap_or_default(),
    })
}

fn parse_common(record: &RawRecord<'_>) -> Result<CommonRecord, DescriptorError> {
    Ok(CommonRecord {
        line_height: record.require("common", "lineHeight")?,
        base: record.parse("base")?.unwrap_or(0),
        scale_w: record.parse("scaleW")?.unwrap_or(0),
        scale_h: record.parse("scaleH")?.unwrap_or(0),
        pages: record.parse("pages")?.unwrap_or(0),
    })
}

fn parse_page(record: &RawRecord<'_>) -> Result<PageRecord, DescriptorError> {
    let id = record.require("page", "id")?;
    let file = record
        .get("file")
        .ok_or(DescriptorError::MissingField {
            line: record.line,
            tag: "page",
            field: "file",
        })?
        .to_string();
    Ok(PageRecord { id, file })
}

fn parse_char(record: &RawRecord<'_>) -> Result<CharRecord, DescriptorError> {
    const TAG: &str = "char";
    Ok(CharRecord {
        id: record.require_char(TAG, "id")?,
        bounds: Rect::new(
            record.require(TAG, "x")?,
            record.require(TAG, "y")?,
            record.require(TAG, "width")?,
            record.require(TAG, "height")?,
        ),
        offset: Point::new(
            record.require(TAG, "xoffset")?,
            record.require(TAG, "yoffset")?,
        ),
        x_advance: record.require(TAG, "xadvance")?,
        page: record.parse("page")?.unwrap_or(0),
        channel: record.parse("chnl")?.unwrap_or(15),
    })
}

fn parse_kerning(record: &RawRecord<'_>) -> Result<KerningRecord, DescriptorError> {
    const TAG: &str = "kerning";
    Ok(KerningRecord {
        first: record.require_char(TAG, "first")?,
        second: record.require_char(TAG, "second")?,
        amount: record.require(TAG, "amount")?,
    })
}
