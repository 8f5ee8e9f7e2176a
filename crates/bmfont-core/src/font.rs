//! Bitmap font construction.

use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::atlas::{Texture, TextureRegion};
use crate::descriptor::{parse_descriptor, CharRecord, FontDescriptor};
use crate::error::FontError;
use crate::glyph::{Glyph, GlyphTable};

/// An immutable bitmap font: atlas pages, glyph table, and line metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFont {
    pages: Vec<Arc<Texture>>,
    glyphs: GlyphTable,
    line_height: i32,
}

impl BitmapFont {
    /// Creates a builder for assembling a font from pre-built parts.
    pub fn builder() -> FontBuilder {
        FontBuilder::default()
    }

    /// Builds a font whose glyphs are all cut from `atlas`.
    ///
    /// Each glyph region is the char record's bounds taken relative to the
    /// atlas region. The char `page` field is not consulted.
    pub fn from_descriptor(
        descriptor: &FontDescriptor,
        atlas: TextureRegion,
    ) -> Result<Self, FontError> {
        let glyphs = build_glyph_table(descriptor, |record| Ok(atlas.sub_region(record.bounds)))?;
        Self::builder()
            .glyphs(glyphs)
            .page(Arc::clone(atlas.texture()))
            .line_height(descriptor.line_height())
            .build()
    }

    /// Builds a font whose glyphs are cut from `atlases[char.page]`.
    pub fn from_descriptor_paged(
        descriptor: &FontDescriptor,
        atlases: Vec<TextureRegion>,
    ) -> Result<Self, FontError> {
        let glyphs = build_glyph_table(descriptor, |record| {
            atlases
                .get(record.page as usize)
                .map(|atlas| atlas.sub_region(record.bounds))
                .ok_or(FontError::PageOutOfRange {
                    ch: record.id,
                    page: record.page,
                    pages: atlases.len(),
                })
        })?;
        Self::builder()
            .glyphs(glyphs)
            .pages(atlases.iter().map(|a| Arc::clone(a.texture())))
            .line_height(descriptor.line_height())
            .build()
    }

    /// Parses BMFont text and builds a font cut from `atlas`.
    pub fn from_fnt_str(text: &str, atlas: TextureRegion) -> Result<Self, FontError> {
        let descriptor = parse_descriptor(text)?;
        Self::from_descriptor(&descriptor, atlas)
    }

    /// The glyph table.
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Atlas textures, in page order.
    pub fn pages(&self) -> &[Arc<Texture>] {
        &self.pages
    }

    /// Vertical distance between successive lines.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }
}

/// Builds the glyph table for `descriptor`, cutting regions with `cut`.
///
/// Duplicate char records resolve last-wins. Glyphs are cut in file order, so
/// the first failing record is always the one reported. Kerning pairs are
/// gathered per first character before any glyph is constructed; pairs whose
/// first character has no glyph are dropped. The second character is not
/// checked.
fn build_glyph_table<F>(descriptor: &FontDescriptor, cut: F) -> Result<GlyphTable, FontError>
where
    F: Fn(&CharRecord) -> Result<TextureRegion, FontError>,
{
    let mut last_index: HashMap<char, usize> = HashMap::with_capacity(descriptor.chars.len());
    for (index, record) in descriptor.chars.iter().enumerate() {
        last_index.insert(record.id, index);
    }

    let mut kerning: HashMap<char, HashMap<char, i32>> = HashMap::new();
    for pair in &descriptor.kernings {
        if !last_index.contains_key(&pair.first) {
            debug!(
                "dropping kerning pair {:?}->{:?}: no glyph for {:?}",
                pair.first, pair.second, pair.first
            );
            continue;
        }
        kerning
            .entry(pair.first)
            .or_default()
            .insert(pair.second, pair.amount);
    }

    let mut glyphs = Vec::with_capacity(last_index.len());
    for (index, record) in descriptor.chars.iter().enumerate() {
        if last_index.get(&record.id) != Some(&index) {
            continue;
        }
        glyphs.push(Glyph::new(
            record.id,
            cut(record)?,
            record.offset,
            record.x_advance,
            kerning.remove(&record.id).unwrap_or_default(),
        ));
    }

    Ok(GlyphTable::from_glyphs(glyphs))
}

/// Assembles a [`BitmapFont`] from a glyph table and atlas pages.
#[derive(Debug, Default)]
pub struct FontBuilder {
    glyphs: Option<GlyphTable>,
    pages: Vec<Arc<Texture>>,
    line_height: i32,
}

impl FontBuilder {
    /// Sets the glyph table.
    pub fn glyphs(mut self, glyphs: GlyphTable) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    /// Appends one atlas page.
    pub fn page(mut self, texture: Arc<Texture>) -> Self {
        self.pages.push(texture);
        self
    }

    /// Appends atlas pages.
    pub fn pages(mut self, textures: impl IntoIterator<Item = Arc<Texture>>) -> Self {
        self.pages.extend(textures);
        self
    }

    /// Sets the line height.
    pub fn line_height(mut self, line_height: i32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Builds the font. Both a glyph table and at least one page are required.
    pub fn build(self) -> Result<BitmapFont, FontError> {
        let glyphs = self.glyphs.ok_or(FontError::MissingGlyphs)?;
        if self.pages.is_empty() {
            return Err(FontError::MissingPages);
        }
        Ok(BitmapFont {
            pages: self.pages,
            glyphs,
            line_height: self.line_height,
        })
    }
}
