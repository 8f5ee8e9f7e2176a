//! Test fixture utilities: descriptor texts, atlases, and on-disk font trees.

use bmfont_core::{BitmapFont, Rect, Texture, TextureRegion};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Two glyphs and one kerning pair:
/// 'A' (advance 10, offset (1,2), region 0,0,8,10),
/// 'B' (advance 12, offset (0,0), region 8,0,9,10),
/// kerning (A, B) = -2, line height 16.
pub const AB_FNT: &str = r#"info face="Fixture" size=16 bold=0 italic=0 padding=0,0,0,0 spacing=1,1
common lineHeight=16 base=12 scaleW=32 scaleH=16 pages=1
page id=0 file="fixture.png"
chars count=2
char id=65 x=0 y=0 width=8 height=10 xoffset=1 yoffset=2 xadvance=10 page=0 chnl=15
char id=66 x=8 y=0 width=9 height=10 xoffset=0 yoffset=0 xadvance=12 page=0 chnl=15
kernings count=1
kerning first=65 second=66 amount=-2
"#;

/// A wider fixture: lowercase letters with varied advances and several kerning
/// pairs, including pairs whose first or second character has no glyph.
pub fn alphabet_fnt() -> String {
    let mut out = String::from(
        "info face=\"Alphabet\" size=12\ncommon lineHeight=14 base=11 scaleW=256 scaleH=16 pages=1\npage id=0 file=\"alphabet.png\"\n",
    );
    for (i, c) in ('a'..='z').enumerate() {
        let i = i as i32;
        out.push_str(&format!(
            "char id={} x={} y=0 width=7 height=9 xoffset={} yoffset={} xadvance={}\n",
            c as u32,
            i * 8,
            i % 3,
            i % 2,
            6 + i % 4
        ));
    }
    for (first, second, amount) in [
        ('a', 'v', -1),
        ('v', 'a', -1),
        ('f', 'i', -2),
        ('t', 'o', 1),
        ('o', '!', -3),
        ('?', 'a', -4),
    ] {
        out.push_str(&format!(
            "kerning first={} second={} amount={}\n",
            first as u32, second as u32, amount
        ));
    }
    out
}

/// An atlas region covering a fresh texture of the given size.
pub fn atlas(name: &str, width: i32, height: i32) -> TextureRegion {
    TextureRegion::whole(Arc::new(Texture::new(name, width, height)))
}

/// An atlas region at an offset inside a larger sheet.
pub fn sheet_region(bounds: Rect) -> TextureRegion {
    TextureRegion::new(Arc::new(Texture::new("sheet.png", 1024, 1024)), bounds)
}

/// The [`AB_FNT`] font built against a 32x16 atlas.
pub fn ab_font() -> BitmapFont {
    BitmapFont::from_fnt_str(AB_FNT, atlas("fixture.png", 32, 16)).expect("AB fixture must build")
}

/// The [`alphabet_fnt`] font built against a 256x16 atlas.
pub fn alphabet_font() -> BitmapFont {
    BitmapFont::from_fnt_str(&alphabet_fnt(), atlas("alphabet.png", 256, 16))
        .expect("alphabet fixture must build")
}

/// A temporary directory holding font files.
pub struct FontDirFixture {
    pub root: TempDir,
}

impl FontDirFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }
}

impl Default for FontDirFixture {
    fn default() -> Self {
        Self::new()
    }
}
