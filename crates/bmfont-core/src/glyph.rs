//! Glyphs and the read-only glyph table.

use std::collections::HashMap;

use crate::atlas::TextureRegion;
use crate::geometry::Point;

/// Render and metric data for one character.
///
/// Glyphs are immutable once built: the kerning map is complete at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    id: char,
    region: TextureRegion,
    offset: Point,
    x_advance: i32,
    kerning: HashMap<char, i32>,
}

impl Glyph {
    /// Creates a glyph with its finished kerning map.
    pub fn new(
        id: char,
        region: TextureRegion,
        offset: Point,
        x_advance: i32,
        kerning: HashMap<char, i32>,
    ) -> Self {
        Self {
            id,
            region,
            offset,
            x_advance,
            kerning,
        }
    }

    pub fn id(&self) -> char {
        self.id
    }

    /// Atlas region holding the glyph's pixels.
    pub fn region(&self) -> &TextureRegion {
        &self.region
    }

    /// Displacement from the cursor when drawing.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Horizontal cursor movement after this glyph.
    pub fn x_advance(&self) -> i32 {
        self.x_advance
    }

    /// Advance adjustment when `next` immediately follows this glyph.
    pub fn kerning(&self, next: char) -> i32 {
        self.kerning.get(&next).copied().unwrap_or(0)
    }

    /// All kerning pairs keyed by the following character.
    pub fn kerning_pairs(&self) -> &HashMap<char, i32> {
        &self.kerning
    }
}

/// Mapping from character to glyph. Built once, then read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphTable {
    /// Builds a table from glyphs. Later glyphs with the same id replace earlier ones.
    pub fn from_glyphs(glyphs: impl IntoIterator<Item = Glyph>) -> Self {
        Self {
            glyphs: glyphs.into_iter().map(|g| (g.id, g)).collect(),
        }
    }

    /// Looks up the glyph for `ch`.
    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Kerning between `glyph` and the character following it; 0 when unset.
    pub fn kerning(&self, glyph: &Glyph, next: char) -> i32 {
        glyph.kerning(next)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs in code-point order.
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        let mut glyphs: Vec<&Glyph> = self.glyphs.values().collect();
        glyphs.sort_by_key(|g| g.id);
        glyphs.into_iter()
    }

    /// Total kerning pairs across all glyphs.
    pub fn kerning_pair_count(&self) -> usize {
        self.glyphs.values().map(|g| g.kerning.len()).sum()
    }
}
