//! Single-line text layout, measurement, and drawing.
//!
//! Measurement and drawing share one traversal ([`GlyphLayout`]), so the
//! measured width always equals the distance the draw cursor travels.
//!
//! For each character, left to right:
//! - no glyph: skipped, cursor unchanged
//! - glyph: placed at `cursor + glyph.offset`, then the cursor advances by
//!   `x_advance` plus the kerning keyed on the raw next character, if any
//!
//! Line breaks get no special treatment; split multi-line text first.

use std::iter::Peekable;
use std::str::Chars;

use crate::atlas::RenderSink;
use crate::font::BitmapFont;
use crate::geometry::{Color, Point, Rect, Size};
use crate::glyph::{Glyph, GlyphTable};

/// A glyph positioned by the layout traversal.
#[derive(Debug, Clone, Copy)]
pub struct PlacedGlyph<'f> {
    pub glyph: &'f Glyph,
    /// Destination rectangle: cursor plus glyph offset, sized to the glyph region.
    pub dest: Rect,
}

/// Iterator over the glyphs of a line of text.
#[derive(Debug, Clone)]
pub struct GlyphLayout<'f, 't> {
    glyphs: &'f GlyphTable,
    chars: Peekable<Chars<'t>>,
    cursor: Point,
}

impl<'f, 't> GlyphLayout<'f, 't> {
    /// Starts a traversal of `text` with the cursor at `origin`.
    pub fn new(glyphs: &'f GlyphTable, text: &'t str, origin: Point) -> Self {
        Self {
            glyphs,
            chars: text.chars().peekable(),
            cursor: origin,
        }
    }

    /// Current cursor position. After exhausting the iterator this is the
    /// pen position following the last glyph.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Runs the traversal to the end and returns the final cursor.
    pub fn finish(mut self) -> Point {
        for _ in self.by_ref() {}
        self.cursor
    }
}

impl<'f, 't> Iterator for GlyphLayout<'f, 't> {
    type Item = PlacedGlyph<'f>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.chars.next()?;
            let Some(glyph) = self.glyphs.get(ch) else {
                continue;
            };

            let offset = glyph.offset();
            let size = glyph.region().size();
            let dest = Rect::new(
                self.cursor.x.saturating_add(offset.x),
                self.cursor.y.saturating_add(offset.y),
                size.width,
                size.height,
            );

            self.cursor.x = self.cursor.x.saturating_add(glyph.x_advance());
            if let Some(&next) = self.chars.peek() {
                self.cursor.x = self.cursor.x.saturating_add(self.glyphs.kerning(glyph, next));
            }

            return Some(PlacedGlyph { glyph, dest });
        }
    }
}

impl BitmapFont {
    /// Lays out `text` as a single line starting at `origin`.
    pub fn layout<'f, 't>(&'f self, text: &'t str, origin: Point) -> GlyphLayout<'f, 't> {
        GlyphLayout::new(self.glyphs(), text, origin)
    }

    /// Measures a single line of text.
    ///
    /// The height is always the font's line height, even for empty text.
    pub fn measure(&self, text: &str) -> Size {
        let end = self.layout(text, Point::ZERO).finish();
        Size::new(end.x, self.line_height())
    }

    /// Draws a single line of text with its cursor starting at `position`.
    ///
    /// Emits one region draw per glyph found and returns the final cursor.
    pub fn draw(
        &self,
        sink: &mut dyn RenderSink,
        text: &str,
        position: Point,
        color: Color,
    ) -> Point {
        let mut layout = self.layout(text, position);
        for placed in layout.by_ref() {
            placed.glyph.region().draw(sink, placed.dest, color);
        }
        layout.cursor()
    }
}
