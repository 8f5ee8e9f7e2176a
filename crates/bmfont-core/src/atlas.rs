//! Texture atlas regions and the renderer sink they draw into.
//!
//! Pixel data never lives here. A [`Texture`] is a handle to an image owned by
//! whoever loaded it, and a [`TextureRegion`] is a rectangle within that image.
//! Regions compose: a glyph region is a sub-region of the font's atlas region,
//! which may itself be a sub-region of a larger UI sprite sheet.

use serde::Serialize;
use std::sync::Arc;

use crate::geometry::{Color, Rect, Size};

/// Handle to an externally loaded image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Texture {
    name: String,
    width: i32,
    height: i32,
}

impl Texture {
    /// Creates a texture handle.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Name of the image resource (usually its file name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// A rectangle within a shared texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRegion {
    texture: Arc<Texture>,
    bounds: Rect,
}

impl TextureRegion {
    /// Creates a region with `bounds` in image space.
    pub fn new(texture: Arc<Texture>, bounds: Rect) -> Self {
        Self { texture, bounds }
    }

    /// A region covering the whole texture.
    pub fn whole(texture: Arc<Texture>) -> Self {
        let bounds = Rect::new(0, 0, texture.width(), texture.height());
        Self { texture, bounds }
    }

    /// Cuts a sub-region. `bounds` is relative to this region's top-left corner.
    pub fn sub_region(&self, bounds: Rect) -> Self {
        Self {
            texture: Arc::clone(&self.texture),
            bounds: bounds.offset(self.bounds.x, self.bounds.y),
        }
    }

    /// The backing texture.
    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    /// Bounds in image space.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Pixel dimensions of the region.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Submits this region to `sink`, stretched to `dest` and tinted by `color`.
    pub fn draw(&self, sink: &mut dyn RenderSink, dest: Rect, color: Color) {
        sink.draw_region(&self.texture, self.bounds, dest, color);
    }
}

/// Accepts textured-rectangle submissions.
///
/// Batching and flushing are the implementor's concern.
pub trait RenderSink {
    /// Draw the `source` rectangle of `texture` into `dest`, tinted by `color`.
    fn draw_region(&mut self, texture: &Texture, source: Rect, dest: Rect, color: Color);
}

/// One recorded textured-rectangle submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawCommand {
    /// Name of the texture sampled.
    pub texture: String,
    /// Source rectangle in image space.
    pub source: Rect,
    /// Destination rectangle in target space.
    pub dest: Rect,
    /// Tint color.
    pub color: Color,
}

/// A [`RenderSink`] that records every submission in order.
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the buffer, returning the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSink for CommandBuffer {
    fn draw_region(&mut self, texture: &Texture, source: Rect, dest: Rect, color: Color) {
        self.commands.push(DrawCommand {
            texture: texture.name().to_string(),
            source,
            dest,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Arc<Texture> {
        Arc::new(Texture::new("ui.png", 256, 128))
    }

    #[test]
    fn test_whole_region_covers_texture() {
        let region = TextureRegion::whole(sheet());
        assert_eq!(region.bounds(), Rect::new(0, 0, 256, 128));
    }

    #[test]
    fn test_sub_region_composes_offsets() {
        let font_area = TextureRegion::new(sheet(), Rect::new(64, 32, 128, 64));
        let glyph = font_area.sub_region(Rect::new(8, 4, 9, 10));
        assert_eq!(glyph.bounds(), Rect::new(72, 36, 9, 10));

        // Nested composition keeps accumulating.
        let nested = glyph.sub_region(Rect::new(1, 1, 2, 2));
        assert_eq!(nested.bounds(), Rect::new(73, 37, 2, 2));
    }

    #[test]
    fn test_sub_region_shares_texture() {
        let texture = sheet();
        let region = TextureRegion::whole(Arc::clone(&texture));
        let child = region.sub_region(Rect::new(0, 0, 4, 4));
        assert!(Arc::ptr_eq(child.texture(), &texture));
        assert_eq!(Arc::strong_count(&texture), 3);
    }

    #[test]
    fn test_draw_records_command() {
        let region = TextureRegion::new(sheet(), Rect::new(10, 20, 5, 6));
        let mut buffer = CommandBuffer::new();
        region.draw(&mut buffer, Rect::new(100, 100, 5, 6), Color::black());

        assert_eq!(
            buffer.commands(),
            &[DrawCommand {
                texture: "ui.png".to_string(),
                source: Rect::new(10, 20, 5, 6),
                dest: Rect::new(100, 100, 5, 6),
                color: Color::black(),
            }]
        );
    }
}
