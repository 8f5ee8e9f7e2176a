//! Bitmap Font Core Library
//!
//! This crate parses BMFont text descriptors, builds immutable glyph tables
//! against caller-supplied texture atlas regions, and lays out single lines of
//! text for measurement or drawing.
//!
//! # Overview
//!
//! Data flows leaves-first:
//!
//! - **Descriptor**: BMFont text is parsed into ordered char/kerning records
//!   plus the `common` header ([`FontDescriptor`])
//! - **Font**: records and an atlas region become a [`BitmapFont`] holding a
//!   [`GlyphTable`] and the line height
//! - **Layout**: [`BitmapFont::measure`] and [`BitmapFont::draw`] walk the text
//!   with kerning-aware cursor advance
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use bmfont_core::{BitmapFont, Color, CommandBuffer, Point, Size, Texture, TextureRegion};
//!
//! let fnt = "common lineHeight=16\n\
//!     char id=65 x=0 y=0 width=8 height=10 xoffset=1 yoffset=2 xadvance=10\n\
//!     char id=66 x=8 y=0 width=9 height=10 xoffset=0 yoffset=0 xadvance=12\n\
//!     kerning first=65 second=66 amount=-2\n";
//!
//! let texture = Arc::new(Texture::new("font.png", 64, 16));
//! let font = BitmapFont::from_fnt_str(fnt, TextureRegion::whole(texture)).unwrap();
//!
//! assert_eq!(font.measure("AB"), Size::new(20, 16));
//!
//! let mut commands = CommandBuffer::new();
//! font.draw(&mut commands, "AB", Point::new(0, 0), Color::white());
//! assert_eq!(commands.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`atlas`]: Texture handles, regions, and the renderer sink trait
//! - [`cache`]: Caller-owned cache for the embedded default fonts
//! - [`descriptor`]: BMFont text parsing
//! - [`error`]: Parse and construction errors
//! - [`font`]: Font construction
//! - [`geometry`]: Points, sizes, rectangles, and colors
//! - [`glyph`]: Glyphs and the glyph table
//! - [`layout`]: Measurement and drawing

pub mod atlas;
pub mod cache;
pub mod descriptor;
pub mod error;
pub mod font;
pub mod geometry;
pub mod glyph;
pub mod layout;

// Re-export commonly used types at the crate root
pub use atlas::{CommandBuffer, DrawCommand, RenderSink, Texture, TextureRegion};
pub use cache::{DefaultFont, FontCache};
pub use descriptor::{
    parse_descriptor, CharRecord, CommonRecord, FontDescriptor, InfoRecord, KerningRecord,
    PageRecord,
};
pub use error::{DescriptorError, FontError};
pub use font::{BitmapFont, FontBuilder};
pub use geometry::{Color, Point, Rect, Size};
pub use glyph::{Glyph, GlyphTable};
pub use layout::{GlyphLayout, PlacedGlyph};
