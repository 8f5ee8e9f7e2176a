#![no_main]

use std::sync::Arc;

use bmfont_core::{
    parse_descriptor, BitmapFont, Color, CommandBuffer, Point, Texture, TextureRegion,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(descriptor) = parse_descriptor(text) else {
        return;
    };

    let atlas = TextureRegion::whole(Arc::new(Texture::new("fuzz.png", 256, 256)));
    if let Ok(font) = BitmapFont::from_descriptor(&descriptor, atlas) {
        // Lay out the descriptor text itself; it mixes known and unknown glyphs.
        let mut sink = CommandBuffer::new();
        let end = font.draw(&mut sink, text, Point::ZERO, Color::white());
        assert_eq!(end.x, font.measure(text).width);
    }
});
