//! End-to-end layout tests.
//!
//! Descriptor text is parsed, built against an atlas region, and measured or
//! drawn into a recording sink.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bmfont-tests --test e2e_layout
//! ```

use pretty_assertions::assert_eq;

use bmfont_core::{
    parse_descriptor, BitmapFont, Color, CommandBuffer, DrawCommand, FontError, Point, Rect, Size,
};
use bmfont_tests::fixtures::{ab_font, alphabet_font, alphabet_fnt, atlas, sheet_region, AB_FNT};

#[test]
fn ab_measure_matches_scenario() {
    let font = ab_font();
    assert_eq!(font.measure("AB"), Size::new(10 - 2 + 12, 16));
}

#[test]
fn ab_draw_matches_scenario() {
    let font = ab_font();
    let origin = Point::new(-7, 33);
    let mut sink = CommandBuffer::new();
    font.draw(&mut sink, "AB", origin, Color::rgb(10, 20, 30));

    assert_eq!(
        sink.into_commands(),
        vec![
            DrawCommand {
                texture: "fixture.png".to_string(),
                source: Rect::new(0, 0, 8, 10),
                dest: Rect::new(origin.x + 1, origin.y + 2, 8, 10),
                color: Color::rgb(10, 20, 30),
            },
            DrawCommand {
                texture: "fixture.png".to_string(),
                source: Rect::new(8, 0, 9, 10),
                dest: Rect::new(origin.x + 10 - 2, origin.y, 9, 10),
                color: Color::rgb(10, 20, 30),
            },
        ]
    );
}

#[test]
fn atlas_inside_sheet_offsets_sources_not_destinations() {
    let font = BitmapFont::from_fnt_str(AB_FNT, sheet_region(Rect::new(200, 300, 32, 16))).unwrap();
    let mut sink = CommandBuffer::new();
    font.draw(&mut sink, "AB", Point::ZERO, Color::white());

    let sources: Vec<Rect> = sink.commands().iter().map(|c| c.source).collect();
    let dests: Vec<Rect> = sink.commands().iter().map(|c| c.dest).collect();
    assert_eq!(
        sources,
        vec![Rect::new(200, 300, 8, 10), Rect::new(208, 300, 9, 10)]
    );
    assert_eq!(dests, vec![Rect::new(1, 2, 8, 10), Rect::new(8, 0, 9, 10)]);
}

#[test]
fn empty_text() {
    let font = ab_font();
    assert_eq!(font.measure(""), Size::new(0, 16));

    let mut sink = CommandBuffer::new();
    font.draw(&mut sink, "", Point::new(5, 5), Color::white());
    assert!(sink.is_empty());
}

#[test]
fn text_of_only_missing_glyphs() {
    let font = ab_font();
    assert_eq!(font.measure("xyz 123"), Size::new(0, 16));

    let mut sink = CommandBuffer::new();
    font.draw(&mut sink, "xyz 123", Point::ZERO, Color::white());
    assert!(sink.is_empty());
}

#[test]
fn kerning_key_without_glyph_only_acts_through_neighbor() {
    // '!' has no glyph; it only matters as the second half of ('o', '!').
    let font = alphabet_font();
    let o = font.glyphs().get('o').unwrap();
    assert_eq!(font.measure("!").width, 0);
    assert_eq!(font.measure("o!").width, o.x_advance() - 3);
    assert_eq!(font.measure("o").width, o.x_advance());
}

#[test]
fn kerning_with_undefined_first_char_is_dropped() {
    let font = alphabet_font();
    // ('?', 'a', -4) was dropped at build time; '?' contributes nothing.
    let a = font.glyphs().get('a').unwrap();
    assert_eq!(font.measure("?a").width, a.x_advance());
}

#[test]
fn every_char_record_yields_one_glyph() {
    let text = alphabet_fnt();
    let desc = parse_descriptor(&text).unwrap();
    let font = BitmapFont::from_descriptor(&desc, atlas("alphabet.png", 256, 16)).unwrap();

    assert_eq!(font.glyphs().len(), desc.chars.len());
    for record in &desc.chars {
        let glyph = font.glyphs().get(record.id).unwrap();
        assert_eq!(glyph.id(), record.id);
        assert_eq!(glyph.offset(), record.offset);
        assert_eq!(glyph.x_advance(), record.x_advance);
        assert_eq!(glyph.region().bounds(), record.bounds);
    }
}

#[test]
fn kerning_records_round_trip_to_glyphs() {
    let text = alphabet_fnt();
    let desc = parse_descriptor(&text).unwrap();
    let font = BitmapFont::from_descriptor(&desc, atlas("alphabet.png", 256, 16)).unwrap();

    for pair in &desc.kernings {
        match font.glyphs().get(pair.first) {
            Some(glyph) => assert_eq!(glyph.kerning(pair.second), pair.amount),
            None => assert_eq!(pair.first, '?'),
        }
    }
}

#[test]
fn malformed_descriptor_produces_no_font() {
    let broken = AB_FNT.replace("xadvance=12", "xadvance=twelve");
    let err = BitmapFont::from_fnt_str(&broken, atlas("fixture.png", 32, 16)).unwrap_err();
    match err {
        FontError::Descriptor(e) => assert_eq!(e.line(), Some(6)),
        other => panic!("expected descriptor error, got {other:?}"),
    }
}

#[test]
fn multi_line_text_is_split_by_caller() {
    let font = ab_font();
    let mut sink = CommandBuffer::new();
    let origin = Point::new(0, 0);
    for (i, line) in "AB\nBA".split('\n').enumerate() {
        let start = Point::new(origin.x, origin.y + font.line_height() * i as i32);
        font.draw(&mut sink, line, start, Color::white());
    }
    let dests: Vec<Rect> = sink.commands().iter().map(|c| c.dest).collect();
    assert_eq!(
        dests,
        vec![
            Rect::new(1, 2, 8, 10),
            Rect::new(8, 0, 9, 10),
            Rect::new(0, 16, 9, 10),
            Rect::new(13, 18, 8, 10),
        ]
    );
}
