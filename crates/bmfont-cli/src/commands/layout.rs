//! Layout command implementation
//!
//! Prints the draw commands the engine emits for a block of text.

use anyhow::{Context, Result};
use bmfont_core::{BitmapFont, Color, CommandBuffer, Point};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::LayoutOutput;
use super::{line_span, split_lines};
use crate::input::load_font;

/// Run the layout command
///
/// # Arguments
/// * `font_path` - Path to a `.fnt` descriptor or `.json` manifest
/// * `text` - Text to lay out; `\n` starts a new line
/// * `origin` - Cursor start of the first line
/// * `color` - Tint applied to every glyph
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    font_path: &str,
    text: &str,
    origin: Point,
    color: Color,
    json_output: bool,
) -> Result<ExitCode> {
    let loaded = load_font(Path::new(font_path))
        .with_context(|| format!("Failed to load font: {}", font_path))?;
    let output = layout(&loaded.font, text, origin, color);

    if json_output {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} command(s) from ({}, {})",
        "Layout:".cyan().bold(),
        output.commands.len(),
        origin.x,
        origin.y
    );
    for cmd in &output.commands {
        println!(
            "  {} src=({}, {}, {}x{}) dest=({}, {}, {}x{}) {}",
            cmd.texture.dimmed(),
            cmd.source.x,
            cmd.source.y,
            cmd.source.width,
            cmd.source.height,
            cmd.dest.x,
            cmd.dest.y,
            cmd.dest.width,
            cmd.dest.height,
            cmd.color.to_hex().dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Draws each line of `text` into a command buffer, one line height apart.
pub fn layout(font: &BitmapFont, text: &str, origin: Point, color: Color) -> LayoutOutput {
    let mut buffer = CommandBuffer::new();
    let mut cursor = origin;

    for (i, line) in split_lines(text).into_iter().enumerate() {
        let y = origin.y.saturating_add(line_span(font.line_height(), i));
        let start = Point::new(origin.x, y);
        cursor = font.draw(&mut buffer, line, start, color);
    }

    LayoutOutput {
        origin,
        cursor,
        commands: buffer.into_commands(),
    }
}
