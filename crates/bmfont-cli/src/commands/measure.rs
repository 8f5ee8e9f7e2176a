//! Measure command implementation
//!
//! Measures text line by line; the block is as wide as its widest line.

use anyhow::{Context, Result};
use bmfont_core::{BitmapFont, Size};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{LineMeasure, MeasureOutput};
use super::{line_span, split_lines};
use crate::input::load_font;

/// Run the measure command
///
/// # Arguments
/// * `font_path` - Path to a `.fnt` descriptor or `.json` manifest
/// * `text` - Text to measure; `\n` starts a new line
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(font_path: &str, text: &str, json_output: bool) -> Result<ExitCode> {
    let loaded = load_font(Path::new(font_path))
        .with_context(|| format!("Failed to load font: {}", font_path))?;
    let output = measure(&loaded.font, text);

    if json_output {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        for line in &output.lines {
            println!("  {:>6}  {}", line.width.to_string().bold(), line.text.dimmed());
        }
        println!(
            "{} {}x{}",
            "Size:".cyan().bold(),
            output.size.width,
            output.size.height
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Measures each line of `text` and the enclosing block.
pub fn measure(font: &BitmapFont, text: &str) -> MeasureOutput {
    let lines: Vec<LineMeasure> = split_lines(text)
        .into_iter()
        .map(|line| LineMeasure {
            text: line.to_string(),
            width: font.measure(line).width,
        })
        .collect();

    let width = lines.iter().map(|l| l.width).max().unwrap_or(0);
    let height = line_span(font.line_height(), lines.len());

    MeasureOutput {
        size: Size::new(width, height),
        lines,
    }
}
