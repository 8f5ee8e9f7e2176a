//! Inspect command implementation
//!
//! Prints a summary of a font: header metrics, pages, glyph and kerning counts.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::InspectOutput;
use super::validate::{descriptor_warnings, W_DROPPED_KERNING};
use crate::input::{load_font, LoadedFont};

/// Run the inspect command
///
/// # Arguments
/// * `font_path` - Path to a `.fnt` descriptor or `.json` manifest
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(font_path: &str, json_output: bool) -> Result<ExitCode> {
    let loaded = load_font(Path::new(font_path))
        .with_context(|| format!("Failed to load font: {}", font_path))?;
    let summary = summarize(&loaded);

    if json_output {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize output")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Font:".cyan().bold(), font_path);
    if let Some(face) = &summary.face {
        let size = summary.size.map(|s| format!(" {}px", s)).unwrap_or_default();
        println!("  {:<16} {}{}", "face".bold(), face, size);
    }
    println!("  {:<16} {}", "line height".bold(), summary.line_height);
    println!("  {:<16} {}", "base".bold(), summary.base);
    println!("  {:<16} {}", "atlas".bold(), summary.atlas);
    for (i, page) in summary.pages.iter().enumerate() {
        println!("  {:<16} {}", format!("page {}", i).bold(), page);
    }
    println!("  {:<16} {}", "glyphs".bold(), summary.glyph_count);
    if let Some([lo, hi]) = summary.char_range {
        println!("  {:<16} U+{:04X}..U+{:04X}", "range".bold(), lo, hi);
    }
    println!("  {:<16} {}", "kerning pairs".bold(), summary.kerning_pairs);
    if summary.dropped_kerning_pairs > 0 {
        println!(
            "  {:<16} {}",
            "dropped pairs".yellow().bold(),
            summary.dropped_kerning_pairs
        );
    }
    println!("  {:<16} {}", "hash".dimmed(), summary.source_hash.dimmed());

    Ok(ExitCode::SUCCESS)
}

/// Builds the summary record for a loaded font.
pub fn summarize(loaded: &LoadedFont) -> InspectOutput {
    let glyphs = loaded.font.glyphs();
    let info = loaded.descriptor.info.as_ref();

    let mut pages: Vec<_> = loaded.descriptor.pages.iter().collect();
    pages.sort_by_key(|p| p.id);

    let ids: Vec<u32> = glyphs.iter().map(|g| g.id() as u32).collect();
    let char_range = match (ids.first(), ids.last()) {
        (Some(&lo), Some(&hi)) => Some([lo, hi]),
        _ => None,
    };

    let dropped_kerning_pairs = descriptor_warnings(&loaded.descriptor)
        .iter()
        .filter(|w| w.code == W_DROPPED_KERNING)
        .count();

    InspectOutput {
        face: info.map(|i| i.face.clone()).filter(|f| !f.is_empty()),
        size: info.map(|i| i.size),
        line_height: loaded.font.line_height(),
        base: loaded.descriptor.common.base,
        pages: pages.into_iter().map(|p| p.file.clone()).collect(),
        atlas: loaded.atlas.name.clone(),
        glyph_count: glyphs.len(),
        kerning_pairs: glyphs.kerning_pair_count(),
        dropped_kerning_pairs,
        char_range,
        source_kind: loaded.source_kind.to_string(),
        source_hash: loaded.source_hash.clone(),
    }
}
