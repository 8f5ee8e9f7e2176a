//! Validate command implementation
//!
//! Parses and builds a font, reporting hard errors and descriptor warnings.

use anyhow::{Context, Result};
use bmfont_core::FontDescriptor;
use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{JsonError, JsonWarning, ValidateOutput};
use crate::input::load_font;

/// W001: kerning pair whose first character has no glyph.
pub const W_DROPPED_KERNING: &str = "W001";
/// W002: character defined more than once.
pub const W_DUPLICATE_CHAR: &str = "W002";
/// W003: character references an undeclared page.
pub const W_UNDECLARED_PAGE: &str = "W003";
/// W004: descriptor defines no characters.
pub const W_NO_GLYPHS: &str = "W004";

/// Run the validate command
///
/// # Arguments
/// * `font_path` - Path to a `.fnt` descriptor or `.json` manifest
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(font_path: &str, json_output: bool) -> Result<ExitCode> {
    let output = validate(Path::new(font_path));

    if json_output {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        print_human(font_path, &output);
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Loads the font at `path` and collects errors and warnings.
pub fn validate(path: &Path) -> ValidateOutput {
    match load_font(path) {
        Ok(loaded) => ValidateOutput {
            success: true,
            errors: Vec::new(),
            warnings: descriptor_warnings(&loaded.descriptor),
            source_hash: Some(loaded.source_hash),
        },
        Err(e) => ValidateOutput {
            success: false,
            errors: vec![JsonError::from(&e)],
            warnings: Vec::new(),
            source_hash: None,
        },
    }
}

/// Non-fatal findings about a parsed descriptor.
pub fn descriptor_warnings(descriptor: &FontDescriptor) -> Vec<JsonWarning> {
    let mut warnings = Vec::new();

    if descriptor.chars.is_empty() {
        warnings.push(JsonWarning::new(
            W_NO_GLYPHS,
            "descriptor defines no characters; every lookup will miss",
        ));
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for record in &descriptor.chars {
        if !seen.insert(record.id) && reported.insert(record.id) {
            warnings.push(JsonWarning::new(
                W_DUPLICATE_CHAR,
                format!("character {:?} is defined more than once; the last definition wins", record.id),
            ));
        }
    }

    if !descriptor.pages.is_empty() {
        let declared: HashSet<u32> = descriptor.pages.iter().map(|p| p.id).collect();
        for record in &descriptor.chars {
            if !declared.contains(&record.page) {
                warnings.push(JsonWarning::new(
                    W_UNDECLARED_PAGE,
                    format!("character {:?} references undeclared page {}", record.id, record.page),
                ));
            }
        }
    }

    for pair in &descriptor.kernings {
        if !seen.contains(&pair.first) {
            warnings.push(JsonWarning::new(
                W_DROPPED_KERNING,
                format!(
                    "kerning pair {:?} -> {:?} is ignored: no glyph for {:?}",
                    pair.first, pair.second, pair.first
                ),
            ));
        }
    }

    warnings
}

fn print_human(font_path: &str, output: &ValidateOutput) {
    println!("{} {}", "Validating:".cyan().bold(), font_path);

    for error in &output.errors {
        println!("  {} [{}] {}", "error".red().bold(), error.code, error.message);
    }
    for warning in &output.warnings {
        println!(
            "  {} [{}] {}",
            "warning".yellow().bold(),
            warning.code,
            warning.message
        );
    }

    if output.success {
        println!(
            "{} {} warning(s)",
            "SUCCESS".green().bold(),
            output.warnings.len()
        );
    } else {
        println!("{} {} error(s)", "FAILED".red().bold(), output.errors.len());
    }
}
