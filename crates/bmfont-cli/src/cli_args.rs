//! CLI argument definitions for the bmfont command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use bmfont_core::Color;
use clap::{Parser, Subcommand};

/// bmfont - BMFont bitmap font inspection and text layout
#[derive(Parser)]
#[command(name = "bmfont")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print a summary of a font's metrics, pages, and glyph coverage
    Inspect {
        /// Path to the font (.fnt descriptor or .json manifest)
        #[arg(short, long)]
        font: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Parse and build a font, reporting errors and warnings
    Validate {
        /// Path to the font (.fnt descriptor or .json manifest)
        #[arg(short, long)]
        font: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Measure text; each line break starts a new line
    Measure {
        /// Path to the font (.fnt descriptor or .json manifest)
        #[arg(short, long)]
        font: String,

        /// Text to measure
        #[arg(short, long, allow_hyphen_values = true)]
        text: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the draw commands emitted for text
    Layout {
        /// Path to the font (.fnt descriptor or .json manifest)
        #[arg(short, long)]
        font: String,

        /// Text to lay out
        #[arg(short, long, allow_hyphen_values = true)]
        text: String,

        /// Cursor x of the first line
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        x: i32,

        /// Cursor y of the first line
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        y: i32,

        /// Tint color as #rrggbb or #rrggbbaa
        #[arg(short, long, default_value = "#ffffff", value_parser = parse_color)]
        color: Color,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn parse_color(value: &str) -> Result<Color, String> {
    Color::from_hex(value).ok_or_else(|| format!("invalid color `{}` (expected #rrggbb or #rrggbbaa)", value))
}
