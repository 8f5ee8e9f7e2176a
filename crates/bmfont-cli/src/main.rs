//! bmfont CLI - Command-line interface for BMFont bitmap fonts
//!
//! This binary provides commands for inspecting and validating font
//! descriptors, and for measuring and laying out text with them.

use bmfont_core::Point;
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use bmfont_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Inspect { font, json } => commands::inspect::run(&font, json),
        Commands::Validate { font, json } => commands::validate::run(&font, json),
        Commands::Measure { font, text, json } => commands::measure::run(&font, &text, json),
        Commands::Layout {
            font,
            text,
            x,
            y,
            color,
            json,
        } => commands::layout::run(&font, &text, Point::new(x, y), color, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmfont_core::Color;

    #[test]
    fn test_cli_parses_layout() {
        let cli = Cli::try_parse_from([
            "bmfont", "layout", "--font", "ui.fnt", "--text", "Hi", "-x", "-5", "-y", "12",
            "--color", "#ff000080",
        ])
        .unwrap();
        match cli.command {
            Commands::Layout {
                font,
                text,
                x,
                y,
                color,
                json,
            } => {
                assert_eq!(font, "ui.fnt");
                assert_eq!(text, "Hi");
                assert_eq!((x, y), (-5, 12));
                assert_eq!(color, Color::rgba(255, 0, 0, 128));
                assert!(!json);
            }
            _ => panic!("expected layout command"),
        }
    }

    #[test]
    fn test_cli_layout_defaults() {
        let cli = Cli::try_parse_from(["bmfont", "layout", "-f", "ui.fnt", "-t", "x"]).unwrap();
        match cli.command {
            Commands::Layout { x, y, color, .. } => {
                assert_eq!((x, y), (0, 0));
                assert_eq!(color, Color::white());
            }
            _ => panic!("expected layout command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_color() {
        let result = Cli::try_parse_from([
            "bmfont", "layout", "-f", "ui.fnt", "-t", "x", "--color", "red",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_verbose() {
        let cli = Cli::try_parse_from(["bmfont", "inspect", "--font", "ui.fnt", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Inspect { json: false, .. }));
    }
}
