//! Machine-readable output records for `--json` mode.

use bmfont_core::{DrawCommand, Point, Size};
use serde::Serialize;

use crate::input::InputError;

/// A structured error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonError {
    /// Stable error code (e.g., "F010")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Descriptor line, when the error points at one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }
}

impl From<&InputError> for JsonError {
    fn from(err: &InputError) -> Self {
        let line = match err {
            InputError::Descriptor(e) => e.line(),
            _ => None,
        };
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            line,
        }
    }
}

/// A structured warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Descriptor line, when the warning points at one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl JsonWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectOutput {
    /// Face name from the `info` record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    /// Nominal size from the `info` record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    pub line_height: i32,
    pub base: i32,
    /// Atlas page file names in id order
    pub pages: Vec<String>,
    /// Atlas texture the glyphs were cut from
    pub atlas: String,
    pub glyph_count: usize,
    pub kerning_pairs: usize,
    /// Kerning records whose first character has no glyph
    pub dropped_kerning_pairs: usize,
    /// Lowest and highest character codes with glyphs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_range: Option<[u32; 2]>,
    /// Source format (descriptor/manifest)
    pub source_kind: String,
    /// BLAKE3 hash of the descriptor text
    pub source_hash: String,
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// BLAKE3 hash of the descriptor text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Width of one measured line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMeasure {
    pub text: String,
    pub width: i32,
}

/// JSON output for the `measure` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasureOutput {
    /// Widest line, and line height times line count
    pub size: Size,
    pub lines: Vec<LineMeasure>,
}

/// JSON output for the `layout` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutOutput {
    pub origin: Point,
    /// Cursor after the last glyph of the last line
    pub cursor: Point,
    pub commands: Vec<DrawCommand>,
}
