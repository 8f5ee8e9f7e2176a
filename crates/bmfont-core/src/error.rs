//! Error types for descriptor parsing and font construction.
//!
//! Lookup misses (a character with no glyph, a kerning pair whose first
//! character is undefined) are not errors and never surface here.

use thiserror::Error;

/// The descriptor text violates the BMFont line grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A required key is absent from a record line.
    #[error("line {line}: `{tag}` record is missing required field `{field}`")]
    MissingField {
        line: usize,
        tag: &'static str,
        field: &'static str,
    },

    /// A value could not be parsed as the expected type.
    #[error("line {line}: invalid value `{value}` for field `{field}`")]
    InvalidValue {
        line: usize,
        field: String,
        value: String,
    },

    /// A record line holds a token that is not a `key=value` pair.
    #[error("line {line}: unexpected token `{token}` in `{tag}` record")]
    UnexpectedToken {
        line: usize,
        tag: String,
        token: String,
    },

    /// A character code is not a Unicode scalar value.
    #[error("line {line}: `{field}={code}` is not a valid character code")]
    InvalidCharCode {
        line: usize,
        field: &'static str,
        code: i64,
    },

    /// The descriptor has no `common` record, so there is no line height.
    #[error("descriptor has no `common` record")]
    MissingCommon,

    /// A second `common` record was found.
    #[error("line {line}: duplicate `common` record")]
    DuplicateCommon { line: usize },
}

impl DescriptorError {
    /// The 1-based line the error was found on, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            DescriptorError::MissingField { line, .. }
            | DescriptorError::InvalidValue { line, .. }
            | DescriptorError::UnexpectedToken { line, .. }
            | DescriptorError::InvalidCharCode { line, .. }
            | DescriptorError::DuplicateCommon { line } => Some(*line),
            DescriptorError::MissingCommon => None,
        }
    }
}

/// Errors that can occur while building a [`BitmapFont`](crate::BitmapFont).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    /// No glyph table was supplied to the builder.
    #[error("font construction requires a glyph table")]
    MissingGlyphs,

    /// No atlas page was supplied to the builder.
    #[error("font construction requires at least one atlas page")]
    MissingPages,

    /// A character references an atlas page that was not supplied.
    #[error("glyph {ch:?} references page {page}, but only {pages} page(s) were supplied")]
    PageOutOfRange { ch: char, page: u32, pages: usize },

    /// The descriptor text could not be parsed.
    #[error("descriptor parse error: {0}")]
    Descriptor(#[from] DescriptorError),
}

impl FontError {
    /// Returns a stable error code string (e.g., "F001").
    pub fn code(&self) -> &'static str {
        match self {
            FontError::MissingGlyphs => "F001",
            FontError::MissingPages => "F002",
            FontError::PageOutOfRange { .. } => "F003",
            FontError::Descriptor(DescriptorError::MissingField { .. }) => "F010",
            FontError::Descriptor(DescriptorError::InvalidValue { .. }) => "F011",
            FontError::Descriptor(DescriptorError::InvalidCharCode { .. }) => "F012",
            FontError::Descriptor(DescriptorError::MissingCommon) => "F013",
            FontError::Descriptor(DescriptorError::DuplicateCommon { .. }) => "F014",
            FontError::Descriptor(DescriptorError::UnexpectedToken { .. }) => "F015",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_error_messages() {
        let err = DescriptorError::MissingField {
            line: 4,
            tag: "char",
            field: "xadvance",
        };
        assert_eq!(
            err.to_string(),
            "line 4: `char` record is missing required field `xadvance`"
        );
        assert_eq!(err.line(), Some(4));
        assert_eq!(DescriptorError::MissingCommon.line(), None);
    }

    #[test]
    fn test_font_error_codes_are_distinct() {
        let errors = [
            FontError::MissingGlyphs,
            FontError::MissingPages,
            FontError::PageOutOfRange {
                ch: 'a',
                page: 2,
                pages: 1,
            },
            FontError::from(DescriptorError::MissingCommon),
            FontError::from(DescriptorError::DuplicateCommon { line: 3 }),
            FontError::from(DescriptorError::UnexpectedToken {
                line: 5,
                tag: "kerning".to_string(),
                token: "oops".to_string(),
            }),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_unexpected_token_names_the_token() {
        let err = DescriptorError::UnexpectedToken {
            line: 5,
            tag: "kerning".to_string(),
            token: "oops".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 5: unexpected token `oops` in `kerning` record"
        );
        assert_eq!(err.line(), Some(5));
    }

    #[test]
    fn test_descriptor_error_converts() {
        let err: FontError = DescriptorError::MissingCommon.into();
        assert_eq!(err.code(), "F013");
        assert!(err.to_string().contains("common"));
    }
}
