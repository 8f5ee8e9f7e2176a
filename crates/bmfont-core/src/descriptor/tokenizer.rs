//! Line tokenizer for the BMFont text format.
//!
//! A line is a tag followed by `key=value` pairs. Values are bare tokens
//! (`12`, `-3`, `0,0,0,0`) or double-quoted strings that may contain spaces.
//! A quoted value ends at the first `"` followed by whitespace or the end of
//! the line, so `letter="""` reads as a single `"`.

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::DescriptorError;

/// Matches one `key=value` pair, or any other non-space run as a stray token.
static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();

fn field_regex() -> &'static Regex {
    FIELD_REGEX.get_or_init(|| {
        Regex::new(r#"(?:([^\s="]+)=(?:"(.*?)"(?:\s|$)|([^\s"]*)))|(\S+)"#)
            .expect("field regex must compile")
    })
}

/// One tokenized descriptor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRecord<'a> {
    /// 1-based line number.
    pub line: usize,
    pub tag: &'a str,
    pub fields: Vec<(&'a str, &'a str)>,
    /// First token that is not a `key=value` pair, if any.
    pub stray: Option<&'a str>,
}

/// Tokenizes a line. Returns `None` for blank lines.
pub(crate) fn tokenize(line: usize, text: &str) -> Option<RawRecord<'_>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (tag, rest) = match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], &text[idx..]),
        None => (text, ""),
    };

    let mut fields = Vec::new();
    let mut stray = None;
    for caps in field_regex().captures_iter(rest) {
        match (caps.get(1), caps.get(2).or_else(|| caps.get(3))) {
            (Some(key), Some(value)) => fields.push((key.as_str(), value.as_str())),
            _ => {
                if stray.is_none() {
                    stray = caps.get(4).map(|m| m.as_str());
                }
            }
        }
    }

    Some(RawRecord {
        line,
        tag,
        fields,
        stray,
    })
}

impl<'a> RawRecord<'a> {
    /// Fails if the line contained a token that is not a `key=value` pair.
    pub fn check_well_formed(&self) -> Result<(), DescriptorError> {
        match self.stray {
            Some(token) => Err(DescriptorError::UnexpectedToken {
                line: self.line,
                tag: self.tag.to_string(),
                token: token.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Raw value of `key`. When a key repeats, the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Parses `key` if present.
    pub fn parse<T: FromStr>(&self, key: &str) -> Result<Option<T>, DescriptorError> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| self.invalid(key, raw)),
        }
    }

    /// Parses `key`, failing if it is absent.
    pub fn require<T: FromStr>(
        &self,
        tag: &'static str,
        key: &'static str,
    ) -> Result<T, DescriptorError> {
        self.parse(key)?.ok_or(DescriptorError::MissingField {
            line: self.line,
            tag,
            field: key,
        })
    }

    /// Parses a required character code.
    pub fn require_char(&self, tag: &'static str, key: &'static str) -> Result<char, DescriptorError> {
        let code: i64 = self.require(tag, key)?;
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .ok_or(DescriptorError::InvalidCharCode {
                line: self.line,
                field: key,
                code,
            })
    }

    /// Parses a comma-separated integer list of exactly `N` entries.
    pub fn parse_list<const N: usize>(&self, key: &str) -> Result<Option<[i32; N]>, DescriptorError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        let mut out = [0; N];
        let mut parts = raw.split(',');
        for slot in out.iter_mut() {
            *slot = parts
                .next()
                .and_then(|p| p.trim().parse().ok())
                .ok_or_else(|| self.invalid(key, raw))?;
        }
        if parts.next().is_some() {
            return Err(self.invalid(key, raw));
        }
        Ok(Some(out))
    }

    /// Parses a 0/1 flag.
    pub fn parse_flag(&self, key: &str) -> Result<Option<bool>, DescriptorError> {
        match self.parse::<i32>(key)? {
            None => Ok(None),
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            Some(_) => Err(self.invalid(key, self.get(key).unwrap_or_default())),
        }
    }

    fn invalid(&self, key: &str, raw: &str) -> DescriptorError {
        DescriptorError::InvalidValue {
            line: self.line,
            field: key.to_string(),
            value: raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_line() {
        assert_eq!(tokenize(1, "   \t"), None);
    }

    #[test]
    fn test_tag_only() {
        let rec = tokenize(3, "chars").unwrap();
        assert_eq!(rec.tag, "chars");
        assert!(rec.fields.is_empty());
        assert_eq!(rec.stray, None);
    }

    #[test]
    fn test_quoted_value_with_spaces() {
        let rec = tokenize(1, r#"info face="Open Sans Bold" size=32 padding=1,2,3,4"#).unwrap();
        assert_eq!(rec.tag, "info");
        assert_eq!(
            rec.fields,
            vec![
                ("face", "Open Sans Bold"),
                ("size", "32"),
                ("padding", "1,2,3,4")
            ]
        );
        assert_eq!(rec.parse_list::<4>("padding").unwrap(), Some([1, 2, 3, 4]));
    }

    #[test]
    fn test_extra_whitespace_between_fields() {
        let rec = tokenize(1, "char id=65   x=0     y=0\t width=8").unwrap();
        assert_eq!(rec.get("width"), Some("8"));
        assert_eq!(rec.fields.len(), 4);
    }

    #[test]
    fn test_stray_token_detected() {
        let rec = tokenize(7, "char id=65 garbage x=1").unwrap();
        assert_eq!(rec.stray, Some("garbage"));
        assert!(matches!(
            rec.check_well_formed(),
            Err(DescriptorError::UnexpectedToken { line: 7, .. })
        ));
        // Fields around the stray token are still collected.
        assert_eq!(rec.get("x"), Some("1"));
    }

    #[test]
    fn test_quote_inside_quoted_value() {
        let rec = tokenize(2, r#"char id=34 chnl=15 letter=""" page=0"#).unwrap();
        assert_eq!(rec.stray, None);
        assert_eq!(rec.get("letter"), Some("\""));
        assert_eq!(rec.get("page"), Some("0"));

        let rec = tokenize(2, r#"char id=34 letter=""""#).unwrap();
        assert_eq!(rec.stray, None);
        assert_eq!(rec.get("letter"), Some("\""));
    }

    #[test]
    fn test_keys_with_punctuation() {
        let rec = tokenize(1, "char id=65 generator-hint=1 ext.flag=2").unwrap();
        assert_eq!(rec.stray, None);
        assert_eq!(rec.get("generator-hint"), Some("1"));
        assert_eq!(rec.get("ext.flag"), Some("2"));
    }

    #[test]
    fn test_unterminated_quote_is_stray() {
        let rec = tokenize(4, r#"info face="Broken size=12"#).unwrap();
        assert!(rec.stray.is_some());
    }

    #[test]
    fn test_require_reports_missing_field() {
        let rec = tokenize(2, "kerning first=65 second=66").unwrap();
        let err = rec.require::<i32>("kerning", "amount").unwrap_err();
        assert_eq!(
            err,
            DescriptorError::MissingField {
                line: 2,
                tag: "kerning",
                field: "amount"
            }
        );
    }

    #[test]
    fn test_require_char_rejects_surrogates_and_negatives() {
        let rec = tokenize(1, "char id=55296").unwrap();
        assert!(matches!(
            rec.require_char("char", "id"),
            Err(DescriptorError::InvalidCharCode { code: 55296, .. })
        ));
        let rec = tokenize(1, "char id=-1").unwrap();
        assert!(matches!(
            rec.require_char("char", "id"),
            Err(DescriptorError::InvalidCharCode { code: -1, .. })
        ));
    }

    #[test]
    fn test_list_length_mismatch() {
        let rec = tokenize(1, "info spacing=1,2,3").unwrap();
        assert!(rec.parse_list::<2>("spacing").is_err());
    }

    #[test]
    fn test_flag_values() {
        let rec = tokenize(1, "info bold=1 italic=0 unicode=2").unwrap();
        assert_eq!(rec.parse_flag("bold").unwrap(), Some(true));
        assert_eq!(rec.parse_flag("italic").unwrap(), Some(false));
        assert!(rec.parse_flag("unicode").is_err());
        assert_eq!(rec.parse_flag("smooth").unwrap(), None);
    }
}
