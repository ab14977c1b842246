//! Encoding and delimiter detection for CSV input.

use crate::errors::{AppError, AppResult};
use std::borrow::Cow;

/// Field separator of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Pick the separator occurring most often in the header line.
    #[default]
    Auto,
    Byte(u8),
}

impl Delimiter {
    /// Parse the `delimiter` config value: `auto`, `tab`, or one ASCII char.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "auto" | "" => Ok(Delimiter::Auto),
            "tab" | "\\t" | "\t" => Ok(Delimiter::Byte(b'\t')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => Ok(Delimiter::Byte(c as u8)),
                    _ => Err(AppError::Config(format!(
                        "delimiter must be 'auto', 'tab' or a single ASCII character, got '{s}'"
                    ))),
                }
            }
        }
    }

    pub fn resolve(&self, content: &str) -> u8 {
        match self {
            Delimiter::Auto => detect_delimiter(content),
            Delimiter::Byte(b) => *b,
        }
    }
}

/// Decode file bytes: UTF-8 when valid (BOM removed), Windows-1252 otherwise.
pub fn decode_content(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    }
}

/// Most frequent separator in the header line; `,` when none occurs.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let mut best = b',';
    let mut best_count = 0;

    for sep in [b',', b';', b'\t', b'|'] {
        let count = first_line.bytes().filter(|b| *b == sep).count();
        if count > best_count {
            best_count = count;
            best = sep;
        }
    }

    best
}
