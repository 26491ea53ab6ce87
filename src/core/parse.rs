//! Textual size-list parsing
//!
//! Normalizes the notations users actually type — "100, 500, 200",
//! "[100, 500, 200]", "100KB 500KB", "(100; 500)" — into plain
//! positive-integer KB values. The allocation core only ever sees the
//! normalized sequence, so input formats can evolve here without touching
//! placement logic.

use crate::error::{AnalyzerError, Result};
use regex::Regex;

/// Pattern for a single integer token, sign included
const TOKEN_PATTERN: &str = r"^[+-]?\d+$";

fn strip_brackets(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, '[' | ']' | '(' | ')' | '{' | '}'))
        .trim()
}

/// Parse a textual size list into positive KB values
///
/// # Errors
///
/// Returns `EmptyInput` when the text holds no values at all, and
/// `InvalidSizeList` for non-integer tokens or non-positive values.
pub fn parse_size_list(raw: &str) -> Result<Vec<u64>> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AnalyzerError::EmptyInput { what: "size list" });
    }

    let token_re = Regex::new(TOKEN_PATTERN).unwrap();
    let mut values = Vec::new();

    for token in strip_brackets(text).split(|c: char| c.is_whitespace() || c == ',' || c == ';') {
        let cleaned = strip_brackets(token.trim());
        if cleaned.is_empty() {
            continue;
        }

        // Per-token "KB" unit suffix, case-insensitive
        let cleaned = if cleaned.len() >= 2
            && cleaned.is_char_boundary(cleaned.len() - 2)
            && cleaned[cleaned.len() - 2..].eq_ignore_ascii_case("kb")
        {
            cleaned[..cleaned.len() - 2].trim_end()
        } else {
            cleaned
        };
        if cleaned.is_empty() {
            continue;
        }

        if !token_re.is_match(cleaned) {
            return Err(AnalyzerError::InvalidSizeList(format!(
                "invalid token '{}': use numbers separated by commas or spaces, \
                 e.g. 100, 500, 200 or [100, 500, 200]",
                token.trim()
            )));
        }

        let value: i64 = cleaned.parse().map_err(|_| {
            AnalyzerError::InvalidSizeList(format!("value '{}' is out of range", cleaned))
        })?;
        if value <= 0 {
            return Err(AnalyzerError::InvalidSizeList(
                "sizes must be positive integers".to_string(),
            ));
        }
        values.push(value as u64);
    }

    if values.is_empty() {
        return Err(AnalyzerError::EmptyInput { what: "size list" });
    }

    Ok(values)
}
