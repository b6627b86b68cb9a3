//! JSON pretty-printing via serde_json
//!
//! Key order is preserved (serde_json `preserve_order`).

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{FormatError, FormatKind};

/// Re-indent a JSON document with `indent_width` spaces
pub fn format(text: &str, indent_width: usize) -> Result<String, FormatError> {
    let trimmed = text.trim();
    let value: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| {
        let offset = line_col_to_offset(trimmed, e.line(), e.column());
        FormatError::new(FormatKind::Json, e.to_string(), offset)
    })?;

    let indent = " ".repeat(indent_width);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer).map_err(output_error)?;

    String::from_utf8(out).map_err(output_error)
}

fn output_error(e: impl std::fmt::Display) -> FormatError {
    FormatError::new(FormatKind::Json, e.to_string(), None)
}

/// serde_json reports 1-based line/column; convert to a character offset
fn line_col_to_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = text
        .split('\n')
        .take(line - 1)
        .map(|l| l.chars().count() + 1)
        .sum();
    Some(line_start + column.saturating_sub(1))
}
