//! CSS re-indentation
//!
//! One character pass tracking strings, comments and parenthesis depth.
//! Rules open on `{`, declarations end on `;` and blocks close on `}`.
//! Top-level rules are separated by a blank line.

use super::{push_line, FormatError, FormatKind};

/// Heuristic used by paste detection
pub fn looks_like_css(text: &str) -> bool {
    let Some(open) = text.find('{') else {
        return false;
    };
    if open == 0 {
        return false;
    }
    let selector = &text[..open];
    if selector.contains('=') || selector.contains(';') || selector.contains('<') {
        return false;
    }
    let rest = &text[open + 1..];
    let Some(close) = rest.find('}') else {
        return false;
    };
    let body = &rest[..close];
    body.contains(':') && !body.contains('=')
}

struct Writer {
    out: String,
    indent_width: usize,
    depth: usize,
    blank_before_next: bool,
}

impl Writer {
    fn line(&mut self, text: &str) {
        if self.blank_before_next && self.depth == 0 {
            self.out.push('\n');
        }
        self.blank_before_next = false;
        push_line(&mut self.out, self.depth, self.indent_width, text);
    }
}

/// Re-indent a stylesheet with `indent_width` spaces per level
pub fn format(text: &str, indent_width: usize) -> Result<String, FormatError> {
    let chars: Vec<char> = text.chars().collect();
    let mut w = Writer {
        out: String::new(),
        indent_width,
        depth: 0,
        blank_before_next: false,
    };
    let mut pending = String::new();
    let mut parens = 0usize;
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];

        if c == '/' && chars.get(pos + 1) == Some(&'*') {
            let start = pos;
            pos = comment_end(&chars, pos + 2).ok_or_else(|| {
                FormatError::new(FormatKind::Css, "unterminated comment", Some(start))
            })?;
            let comment: String = chars[start..pos].iter().collect();
            if pending.trim().is_empty() {
                pending.clear();
                w.line(&comment);
            } else {
                pending.push_str(&comment);
            }
            continue;
        }

        if c == '"' || c == '\'' {
            let start = pos;
            pos = string_end(&chars, pos + 1, c).ok_or_else(|| {
                FormatError::new(FormatKind::Css, "unterminated string", Some(start))
            })?;
            pending.extend(&chars[start..pos]);
            continue;
        }

        match c {
            '(' => {
                parens += 1;
                pending.push(c);
            }
            ')' => {
                parens = parens.saturating_sub(1);
                pending.push(c);
            }
            '{' if parens == 0 => {
                let selector = collapse_whitespace(&pending);
                pending.clear();
                w.line(&format!("{} {{", selector));
                w.depth += 1;
            }
            ';' if parens == 0 => {
                emit_declaration(&mut w, &pending);
                pending.clear();
            }
            '}' if parens == 0 => {
                if w.depth == 0 {
                    return Err(FormatError::new(FormatKind::Css, "unexpected '}'", Some(pos)));
                }
                emit_declaration(&mut w, &pending);
                pending.clear();
                w.depth -= 1;
                w.line("}");
                if w.depth == 0 {
                    w.blank_before_next = true;
                }
            }
            _ => pending.push(c),
        }
        pos += 1;
    }

    if w.depth > 0 {
        return Err(FormatError::new(FormatKind::Css, "unclosed block", None));
    }
    emit_declaration(&mut w, &pending);

    Ok(w.out)
}

/// Write `prop: value;`; at-rule statements keep their own spacing
fn emit_declaration(w: &mut Writer, raw: &str) {
    let decl = collapse_whitespace(raw);
    if decl.is_empty() {
        return;
    }
    if decl.starts_with('@') {
        w.line(&format!("{};", decl));
        return;
    }
    match decl.split_once(':') {
        Some((prop, value)) => w.line(&format!("{}: {};", prop.trim(), value.trim())),
        None => w.line(&format!("{};", decl)),
    }
}

fn comment_end(chars: &[char], mut pos: usize) -> Option<usize> {
    while pos + 1 < chars.len() {
        if chars[pos] == '*' && chars[pos + 1] == '/' {
            return Some(pos + 2);
        }
        pos += 1;
    }
    None
}

fn string_end(chars: &[char], mut pos: usize, quote: char) -> Option<usize> {
    while pos < chars.len() {
        match chars[pos] {
            '\\' => pos += 2,
            c if c == quote => return Some(pos + 1),
            '\n' => return None,
            _ => pos += 1,
        }
    }
    None
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
