//! XML/HTML re-indentation
//!
//! A single pass splits the input into tags and text, then each token is
//! written on its own line at the current nesting depth. An element whose
//! only child is short text stays on one line: `<a>text</a>`.

use super::{push_line, FormatError, FormatKind};

/// HTML elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// `<name ...>`
    Open { raw: String, name: String },
    /// `</name>`
    Close { raw: String },
    /// Self-closing, void, comment, CDATA, `<?...?>` or `<!...>`
    Leaf(String),
    Text(String),
}

/// Re-indent markup with `indent_width` spaces per level
pub fn format(text: &str, indent_width: usize) -> Result<String, FormatError> {
    let tokens = tokenize(text)?;
    let mut out = String::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Open { raw, name } => {
                // <a>text</a> and <a></a> stay inline
                match (tokens.get(i + 1), tokens.get(i + 2)) {
                    (Some(Token::Close { raw: close }), _) => {
                        push_line(&mut out, depth, indent_width, &format!("{}{}", raw, close));
                        i += 2;
                        continue;
                    }
                    (Some(Token::Text(body)), Some(Token::Close { raw: close }))
                        if !body.contains('\n') =>
                    {
                        push_line(
                            &mut out,
                            depth,
                            indent_width,
                            &format!("{}{}{}", raw, body, close),
                        );
                        i += 3;
                        continue;
                    }
                    _ => {}
                }
                push_line(&mut out, depth, indent_width, raw);
                tracing::trace!("open <{}> at depth {}", name, depth);
                depth += 1;
            }
            Token::Close { raw } => {
                depth = depth.saturating_sub(1);
                push_line(&mut out, depth, indent_width, raw);
            }
            Token::Leaf(raw) | Token::Text(raw) => {
                push_line(&mut out, depth, indent_width, raw);
            }
        }
        i += 1;
    }

    Ok(out)
}

fn tokenize(text: &str) -> Result<Vec<Token>, FormatError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos] != '<' {
            let start = pos;
            while pos < chars.len() && chars[pos] != '<' {
                pos += 1;
            }
            let body: String = chars[start..pos].iter().collect();
            let body = collapse_whitespace(&body);
            if !body.is_empty() {
                tokens.push(Token::Text(body));
            }
            continue;
        }

        let start = pos;
        if starts_with(&chars, pos, "<!--") {
            pos = find_terminator(&chars, pos + 4, "-->")
                .ok_or_else(|| unterminated("comment", start))?;
            tokens.push(Token::Leaf(chars[start..pos].iter().collect()));
            continue;
        }
        if starts_with(&chars, pos, "<![CDATA[") {
            pos = find_terminator(&chars, pos + 9, "]]>")
                .ok_or_else(|| unterminated("CDATA section", start))?;
            tokens.push(Token::Leaf(chars[start..pos].iter().collect()));
            continue;
        }

        pos = tag_end(&chars, pos + 1).ok_or_else(|| unterminated("tag", start))?;
        let raw: String = chars[start..pos].iter().collect();
        tokens.push(classify_tag(raw));
    }

    Ok(tokens)
}

fn classify_tag(raw: String) -> Token {
    let inner = &raw[1..raw.len() - 1];
    if inner.starts_with('?') || inner.starts_with('!') || inner.ends_with('/') {
        return Token::Leaf(raw);
    }
    if inner.starts_with('/') {
        return Token::Close { raw };
    }

    let name: String = inner
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '/')
        .collect();
    if VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()) {
        Token::Leaf(raw)
    } else {
        Token::Open { raw, name }
    }
}

/// Position just past the `>` closing a tag, skipping quoted attribute values
fn tag_end(chars: &[char], mut pos: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    while pos < chars.len() {
        let c = chars[pos];
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return Some(pos + 1),
            None if c == '<' => return None,
            None => {}
        }
        pos += 1;
    }
    None
}

fn starts_with(chars: &[char], pos: usize, prefix: &str) -> bool {
    let mut i = pos;
    for p in prefix.chars() {
        if chars.get(i) != Some(&p) {
            return false;
        }
        i += 1;
    }
    true
}

/// Position just past `terminator`, searching from `pos`
fn find_terminator(chars: &[char], mut pos: usize, terminator: &str) -> Option<usize> {
    let len = terminator.chars().count();
    while pos + len <= chars.len() {
        if starts_with(chars, pos, terminator) {
            return Some(pos + len);
        }
        pos += 1;
    }
    None
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn unterminated(what: &str, offset: usize) -> FormatError {
    let message = format!("unterminated {}", what);
    FormatError::new(FormatKind::Xml, message, Some(offset))
}
