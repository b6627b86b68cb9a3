//! Paste-time auto-formatting for JSON, XML/markup and CSS
//!
//! Formatting is best-effort: [`format_pasted`] returns `None` for text it
//! does not recognise or cannot format, and the paste goes in verbatim.

pub mod css;
pub mod json;
pub mod markup;

/// Languages the paste formatter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Json,
    Xml,
    Css,
}

impl FormatKind {
    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Json => "JSON",
            FormatKind::Xml => "XML",
            FormatKind::Css => "CSS",
        }
    }

    /// Guess a kind from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FormatKind::Json),
            "xml" | "html" | "htm" | "svg" | "xhtml" => Some(FormatKind::Xml),
            "css" => Some(FormatKind::Css),
            _ => None,
        }
    }
}

/// Successfully formatted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub kind: FormatKind,
    pub text: String,
}

/// Error type for explicit formatting requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub kind: FormatKind,
    pub message: String,
    /// Character offset where the problem was found, if known
    pub offset: Option<usize>,
}

impl FormatError {
    pub(crate) fn new(kind: FormatKind, message: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
        }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.offset {
            Some(offset) => write!(
                f,
                "{} format error at offset {}: {}",
                self.kind.name(),
                offset,
                self.message
            ),
            None => write!(f, "{} format error: {}", self.kind.name(), self.message),
        }
    }
}

impl std::error::Error for FormatError {}

/// Guess what kind of text was pasted
pub fn detect(text: &str) -> Option<FormatKind> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
    {
        return Some(FormatKind::Json);
    }

    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        return Some(FormatKind::Xml);
    }

    if css::looks_like_css(trimmed) {
        return Some(FormatKind::Css);
    }

    None
}

/// Format `text` as `kind`
pub fn format_as(kind: FormatKind, text: &str, indent_width: usize) -> Result<String, FormatError> {
    match kind {
        FormatKind::Json => json::format(text, indent_width),
        FormatKind::Xml => markup::format(text, indent_width),
        FormatKind::Css => css::format(text, indent_width),
    }
}

/// Detect and format pasted text; `None` means "insert as-is"
pub fn format_pasted(text: &str, indent_width: usize) -> Option<Formatted> {
    let kind = detect(text)?;
    match format_as(kind, text, indent_width) {
        Ok(formatted) if formatted != text => Some(Formatted {
            kind,
            text: formatted,
        }),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Paste not formatted: {}", e);
            None
        }
    }
}

/// Append `text` on its own line at `depth` levels of indentation
pub(crate) fn push_line(out: &mut String, depth: usize, indent_width: usize, text: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.extend(std::iter::repeat(' ').take(depth * indent_width));
    out.push_str(text);
}
