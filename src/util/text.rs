//! Utility functions for presenting text

/// Escape the characters that are significant in HTML/XML markup
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `count` followed by `noun`, with a plural "s" unless count is 1
pub fn pluralize(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_markup("plain café"), "plain café");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "occurrence"), "0 occurrences");
        assert_eq!(pluralize(1, "occurrence"), "1 occurrence");
        assert_eq!(pluralize(2, "buffer"), "2 buffers");
    }
}
