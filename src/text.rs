/// Escape text for insertion into markup. `None` becomes the empty string
/// rather than any literal placeholder.
///
/// Works character at a time, so entities produced here are never themselves
/// re-escaped.
pub fn escape_html(value: Option<&str>) -> String {
    match value {
        Some(text) => {
            let mut escaped = String::with_capacity(text.len());
            for c in text.chars() {
                match c {
                    '&' => escaped.push_str("&amp;"),
                    '<' => escaped.push_str("&lt;"),
                    '>' => escaped.push_str("&gt;"),
                    '"' => escaped.push_str("&quot;"),
                    other => escaped.push(other),
                }
            }
            escaped
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(escape_html(Some("hello")), "hello");
    }

    #[test]
    fn absent_values_become_empty() {
        assert_eq!(escape_html(None), "");
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html(Some("<script>")), "&lt;script&gt;");
        assert_eq!(escape_html(Some("a & b")), "a &amp; b");
        assert_eq!(escape_html(Some("\"quoted\"")), "&quot;quoted&quot;");
        assert_eq!(escape_html(Some("<a>&\"b\"")), "&lt;a&gt;&amp;&quot;b&quot;");
    }

    #[test]
    fn never_double_escapes() {
        assert_eq!(escape_html(Some("&amp;")), "&amp;amp;");
    }

    #[test]
    fn output_is_free_of_unescaped_characters() {
        let escaped = escape_html(Some("<<&&>>\"\" mixed & <content>"));
        let stripped = escaped
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "");
        assert!(!stripped.contains(['&', '<', '>', '"']));
    }
}
