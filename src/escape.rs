//! Escaping for text embedded in generated HTML.

/// Escape text for use in HTML content or a quoted attribute value.
///
/// # Examples
///
/// ```
/// use storyweave::escape_html;
///
/// assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("The Cave"), "The Cave");
    }

    #[test]
    fn test_quotes_escaped() {
        assert_eq!(escape_html("it's \"dark\""), "it&#39;s &quot;dark&quot;");
    }

    #[test]
    fn test_script_terminator_neutralised() {
        assert!(!escape_html("</script>").contains('<'));
    }
}
