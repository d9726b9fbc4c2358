//! HTML entity escaping

/// Escape the five HTML-significant characters.
///
/// Uses the numeric entities `&#34;` and `&#39;` for quotes.
///
/// ```
/// use doclist::output::escape_html;
///
/// assert_eq!(escape_html("<a&b>"), "&lt;a&amp;b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
