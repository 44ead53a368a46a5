/// Escape text for embedding in an HTML body
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML email body for a Markdown summary, shown preformatted
///
/// Same envelope the browser client builds before calling `/send-email`.
pub fn summary_html(summary: &str) -> String {
    format!(
        "<h2>Meeting Summary</h2><pre style=\"white-space:pre-wrap;font-family:inherit\">{}</pre>",
        escape_html(summary)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#039;y&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("## TL;DR\n- ship it"), "## TL;DR\n- ship it");
    }

    #[test]
    fn test_summary_html_wraps_escaped_text() {
        let html = summary_html("<b>Risk</b>");
        assert!(html.starts_with("<h2>Meeting Summary</h2><pre"));
        assert!(html.contains("&lt;b&gt;Risk&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
        assert!(html.ends_with("</pre>"));
    }
}
