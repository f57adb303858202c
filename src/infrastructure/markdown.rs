use comrak::{Options, markdown_to_html};

/// Render section content to HTML for the report view.
///
/// The analysis text arrives as markdown-ish prose. Raw HTML is escaped
/// rather than passed through, and single newlines become hard breaks so
/// the formatter's line-per-entry output keeps its structure on screen.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::default();
    options.render.hardbreaks = true;
    options.render.escape = true;
    markdown_to_html(content, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis() {
        let html = render_markdown("**strong** fundamentals");
        assert!(html.contains("<strong>strong</strong>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn newlines_become_hard_breaks() {
        let html = render_markdown("• growing\n• stable");
        assert!(html.contains("<br"));
        assert!(html.contains("• growing"));
        assert!(html.contains("• stable"));
    }
}
