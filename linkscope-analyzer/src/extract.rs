use scraper::{Html, Selector};

/// Extract the href of every anchor element, in document order.
///
/// Anchors without an href yield an empty string instead of being skipped,
/// keeping a 1:1 mapping between anchors and probes. Malformed markup
/// degrades to whatever the parser recovers; this never fails.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a").unwrap();

    document
        .select(&selector)
        .map(|anchor| anchor.value().attr("href").unwrap_or_default().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links_document_order() {
        let html = r#"<html><body>
            <a href="https://example.com/first">First</a>
            <p>filler</p>
            <a href="/second">Second</a>
            <a href="mailto:x@example.com">Third</a>
        </body></html>"#;

        let links = extract_links(html);
        assert_eq!(
            links,
            vec!["https://example.com/first", "/second", "mailto:x@example.com"]
        );
    }

    #[test]
    fn test_extract_links_anchor_without_href() {
        let html = r#"<a name="top">Anchor</a><a href="/page">Page</a>"#;
        let links = extract_links(html);
        // The href-less anchor still counts, as an empty string.
        assert_eq!(links, vec!["", "/page"]);
    }

    #[test]
    fn test_extract_links_no_anchors() {
        let html = "<html><body><p>No links here</p></body></html>";
        assert!(extract_links(html).is_empty());
    }

    #[test]
    fn test_extract_links_malformed_html() {
        let html = r#"<body><a href="/one"><div><a href="/two">never closed"#;
        // Unclosed elements degrade gracefully; both anchors are recovered.
        let links = extract_links(html);
        assert_eq!(links, vec!["/one", "/two"]);
    }

    #[test]
    fn test_extract_links_empty_document() {
        assert!(extract_links("").is_empty());
    }
}
