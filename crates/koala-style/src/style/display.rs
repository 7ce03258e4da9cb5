//! Default display values and per-tag default styles.
//!
//! [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html)

use koala_dom::{ElementKind, InputType};

use crate::config::LayoutMetrics;

/// [§ 15.3.1 Hidden elements](https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements)
const HIDDEN: &[&str] = &[
    "area", "base", "basefont", "datalist", "head", "link", "meta", "noembed", "noframes",
    "param", "rp", "script", "style", "template", "title",
];

/// [§ 15.3.3 Flow content](https://html.spec.whatwg.org/multipage/rendering.html#flow-content-3)
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "center", "dd", "details", "dialog",
    "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend", "listing", "main",
    "menu", "nav", "ol", "optgroup", "p", "plaintext", "pre", "search", "section", "summary",
    "ul", "xmp",
];

/// The intrinsic `display` of an element kind.
#[must_use]
pub fn default_display(kind: &ElementKind) -> &'static str {
    match kind {
        ElementKind::Input(InputType::Hidden) => return "none",
        ElementKind::Button
        | ElementKind::Input(_)
        | ElementKind::Select
        | ElementKind::TextArea => return "inline-block",
        ElementKind::TableRow => return "table-row",
        _ => {}
    }
    let tag = kind.tag_name();
    if HIDDEN.contains(&tag) {
        return "none";
    }
    if BLOCK.contains(&tag) {
        return "block";
    }
    // [§ 15.3.7 Tables](https://html.spec.whatwg.org/multipage/rendering.html#tables-2)
    match tag {
        "li" => "list-item",
        "table" => "table",
        "caption" => "table-caption",
        "colgroup" => "table-column-group",
        "col" => "table-column",
        "thead" => "table-header-group",
        "tbody" => "table-row-group",
        "tfoot" => "table-footer-group",
        "td" | "th" => "table-cell",
        "ruby" => "ruby",
        "rt" => "ruby-text",
        "canvas" | "meter" | "progress" => "inline-block",
        _ => "inline",
    }
}

/// Whether a detached element with this default display reports `block`
/// under the block-when-detached quirk.
#[must_use]
pub fn becomes_block_when_detached(display: &str) -> bool {
    matches!(
        display,
        "inline"
            | "inline-block"
            | "table-caption"
            | "table-cell"
            | "table-column"
            | "table-column-group"
            | "table-footer-group"
            | "table-header-group"
            | "table-row"
            | "table-row-group"
            | "list-item"
            | "ruby"
    )
}

/// Built-in declarations installed beneath every rule for this kind.
#[must_use]
pub fn default_local_styles(kind: &ElementKind, metrics: &LayoutMetrics) -> Vec<(&'static str, String)> {
    match kind {
        // [§ 15.3.3](https://html.spec.whatwg.org/multipage/rendering.html#flow-content-3)
        // "body { margin: 8px; }"
        ElementKind::Body => {
            let margin = format!("{}px", metrics.body_margin);
            ["margin-top", "margin-right", "margin-bottom", "margin-left"]
                .into_iter()
                .map(|name| (name, margin.clone()))
                .collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_of(tag: &str, type_attr: Option<&str>) -> &'static str {
        default_display(&ElementKind::classify(tag, type_attr))
    }

    #[test]
    fn test_default_display() {
        assert_eq!(display_of("div", None), "block");
        assert_eq!(display_of("span", None), "inline");
        assert_eq!(display_of("li", None), "list-item");
        assert_eq!(display_of("td", None), "table-cell");
        assert_eq!(display_of("tr", None), "table-row");
        assert_eq!(display_of("script", None), "none");
        assert_eq!(display_of("input", None), "inline-block");
        assert_eq!(display_of("input", Some("hidden")), "none");
        assert_eq!(display_of("body", None), "block");
    }

    #[test]
    fn test_block_when_detached_mapping() {
        assert!(becomes_block_when_detached("inline"));
        assert!(becomes_block_when_detached("table-row-group"));
        assert!(becomes_block_when_detached("ruby"));
        assert!(!becomes_block_when_detached("block"));
        assert!(!becomes_block_when_detached("table"));
        assert!(!becomes_block_when_detached("none"));
    }

    #[test]
    fn test_body_margins() {
        let styles = default_local_styles(&ElementKind::Body, &LayoutMetrics::default());
        assert_eq!(styles.len(), 4);
        assert!(styles.iter().all(|(_, v)| v == "8px"));
        assert!(default_local_styles(&ElementKind::Div, &LayoutMetrics::default()).is_empty());
    }
}
