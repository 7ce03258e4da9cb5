//! Integration tests for approximate widths and heights.

use koala_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};
use koala_style::{Axis, NoRules, StyleConfig, StyleContext};

/// Helper to create element node types with an optional inline style.
fn make_element(tag: &str, style: Option<&str>) -> NodeType {
    let mut attrs = AttributesMap::new();
    if let Some(style) = style {
        let _ = attrs.insert("style".to_string(), style.to_string());
    }
    NodeType::Element(ElementData {
        tag_name: tag.to_string(),
        attrs,
    })
}

/// `<html><body></body></html>`, returning the tree and the body.
fn document() -> (DomTree, NodeId) {
    let mut tree = DomTree::new();
    let html = tree.alloc(make_element("html", None));
    tree.append_child(NodeId::ROOT, html);
    let body = tree.alloc(make_element("body", None));
    tree.append_child(html, body);
    (tree, body)
}

fn append(tree: &mut DomTree, parent: NodeId, tag: &str, style: Option<&str>) -> NodeId {
    let id = tree.alloc(make_element(tag, style));
    tree.append_child(parent, id);
    id
}

fn append_text(tree: &mut DomTree, parent: NodeId, text: &str) -> NodeId {
    let id = tree.create_text(text);
    tree.append_child(parent, id);
    id
}

fn width_of(tree: &DomTree, node: NodeId) -> i32 {
    let ctx = StyleContext::new(tree, &NoRules, StyleConfig::default());
    ctx.computed_style(node).unwrap().calculated_width(false, false)
}

fn height_of(tree: &DomTree, node: NodeId) -> i32 {
    let ctx = StyleContext::new(tree, &NoRules, StyleConfig::default());
    ctx.computed_style(node).unwrap().calculated_height(false, false)
}

#[test]
fn test_block_child_fills_parent() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("width: 1000px"));
    let child = append(&mut tree, parent, "div", None);

    assert_eq!(width_of(&tree, child), 1000);
}

#[test]
fn test_block_child_loses_own_border_and_padding() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("width: 1000px"));
    let child = append(
        &mut tree,
        parent,
        "div",
        Some("padding-left: 10px; padding-right: 10px; border-left-width: 5px"),
    );

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let style = ctx.computed_style(child).unwrap();
    assert_eq!(style.calculated_width(false, false), 975);
    assert_eq!(style.calculated_width(true, true), 1000);
}

#[test]
fn test_percentage_width_of_parent() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("width: 200px"));
    let child = append(&mut tree, parent, "div", Some("width: 50%"));

    assert_eq!(width_of(&tree, child), 100);

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    assert_eq!(ctx.computed_style(child).unwrap().width(), "100px");
}

#[test]
fn test_percentage_width_rounds_to_nearest_pixel() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("width: 201px"));
    let half = append(&mut tree, parent, "div", Some("width: 50%"));
    let third = append(&mut tree, parent, "div", Some("width: 33%"));

    assert_eq!(width_of(&tree, half), 101);
    assert_eq!(width_of(&tree, third), 66);

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    assert_eq!(ctx.computed_style(half).unwrap().width(), "101px");
}

#[test]
fn test_nested_percentages() {
    let (mut tree, body) = document();
    let outer = append(&mut tree, body, "div", Some("width: 400px"));
    let middle = append(&mut tree, outer, "div", Some("width: 50%"));
    let inner = append(&mut tree, middle, "div", Some("width: 25%"));

    assert_eq!(width_of(&tree, inner), 50);
}

#[test]
fn test_body_width_excludes_margins() {
    let (mut tree, body) = document();
    let div = append(&mut tree, body, "div", None);

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let body_style = ctx.computed_style(body).unwrap();
    assert_eq!(body_style.width(), "1240px");
    assert_eq!(body_style.calculated_width(false, false), 1240);
    assert_eq!(ctx.computed_style(div).unwrap().calculated_width(false, false), 1240);
}

#[test]
fn test_display_none_has_no_size() {
    let (mut tree, body) = document();
    let hidden = append(
        &mut tree,
        body,
        "div",
        Some("display: none; width: 300px; height: 40px; padding-left: 5px"),
    );
    let _ = append_text(&mut tree, hidden, "some text");

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let style = ctx.computed_style(hidden).unwrap();
    assert_eq!(style.calculated_width(false, false), 0);
    assert_eq!(style.calculated_width(true, true), 0);
    assert_eq!(style.calculated_height(false, false), 0);
    assert_eq!(style.calculated_height(true, true), 0);
    assert_eq!(style.width(), "auto");
}

#[test]
fn test_display_none_ignores_scrollbar() {
    let (mut tree, body) = document();
    let hidden = append(&mut tree, body, "div", Some("display: none; overflow: scroll"));
    let _ = append(&mut tree, hidden, "div", Some("width: 300px; height: 300px"));

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let style = ctx.computed_style(hidden).unwrap();
    assert_eq!(style.calculated_width(false, false), 0);
    assert_eq!(style.calculated_height(false, false), 0);
    assert_eq!(style.calculated_width(false, true), 0);
    assert_eq!(style.calculated_height(false, true), 0);
}

#[test]
fn test_inline_elements_have_no_width() {
    let (mut tree, body) = document();
    let span = append(&mut tree, body, "span", None);
    let _ = append_text(&mut tree, span, "hello");

    assert_eq!(width_of(&tree, span), 0);
}

#[test]
fn test_form_control_widths() {
    let (mut tree, body) = document();
    let button = append(&mut tree, body, "button", None);
    let _ = append_text(&mut tree, button, "OK");
    let text = append(&mut tree, body, "input", None);
    let checkbox = append(&mut tree, body, "input", None);
    tree.set_attribute(checkbox, "type", "checkbox");
    let submit = append(&mut tree, body, "input", None);
    tree.set_attribute(submit, "type", "submit");
    tree.set_attribute(submit, "value", "Send");
    let textarea = append(&mut tree, body, "textarea", None);
    let canvas = append(&mut tree, body, "canvas", None);

    assert_eq!(width_of(&tree, button), 30);
    assert_eq!(width_of(&tree, text), 50);
    assert_eq!(width_of(&tree, checkbox), 20);
    assert_eq!(width_of(&tree, submit), 50);
    assert_eq!(width_of(&tree, textarea), 100);
    assert_eq!(width_of(&tree, canvas), 300);
}

#[test]
fn test_floated_width_from_text() {
    let (mut tree, body) = document();
    let floated = append(&mut tree, body, "div", Some("float: left"));
    let _ = append_text(&mut tree, floated, "abcd");

    assert_eq!(width_of(&tree, floated), 40);
}

#[test]
fn test_border_box_ignores_flags() {
    let (mut tree, body) = document();
    let plain = append(
        &mut tree,
        body,
        "div",
        Some("width: 100px; padding-left: 5px; border-left-width: 2px"),
    );
    let boxed = append(
        &mut tree,
        body,
        "div",
        Some("width: 100px; padding-left: 5px; border-left-width: 2px; box-sizing: border-box"),
    );

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    assert_eq!(ctx.computed_style(plain).unwrap().calculated_width(true, true), 107);
    assert_eq!(ctx.computed_style(plain).unwrap().calculated_width(true, false), 102);
    assert_eq!(ctx.computed_style(boxed).unwrap().calculated_width(true, true), 100);
}

#[test]
fn test_scrollable_box_loses_scrollbar() {
    let (mut tree, body) = document();
    let scroller = append(&mut tree, body, "div", Some("width: 100px; overflow: scroll"));
    let _ = append(&mut tree, scroller, "div", Some("width: 300px"));
    let plain = append(&mut tree, body, "div", Some("width: 100px"));
    let _ = append(&mut tree, plain, "div", Some("width: 300px"));

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let scroller = ctx.computed_style(scroller).unwrap();
    assert!(scroller.is_scrollable(Axis::Horizontal));
    assert_eq!(scroller.content_width(), 300);
    assert_eq!(scroller.calculated_width(false, false), 83);
    assert_eq!(scroller.calculated_width(true, false), 100);

    let plain = ctx.computed_style(plain).unwrap();
    assert!(!plain.is_scrollable(Axis::Horizontal));
    assert_eq!(plain.calculated_width(false, false), 100);
}

#[test]
fn test_detached_elements_have_no_size() {
    let (mut tree, _body) = document();
    let orphan = tree.alloc(make_element("div", Some("width: 100px; height: 100px")));

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let style = ctx.computed_style(orphan).unwrap();
    assert_eq!(style.calculated_width(true, true), 0);
    assert_eq!(style.calculated_height(true, true), 0);
    assert_eq!(style.width(), "100px");
}

#[test]
fn test_empty_control_heights() {
    let (mut tree, body) = document();
    let button = append(&mut tree, body, "button", None);
    let select = append(&mut tree, body, "select", None);
    let textarea = append(&mut tree, body, "textarea", None);
    let iframe = append(&mut tree, body, "iframe", Some("display: block"));
    let empty_div = append(&mut tree, body, "div", None);

    assert_eq!(height_of(&tree, button), 20);
    assert_eq!(height_of(&tree, select), 20);
    assert_eq!(height_of(&tree, textarea), 49);
    assert_eq!(height_of(&tree, iframe), 154);
    assert_eq!(height_of(&tree, empty_div), 0);
}

#[test]
fn test_text_height_follows_font_size_and_lines() {
    let (mut tree, body) = document();
    let one = append(&mut tree, body, "div", None);
    let _ = append_text(&mut tree, one, "hi");
    let two = append(&mut tree, body, "div", None);
    let _ = append_text(&mut tree, two, "a");
    let _ = append(&mut tree, two, "br", None);
    let _ = append_text(&mut tree, two, "b");
    let large = append(&mut tree, body, "div", Some("font-size: 32px"));
    let _ = append_text(&mut tree, large, "big");

    assert_eq!(height_of(&tree, one), 18);
    assert_eq!(height_of(&tree, two), 36);
    assert_eq!(height_of(&tree, large), 36);
}

#[test]
fn test_formatted_source_text_is_one_line() {
    let (mut tree, body) = document();
    let div = append(&mut tree, body, "div", None);
    let _ = append_text(&mut tree, div, "\n    Hello\n");
    let wrapped = append(&mut tree, body, "div", None);
    let _ = append_text(&mut tree, wrapped, "\n    one\n    two\n  ");
    let _ = append(&mut tree, wrapped, "br", None);
    let _ = append_text(&mut tree, wrapped, "\n    three\n");
    let button = append(&mut tree, body, "button", None);
    let _ = append_text(&mut tree, button, "\n      OK\n    ");

    assert_eq!(height_of(&tree, div), 18);
    assert_eq!(height_of(&tree, wrapped), 36);
    assert_eq!(width_of(&tree, button), 30);
}

#[test]
fn test_declared_and_percentage_heights() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("height: 200px"));
    let child = append(&mut tree, parent, "div", Some("height: 50%"));

    assert_eq!(height_of(&tree, parent), 200);
    assert_eq!(height_of(&tree, child), 100);

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    assert_eq!(ctx.computed_style(child).unwrap().height(), "100px");
}

#[test]
fn test_content_height_stacks_flowing_children() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", None);
    for text in ["a", "b"] {
        let child = append(&mut tree, parent, "div", None);
        let _ = append_text(&mut tree, child, text);
    }

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let style = ctx.computed_style(parent).unwrap();
    assert_eq!(style.content_height(), 36);
    assert_eq!(style.calculated_height(false, false), 36);
    assert_eq!(style.height(), "36px");
}

#[test]
fn test_content_height_reaches_absolute_children() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", None);
    let flowing = append(&mut tree, parent, "div", None);
    let _ = append_text(&mut tree, flowing, "a");
    let _ = append(
        &mut tree,
        parent,
        "div",
        Some("position: absolute; top: 100px; height: 10px"),
    );

    assert_eq!(height_of(&tree, parent), 110);
}

#[test]
fn test_declared_height_wins_over_content() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("height: 10px"));
    for text in ["a", "b", "c"] {
        let child = append(&mut tree, parent, "div", None);
        let _ = append_text(&mut tree, child, text);
    }

    assert_eq!(height_of(&tree, parent), 10);
}

#[test]
fn test_geometry_is_memoized_per_context() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("width: 640px"));
    let child = append(&mut tree, parent, "div", None);

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let first = ctx.computed_style(child).unwrap().calculated_width(false, false);
    let created = ctx.cached_styles();
    let second = ctx.computed_style(child).unwrap().calculated_width(false, false);

    assert_eq!(first, 640);
    assert_eq!(first, second);
    assert_eq!(ctx.cached_styles(), created);
}

#[test]
fn test_box_edges() {
    let (mut tree, body) = document();
    let parent = append(&mut tree, body, "div", Some("width: 400px"));
    let div = append(
        &mut tree,
        parent,
        "div",
        Some("margin-top: 4px; margin-left: 10%; padding-right: 3px; border-bottom-width: 2px"),
    );

    let ctx = StyleContext::new(&tree, &NoRules, StyleConfig::default());
    let style = ctx.computed_style(div).unwrap();
    let margin = style.margin();
    assert_eq!(margin.top, 4);
    assert_eq!(margin.left, 40);
    assert_eq!(style.padding().horizontal(), 3);
    assert_eq!(style.border().vertical(), 2);

    let body_style = ctx.computed_style(body).unwrap();
    assert_eq!(body_style.margin().horizontal(), 16);
}
