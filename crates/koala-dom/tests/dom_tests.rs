//! Tree navigation and attachment tests.

use koala_dom::{DomTree, ElementKind, NodeId};

fn document() -> (DomTree, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let html = tree.create_element("html");
    tree.append_child(NodeId::ROOT, html);
    let body = tree.create_element("body");
    tree.append_child(html, body);
    (tree, html, body)
}

#[test]
fn test_body_lookup() {
    let (tree, html, body) = document();
    assert_eq!(tree.document_element(), Some(html));
    assert_eq!(tree.body(), Some(body));
    assert_eq!(tree.as_element(body).map(|e| e.kind()), Some(ElementKind::Body));
}

#[test]
fn test_sibling_links() {
    let (mut tree, _, body) = document();
    let a = tree.create_element("span");
    let b = tree.create_text("hello");
    let c = tree.create_element("div");
    for id in [a, b, c] {
        tree.append_child(body, id);
    }

    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.preceding_siblings(c).collect::<Vec<_>>(), vec![b, a]);
    assert_eq!(tree.first_child(body), Some(a));
}

#[test]
fn test_remove_child_detaches_subtree() {
    let (mut tree, _, body) = document();
    let a = tree.create_element("div");
    let b = tree.create_element("div");
    let c = tree.create_element("div");
    let inner = tree.create_element("span");
    for id in [a, b, c] {
        tree.append_child(body, id);
    }
    tree.append_child(b, inner);
    assert!(tree.is_attached(inner));

    tree.remove_child(b);

    assert!(!tree.is_attached(b));
    assert!(!tree.is_attached(inner));
    assert_eq!(tree.parent(inner), Some(b));
    assert_eq!(tree.next_sibling(a), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(a));
    assert_eq!(tree.children(body), &[a, c]);
}

#[test]
fn test_append_moves_existing_child() {
    let (mut tree, html, body) = document();
    let div = tree.create_element("div");
    tree.append_child(body, div);
    tree.append_child(html, div);

    assert!(tree.children(body).is_empty());
    assert_eq!(tree.parent(div), Some(html));
    assert_eq!(tree.prev_sibling(div), Some(body));
}

#[test]
fn test_text_content_concatenates_descendants() {
    let (mut tree, _, body) = document();
    let p = tree.create_element("p");
    tree.append_child(body, p);
    let t1 = tree.create_text("ab");
    tree.append_child(p, t1);
    let em = tree.create_element("em");
    tree.append_child(p, em);
    let t2 = tree.create_text("cd");
    tree.append_child(em, t2);

    assert_eq!(tree.text_content(p), "abcd");
    assert_eq!(tree.text_content(em), "cd");
}

#[test]
fn test_set_attribute_and_parent_element() {
    let (mut tree, _, body) = document();
    let input = tree.create_element("input");
    tree.append_child(body, input);
    tree.set_attribute(input, "type", "radio");

    let kind = tree.as_element(input).map(koala_dom::ElementData::kind);
    assert_eq!(
        kind,
        Some(ElementKind::Input(koala_dom::InputType::Radio))
    );
    assert_eq!(tree.parent_element(input), Some(body));
    assert_eq!(tree.parent_element(body).map(|id| id.0), Some(1));
}

#[test]
fn test_rendered_text_collapses_whitespace() {
    let (mut tree, _, body) = document();
    let div = tree.create_element("div");
    tree.append_child(body, div);
    let first = tree.create_text("\n    Hello \t  there\n  ");
    tree.append_child(div, first);
    let br = tree.create_element("br");
    tree.append_child(div, br);
    let second = tree.create_text("  again\n");
    tree.append_child(div, second);

    assert_eq!(tree.rendered_text(div), "Hello there\nagain");
    assert_eq!(tree.rendered_text(first), "Hello there");
    assert_eq!(tree.text_content(div), "\n    Hello \t  there\n    again\n");
}
