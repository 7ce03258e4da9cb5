//! Arena DOM tree consumed by the Koala computed-style engine.
//!
//! Only the parts of the [DOM Living Standard](https://dom.spec.whatwg.org/)
//! that style resolution needs are modelled: tree navigation, attachment to
//! the document, element identity, attributes and text content.
//!
//! Nodes live in a single vector and refer to each other by [`NodeId`], so a
//! style query can walk parents and previous siblings freely while holding a
//! shared borrow of the tree.

mod kind;

pub use kind::{ElementKind, InputType};

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Index of a node in a [`DomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The document node is always allocated first.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is, with its payload.
    pub node_type: NodeType,
    /// [§ 4.2](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,
    /// Children in tree order.
    pub children: Vec<NodeId>,
    /// Following sibling, if any.
    pub next_sibling: Option<NodeId>,
    /// Preceding sibling, if any.
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// The node types style resolution can encounter.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The document node at [`NodeId::ROOT`].
    Document,
    /// An element with its tag and attributes.
    Element(ElementData),
    /// Character data contributing to text length heuristics.
    Text(String),
    /// Comments are skipped by every geometry walk.
    Comment(String),
}

/// Tag name and attribute list of an element.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Local name as written by the author.
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// An element with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute, returning its old value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// The element's `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// The element's kind, derived from its tag name and `type` attribute.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        ElementKind::classify(&self.tag_name, self.attr("type"))
    }

    /// Whether the tag name matches `tag`, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }
}

/// Arena-backed DOM tree.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// A tree holding only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
        }
    }

    /// Borrow a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Mutably borrow a node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of allocated nodes, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node is allocated by [`DomTree::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node without a parent.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(node_type));
        id
    }

    /// Allocate a parentless element.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.alloc(NodeType::Element(ElementData::new(tag_name)))
    }

    /// Allocate a parentless text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeType::Text(text.to_string()))
    }

    /// [§ 4.2.3 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`. A child that already
    /// has a parent is removed from it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.parent(child).is_some() {
            self.remove_child(child);
        }
        let previous = self.nodes[parent.0].children.last().copied();
        self.nodes[parent.0].children.push(child);

        let node = &mut self.nodes[child.0];
        node.parent = Some(parent);
        node.prev_sibling = previous;
        node.next_sibling = None;
        if let Some(prev) = previous {
            self.nodes[prev.0].next_sibling = Some(child);
        }
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Unlinks `child` from its parent. The subtree keeps its own structure
    /// but is no longer attached to the document.
    pub fn remove_child(&mut self, child: NodeId) {
        let Some(node) = self.nodes.get(child.0) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        let Some(parent) = parent else {
            return;
        };

        self.nodes[parent.0].children.retain(|&c| c != child);
        if let Some(prev) = prev {
            self.nodes[prev.0].next_sibling = next;
        }
        if let Some(next) = next {
            self.nodes[next.0].prev_sibling = prev;
        }
        let node = &mut self.nodes[child.0];
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Parent of a node, if that parent is an element.
    #[must_use]
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&p| self.as_element(p).is_some())
    }

    /// Children of a node in tree order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// First child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Ancestors from the parent up to the document.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Previous siblings, nearest first.
    #[must_use]
    pub fn preceding_siblings(&self, id: NodeId) -> PrecedingSiblings<'_> {
        PrecedingSiblings {
            tree: self,
            current: self.prev_sibling(id),
        }
    }

    /// [§ 4.2.1 Connected](https://dom.spec.whatwg.org/#connected)
    ///
    /// True when the node's ancestor chain reaches the document node.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.ancestors(id).any(|a| a == NodeId::ROOT)
    }

    /// Element payload, if the node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Mutable element payload.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Character data, if the node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Set an attribute on an element. Non-elements are ignored.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(data) = self.as_element_mut(id) {
            data.set_attr(name, value);
        }
    }

    /// [§ 4.4 textContent](https://dom.spec.whatwg.org/#dom-node-textcontent)
    ///
    /// Concatenation of all descendant text nodes in tree order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    /// Text as a user would see it: whitespace runs collapse to one space,
    /// `<br>` starts a new line, and each line is trimmed.
    #[must_use]
    pub fn rendered_text(&self, id: NodeId) -> String {
        let mut raw = String::new();
        self.collect_rendered(id, &mut raw);
        let lines: Vec<String> = raw
            .split('\n')
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        lines.join("\n").trim().to_string()
    }

    fn collect_rendered(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.as_text(id) {
            out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
            return;
        }
        if self.as_element(id).is_some_and(|e| e.is("br")) {
            out.push('\n');
            return;
        }
        for &child in self.children(id) {
            self.collect_rendered(child, out);
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.as_text(id) {
            out.push_str(text);
            return;
        }
        for &child in self.children(id) {
            self.collect_text(child, out);
        }
    }

    /// The first element child of the document.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .copied()
            .find(|&id| self.as_element(id).is_some())
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;
        self.children(html)
            .iter()
            .copied()
            .find(|&id| self.as_element(id).is_some_and(|e| e.is("body")))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`DomTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Iterator returned by [`DomTree::preceding_siblings`].
pub struct PrecedingSiblings<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for PrecedingSiblings<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.prev_sibling(id);
        Some(id)
    }
}
