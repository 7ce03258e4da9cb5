//! JSON fixture documents.
//!
//! A fixture describes a document as nested nodes plus the rules that
//! matched its elements, so the style engine can be exercised without an
//! HTML or CSS parser.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use koala_dom::{DomTree, NodeId};
use koala_style::{MatchedRule, MatchedRules, Specificity, Viewport, parse_declarations};
use serde::Deserialize;

/// Top level of a fixture file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    /// Browser profile name; the command line takes precedence.
    #[serde(default)]
    pub profile: Option<String>,
    /// Window size; the command line takes precedence.
    #[serde(default)]
    pub viewport: Option<Viewport>,
    /// Children of the document node.
    pub document: Vec<FixtureNode>,
    /// Matched rules, in document order.
    #[serde(default)]
    pub rules: Vec<FixtureRule>,
}

/// One element or text node.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureNode {
    /// Tag name. Omitted for text nodes.
    #[serde(default)]
    pub tag: Option<String>,
    /// Text content of a text node.
    #[serde(default)]
    pub text: Option<String>,
    /// Element attributes.
    #[serde(default)]
    pub attrs: HashMap<String, String>,
    /// Shorthand for the `style` attribute.
    #[serde(default)]
    pub style: Option<String>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<FixtureNode>,
}

/// A rule and the elements it matched.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureRule {
    /// Selector text, used to compute specificity when none is given.
    #[serde(default)]
    pub selector: Option<String>,
    /// Explicit specificity.
    #[serde(default)]
    pub specificity: Option<Specificity>,
    /// `id` attributes of the matched elements.
    pub targets: Vec<String>,
    /// Declaration block body, as in a `style` attribute.
    pub declarations: String,
}

impl Fixture {
    /// Parse a fixture from JSON text.
    ///
    /// # Errors
    /// Fails on malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid fixture")
    }

    /// Build the document tree and the rules matched against it.
    ///
    /// # Errors
    /// Fails if a node is neither an element nor text, or a rule targets
    /// an id no element has.
    pub fn build(&self) -> Result<(DomTree, MatchedRules)> {
        let mut tree = DomTree::new();
        for node in &self.document {
            let _ = build_node(&mut tree, NodeId::ROOT, node)?;
        }

        let ids: HashMap<String, NodeId> = (0..tree.len())
            .map(NodeId)
            .filter_map(|id| {
                let element = tree.as_element(id)?;
                Some((element.id()?.to_string(), id))
            })
            .collect();

        let mut rules = MatchedRules::new();
        for rule in &self.rules {
            let specificity = match (&rule.specificity, &rule.selector) {
                (Some(specificity), _) => *specificity,
                (None, Some(selector)) => Specificity::of_selector(selector),
                (None, None) => Specificity::DEFAULT,
            };
            let declarations = parse_declarations(&rule.declarations);
            for target in &rule.targets {
                let Some(&node) = ids.get(target) else {
                    bail!("rule targets unknown element id '{target}'");
                };
                rules.push(node, MatchedRule::new(specificity, declarations.clone()));
            }
        }
        Ok((tree, rules))
    }
}

fn build_node(tree: &mut DomTree, parent: NodeId, node: &FixtureNode) -> Result<NodeId> {
    let id = match (&node.tag, &node.text) {
        (Some(tag), None) => {
            let id = tree.create_element(tag);
            for (name, value) in &node.attrs {
                tree.set_attribute(id, name, value);
            }
            if let Some(style) = &node.style {
                tree.set_attribute(id, "style", style);
            }
            id
        }
        (None, Some(text)) => tree.create_text(text),
        _ => bail!("each node needs exactly one of 'tag' or 'text'"),
    };
    tree.append_child(parent, id);
    for child in &node.children {
        let _ = build_node(tree, id, child)?;
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "document": [
            { "tag": "html", "children": [
                { "tag": "body", "children": [
                    { "tag": "div", "attrs": { "id": "box" }, "style": "width: 200px",
                      "children": [ { "text": "hello" } ] }
                ] }
            ] }
        ],
        "rules": [
            { "selector": "#box", "targets": ["box"], "declarations": "color: red" }
        ]
    }"##;

    #[test]
    fn test_build_sample_fixture() {
        let fixture = Fixture::from_json(SAMPLE).unwrap();
        let (tree, _rules) = fixture.build().unwrap();
        let body = tree.body().unwrap();
        let div = tree.children(body)[0];
        let element = tree.as_element(div).unwrap();
        assert_eq!(element.attr("style"), Some("width: 200px"));
        assert_eq!(tree.text_content(div), "hello");
    }

    #[test]
    fn test_unknown_target_is_an_error() {
        let fixture = Fixture::from_json(
            r#"{ "document": [], "rules": [ { "targets": ["nope"], "declarations": "" } ] }"#,
        )
        .unwrap();
        assert!(fixture.build().is_err());
    }
}
