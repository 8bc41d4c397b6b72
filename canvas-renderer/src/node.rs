//! The rendered visual tree.
//!
//! A [`RenderNode`] is a host-neutral description of one visual element:
//! an HTML-like tag, utility classes, inline style declarations,
//! attributes, optional text, and ordered children. Hosts serialize it
//! (see [`crate::export`]) or walk it directly.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classes;

/// One node of the rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderNode {
    /// Tag name, e.g. `div`, `section`, `button`.
    pub tag: &'static str,
    /// Name of the renderer that produced this node, if it is a root of
    /// one renderer's output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<&'static str>,
    /// Space-separated utility classes.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,
    /// Inline style declarations, keyed by CSS property.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    /// Attributes other than `class` and `style`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Text content, rendered before children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child nodes in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Create an empty node.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    /// Plain `div`.
    #[must_use]
    pub fn div() -> Self {
        Self::new("div")
    }

    /// Tag the node with the renderer that produced it.
    #[must_use]
    pub fn component(mut self, name: &'static str) -> Self {
        self.component = Some(name);
        self
    }

    /// Merge classes into the class list.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.class = classes::merge([self.class.as_str(), class]);
        self
    }

    /// Set a style declaration.
    #[must_use]
    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.insert(property.to_string(), value.into());
        self
    }

    /// Set a style declaration if a value is present.
    #[must_use]
    pub fn style_opt(self, property: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.style(property, value),
            None => self,
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Set an attribute if a value is present.
    #[must_use]
    pub fn attr_opt(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the text content if present.
    #[must_use]
    pub fn text_opt(mut self, text: Option<impl Into<String>>) -> Self {
        self.text = text.map(Into::into);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child if present.
    #[must_use]
    pub fn child_opt(self, child: Option<RenderNode>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    /// Depth-first, pre-order iterator over this node and its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &RenderNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// First node (pre-order) produced by the named renderer.
    #[must_use]
    pub fn find_component(&self, name: &str) -> Option<&RenderNode> {
        self.descendants().find(|n| n.component == Some(name))
    }

    /// All text in the subtree, in document order, space-joined.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|n| n.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of nodes in the subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_merges_classes() {
        let node = RenderNode::div().class("flex gap-4").class("gap-4  p-2");
        assert_eq!(node.class, "flex gap-4 p-2");
        assert!(node.has_class("p-2"));
        assert!(!node.has_class("gap"));
    }

    #[test]
    fn test_optional_setters() {
        let node = RenderNode::new("img")
            .attr_opt("alt", None::<String>)
            .attr_opt("src", Some("a.png"))
            .style_opt("width", None::<&str>)
            .child_opt(None);
        assert_eq!(node.attrs.len(), 1);
        assert!(node.style.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let tree = RenderNode::div()
            .text("a")
            .child(RenderNode::new("p").text("b").child(RenderNode::new("span").text("c")))
            .child(RenderNode::new("p").text("d").component("leaf"));

        assert_eq!(tree.text_content(), "a b c d");
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.find_component("leaf").map(|n| n.tag), Some("p"));
        assert!(tree.find_component("missing").is_none());
    }

    #[test]
    fn test_serializes_compactly() {
        let node = RenderNode::new("hr").component("divider");
        let value = serde_json::to_value(&node).expect("serialize");
        assert_eq!(value, serde_json::json!({ "tag": "hr", "component": "divider" }));
    }
}
