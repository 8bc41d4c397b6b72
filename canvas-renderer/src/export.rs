//! HTML serialization of a render tree.
//!
//! Attribute order is fixed (`class`, `style`, `data-component`, then the
//! remaining attributes sorted by name), so equal trees serialize to equal
//! strings.

use std::fmt::Write;

use crate::node::RenderNode;

/// Elements written self-closed; their text and children are dropped.
const VOID_TAGS: [&str; 8] = ["area", "br", "col", "hr", "img", "input", "meta", "source"];

/// Serialize a render tree to an HTML fragment.
#[must_use]
pub fn to_html(node: &RenderNode) -> String {
    let mut html = String::with_capacity(node.node_count() * 64);
    write_node(&mut html, node);
    html
}

/// Wrap a fragment in a minimal standalone page.
#[must_use]
pub fn to_html_page(title: &str, node: &RenderNode) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body style=\"margin: 0; height: 100vh\">",
        escape_html(title)
    );
    write_node(&mut html, node);
    html.push_str("</body></html>");
    html
}

fn write_node(html: &mut String, node: &RenderNode) {
    let _ = write!(html, "<{}", node.tag);
    if !node.class.is_empty() {
        let _ = write!(html, " class=\"{}\"", escape_html(&node.class));
    }
    if !node.style.is_empty() {
        let style = node
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        let _ = write!(html, " style=\"{}\"", escape_html(&style));
    }
    if let Some(component) = node.component {
        let _ = write!(html, " data-component=\"{component}\"");
    }
    for (name, value) in &node.attrs {
        if value.is_empty() {
            let _ = write!(html, " {name}");
        } else {
            let _ = write!(html, " {name}=\"{}\"", escape_html(value));
        }
    }
    if VOID_TAGS.contains(&node.tag) {
        html.push_str("/>");
        return;
    }
    html.push('>');
    if let Some(text) = &node.text {
        html.push_str(&escape_html(text));
    }
    for child in &node.children {
        write_node(html, child);
    }
    let _ = write!(html, "</{}>", node.tag);
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order() {
        let node = RenderNode::div()
            .component("card")
            .class("p-4 border")
            .style("padding", "8px")
            .style("color", "#111")
            .attr("id", "c1")
            .text("Hi");
        assert_eq!(
            to_html(&node),
            "<div class=\"p-4 border\" style=\"color: #111; padding: 8px\" data-component=\"card\" id=\"c1\">Hi</div>"
        );
    }

    #[test]
    fn test_void_tags_and_boolean_attributes() {
        let node = RenderNode::new("input").attr("required", "").attr("type", "email");
        assert_eq!(to_html(&node), "<input required type=\"email\"/>");
        assert_eq!(to_html(&RenderNode::new("hr")), "<hr/>");
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let node = RenderNode::new("a")
            .attr("href", "/q?a=1&b=\"2\"")
            .text("<script>alert('x')</script>");
        assert_eq!(
            to_html(&node),
            "<a href=\"/q?a=1&amp;b=&quot;2&quot;\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</a>"
        );
    }

    #[test]
    fn test_nested_children() {
        let node = RenderNode::new("ul")
            .child(RenderNode::new("li").text("a"))
            .child(RenderNode::new("li").text("b"));
        assert_eq!(to_html(&node), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_page_wrapper() {
        let html = to_html_page("A & B", &RenderNode::div());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.ends_with("<div></div></body></html>"));
    }
}
