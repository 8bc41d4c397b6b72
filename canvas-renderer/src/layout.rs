//! Layout renderer: structure-only element types.
//!
//! Layout nodes take spacing and background hints from the element but no
//! visual styling of their own. Grid column counts come from the
//! structured `styles.columns` field.

use canvas_core::{Element, LayoutKind, MAX_GRID_COLUMNS};

use crate::classes;
use crate::context::RenderContext;
use crate::node::RenderNode;

/// Grid columns when `styles.columns` is absent.
pub const DEFAULT_GRID_COLUMNS: u32 = 3;

impl RenderContext<'_> {
    /// Render a layout element and its children.
    pub fn render_layout(&mut self, kind: LayoutKind, element: &Element) -> RenderNode {
        tracing::trace!(kind = kind.as_str(), "Rendering layout");
        let node = match kind {
            LayoutKind::Row => frame("div", element, "flex flex-row items-center gap-4"),
            LayoutKind::Column | LayoutKind::Stack => frame("div", element, "flex flex-col gap-4"),
            LayoutKind::Grid => {
                let columns = element
                    .styles
                    .columns
                    .unwrap_or(DEFAULT_GRID_COLUMNS)
                    .clamp(1, MAX_GRID_COLUMNS);
                frame(
                    "div",
                    element,
                    &format!("grid grid-cols-1 gap-4 md:grid-cols-{columns}"),
                )
                .attr("data-columns", columns.to_string())
            }
            LayoutKind::Flex => frame("div", element, "flex flex-wrap gap-4"),
            LayoutKind::Spacer => {
                return frame("div", element, "flex-1").component(kind.as_str());
            }
            LayoutKind::Divider => {
                return frame("hr", element, "border-t border-slate-200").component(kind.as_str());
            }
        };
        node.component(kind.as_str())
            .children(self.render_children(element))
    }
}

/// Layout node: merged classes plus padding, margin, gap and background.
fn frame(tag: &'static str, element: &Element, default_class: &str) -> RenderNode {
    let styles = &element.styles;
    let class = classes::merge([
        default_class,
        styles.tw.as_deref().unwrap_or_default(),
        element.attributes.class_name.as_deref().unwrap_or_default(),
    ]);
    RenderNode::new(tag)
        .class(&class)
        .style_opt("padding", styles.padding.clone())
        .style_opt("margin", styles.margin.clone())
        .style_opt("gap", styles.gap.clone())
        .style_opt("background", styles.background.clone())
        .attr_opt("id", element.attributes.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_core::{Platform, Theme};
    use serde_json::{json, Value};

    fn render(value: Value) -> RenderNode {
        let element: Element = serde_json::from_value(value).expect("element should parse");
        let theme = Theme::default();
        let mut ctx = RenderContext::new(&theme, Platform::Web);
        ctx.render_element(&element)
    }

    #[test]
    fn test_row_and_column_classes() {
        let row = render(json!({ "type": "Row", "elements": [{ "type": "text" }] }));
        assert_eq!(row.class, "flex flex-row items-center gap-4");
        assert_eq!(row.component, Some("row"));
        assert_eq!(row.children.len(), 1);

        let stack = render(json!({ "type": "stack", "styles": { "gap": "2rem" } }));
        assert_eq!(stack.class, "flex flex-col gap-4");
        assert_eq!(stack.style.get("gap").map(String::as_str), Some("2rem"));
    }

    #[test]
    fn test_grid_columns_from_structured_field() {
        let grid = render(json!({ "type": "grid", "styles": { "columns": 4 } }));
        assert!(grid.has_class("md:grid-cols-4"));
        assert_eq!(grid.attrs.get("data-columns").map(String::as_str), Some("4"));

        let default = render(json!({ "type": "grid" }));
        assert!(default.has_class("md:grid-cols-3"));
    }

    #[test]
    fn test_grid_columns_are_bounded() {
        let grid = render(json!({ "type": "grid", "styles": { "columns": 500 } }));
        assert_eq!(grid.attrs.get("data-columns").map(String::as_str), Some("12"));
        assert!(grid.has_class("md:grid-cols-12"));

        let grid = render(json!({ "type": "grid", "styles": { "columns": 0 } }));
        assert_eq!(grid.attrs.get("data-columns").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_utility_string_is_not_parsed_for_columns() {
        let grid = render(json!({ "type": "grid", "styles": { "tw": "grid-cols-6" } }));
        assert_eq!(grid.attrs.get("data-columns").map(String::as_str), Some("3"));
        assert!(grid.has_class("grid-cols-6"));
    }

    #[test]
    fn test_spacer_and_divider_have_no_children() {
        let spacer = render(json!({ "type": "spacer", "elements": [{ "type": "text" }] }));
        assert!(spacer.children.is_empty());
        assert_eq!(spacer.class, "flex-1");

        let divider = render(json!({ "type": "divider" }));
        assert_eq!(divider.tag, "hr");
    }

    #[test]
    fn test_layout_ignores_visual_styles() {
        let row = render(json!({
            "type": "row",
            "styles": { "color": "red", "border": "1px solid", "padding": 8 }
        }));
        assert!(!row.style.contains_key("color"));
        assert!(!row.style.contains_key("border"));
        assert_eq!(row.style.get("padding").map(String::as_str), Some("8px"));
    }
}
