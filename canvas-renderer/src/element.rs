//! Element renderer: dispatches an element tree node on its type tag.
//!
//! Layout tags go to [`crate::layout`]; known content tags have their own
//! treatment here; anything else becomes a plain container that still
//! renders its children, so newer generated types degrade gracefully.

use canvas_core::lenient::{coerce_number, scalar_to_string};
use canvas_core::{ContentKind, Element, ElementType, TypeLevel};
use serde_json::Value;

use crate::classes;
use crate::context::RenderContext;
use crate::node::RenderNode;
use crate::url;

/// Component name given to unknown element types.
pub const GENERIC_CONTAINER: &str = "container";

impl RenderContext<'_> {
    /// Render one element and its subtree.
    pub fn render_element(&mut self, element: &Element) -> RenderNode {
        match element.element_type() {
            ElementType::Layout(kind) => self.render_layout(kind, element),
            ElementType::Content(kind) => {
                tracing::trace!(kind = kind.as_str(), "Rendering element");
                self.render_content(kind, element)
            }
            ElementType::Unknown(tag) => {
                tracing::debug!("Unknown element type '{tag}', rendering as container");
                base("div", element, "")
                    .component(GENERIC_CONTAINER)
                    .attr("data-type", tag)
                    .text_opt(element.text())
                    .children(self.render_children(element))
            }
        }
    }

    /// Render an element's children in order.
    pub fn render_children(&mut self, element: &Element) -> Vec<RenderNode> {
        element
            .elements
            .iter()
            .map(|child| self.render_element(child))
            .collect()
    }

    fn render_content(&mut self, kind: ContentKind, element: &Element) -> RenderNode {
        let node = match kind {
            ContentKind::Header => self.text_block(
                "header",
                element,
                "mb-6 text-3xl font-semibold text-slate-900",
            ),
            ContentKind::Text => {
                self.text_block("p", element, "text-base leading-relaxed text-slate-600")
            }
            ContentKind::Button => self.button(element),
            ContentKind::Form => base("form", element, "space-y-4")
                .children(self.render_children(element)),
            ContentKind::Input => self.input(element),
            ContentKind::Textarea => self.textarea(element),
            ContentKind::Select => self.select(element),
            ContentKind::Link => self
                .text_block("a", element, "text-blue-600 underline hover:text-blue-800")
                .attr(
                    "href",
                    element
                        .attributes
                        .href
                        .as_deref()
                        .map_or_else(|| url::FALLBACK_HREF.to_string(), url::sanitize_href),
                ),
            ContentKind::Icon => self.icon_element(element),
            ContentKind::Image => {
                let media = element.media();
                base(
                    "img",
                    element,
                    "h-auto max-w-full rounded-lg border border-slate-200 object-cover",
                )
                .attr("src", url::sanitize_src(&media.src))
                .attr("alt", media.alt)
            }
            ContentKind::Avatar => self.avatar(element),
            ContentKind::Badge => self.badge(element),
            ContentKind::Card => self.card(element),
            ContentKind::Nav => self.nav(element),
            ContentKind::Footer => self.text_block(
                "footer",
                element,
                "mt-8 border-t border-slate-200 pt-6 text-sm text-slate-500",
            ),
            ContentKind::List => self.list(element),
            ContentKind::Table => self.table(element),
            ContentKind::Tabs => self.tabs(element),
            ContentKind::Alert => self.alert(element),
            ContentKind::EmptyState => self.empty_state(element),
            ContentKind::Skeleton => self.skeleton(element),
            ContentKind::Progress => self.progress(element),
            ContentKind::Section => self.text_block(
                "section",
                element,
                "rounded-lg border border-slate-100 bg-slate-50/50 p-6",
            ),
            ContentKind::Container => self.text_block("div", element, ""),
        };
        node.component(kind.as_str())
    }

    /// Tag with default classes, text, then children.
    fn text_block(&mut self, tag: &'static str, element: &Element, class: &str) -> RenderNode {
        base(tag, element, class)
            .text_opt(element.text())
            .children(self.render_children(element))
    }

    fn button(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let node = base(
            "button",
            element,
            "inline-flex items-center justify-center gap-2 px-4 py-2 font-medium text-white",
        );
        let node = with_default_style(node, "background-color", &theme.colors.primary);
        with_default_style(node, "border-radius", &self.radius())
            .attr(
                "type",
                element
                    .attributes
                    .input_type
                    .clone()
                    .unwrap_or_else(|| "button".to_string()),
            )
            .text_opt(element.text())
            .children(self.render_children(element))
    }

    fn input(&mut self, element: &Element) -> RenderNode {
        let node = base("input", element, "w-full border px-3 py-2");
        self.field_frame(node)
            .attr(
                "type",
                element
                    .attributes
                    .input_type
                    .clone()
                    .unwrap_or_else(|| "text".to_string()),
            )
            .attr_opt("placeholder", element.attributes.placeholder.clone())
            .attr_opt(
                "value",
                element.content_field("value").and_then(scalar_to_string),
            )
    }

    fn textarea(&mut self, element: &Element) -> RenderNode {
        let node = base("textarea", element, "w-full border px-3 py-2");
        self.field_frame(node)
            .attr("rows", "4")
            .attr_opt("placeholder", element.attributes.placeholder.clone())
            .text_opt(element.text())
    }

    fn select(&mut self, element: &Element) -> RenderNode {
        let node = base("select", element, "w-full border px-3 py-2");
        let items = element.content_items();
        let placeholder = element
            .attributes
            .placeholder
            .clone()
            .unwrap_or_else(|| "Select...".to_string());
        let options = std::iter::once(RenderNode::new("option").attr("value", "").text(placeholder))
            .chain(
                items
                    .into_iter()
                    .map(|item| RenderNode::new("option").attr("value", item.clone()).text(item)),
            );
        self.field_frame(node).children(options)
    }

    /// Border and radius shared by form controls.
    fn field_frame(&self, node: RenderNode) -> RenderNode {
        let theme = self.theme();
        let node = with_default_style(node, "border-color", &theme.colors.border);
        let node = with_default_style(node, "border-radius", &self.radius());
        with_default_style(node, "font-size", &self.font_size(TypeLevel::Body))
    }

    fn icon_element(&mut self, element: &Element) -> RenderNode {
        let name = element
            .text()
            .or_else(|| element.attributes.id.clone())
            .unwrap_or_default();
        let icon = self.icon(&name);
        let node = base(
            "span",
            element,
            "inline-flex h-5 w-5 items-center justify-center",
        )
        .attr("data-icon", icon.name)
        .text(icon.glyph);
        match &element.attributes.aria_label {
            Some(_) => node.attr("role", "img"),
            None => node.attr("aria-hidden", "true"),
        }
    }

    fn avatar(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let node = base(
            "div",
            element,
            "flex h-10 w-10 items-center justify-center overflow-hidden rounded-full text-sm font-medium",
        );
        let node = with_default_style(node, "background-color", &theme.colors.muted);
        let node = with_default_style(node, "color", &theme.colors.foreground);
        match element.text() {
            Some(name) => node.attr("title", name.clone()).text(initials(&name)),
            None => {
                let media = element.media();
                node.child(
                    RenderNode::new("img")
                        .class("h-full w-full object-cover")
                        .attr("src", url::sanitize_src(&media.src))
                        .attr("alt", media.alt),
                )
            }
        }
    }

    fn badge(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let node = base(
            "span",
            element,
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium",
        );
        let node = with_default_style(node, "background-color", &theme.colors.accent);
        with_default_style(node, "color", &theme.colors.foreground)
            .text_opt(element.text())
            .children(self.render_children(element))
    }

    fn card(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let node = base("div", element, "border p-6 shadow-sm");
        let node = with_default_style(node, "border-color", &theme.colors.border);
        let node = with_default_style(node, "border-radius", &self.radius());
        let node = with_default_style(node, "background-color", &theme.colors.background);
        let title = element.text().map(|text| {
            RenderNode::new("h3")
                .class("mb-2 font-semibold")
                .style("font-size", self.font_size(TypeLevel::H3))
                .style("color", theme.colors.foreground.clone())
                .text(text)
        });
        node.child_opt(title)
            .children(self.render_children(element))
    }

    fn nav(&mut self, element: &Element) -> RenderNode {
        let links = element.content_items().into_iter().map(|item| {
            RenderNode::new("a")
                .class("text-slate-700 hover:text-slate-900")
                .attr("href", "#")
                .text(item)
        });
        base("nav", element, "flex flex-wrap items-center gap-4")
            .children(links)
            .children(self.render_children(element))
    }

    fn list(&mut self, element: &Element) -> RenderNode {
        let items = element.content_items().into_iter().map(|item| {
            RenderNode::new("li")
                .class("text-base text-slate-600")
                .text(item)
        });
        let children = self
            .render_children(element)
            .into_iter()
            .map(|child| RenderNode::new("li").child(child));
        base("ul", element, "list-disc space-y-2 pl-5")
            .children(items)
            .children(children)
    }

    fn table(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let columns = table_columns(element.content_field("columns"));
        let rows = match element.content_field("rows") {
            Some(Value::Array(rows)) => rows.as_slice(),
            _ => &[],
        };

        let header = RenderNode::new("thead").child(
            RenderNode::new("tr")
                .class("border-b")
                .style("border-color", theme.colors.border.clone())
                .children(columns.iter().map(|(_, label)| {
                    RenderNode::new("th")
                        .class("px-4 py-3 text-left font-medium")
                        .text(label.clone())
                })),
        );
        let body = RenderNode::new("tbody").children(rows.iter().map(|row| {
            let cells: Vec<String> = match row {
                Value::Array(cells) => cells
                    .iter()
                    .map(|cell| scalar_to_string(cell).unwrap_or_default())
                    .collect(),
                Value::Object(map) => columns
                    .iter()
                    .map(|(key, _)| map.get(key).and_then(scalar_to_string).unwrap_or_default())
                    .collect(),
                other => vec![scalar_to_string(other).unwrap_or_default()],
            };
            RenderNode::new("tr")
                .class("border-b")
                .style("border-color", theme.colors.border.clone())
                .children(cells.into_iter().map(|cell| {
                    RenderNode::new("td").class("px-4 py-3").text(cell)
                }))
        }));

        base("table", element, "w-full border-collapse text-left")
            .child(header)
            .child(body)
            .children(self.render_children(element))
    }

    fn tabs(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let tabs = element
            .content_items()
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                let tab = RenderNode::new("button")
                    .attr("role", "tab")
                    .attr("type", "button")
                    .text(label);
                if index == 0 {
                    tab.class("border-b-2 px-4 py-2 font-medium")
                        .attr("aria-selected", "true")
                        .style("border-color", theme.colors.primary.clone())
                        .style("color", theme.colors.primary.clone())
                } else {
                    tab.class("px-4 py-2 text-slate-500")
                        .attr("aria-selected", "false")
                }
            });
        let list = RenderNode::div()
            .class("flex gap-2 border-b")
            .attr("role", "tablist")
            .style("border-color", theme.colors.border.clone())
            .children(tabs);
        let panel = RenderNode::div()
            .class("pt-4")
            .attr("role", "tabpanel")
            .children(self.render_children(element));
        base("div", element, "w-full").child(list).child(panel)
    }

    fn alert(&mut self, element: &Element) -> RenderNode {
        let variant = element
            .content_field("variant")
            .and_then(scalar_to_string)
            .unwrap_or_default();
        let class = match variant.to_lowercase().as_str() {
            "error" | "danger" | "destructive" => "border-red-200 bg-red-50 text-red-900",
            "warning" => "border-amber-200 bg-amber-50 text-amber-900",
            "success" => "border-green-200 bg-green-50 text-green-900",
            _ => "border-blue-200 bg-blue-50 text-blue-900",
        };
        base("div", element, &classes::merge(["rounded-lg border p-4", class]))
            .attr("role", "alert")
            .text_opt(element.text())
            .children(self.render_children(element))
    }

    fn empty_state(&mut self, element: &Element) -> RenderNode {
        let icon = element
            .content_field("icon")
            .and_then(scalar_to_string)
            .map(|name| {
                let icon = self.icon(&name);
                RenderNode::new("span")
                    .class("text-3xl")
                    .attr("data-icon", icon.name)
                    .attr("aria-hidden", "true")
                    .text(icon.glyph)
            });
        let message = element
            .text()
            .unwrap_or_else(|| "Nothing here yet".to_string());
        base(
            "div",
            element,
            "flex flex-col items-center justify-center gap-2 py-12 text-center text-slate-500",
        )
        .child_opt(icon)
        .child(RenderNode::new("p").text(message))
        .children(self.render_children(element))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn skeleton(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let lines = element
            .content_field("lines")
            .and_then(coerce_number)
            .filter(|n| *n >= 1.0)
            .map_or(3, |n| n.round().min(12.0) as usize);
        let bars = (0..lines).map(|index| {
            let width = if index + 1 == lines { "w-2/3" } else { "w-full" };
            RenderNode::div()
                .class(&classes::merge(["h-3 rounded", width]))
                .style("background-color", theme.colors.muted.clone())
        });
        base("div", element, "animate-pulse space-y-2")
            .attr("aria-busy", "true")
            .children(bars)
    }

    fn progress(&mut self, element: &Element) -> RenderNode {
        let theme = self.theme();
        let value = element
            .content_field("value")
            .or(match &element.content {
                Value::Number(_) | Value::String(_) => Some(&element.content),
                _ => None,
            })
            .and_then(coerce_number)
            .map_or(0.0, |v| v.clamp(0.0, 100.0));
        let bar = RenderNode::div()
            .class("h-full rounded-full")
            .style("width", format!("{value}%"))
            .style("background-color", theme.colors.primary.clone());
        let node = base("div", element, "h-2 w-full overflow-hidden rounded-full");
        with_default_style(node, "background-color", &theme.colors.muted)
            .attr("role", "progressbar")
            .attr("aria-valuemin", "0")
            .attr("aria-valuemax", "100")
            .attr("aria-valuenow", value.to_string())
            .child(bar)
    }
}

/// A node carrying an element's merged classes, style hints and
/// identifying attributes.
pub(crate) fn base(tag: &'static str, element: &Element, default_class: &str) -> RenderNode {
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
        .style_opt("border", styles.border.clone())
        .style_opt("border-radius", styles.radius.clone())
        .style_opt("background", styles.background.clone())
        .style_opt("color", styles.color.clone())
        .attr_opt("id", element.attributes.id.clone())
        .attr_opt("aria-label", element.attributes.aria_label.clone())
}

/// Apply a theme default unless the element already set the property.
fn with_default_style(node: RenderNode, property: &str, value: &str) -> RenderNode {
    let overridden = node.style.contains_key(property)
        || (property == "background-color" && node.style.contains_key("background"));
    if overridden {
        node
    } else {
        node.style(property, value)
    }
}

/// Column keys and labels from `content.columns`: strings, or objects
/// with `key`/`label`.
fn table_columns(value: Option<&Value>) -> Vec<(String, String)> {
    let Some(Value::Array(columns)) = value else {
        return Vec::new();
    };
    columns
        .iter()
        .filter_map(|column| match column {
            Value::Object(map) => {
                let key = map.get("key").and_then(scalar_to_string);
                let label = map.get("label").and_then(scalar_to_string);
                match (key, label) {
                    (Some(key), Some(label)) => Some((key, label)),
                    (Some(only), None) | (None, Some(only)) => Some((only.clone(), only)),
                    (None, None) => None,
                }
            }
            other => scalar_to_string(other).map(|label| (label.clone(), label)),
        })
        .collect()
}

/// Up to two uppercase initials from a display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_core::{Platform, Theme};
    use serde_json::json;

    fn render(value: Value) -> (RenderNode, Vec<String>) {
        let element: Element = serde_json::from_value(value).expect("element should parse");
        let theme = Theme::default();
        let mut ctx = RenderContext::new(&theme, Platform::Web);
        let node = ctx.render_element(&element);
        let output = ctx.finish(node);
        (output.node, output.warnings)
    }

    #[test]
    fn test_unknown_type_is_generic_container() {
        let (node, warnings) = render(json!({
            "type": "Carousel",
            "content": "Slides",
            "elements": [{ "type": "text", "content": "one" }, { "type": "text", "content": "two" }]
        }));

        assert_eq!(node.tag, "div");
        assert_eq!(node.component, Some(GENERIC_CONTAINER));
        assert_eq!(node.attrs.get("data-type").map(String::as_str), Some("carousel"));
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.text_content(), "Slides one two");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let (node, _) = render(json!({ "type": "HEADER", "content": { "title": "Hi" } }));
        assert_eq!(node.tag, "header");
        assert_eq!(node.component, Some("header"));
        assert_eq!(node.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_styles_and_classes_are_merged() {
        let (node, _) = render(json!({
            "type": "text",
            "content": "Body",
            "styles": { "padding": 12, "background": "#fafafa", "tw": "font-bold text-base" },
            "attributes": { "className": "font-bold mt-2", "id": "intro" }
        }));

        assert_eq!(
            node.class,
            "text-base leading-relaxed text-slate-600 font-bold mt-2"
        );
        assert_eq!(node.style.get("padding").map(String::as_str), Some("12px"));
        assert_eq!(node.style.get("background").map(String::as_str), Some("#fafafa"));
        assert_eq!(node.attrs.get("id").map(String::as_str), Some("intro"));
    }

    #[test]
    fn test_image_media_fallbacks() {
        let (node, _) = render(json!({ "type": "image" }));
        assert_eq!(node.tag, "img");
        assert_eq!(node.attrs.get("src").map(String::as_str), Some("https://placehold.co/400"));
        assert_eq!(node.attrs.get("alt").map(String::as_str), Some("Image"));

        let (node, _) = render(json!({
            "type": "image",
            "content": { "media": { "src": "/hero.png", "alt": "Hero" } }
        }));
        assert_eq!(node.attrs.get("src").map(String::as_str), Some("/hero.png"));
        assert_eq!(node.attrs.get("alt").map(String::as_str), Some("Hero"));
    }

    #[test]
    fn test_script_urls_are_neutralized() {
        let (link, _) = render(json!({
            "type": "link",
            "content": "Click",
            "attributes": { "href": "javascript:alert(document.cookie)" }
        }));
        assert_eq!(link.attrs.get("href").map(String::as_str), Some("#"));
        let html = crate::export::to_html(&link);
        assert!(!html.contains("javascript"), "{html}");

        let (safe, _) = render(json!({
            "type": "link",
            "content": "Docs",
            "attributes": { "href": "https://example.com/docs" }
        }));
        assert_eq!(
            safe.attrs.get("href").map(String::as_str),
            Some("https://example.com/docs")
        );

        let (image, _) = render(json!({
            "type": "image",
            "attributes": { "src": "javascript:alert(1)" }
        }));
        assert_eq!(image.attrs.get("src").map(String::as_str), Some("https://placehold.co/400"));

        let (avatar, _) = render(json!({
            "type": "avatar",
            "content": { "media": { "src": "data:text/html,<b>x</b>" } }
        }));
        let img = avatar.descendants().find(|n| n.tag == "img").expect("img");
        assert_eq!(img.attrs.get("src").map(String::as_str), Some("https://placehold.co/400"));
    }

    #[test]
    fn test_button_uses_theme_unless_overridden() {
        let (node, _) = render(json!({ "type": "button", "content": "Go" }));
        assert_eq!(node.style.get("background-color").map(String::as_str), Some("#1d4ed8"));
        assert_eq!(node.attrs.get("type").map(String::as_str), Some("button"));

        let (node, _) = render(json!({
            "type": "button",
            "content": "Go",
            "styles": { "background": "black" },
            "attributes": { "type": "submit" }
        }));
        assert!(!node.style.contains_key("background-color"));
        assert_eq!(node.attrs.get("type").map(String::as_str), Some("submit"));
    }

    #[test]
    fn test_icon_resolution_and_fallback() {
        let (node, warnings) = render(json!({ "type": "icon", "content": "ShoppingCart" }));
        assert_eq!(node.attrs.get("data-icon").map(String::as_str), Some("shoppingcart"));
        assert!(warnings.is_empty());

        let (node, warnings) = render(json!({ "type": "icon", "attributes": { "id": "griffin" } }));
        assert_eq!(node.attrs.get("data-icon").map(String::as_str), Some("circle"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_select_options() {
        let (node, _) = render(json!({ "type": "select", "content": { "items": ["A", "B"] } }));
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[0].text.as_deref(), Some("Select..."));
        assert_eq!(node.children[2].attrs.get("value").map(String::as_str), Some("B"));
    }

    #[test]
    fn test_table_rows_by_column_key() {
        let (node, _) = render(json!({
            "type": "table",
            "content": {
                "columns": [{ "key": "name", "label": "Name" }, "Role"],
                "rows": [{ "name": "Ada", "Role": "Admin" }, ["Bob", "Viewer"]]
            }
        }));
        assert_eq!(node.text_content(), "Name Role Ada Admin Bob Viewer");
    }

    #[test]
    fn test_progress_is_clamped() {
        let (node, _) = render(json!({ "type": "progress", "content": { "value": "140%" } }));
        assert_eq!(node.attrs.get("aria-valuenow").map(String::as_str), Some("100"));
        assert_eq!(node.children[0].style.get("width").map(String::as_str), Some("100%"));

        let (node, _) = render(json!({ "type": "progress", "content": 35 }));
        assert_eq!(node.attrs.get("aria-valuenow").map(String::as_str), Some("35"));
    }

    #[test]
    fn test_avatar_initials() {
        let (node, _) = render(json!({ "type": "avatar", "content": "ada lovelace byron" }));
        assert_eq!(node.text.as_deref(), Some("AL"));

        let (node, _) = render(json!({ "type": "avatar" }));
        assert_eq!(node.children[0].tag, "img");
    }

    #[test]
    fn test_tabs_mark_first_active() {
        let (node, _) = render(json!({ "type": "tabs", "content": ["Overview", "Activity"] }));
        let list = &node.children[0];
        assert_eq!(list.children[0].attrs.get("aria-selected").map(String::as_str), Some("true"));
        assert_eq!(list.children[1].attrs.get("aria-selected").map(String::as_str), Some("false"));
    }

    #[test]
    fn test_every_known_tag_renders() {
        for tag in [
            "header", "text", "button", "form", "input", "textarea", "select", "link", "icon",
            "image", "avatar", "badge", "card", "nav", "footer", "list", "table", "tabs", "alert",
            "emptystate", "skeleton", "progress", "section", "container",
        ] {
            let (node, _) = render(json!({ "type": tag, "content": "x" }));
            assert_eq!(node.component, Some(tag), "tag {tag}");
        }
    }
}
