//! Section renderer: one layout per section kind, styled from theme tokens.
//!
//! Unlike element types, an unknown section kind is not silently
//! absorbed: it renders a visible red box naming the kind.

use canvas_core::lenient::scalar_to_string;
use canvas_core::{FormField, Platform, Section, SectionKind, TableColumn, TypeLevel};
use serde_json::Value;

use crate::classes;
use crate::context::RenderContext;
use crate::node::RenderNode;

/// Component name of the unknown-kind indicator.
pub const UNKNOWN_SECTION: &str = "unknown-section";

/// Placeholder rows for empty lists and tables.
const PLACEHOLDER_ROWS: usize = 3;

impl RenderContext<'_> {
    /// Render a section for the context's platform.
    pub fn render_section(&mut self, section: &Section) -> RenderNode {
        tracing::trace!(id = %section.id, kind = %section.kind, "Rendering section");
        let node = match &section.kind {
            SectionKind::Nav => self.nav_section(section),
            SectionKind::Hero => self.hero_section(section),
            SectionKind::Grid => self.grid_section(section),
            SectionKind::Card => self.card_section(section),
            SectionKind::List => self.list_section(section),
            SectionKind::Form => self.form_section(section),
            SectionKind::Table => self.table_section(section),
            SectionKind::Footer => self.footer_section(section),
            SectionKind::Modal => self.modal_section(section),
            SectionKind::Unknown(kind) => {
                self.warn(format!(
                    "Section '{}' has unknown kind '{kind}'",
                    section.id
                ));
                return RenderNode::div()
                    .component(UNKNOWN_SECTION)
                    .class("rounded-lg border border-red-200 bg-red-50 p-4 text-red-900")
                    .attr("role", "alert")
                    .attr("data-section-id", section.id.clone())
                    .text(format!("Unknown section kind: {kind}"));
            }
        };
        node.component(component_name(&section.kind))
            .attr("data-section-id", section.id.clone())
    }

    fn nav_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let items: Vec<(String, Option<String>)> = section
            .content_list("items")
            .iter()
            .filter_map(|item| match item {
                Value::Object(map) => {
                    let label = ["label", "title", "name"]
                        .iter()
                        .filter_map(|key| map.get(*key))
                        .find_map(scalar_to_string)?;
                    let icon = map.get("icon").and_then(scalar_to_string);
                    Some((label, icon))
                }
                other => scalar_to_string(other).map(|label| (label, None)),
            })
            .collect();

        if self.platform() == Platform::Mobile {
            let small = self.font_size(TypeLevel::Small);
            let tabs: Vec<RenderNode> = items
                .into_iter()
                .map(|(label, icon_name)| {
                    let icon = self.icon(icon_name.as_deref().unwrap_or(&label));
                    RenderNode::new("button")
                        .class("flex flex-col items-center gap-0.5 px-3 py-1")
                        .attr("type", "button")
                        .style("color", theme.colors.foreground.clone())
                        .child(
                            RenderNode::new("span")
                                .class("h-5 w-5")
                                .attr("data-icon", icon.name)
                                .attr("aria-hidden", "true")
                                .text(icon.glyph),
                        )
                        .child(
                            RenderNode::new("span")
                                .class("text-xs")
                                .style("font-size", small.clone())
                                .text(label),
                        )
                })
                .collect();
            return RenderNode::new("nav")
                .class("fixed bottom-0 left-0 right-0 z-10 border-t px-4 py-3")
                .style("background-color", theme.colors.background.clone())
                .style("border-color", theme.colors.border.clone())
                .child(
                    RenderNode::div()
                        .class("flex items-center justify-around")
                        .children(tabs),
                );
        }

        let brand = section
            .content_str("brand")
            .unwrap_or_else(|| "App".to_string());
        let body = self.font_size(TypeLevel::Body);
        let links = items.into_iter().map(|(label, _)| {
            RenderNode::new("a")
                .class("transition-colors hover:opacity-80")
                .attr("href", "#")
                .style("color", theme.colors.foreground.clone())
                .style("font-size", body.clone())
                .text(label)
        });
        RenderNode::new("header")
            .class("sticky top-0 z-10 border-b px-6 py-4")
            .style("background-color", theme.colors.background.clone())
            .style("border-color", theme.colors.border.clone())
            .child(
                RenderNode::div()
                    .class("flex items-center justify-between")
                    .child(
                        RenderNode::div()
                            .class("font-bold")
                            .style("color", theme.colors.foreground.clone())
                            .style("font-size", self.font_size(TypeLevel::H3))
                            .text(brand),
                    )
                    .child(
                        RenderNode::new("nav")
                            .class("flex items-center gap-6")
                            .children(links),
                    ),
            )
    }

    fn hero_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let headline = section
            .title
            .clone()
            .or_else(|| section.content_str("headline"))
            .unwrap_or_else(|| "Welcome".to_string());
        let description = section
            .description
            .clone()
            .or_else(|| section.content_str("description"));
        let primary = section
            .content_str_any(&["cta_primary", "primaryCta"])
            .unwrap_or_else(|| "Get Started".to_string());
        let secondary = section.content_str_any(&["cta_secondary", "secondaryCta"]);

        let description = description.map(|text| {
            RenderNode::new("p")
                .class("leading-relaxed")
                .style("font-size", self.body_plus(2.0))
                .style("color", theme.colors.muted.clone())
                .text(text)
        });
        let secondary = secondary.map(|label| {
            self.outline_button("px-6 py-3", label)
        });

        RenderNode::new("section")
            .class("flex min-h-[400px] flex-col items-center justify-center px-6 py-20 text-center")
            .child(
                RenderNode::div()
                    .class("mx-auto max-w-3xl space-y-6")
                    .child(
                        RenderNode::new("h1")
                            .class("font-bold leading-tight")
                            .style("font-size", self.font_size(TypeLevel::H1))
                            .style("color", theme.colors.foreground.clone())
                            .text(headline),
                    )
                    .child_opt(description)
                    .child(
                        RenderNode::div()
                            .class("flex flex-wrap items-center justify-center gap-4 pt-4")
                            .child(self.primary_button("px-6 py-3", primary))
                            .child_opt(secondary),
                    ),
            )
    }

    fn grid_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let grid = section.grid_config();
        let items = section.content_list("items");

        let cells: Vec<RenderNode> = if items.is_empty() {
            (0..grid.lg_cols)
                .map(|_| {
                    self.tile()
                        .child(self.placeholder_bar("mb-2 h-4 w-3/4"))
                        .child(self.placeholder_bar("h-3 w-full"))
                })
                .collect()
        } else {
            items
                .iter()
                .map(|item| {
                    let (title, description) = title_and_description(item);
                    self.tile()
                        .child_opt(title.map(|t| {
                            RenderNode::new("h3")
                                .class("mb-2 font-semibold")
                                .style("font-size", self.font_size(TypeLevel::H3))
                                .style("color", theme.colors.foreground.clone())
                                .text(t)
                        }))
                        .child_opt(description.map(|d| self.muted_text("p", "", d)))
                })
                .collect()
        };

        let gap_class = format!("gap-{}", grid.gap / 4);
        RenderNode::new("section").class("px-6 py-8").child(
            RenderNode::div()
                .class("mx-auto max-w-6xl")
                .child_opt(self.section_title(section))
                .child_opt(
                    section
                        .description
                        .clone()
                        .map(|d| self.muted_text("p", "mb-8", d)),
                )
                .child(
                    RenderNode::div()
                        .class(&classes::merge([
                            classes::grid_columns(grid.sm_cols, grid.md_cols, grid.lg_cols)
                                .as_str(),
                            gap_class.as_str(),
                        ]))
                        .style(
                            "grid-template-columns",
                            format!("repeat({}, minmax(0, 1fr))", grid.lg_cols),
                        )
                        .style("gap", format!("{}px", grid.gap))
                        .attr("data-columns", grid.lg_cols.to_string())
                        .children(cells),
                ),
        )
    }

    fn card_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let title = section.title.clone().or_else(|| section.content_str("title"));
        let description = section
            .description
            .clone()
            .or_else(|| section.content_str("description"));
        let action = section.content_str_any(&["action", "cta"]);

        RenderNode::div()
            .class("border p-6 shadow-sm transition-shadow hover:shadow-md")
            .style("border-color", theme.colors.border.clone())
            .style("border-radius", self.radius())
            .style("background-color", theme.colors.background.clone())
            .child_opt(title.map(|t| {
                RenderNode::new("h3")
                    .class("mb-2 font-semibold")
                    .style("font-size", self.font_size(TypeLevel::H3))
                    .style("color", theme.colors.foreground.clone())
                    .text(t)
            }))
            .child_opt(description.map(|d| self.muted_text("p", "mb-4", d)))
            .child_opt(action.map(|label| {
                RenderNode::new("button")
                    .class("font-medium transition-opacity hover:opacity-80")
                    .attr("type", "button")
                    .style("color", theme.colors.primary.clone())
                    .style("font-size", self.font_size(TypeLevel::Body))
                    .text(label)
            }))
    }

    fn list_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let items = section.content_list("items");
        let rows: Vec<RenderNode> = if items.is_empty() {
            (0..PLACEHOLDER_ROWS)
                .map(|_| {
                    RenderNode::div()
                        .class("border-b pb-4")
                        .style("border-color", theme.colors.border.clone())
                        .child(self.placeholder_bar("mb-2 h-4 w-1/2"))
                        .child(self.placeholder_bar("h-3 w-3/4"))
                })
                .collect()
        } else {
            items
                .iter()
                .map(|item| {
                    let (title, description) = title_and_description(item);
                    RenderNode::div()
                        .class("border-b pb-4 last:border-b-0")
                        .style("border-color", theme.colors.border.clone())
                        .child_opt(title.map(|t| {
                            RenderNode::new("h3")
                                .class("mb-1 font-medium")
                                .style("font-size", self.body_plus(2.0))
                                .style("color", theme.colors.foreground.clone())
                                .text(t)
                        }))
                        .child_opt(description.map(|d| self.muted_text("p", "", d)))
                })
                .collect()
        };

        RenderNode::new("section").class("px-6 py-8").child(
            RenderNode::div()
                .class("mx-auto max-w-4xl")
                .child_opt(self.section_title(section))
                .child(RenderNode::div().class("space-y-4").children(rows)),
        )
    }

    fn form_section(&mut self, section: &Section) -> RenderNode {
        let submit = section
            .content_str("submit_label")
            .unwrap_or_else(|| "Submit".to_string());
        let fields: Vec<RenderNode> = section.fields.iter().map(|f| self.form_field(f)).collect();

        RenderNode::new("section").class("px-6 py-8").child(
            RenderNode::div()
                .class("mx-auto max-w-md")
                .child_opt(self.section_title(section))
                .child_opt(
                    section
                        .description
                        .clone()
                        .map(|d| self.muted_text("p", "mb-8", d)),
                )
                .child(
                    RenderNode::new("form")
                        .class("space-y-4")
                        .children(fields)
                        .child(
                            self.primary_button("w-full px-6 py-3", submit)
                                .attr("type", "submit"),
                        ),
                ),
        )
    }

    fn form_field(&self, field: &FormField) -> RenderNode {
        let theme = self.theme();
        let control_class = "w-full border px-3 py-2 transition-colors focus:outline-none focus:ring-2";
        let control = match field.field_type.as_str() {
            "textarea" => RenderNode::new("textarea").attr("rows", "4"),
            "select" => RenderNode::new("select")
                .child(RenderNode::new("option").attr("value", "").text("Select...")),
            other => {
                let input_type = if other.is_empty() { "text" } else { other };
                RenderNode::new("input").attr("type", input_type)
            }
        };
        let control = control
            .class(control_class)
            .attr("id", field.name.clone())
            .attr("name", field.name.clone())
            .style("border-color", theme.colors.border.clone())
            .style("border-radius", self.radius())
            .style("font-size", self.font_size(TypeLevel::Body));
        let control = if field.field_type == "select" {
            control
        } else {
            control.attr_opt("placeholder", field.placeholder.clone())
        };
        let control = if field.required {
            control.attr("required", "")
        } else {
            control
        };

        let required = field.required.then(|| {
            RenderNode::new("span")
                .class("ml-1 text-red-500")
                .text("*")
        });
        RenderNode::div()
            .attr("data-field", field.name.clone())
            .child(
                RenderNode::new("label")
                    .class("mb-1 block text-sm font-medium")
                    .attr("for", field.name.clone())
                    .style("color", theme.colors.foreground.clone())
                    .text(field.label.clone())
                    .child_opt(required),
            )
            .child(control)
            .child_opt(field.helper_text.clone().map(|help| {
                RenderNode::new("p")
                    .class("mt-1 text-sm")
                    .style("color", theme.colors.muted.clone())
                    .text(help)
            }))
    }

    fn table_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let body_size = self.font_size(TypeLevel::Body);
        let rows = section.content_list("rows");
        let empty = serde_json::Map::new();
        let row_maps: Vec<&serde_json::Map<String, Value>> = if rows.is_empty() {
            vec![&empty; PLACEHOLDER_ROWS]
        } else {
            rows.iter()
                .map(|row| row.as_object().unwrap_or(&empty))
                .collect()
        };

        let header = RenderNode::new("tr")
            .class("border-b")
            .style("border-color", theme.colors.border.clone())
            .children(section.columns.iter().map(|column| {
                RenderNode::new("th")
                    .class("px-4 py-3 text-left font-medium")
                    .style("font-size", body_size.clone())
                    .style("color", theme.colors.foreground.clone())
                    .style_opt("width", column.width.clone())
                    .text(column.label.clone())
            }));
        let body_rows: Vec<RenderNode> = row_maps
            .into_iter()
            .map(|row| {
                RenderNode::new("tr")
                    .class("border-b transition-colors hover:bg-opacity-50")
                    .style("border-color", theme.colors.border.clone())
                    .children(
                        section
                            .columns
                            .iter()
                            .map(|column| self.table_cell(column, row, &body_size)),
                    )
            })
            .collect();

        RenderNode::new("section").class("px-6 py-8").child(
            RenderNode::div()
                .class("mx-auto max-w-6xl")
                .child_opt(self.section_title(section))
                .child(
                    RenderNode::div().class("overflow-x-auto").child(
                        RenderNode::new("table")
                            .class("w-full border-collapse")
                            .child(RenderNode::new("thead").child(header))
                            .child(RenderNode::new("tbody").children(body_rows)),
                    ),
                ),
        )
    }

    fn table_cell(
        &self,
        column: &TableColumn,
        row: &serde_json::Map<String, Value>,
        font_size: &str,
    ) -> RenderNode {
        let cell = RenderNode::new("td")
            .class("px-4 py-3")
            .style("font-size", font_size)
            .style("color", self.theme().colors.foreground.clone());
        match row
            .get(&column.key)
            .and_then(scalar_to_string)
            .filter(|value| !value.is_empty())
        {
            Some(value) => cell.text(value),
            None => cell.child(self.placeholder_bar("h-3 w-20")),
        }
    }

    fn footer_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let small = self.font_size(TypeLevel::Small);
        let copyright = section
            .content_str("copyright")
            .unwrap_or_else(|| "© All rights reserved".to_string());
        let links: Vec<RenderNode> = section
            .content_list("links")
            .iter()
            .filter_map(scalar_to_string)
            .map(|link| {
                RenderNode::new("a")
                    .class("transition-opacity hover:opacity-70")
                    .attr("href", "#")
                    .style("color", theme.colors.foreground.clone())
                    .style("font-size", small.clone())
                    .text(link)
            })
            .collect();
        let links = (!links.is_empty())
            .then(|| RenderNode::div().class("mb-6 flex flex-wrap gap-6").children(links));

        RenderNode::new("footer")
            .class("mt-auto border-t px-6 py-8")
            .style("background-color", theme.colors.muted.clone())
            .style("border-color", theme.colors.border.clone())
            .child(
                RenderNode::div()
                    .class("mx-auto max-w-6xl")
                    .child_opt(section.title.clone().map(|t| {
                        RenderNode::new("h3")
                            .class("mb-4 font-semibold")
                            .style("font-size", self.font_size(TypeLevel::H3))
                            .style("color", theme.colors.foreground.clone())
                            .text(t)
                    }))
                    .child_opt(links)
                    .child(
                        RenderNode::div()
                            .class("text-sm")
                            .style("color", theme.colors.foreground.clone())
                            .style("font-size", small.clone())
                            .text(copyright),
                    ),
            )
    }

    fn modal_section(&mut self, section: &Section) -> RenderNode {
        let theme = self.theme();
        let actions = section.content_str("action").map(|action| {
            RenderNode::div()
                .class("flex justify-end gap-3")
                .child(self.outline_button("px-4 py-2", "Cancel".to_string()))
                .child(self.primary_button("px-4 py-2", action))
        });

        RenderNode::div()
            .class("rounded-lg border p-6 shadow-lg")
            .attr("role", "dialog")
            .style("background-color", theme.colors.background.clone())
            .style("border-color", theme.colors.border.clone())
            .style("border-radius", self.radius())
            .child_opt(section.title.clone().map(|t| {
                RenderNode::new("h3")
                    .class("mb-4 font-bold")
                    .style("font-size", self.font_size(TypeLevel::H3))
                    .style("color", theme.colors.foreground.clone())
                    .text(t)
            }))
            .child_opt(
                section
                    .description
                    .clone()
                    .map(|d| self.muted_text("p", "mb-4", d)),
            )
            .child_opt(actions)
    }

    /// `h2` section title, when the section has one.
    fn section_title(&self, section: &Section) -> Option<RenderNode> {
        section.title.clone().map(|title| {
            RenderNode::new("h2")
                .class("mb-6 font-bold")
                .style("font-size", self.font_size(TypeLevel::H2))
                .style("color", self.theme().colors.foreground.clone())
                .text(title)
        })
    }

    fn muted_text(&self, tag: &'static str, class: &str, text: String) -> RenderNode {
        RenderNode::new(tag)
            .class(class)
            .style("font-size", self.font_size(TypeLevel::Body))
            .style("color", self.theme().colors.muted.clone())
            .text(text)
    }

    fn placeholder_bar(&self, class: &str) -> RenderNode {
        RenderNode::div()
            .class(class)
            .style("background-color", self.theme().colors.muted.clone())
    }

    fn tile(&self) -> RenderNode {
        let theme = self.theme();
        RenderNode::div()
            .class("border p-6")
            .style("border-color", theme.colors.border.clone())
            .style("border-radius", self.radius())
            .style("background-color", theme.colors.background.clone())
    }

    fn primary_button(&self, class: &str, label: String) -> RenderNode {
        RenderNode::new("button")
            .class(&classes::merge([
                class,
                "font-medium text-white transition-opacity hover:opacity-90",
            ]))
            .attr("type", "button")
            .style("background-color", self.theme().colors.primary.clone())
            .style("border-radius", self.radius())
            .style("font-size", self.font_size(TypeLevel::Body))
            .text(label)
    }

    fn outline_button(&self, class: &str, label: String) -> RenderNode {
        let theme = self.theme();
        RenderNode::new("button")
            .class(&classes::merge([
                class,
                "font-medium transition-opacity hover:opacity-80",
            ]))
            .attr("type", "button")
            .style("color", theme.colors.foreground.clone())
            .style("border", format!("1px solid {}", theme.colors.border))
            .style("border-radius", self.radius())
            .style("font-size", self.font_size(TypeLevel::Body))
            .text(label)
    }
}

/// Title and description of a grid or list item. Plain strings are titles.
fn title_and_description(item: &Value) -> (Option<String>, Option<String>) {
    match item {
        Value::Object(map) => {
            let field = |key: &str| {
                map.get(key)
                    .and_then(scalar_to_string)
                    .filter(|s| !s.is_empty())
            };
            (field("title"), field("description"))
        }
        other => (scalar_to_string(other).filter(|s| !s.is_empty()), None),
    }
}

/// Component name for a section kind.
fn component_name(kind: &SectionKind) -> &'static str {
    match kind {
        SectionKind::Nav => "nav",
        SectionKind::Hero => "hero",
        SectionKind::Grid => "grid",
        SectionKind::Card => "card",
        SectionKind::List => "list",
        SectionKind::Form => "form",
        SectionKind::Table => "table",
        SectionKind::Footer => "footer",
        SectionKind::Modal => "modal",
        SectionKind::Unknown(_) => UNKNOWN_SECTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_core::Theme;
    use serde_json::json;

    fn render(platform: Platform, value: Value) -> (RenderNode, Vec<String>) {
        let section: Section = serde_json::from_value(value).expect("section");
        let theme = Theme::default();
        let mut ctx = RenderContext::new(&theme, platform);
        let node = ctx.render_section(&section);
        let output = ctx.finish(node);
        (output.node, output.warnings)
    }

    #[test]
    fn test_unknown_kind_is_visible() {
        let (node, warnings) = render(Platform::Web, json!({"id": "x", "kind": "carousel"}));
        assert_eq!(node.component, Some(UNKNOWN_SECTION));
        assert!(node.has_class("bg-red-50"));
        assert_eq!(node.text.as_deref(), Some("Unknown section kind: carousel"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_nav_differs_by_platform() {
        let value = json!({
            "id": "nav",
            "kind": "nav",
            "content": {"brand": "Shop", "items": ["Home", {"label": "Basket", "icon": "shopping-cart"}]}
        });
        let (web, _) = render(Platform::Web, value.clone());
        assert_eq!(web.tag, "header");
        assert!(web.has_class("sticky"));
        assert!(web.text_content().contains("Shop"));

        let (mobile, warnings) = render(Platform::Mobile, value);
        assert_eq!(mobile.tag, "nav");
        assert!(mobile.has_class("fixed"));
        assert!(mobile.has_class("bottom-0"));
        assert!(mobile.descendants().any(|n| n.attrs.get("data-icon").map(String::as_str) == Some("home")));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_mobile_nav_warns_for_unknown_icon() {
        let (_, warnings) = render(
            Platform::Mobile,
            json!({"id": "nav", "kind": "nav", "content": {"items": ["Zzyzx"]}}),
        );
        assert_eq!(warnings, vec!["Unknown icon 'Zzyzx', using 'circle'".to_string()]);
    }

    #[test]
    fn test_hero_defaults() {
        let (node, _) = render(Platform::Web, json!({"id": "h", "kind": "hero"}));
        let text = node.text_content();
        assert!(text.contains("Welcome"));
        assert!(text.contains("Get Started"));
    }

    #[test]
    fn test_hero_content_fallbacks() {
        let (node, _) = render(
            Platform::Web,
            json!({
                "id": "h",
                "kind": "hero",
                "content": {"headline": "Ship faster", "primaryCta": "Try it", "cta_secondary": "Docs"}
            }),
        );
        let text = node.text_content();
        assert!(text.contains("Ship faster"));
        assert!(text.contains("Try it"));
        assert!(text.contains("Docs"));
    }

    #[test]
    fn test_grid_uses_structured_columns() {
        let (node, _) = render(
            Platform::Web,
            json!({
                "id": "g",
                "kind": "grid",
                "grid": {"cols": 4, "gap": 16, "sm_cols": 1, "md_cols": 2, "lg_cols": 4},
                "content": {"items": [{"title": "A", "description": "first"}, "B"]}
            }),
        );
        let grid = node
            .descendants()
            .find(|n| n.attrs.contains_key("data-columns"))
            .expect("grid");
        assert!(grid.has_class("lg:grid-cols-4"));
        assert!(grid.has_class("md:grid-cols-2"));
        assert_eq!(
            grid.style.get("grid-template-columns").map(String::as_str),
            Some("repeat(4, minmax(0, 1fr))")
        );
        assert_eq!(grid.style.get("gap").map(String::as_str), Some("16px"));
        assert_eq!(grid.children.len(), 2);
    }

    #[test]
    fn test_empty_grid_shows_placeholders() {
        let (node, _) = render(Platform::Web, json!({"id": "g", "kind": "grid"}));
        let grid = node
            .descendants()
            .find(|n| n.attrs.contains_key("data-columns"))
            .expect("grid");
        assert_eq!(grid.children.len(), 3);
    }

    #[test]
    fn test_oversized_grid_placeholders_are_capped() {
        let (node, _) = render(
            Platform::Web,
            json!({"id": "g", "kind": "grid", "grid": {"lg_cols": 200_000}}),
        );
        let grid = node
            .descendants()
            .find(|n| n.attrs.contains_key("data-columns"))
            .expect("grid");
        assert_eq!(grid.children.len(), 12);
        assert_eq!(grid.attrs.get("data-columns").map(String::as_str), Some("12"));
        assert!(node.node_count() < 100);
    }

    #[test]
    fn test_form_fields() {
        let (node, _) = render(
            Platform::Web,
            json!({
                "id": "f",
                "kind": "form",
                "fields": [
                    {"name": "email", "label": "Email", "type": "email", "required": true},
                    {"name": "bio", "label": "Bio", "type": "textarea", "helper_text": "Short"},
                    {"name": "plan", "label": "Plan", "type": "select"}
                ]
            }),
        );
        let email = node.descendants().find(|n| n.tag == "input").expect("input");
        assert_eq!(email.attrs.get("type").map(String::as_str), Some("email"));
        assert!(email.attrs.contains_key("required"));
        assert!(node.descendants().any(|n| n.text.as_deref() == Some("*")));
        let bio = node.descendants().find(|n| n.tag == "textarea").expect("textarea");
        assert_eq!(bio.attrs.get("rows").map(String::as_str), Some("4"));
        assert!(node.text_content().contains("Short"));
        assert!(node.text_content().contains("Select..."));
        let submit = node
            .descendants()
            .find(|n| n.attrs.get("type").map(String::as_str) == Some("submit"))
            .expect("submit");
        assert_eq!(submit.text.as_deref(), Some("Submit"));
    }

    #[test]
    fn test_table_cells_and_placeholders() {
        let (node, _) = render(
            Platform::Web,
            json!({
                "id": "t",
                "kind": "table",
                "columns": [
                    {"key": "name", "label": "Name", "width": 120},
                    {"key": "email", "label": "Email"}
                ],
                "content": {"rows": [{"name": "Ada"}]}
            }),
        );
        let th = node.descendants().find(|n| n.tag == "th").expect("th");
        assert_eq!(th.style.get("width").map(String::as_str), Some("120px"));
        let cells: Vec<&RenderNode> = node.descendants().filter(|n| n.tag == "td").collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text.as_deref(), Some("Ada"));
        assert!(cells[1].children[0].has_class("w-20"));
    }

    #[test]
    fn test_table_without_rows_has_placeholder_rows() {
        let (node, _) = render(
            Platform::Web,
            json!({"id": "t", "kind": "table", "columns": [{"key": "a", "label": "A"}]}),
        );
        let rows = node.descendants().filter(|n| n.tag == "tr").count();
        assert_eq!(rows, 1 + PLACEHOLDER_ROWS);
    }

    #[test]
    fn test_footer_copyright_default() {
        let (node, _) = render(
            Platform::Web,
            json!({"id": "f", "kind": "footer", "content": {"links": ["About", "Privacy"]}}),
        );
        assert_eq!(node.tag, "footer");
        let text = node.text_content();
        assert!(text.contains("About"));
        assert!(text.contains("© All rights reserved"));
    }

    #[test]
    fn test_modal_actions_only_with_action() {
        let (plain, _) = render(Platform::Web, json!({"id": "m", "kind": "modal", "title": "Sure?"}));
        assert!(plain.descendants().all(|n| n.tag != "button"));

        let (with_action, _) = render(
            Platform::Web,
            json!({"id": "m", "kind": "modal", "title": "Sure?", "content": {"action": "Delete"}}),
        );
        let labels: Vec<&str> = with_action
            .descendants()
            .filter(|n| n.tag == "button")
            .filter_map(|n| n.text.as_deref())
            .collect();
        assert_eq!(labels, vec!["Cancel", "Delete"]);
    }

    #[test]
    fn test_every_known_kind_is_tagged() {
        for kind in SectionKind::KNOWN {
            let (node, warnings) = render(
                Platform::Web,
                json!({"id": "s", "kind": kind.as_str()}),
            );
            assert_eq!(node.component, Some(kind.as_str()));
            assert_eq!(node.attrs.get("data-section-id").map(String::as_str), Some("s"));
            assert!(warnings.is_empty(), "{kind}: {warnings:?}");
        }
    }
}
