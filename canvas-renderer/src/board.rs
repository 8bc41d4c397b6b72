//! Board renderer: one page drawn at its canvas rectangle.
//!
//! The frame is exactly the laid-out rectangle; content taller than the
//! board is clipped so it never reaches the next row.

use canvas_core::{PageBody, WorkspacePage};

use crate::context::{px, RenderContext};
use crate::node::RenderNode;

/// Text shown on a board whose page has neither sections nor elements.
pub const EMPTY_PAGE_TEXT: &str = "This page has no content";

impl RenderContext<'_> {
    /// Render a board: title strip above a framed page body.
    pub fn render_board(&mut self, board: &WorkspacePage) -> RenderNode {
        tracing::debug!(id = %board.id, route = %board.route, "Rendering board");
        let body: Vec<RenderNode> = match &board.body {
            PageBody::Sections(sections) => {
                sections.iter().map(|s| self.render_section(s)).collect()
            }
            PageBody::Elements(elements) => {
                elements.iter().map(|e| self.render_element(e)).collect()
            }
            PageBody::Empty => vec![RenderNode::div()
                .component("empty-page")
                .class("p-8 text-center text-sm text-gray-400")
                .text(EMPTY_PAGE_TEXT)],
        };

        let mut frame = RenderNode::div()
            .component("board")
            .class("absolute rounded-xl bg-transparent")
            .style("left", px(board.x))
            .style("top", px(board.y))
            .style("width", px(board.w))
            .style("height", px(board.h))
            .attr("data-page-id", board.id.clone())
            .attr("data-route", board.route.clone())
            .attr("data-platform", board.platform.as_str());
        for (name, value) in self.theme().css_variables() {
            frame = frame.style(name, value);
        }

        let title = RenderNode::div()
            .class("text-md font-medium text-black pb-4")
            .attr_opt(
                "title",
                (!board.description.is_empty()).then(|| board.description.clone()),
            )
            .text(board.name.clone());
        let page = RenderNode::div()
            .component("board-page")
            .class("space-y-4 text-slate-800 bg-white border border-black/5 shadow-xl shadow-black/10")
            .style("background-color", self.theme().colors.background.clone())
            .children(body);

        frame.child(
            RenderNode::div()
                .class("relative h-full w-full overflow-hidden")
                .child(title)
                .child(page),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_core::{Page, Platform, Section, SectionKind, Theme};

    fn board(body: PageBody) -> WorkspacePage {
        WorkspacePage {
            id: "page-1".to_string(),
            name: "Settings".to_string(),
            description: "Account settings".to_string(),
            route: "/settings".to_string(),
            platform: Platform::Web,
            x: 1320.0,
            y: 0.0,
            w: 1200.0,
            h: 853.0,
            body,
        }
    }

    fn render(board: &WorkspacePage) -> (RenderNode, Vec<String>) {
        let theme = Theme::default();
        let mut ctx = RenderContext::new(&theme, board.platform);
        let node = ctx.render_board(board);
        let output = ctx.finish(node);
        (output.node, output.warnings)
    }

    #[test]
    fn test_board_is_positioned() {
        let (node, _) = render(&board(PageBody::Empty));
        assert_eq!(node.style.get("left").map(String::as_str), Some("1320px"));
        assert_eq!(node.style.get("top").map(String::as_str), Some("0px"));
        assert_eq!(node.style.get("width").map(String::as_str), Some("1200px"));
        assert_eq!(node.style.get("height").map(String::as_str), Some("853px"));
        assert_eq!(node.attrs.get("data-route").map(String::as_str), Some("/settings"));
        assert!(node.style.contains_key("--color-primary"));
        let inner = &node.children[0];
        assert!(inner.has_class("overflow-hidden"));
        assert!(inner.has_class("h-full"));
        assert_eq!(inner.children[0].text.as_deref(), Some("Settings"));
    }

    #[test]
    fn test_empty_page_placeholder() {
        let (node, warnings) = render(&board(PageBody::Empty));
        assert!(node.find_component("empty-page").is_some());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_sections_render_in_order() {
        let page = Page::new("/")
            .with_section(Section::new("a", SectionKind::Hero))
            .with_section(Section::new("b", SectionKind::Footer));
        let (node, _) = render(&board(PageBody::from_page(&page)));
        let body = node.find_component("board-page").expect("page body");
        assert_eq!(body.children.len(), 2);
        assert_eq!(body.children[0].component, Some("hero"));
        assert_eq!(body.children[1].component, Some("footer"));
    }

    #[test]
    fn test_unknown_section_warning_is_collected() {
        let page = Page::new("/").with_section(Section::new(
            "x",
            SectionKind::Unknown("pricing".to_string()),
        ));
        let (_, warnings) = render(&board(PageBody::from_page(&page)));
        assert_eq!(warnings.len(), 1);
    }
}
