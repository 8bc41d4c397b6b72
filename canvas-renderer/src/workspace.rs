//! Workspace renderer: grid background plus the transformed board container.
//!
//! Everything here is a pure function of the boards, the theme and the
//! current transform, so the host can re-render after every input event.

use canvas_core::{CanvasState, Platform, Theme, Workspace, WorkspacePage};

use crate::context::{px, RenderContext, RenderOutput};
use crate::node::RenderNode;

/// Shown when no document has been loaded.
pub const NO_DATA_TEXT: &str = "No data to render";

/// Shown when the loaded document has no pages.
pub const NO_PAGES_TEXT: &str = "No pages to render";

/// Grid line color.
const GRID_LINE_COLOR: &str = "#e5e7eb";

/// Render the workspace for a canvas state.
#[must_use]
pub fn render_workspace(state: &CanvasState) -> RenderOutput {
    match state.loaded() {
        Some(loaded) => render_workspace_view(&loaded.boards, &loaded.theme, state.workspace()),
        None => {
            tracing::debug!("No document loaded");
            RenderOutput {
                node: empty_state(NO_DATA_TEXT),
                warnings: Vec::new(),
            }
        }
    }
}

/// Render laid-out boards under a workspace transform.
#[must_use]
pub fn render_workspace_view(
    boards: &[WorkspacePage],
    theme: &Theme,
    workspace: &Workspace,
) -> RenderOutput {
    let platform = boards.first().map_or(Platform::Web, |b| b.platform);
    let mut ctx = RenderContext::new(theme, platform);
    if boards.is_empty() {
        return ctx.finish(empty_state(NO_PAGES_TEXT));
    }

    let rendered: Vec<RenderNode> = boards.iter().map(|b| ctx.render_board(b)).collect();
    let config = workspace.config();
    let transform = workspace.transform();
    let grid = workspace.grid_background();

    let root = RenderNode::div()
        .component("workspace")
        .class("relative h-full min-h-[640px] w-full overflow-hidden cursor-grab")
        .class(if workspace.is_panning() { "cursor-grabbing" } else { "" })
        .style("touch-action", "none")
        .style("overscroll-behavior", "contain")
        .attr("data-scale", transform.scale.to_string())
        .child(
            RenderNode::div()
                .component("grid-background")
                .class("absolute inset-0 bg-[#f3f4f6]")
                .attr("aria-hidden", "true")
                .style(
                    "background-image",
                    format!(
                        "linear-gradient(to right, {GRID_LINE_COLOR} 1px, transparent 1px), \
                         linear-gradient(to bottom, {GRID_LINE_COLOR} 1px, transparent 1px)"
                    ),
                )
                .style(
                    "background-size",
                    format!("{} {}", px(grid.cell_size), px(grid.cell_size)),
                )
                .style(
                    "background-position",
                    format!("{} {}", px(grid.offset_x), px(grid.offset_y)),
                ),
        )
        .child(
            RenderNode::div()
                .component("board-container")
                .class("absolute")
                .style("width", px(config.canvas_width))
                .style("height", px(config.canvas_height))
                .style("transform", transform.css())
                .style("transform-origin", "0 0")
                .children(rendered),
        );

    tracing::debug!(
        boards = boards.len(),
        warnings = ctx.warnings().len(),
        "Rendered workspace"
    );
    ctx.finish(root)
}

fn empty_state(message: &str) -> RenderNode {
    RenderNode::div()
        .component("empty-state")
        .class("flex h-full items-center justify-center text-gray-500")
        .text(message)
}
