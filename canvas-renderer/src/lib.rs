//! # Wireframe Canvas Renderer
//!
//! Turns documents, sections and element trees into a [`RenderNode`] tree
//! that a host shell can mount or serialize to HTML.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ CanvasState   │──▶│ Workspace     │──▶│ Board         │
//! │ (canvas-core) │   │ grid + camera │   │ per page      │
//! └───────────────┘   └───────────────┘   └───────┬───────┘
//!                                                 │
//!                          ┌──────────────────────┴───────┐
//!                          ▼                              ▼
//!                  ┌───────────────┐              ┌───────────────┐
//!                  │ Section       │              │ Element       │
//!                  │ closed kinds  │              │ open tags     │
//!                  └───────────────┘              └───────┬───────┘
//!                                                         ▼
//!                                                 ┌───────────────┐
//!                                                 │ Layout        │
//!                                                 └───────────────┘
//! ```
//!
//! Rendering never fails. Unknown element tags become generic containers;
//! unknown section kinds become a visible error box. Both paths, and icon
//! fallbacks, are reported through [`RenderOutput::warnings`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod classes;
pub mod context;
pub mod element;
pub mod export;
pub mod icons;
pub mod layout;
pub mod node;
pub mod section;
pub mod url;
pub mod workspace;

pub use context::{RenderContext, RenderOutput};
pub use export::{to_html, to_html_page};
pub use node::RenderNode;
pub use workspace::{render_workspace, render_workspace_view};

use canvas_core::{Element, Platform, Section, Theme, WorkspacePage};

/// Render one element tree.
#[must_use]
pub fn render_element(element: &Element, theme: &Theme, platform: Platform) -> RenderOutput {
    let mut ctx = RenderContext::new(theme, platform);
    let node = ctx.render_element(element);
    ctx.finish(node)
}

/// Render one section.
#[must_use]
pub fn render_section(section: &Section, theme: &Theme, platform: Platform) -> RenderOutput {
    let mut ctx = RenderContext::new(theme, platform);
    let node = ctx.render_section(section);
    ctx.finish(node)
}

/// Render one board.
#[must_use]
pub fn render_board(board: &WorkspacePage, theme: &Theme) -> RenderOutput {
    let mut ctx = RenderContext::new(theme, board.platform);
    let node = ctx.render_board(board);
    ctx.finish(node)
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
