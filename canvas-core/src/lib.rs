//! # Wireframe Canvas Core
//!
//! Input model and interaction state for rendering AI-generated UI
//! documents onto a pannable, zoomable canvas of page boards.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 canvas-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Document Model  │  Theme Normalizer        │
//! │  - Pages         │  - Lenient coercion      │
//! │  - Sections      │  - Per-field defaults    │
//! │  - Elements      │                          │
//! ├─────────────────────────────────────────────┤
//! │  Board Layout    │  Workspace               │
//! │  - Viewports     │  - Pan state machine     │
//! │  - Two-col grid  │  - Anchored zoom         │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod lenient;
pub mod section;
pub mod state;
pub mod theme;
pub mod validate;
pub mod workspace;

pub use board::{
    layout_document, layout_pages, BoardLayoutConfig, PageBody, Viewport, WorkspacePage,
};
pub use document::{Document, DocumentMeta, Page, PageMeta, Platform};
pub use element::{
    ContentKind, Element, ElementAttributes, ElementStyles, ElementType, LayoutKind, Media,
};
pub use error::{CanvasError, CanvasResult};
pub use event::{InputEvent, PointerEvent, WheelEvent};
pub use section::{
    FormField, GridConfig, Section, SectionKind, SectionStates, TableColumn, MAX_GRID_COLUMNS,
};
pub use state::{CanvasState, LoadedDocument};
pub use theme::{Spacing, Theme, ThemeColors, TypeLevel, Typography};
pub use validate::{validate_document, ValidationIssue, ValidationReport};
pub use workspace::{GridBackground, PanState, Point, Transform, Workspace, WorkspaceConfig};

/// Canvas core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
