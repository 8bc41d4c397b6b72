//! Canvas session state: the loaded document and the viewport over it.

use crate::board::{layout_document, BoardLayoutConfig, WorkspacePage};
use crate::document::Document;
use crate::error::{CanvasError, CanvasResult};
use crate::event::InputEvent;
use crate::theme::Theme;
use crate::workspace::{Transform, Workspace, WorkspaceConfig};

/// Everything needed to render the current document.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    /// The document as loaded.
    pub document: Document,
    /// Its normalized theme.
    pub theme: Theme,
    /// Its laid-out boards.
    pub boards: Vec<WorkspacePage>,
}

impl LoadedDocument {
    /// Normalize and lay out a document.
    #[must_use]
    pub fn prepare(document: Document, layout: &BoardLayoutConfig) -> Self {
        let theme = document.theme();
        let boards = layout_document(&document, layout);
        Self {
            document,
            theme,
            boards,
        }
    }
}

/// The complete canvas state.
///
/// A new document replaces the previous one wholesale. Pointer input only
/// ever touches the workspace transform, so swaps and input can
/// interleave freely.
#[derive(Debug, Clone)]
pub struct CanvasState {
    layout: BoardLayoutConfig,
    loaded: Option<LoadedDocument>,
    workspace: Workspace,
    has_shown_document: bool,
}

impl CanvasState {
    /// Create an empty state.
    #[must_use]
    pub fn new(layout: BoardLayoutConfig, workspace: WorkspaceConfig) -> Self {
        Self {
            layout,
            loaded: None,
            workspace: Workspace::new(workspace),
            has_shown_document: false,
        }
    }

    /// Swap in a new document.
    ///
    /// The first document shown moves the viewport to its platform's
    /// starting transform; later swaps keep whatever transform the user
    /// has committed.
    pub fn load_document(&mut self, document: Document) {
        let prepared = LoadedDocument::prepare(document, &self.layout);
        if !self.has_shown_document {
            self.workspace
                .set_transform(Transform::initial_for(prepared.document.platform()));
            self.has_shown_document = true;
        }
        tracing::info!(
            pages = prepared.boards.len(),
            platform = %prepared.document.platform(),
            "Swapped in document"
        );
        self.loaded = Some(prepared);
    }

    /// Parse and swap in a document. On error the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or not a document object.
    pub fn load_json(&mut self, json: &str) -> CanvasResult<()> {
        let document = Document::from_json(json)?;
        self.load_document(document);
        Ok(())
    }

    /// Drop the current document.
    pub fn clear_document(&mut self) {
        if self.loaded.take().is_some() {
            tracing::info!("Cleared document");
        }
    }

    /// Route an input event to the workspace. Returns `true` if the
    /// transform changed.
    pub fn process_event(&mut self, event: &InputEvent) -> bool {
        self.workspace.handle_event(event)
    }

    /// The loaded document, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<&LoadedDocument> {
        self.loaded.as_ref()
    }

    /// The loaded document.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::NoDocument`] when nothing is loaded.
    pub fn document(&self) -> CanvasResult<&Document> {
        self.loaded
            .as_ref()
            .map(|loaded| &loaded.document)
            .ok_or(CanvasError::NoDocument)
    }

    /// Whether a document is loaded.
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.loaded.is_some()
    }

    /// Boards of the loaded document; empty when nothing is loaded.
    #[must_use]
    pub fn boards(&self) -> &[WorkspacePage] {
        self.loaded
            .as_ref()
            .map(|loaded| loaded.boards.as_slice())
            .unwrap_or_default()
    }

    /// The workspace.
    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Mutable workspace access.
    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.workspace.transform()
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(BoardLayoutConfig::default(), WorkspaceConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::event::{PointerEvent, WheelEvent};
    use serde_json::json;

    fn mobile_doc() -> Document {
        Document::from_value(&json!({
            "meta": { "platform": "mobile" },
            "pages": [{ "route": "/" }, { "route": "/settings" }]
        }))
        .expect("should parse")
    }

    #[test]
    fn test_empty_state() {
        let state = CanvasState::default();
        assert!(!state.has_document());
        assert!(state.boards().is_empty());
        assert!(matches!(state.document(), Err(CanvasError::NoDocument)));
        assert_eq!(state.transform(), Transform::default());
    }

    #[test]
    fn test_first_load_applies_initial_transform() {
        let mut state = CanvasState::default();
        state.load_document(mobile_doc());
        assert_eq!(state.transform(), Transform::new(160.0, 160.0, 1.0));
        assert_eq!(state.boards().len(), 2);
    }

    #[test]
    fn test_swap_keeps_committed_transform() {
        let mut state = CanvasState::default();
        state.load_document(mobile_doc());
        state.process_event(&InputEvent::PointerDown(PointerEvent::new(0.0, 0.0)));
        state.process_event(&InputEvent::PointerMove(PointerEvent::new(40.0, 10.0)));
        state.process_event(&InputEvent::PointerUp);
        state.process_event(&InputEvent::Wheel(WheelEvent::new(0.0, 0.0, 100.0)));
        let committed = state.transform();

        state
            .load_json(r#"{ "meta": { "platform": "web" }, "pages": [{ "route": "/" }] }"#)
            .expect("should load");
        assert_eq!(state.transform(), committed);
        assert_eq!(state.boards().len(), 1);
        assert!((state.boards()[0].w - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_failed_load_keeps_previous_document() {
        let mut state = CanvasState::default();
        state.load_document(mobile_doc());
        assert!(state.load_json("[]").is_err());
        assert_eq!(state.boards().len(), 2);
    }

    #[test]
    fn test_clear_document() {
        let mut state = CanvasState::default();
        state.load_document(mobile_doc());
        state.clear_document();
        assert!(!state.has_document());
        assert!(state.boards().is_empty());
    }
}
