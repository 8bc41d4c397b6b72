//! Pan/zoom workspace: the viewport transform over a large canvas of boards.
//!
//! The transform maps canvas space to screen space:
//! `screen = canvas * scale + (x, y)`. Dragging with the primary button
//! pans 1:1 with the pointer; the wheel zooms around the cursor so the
//! canvas point under it stays put.

use serde::{Deserialize, Serialize};

use crate::document::Platform;
use crate::event::{InputEvent, PointerEvent, WheelEvent};

/// A point in screen or canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan offset and scale of the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Horizontal pan in screen pixels.
    pub x: f64,
    /// Vertical pan in screen pixels.
    pub y: f64,
    /// Zoom factor.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 120.0,
            y: 120.0,
            scale: 0.7,
        }
    }
}

impl Transform {
    /// Create a transform.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Starting transform when a document for `platform` is first shown.
    #[must_use]
    pub fn initial_for(platform: Platform) -> Self {
        let scale = match platform {
            Platform::Mobile => 1.0,
            Platform::Web => 0.5,
        };
        Self::new(160.0, 160.0, scale)
    }

    /// Map a screen offset into canvas space.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.x) / self.scale,
            (screen.y - self.y) / self.scale,
        )
    }

    /// Map a canvas point onto the screen.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.scale + self.x,
            canvas.y * self.scale + self.y,
        )
    }

    /// CSS `transform` value for the board container.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }
}

/// Workspace tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scale change per unit of wheel delta.
    pub zoom_sensitivity: f64,
    /// Background grid period at scale 1.
    pub grid_size: f64,
    /// Width of the board container.
    pub canvas_width: f64,
    /// Height of the board container.
    pub canvas_height: f64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 2.0,
            zoom_sensitivity: 0.002,
            grid_size: 40.0,
            canvas_width: 5000.0,
            canvas_height: 5000.0,
        }
    }
}

impl WorkspaceConfig {
    /// Scale bounds as an ordered, finite, positive pair.
    ///
    /// Swapped bounds are reordered; unusable ones fall back to the defaults.
    #[must_use]
    pub fn scale_bounds(&self) -> (f64, f64) {
        let defaults = Self::default();
        let usable = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        let a = usable(self.min_scale, defaults.min_scale);
        let b = usable(self.max_scale, defaults.max_scale);
        (a.min(b), a.max(b))
    }

    /// The same config with its scale bounds repaired.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn normalized(self) -> Self {
        let (min_scale, max_scale) = self.scale_bounds();
        if min_scale != self.min_scale || max_scale != self.max_scale {
            tracing::debug!(
                min = self.min_scale,
                max = self.max_scale,
                "Repaired workspace scale bounds"
            );
        }
        Self {
            min_scale,
            max_scale,
            ..self
        }
    }
}

/// Drag state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanState {
    /// Not dragging.
    #[default]
    Idle,
    /// Dragging; `last` is the previous pointer position.
    Panning {
        /// Last observed pointer position.
        last: Point,
    },
}

/// Background grid geometry, derived entirely from the transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridBackground {
    /// Grid cell size in screen pixels.
    pub cell_size: f64,
    /// Horizontal offset.
    pub offset_x: f64,
    /// Vertical offset.
    pub offset_y: f64,
}

/// Viewport state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    config: WorkspaceConfig,
    transform: Transform,
    pan: PanState,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(WorkspaceConfig::default())
    }
}

impl Workspace {
    /// Create a workspace at the default transform.
    #[must_use]
    pub fn new(config: WorkspaceConfig) -> Self {
        Self::with_transform(config, Transform::default())
    }

    /// Create a workspace at a given transform. The scale is clamped.
    #[must_use]
    pub fn with_transform(config: WorkspaceConfig, transform: Transform) -> Self {
        let mut workspace = Self {
            config: config.normalized(),
            transform,
            pan: PanState::Idle,
        };
        workspace.set_transform(transform);
        workspace
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Replace the transform, clamping its scale.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = Transform {
            scale: self.clamp_scale(transform.scale),
            ..transform
        };
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Current drag state.
    #[must_use]
    pub fn pan_state(&self) -> PanState {
        self.pan
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.pan, PanState::Panning { .. })
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.transform.scale;
        }
        let (min, max) = self.config.scale_bounds();
        scale.clamp(min, max)
    }

    /// Start a drag. Only the primary button pans.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        if !event.is_primary() {
            tracing::trace!(button = event.button, "Ignoring non-primary button");
            return;
        }
        self.pan = PanState::Panning {
            last: Point::new(event.x, event.y),
        };
    }

    /// Continue a drag, moving the pan offset by the pointer delta.
    ///
    /// Returns `true` if the transform changed.
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        let PanState::Panning { last } = self.pan else {
            return false;
        };
        self.transform.x += event.x - last.x;
        self.transform.y += event.y - last.y;
        self.pan = PanState::Panning {
            last: Point::new(event.x, event.y),
        };
        true
    }

    /// End a drag.
    pub fn pointer_up(&mut self) {
        self.pan = PanState::Idle;
    }

    /// Pointer left the workspace; ends any drag.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Zoom around the cursor.
    ///
    /// Returns `true` if the scale changed. When the clamped scale equals
    /// the current one the transform is left untouched.
    #[allow(clippy::float_cmp)]
    pub fn wheel(&mut self, event: WheelEvent) -> bool {
        let prev = self.transform;
        let desired = prev.scale - event.delta_y * self.config.zoom_sensitivity;
        let scale = self.clamp_scale(desired);
        if scale == prev.scale {
            return false;
        }

        let cursor = Point::new(event.x, event.y);
        let anchor = prev.screen_to_canvas(cursor);
        self.transform = Transform {
            x: cursor.x - anchor.x * scale,
            y: cursor.y - anchor.y * scale,
            scale,
        };
        tracing::trace!(from = prev.scale, to = scale, "Zoomed");
        true
    }

    /// Dispatch an input event. Returns `true` if the transform changed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown(pointer) => {
                self.pointer_down(pointer);
                false
            }
            InputEvent::PointerMove(pointer) => self.pointer_move(pointer),
            InputEvent::PointerUp => {
                self.pointer_up();
                false
            }
            InputEvent::PointerLeave => {
                self.pointer_leave();
                false
            }
            InputEvent::Wheel(wheel) => self.wheel(wheel),
        }
    }

    /// Map a screen offset into canvas space.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        self.transform.screen_to_canvas(screen)
    }

    /// Background grid for the current transform.
    #[must_use]
    pub fn grid_background(&self) -> GridBackground {
        GridBackground {
            cell_size: self.config.grid_size * self.transform.scale,
            offset_x: self.transform.x,
            offset_y: self.transform.y,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn workspace_at(scale: f64) -> Workspace {
        Workspace::with_transform(WorkspaceConfig::default(), Transform::new(0.0, 0.0, scale))
    }

    #[test]
    fn test_defaults() {
        let workspace = Workspace::default();
        assert_eq!(workspace.transform(), Transform::new(120.0, 120.0, 0.7));
        assert_eq!(workspace.pan_state(), PanState::Idle);
        assert_eq!(Transform::initial_for(Platform::Mobile).scale, 1.0);
        assert_eq!(Transform::initial_for(Platform::Web).scale, 0.5);
    }

    #[test]
    fn test_wheel_clamps_to_max() {
        let mut workspace = workspace_at(1.0);
        assert!(workspace.wheel(WheelEvent::new(0.0, 0.0, -500.0)));
        assert_eq!(workspace.transform().scale, 2.0);
    }

    #[test]
    fn test_wheel_at_bound_is_noop() {
        let mut workspace = workspace_at(2.0);
        let before = workspace.transform();
        assert!(!workspace.wheel(WheelEvent::new(300.0, 200.0, -100.0)));
        assert_eq!(workspace.transform(), before);
    }

    #[test]
    fn test_pan_only_with_primary_button() {
        let mut workspace = workspace_at(1.0);
        workspace.pointer_down(PointerEvent::new(10.0, 10.0).with_button(2));
        assert!(!workspace.pointer_move(PointerEvent::new(50.0, 50.0)));
        assert_eq!(workspace.transform().x, 0.0);

        workspace.pointer_down(PointerEvent::new(10.0, 10.0));
        assert!(workspace.is_panning());
        assert!(workspace.pointer_move(PointerEvent::new(25.0, 5.0)));
        assert_eq!(workspace.transform(), Transform::new(15.0, -5.0, 1.0));

        workspace.pointer_leave();
        assert!(!workspace.is_panning());
        assert!(!workspace.pointer_move(PointerEvent::new(100.0, 100.0)));
    }

    #[test]
    fn test_handle_event_dispatch() {
        let mut workspace = workspace_at(1.0);
        assert!(!workspace.handle_event(&InputEvent::PointerDown(PointerEvent::new(0.0, 0.0))));
        assert!(workspace.handle_event(&InputEvent::PointerMove(PointerEvent::new(4.0, 6.0))));
        assert!(!workspace.handle_event(&InputEvent::PointerUp));
        assert_eq!(workspace.transform(), Transform::new(4.0, 6.0, 1.0));
    }

    #[test]
    fn test_grid_background_follows_transform() {
        let workspace =
            Workspace::with_transform(WorkspaceConfig::default(), Transform::new(12.0, -8.0, 0.5));
        let grid = workspace.grid_background();
        assert_eq!(grid.cell_size, 20.0);
        assert_eq!(grid.offset_x, 12.0);
        assert_eq!(grid.offset_y, -8.0);
    }

    #[test]
    fn test_css_transform() {
        assert_eq!(
            Transform::new(160.0, 160.0, 0.5).css(),
            "translate(160px, 160px) scale(0.5)"
        );
    }

    #[test]
    fn test_initial_scale_is_clamped() {
        let workspace =
            Workspace::with_transform(WorkspaceConfig::default(), Transform::new(0.0, 0.0, 9.0));
        assert_eq!(workspace.transform().scale, 2.0);
    }

    #[test]
    fn test_swapped_scale_bounds_do_not_panic() {
        let config = WorkspaceConfig {
            min_scale: 3.0,
            max_scale: 0.25,
            ..WorkspaceConfig::default()
        };
        assert_eq!(config.scale_bounds(), (0.25, 3.0));

        let mut workspace = Workspace::new(config);
        assert_eq!(workspace.config().min_scale, 0.25);
        assert_eq!(workspace.config().max_scale, 3.0);
        assert!(workspace.wheel(WheelEvent::new(0.0, 0.0, -10_000.0)));
        assert_eq!(workspace.transform().scale, 3.0);
        workspace.set_transform(Transform::new(0.0, 0.0, 0.01));
        assert_eq!(workspace.transform().scale, 0.25);
    }

    #[test]
    fn test_unusable_scale_bounds_fall_back() {
        let config = WorkspaceConfig {
            min_scale: f64::NAN,
            max_scale: -1.0,
            ..WorkspaceConfig::default()
        };
        assert_eq!(config.scale_bounds(), (0.5, 2.0));

        let json = r#"{"config":{"min_scale":4.0,"max_scale":1.0,"zoom_sensitivity":0.002,"grid_size":40.0,"canvas_width":5000.0,"canvas_height":5000.0},"transform":{"x":0.0,"y":0.0,"scale":1.0},"pan":{"state":"idle"}}"#;
        let mut restored: Workspace = serde_json::from_str(json).expect("workspace");
        restored.set_transform(Transform::new(0.0, 0.0, 9.0));
        assert_eq!(restored.transform().scale, 4.0);
    }

    proptest! {
        #[test]
        fn prop_scale_stays_in_bounds(
            start in 0.5f64..=2.0,
            deltas in prop::collection::vec(-2000.0f64..2000.0, 0..40),
        ) {
            let mut workspace = workspace_at(start);
            for delta in deltas {
                workspace.wheel(WheelEvent::new(100.0, 100.0, delta));
                let scale = workspace.transform().scale;
                prop_assert!((0.5..=2.0).contains(&scale));
            }
        }

        #[test]
        fn prop_zoom_keeps_cursor_anchor(
            x in -2000.0f64..2000.0,
            y in -2000.0f64..2000.0,
            scale in 0.5f64..=2.0,
            cx in 0.0f64..1600.0,
            cy in 0.0f64..1200.0,
            delta in -1000.0f64..1000.0,
        ) {
            let mut workspace =
                Workspace::with_transform(WorkspaceConfig::default(), Transform::new(x, y, scale));
            let cursor = Point::new(cx, cy);
            let before = workspace.screen_to_canvas(cursor);
            workspace.wheel(WheelEvent::new(cx, cy, delta));
            let after = workspace.screen_to_canvas(cursor);

            prop_assert!((before.x - after.x).abs() < 1e-6);
            prop_assert!((before.y - after.y).abs() < 1e-6);
        }

        #[test]
        fn prop_pan_moves_by_pointer_delta(
            x in -2000.0f64..2000.0,
            y in -2000.0f64..2000.0,
            scale in 0.5f64..=2.0,
            px in 0.0f64..1000.0,
            py in 0.0f64..1000.0,
            dx in -500.0f64..500.0,
            dy in -500.0f64..500.0,
        ) {
            let mut workspace =
                Workspace::with_transform(WorkspaceConfig::default(), Transform::new(x, y, scale));
            workspace.pointer_down(PointerEvent::new(px, py));
            workspace.pointer_move(PointerEvent::new(px + dx, py + dy));
            let after = workspace.transform();

            prop_assert!((after.x - (x + dx)).abs() < 1e-9);
            prop_assert!((after.y - (y + dy)).abs() < 1e-9);
            prop_assert_eq!(after.scale, scale);
        }
    }
}
