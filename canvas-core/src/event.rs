//! Input events for workspace navigation.
//!
//! Coordinates are offsets relative to the workspace container, in screen
//! pixels.

use serde::{Deserialize, Serialize};

/// Primary (left) mouse button.
pub const PRIMARY_BUTTON: u8 = 0;

/// A pointer press or move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// X offset.
    pub x: f64,
    /// Y offset.
    pub y: f64,
    /// Mouse button (0 = left, 1 = middle, 2 = right).
    #[serde(default)]
    pub button: u8,
}

impl PointerEvent {
    /// Create a primary-button pointer event.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            button: PRIMARY_BUTTON,
        }
    }

    /// Set the button.
    #[must_use]
    pub const fn with_button(mut self, button: u8) -> Self {
        self.button = button;
        self
    }

    /// Whether the primary button triggered this event.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.button == PRIMARY_BUTTON
    }
}

/// A mouse wheel or trackpad scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    /// Cursor X offset.
    pub x: f64,
    /// Cursor Y offset.
    pub y: f64,
    /// Vertical scroll delta; negative scrolls up (zooms in).
    pub delta_y: f64,
}

impl WheelEvent {
    /// Create a wheel event.
    #[must_use]
    pub const fn new(x: f64, y: f64, delta_y: f64) -> Self {
        Self { x, y, delta_y }
    }
}

/// All input events the workspace can receive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum InputEvent {
    /// Button pressed.
    PointerDown(PointerEvent),
    /// Pointer moved.
    PointerMove(PointerEvent),
    /// Button released.
    PointerUp,
    /// Pointer left the workspace.
    PointerLeave,
    /// Wheel scrolled.
    Wheel(WheelEvent),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_button_defaults_to_primary() {
        let event: PointerEvent =
            serde_json::from_value(json!({ "x": 1.0, "y": 2.0 })).expect("should parse");
        assert!(event.is_primary());
        assert!(!PointerEvent::new(0.0, 0.0).with_button(2).is_primary());
    }

    #[test]
    fn test_event_wire_shape() {
        let event = InputEvent::Wheel(WheelEvent::new(10.0, 20.0, -120.0));
        let value = serde_json::to_value(event).expect("serialize");
        assert_eq!(value["type"], "wheel");
        assert_eq!(value["data"]["delta_y"], -120.0);

        let up: InputEvent =
            serde_json::from_value(json!({ "type": "pointer_up" })).expect("should parse");
        assert_eq!(up, InputEvent::PointerUp);
    }
}
