//! # Wireframe Canvas WASM Application
//!
//! Browser host for the canvas: owns a [`CanvasState`], forwards pointer and
//! wheel input to it, and writes the rendered workspace into a DOM container.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web canvas-app
//! ```
//!
//! Then import in JavaScript:
//! ```javascript
//! import init, { WireframeCanvas } from './pkg/canvas_app.js';
//!
//! await init();
//! const canvas = new WireframeCanvas('workspace');
//! canvas.loadDocument(await (await fetch('/document.json')).text());
//! canvas.render();
//!
//! el.addEventListener('wheel', (e) => {
//!     e.preventDefault();
//!     if (canvas.wheel(e.offsetX, e.offsetY, e.deltaY)) canvas.render();
//! });
//! ```
//!
//! Input handlers return `true` when the transform changed, so the page only
//! re-renders when something moved.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use canvas_core::{validate_document, CanvasState, InputEvent, PointerEvent, WheelEvent};
use canvas_renderer::{render_workspace, to_html};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    tracing::info!("Wireframe Canvas WASM initialized");
}

/// A canvas mounted into one DOM container.
#[wasm_bindgen]
pub struct WireframeCanvas {
    container: web_sys::Element,
    state: CanvasState,
    render_count: u64,
}

#[wasm_bindgen]
impl WireframeCanvas {
    /// Attach to the element with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no DOM or the element does not exist.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<WireframeCanvas, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object"))?;
        let container = document.get_element_by_id(container_id).ok_or_else(|| {
            JsValue::from_str(&format!("Container element '{container_id}' not found"))
        })?;

        Ok(Self {
            container,
            state: CanvasState::default(),
            render_count: 0,
        })
    }

    /// Load a document, or a generation response wrapping one.
    ///
    /// The previous document stays on screen if this fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or its root is not an object.
    #[wasm_bindgen(js_name = loadDocument)]
    pub fn load_document(&mut self, json: &str) -> Result<(), JsValue> {
        self.state
            .load_json(json)
            .map_err(|e| JsValue::from_str(&format!("Document load error: {e}")))
    }

    /// Drop the current document.
    pub fn clear(&mut self) {
        self.state.clear_document();
    }

    /// Whether a document is loaded.
    #[wasm_bindgen(js_name = hasDocument)]
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.state.has_document()
    }

    /// Pointer pressed. Only the primary button starts a pan.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64, button: u8) -> bool {
        self.state.process_event(&InputEvent::PointerDown(
            PointerEvent::new(x, y).with_button(button),
        ))
    }

    /// Pointer moved.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.state
            .process_event(&InputEvent::PointerMove(PointerEvent::new(x, y)))
    }

    /// Pointer released.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        self.state.process_event(&InputEvent::PointerUp)
    }

    /// Pointer left the container.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> bool {
        self.state.process_event(&InputEvent::PointerLeave)
    }

    /// Wheel zoom anchored at the cursor.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> bool {
        self.state
            .process_event(&InputEvent::Wheel(WheelEvent::new(x, y, delta_y)))
    }

    /// Render into the container. Returns the number of render warnings.
    pub fn render(&mut self) -> usize {
        let output = render_workspace(&self.state);
        for warning in &output.warnings {
            tracing::warn!("{warning}");
        }
        self.container.set_inner_html(&to_html(&output.node));
        self.render_count += 1;
        output.warnings.len()
    }

    /// Rendered markup, without touching the DOM.
    #[wasm_bindgen(js_name = renderHtml)]
    #[must_use]
    pub fn render_html(&self) -> String {
        to_html(&render_workspace(&self.state).node)
    }

    /// Current transform as JSON: `{"x":..,"y":..,"scale":..}`.
    #[wasm_bindgen(js_name = transformJson)]
    #[must_use]
    pub fn transform_json(&self) -> String {
        serde_json::to_string(&self.state.transform()).unwrap_or_default()
    }

    /// Laid-out boards as JSON.
    #[wasm_bindgen(js_name = boardsJson)]
    #[must_use]
    pub fn boards_json(&self) -> String {
        serde_json::to_string(self.state.boards()).unwrap_or_default()
    }

    /// Validation messages for the loaded document, as a JSON array.
    #[wasm_bindgen(js_name = validationJson)]
    #[must_use]
    pub fn validation_json(&self) -> String {
        let messages: Vec<String> = self
            .state
            .document()
            .map(|document| {
                validate_document(document)
                    .issues()
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();
        serde_json::to_string(&messages).unwrap_or_default()
    }

    /// Number of completed renders.
    #[wasm_bindgen(js_name = renderCount)]
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}
