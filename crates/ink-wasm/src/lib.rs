//! WASM bridge for Inkboard: mounts the drawing board on a page's
//! canvas and control panel.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the
//! DOM listeners and forwards pointer and toolbar events here; this
//! crate owns everything downstream of them.

mod canvas2d;
mod error;

use ink_core::{Color, Point};
use ink_widget::board::DrawingBoard;
use ink_widget::commands::PanelCommand;
use ink_widget::input::PointerEvent;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::canvas2d::Canvas2dSurface;
use crate::error::SetupError;

/// Share of the window's inner extent the canvas is sized to.
const VIEWPORT_FRACTION: f64 = 0.8;
/// Viewport guess when the window cannot be measured.
const FALLBACK_VIEWPORT_WIDTH: f64 = 800.0;
const FALLBACK_VIEWPORT_HEIGHT: f64 = 600.0;

/// The JS-facing drawing board controller.
///
/// Holds the gesture state machine, the committed stroke history, and
/// the Canvas2D surface. All interaction from the page goes through
/// this struct.
#[wasm_bindgen]
pub struct InkBoard {
    board: DrawingBoard<Canvas2dSurface>,
}

#[wasm_bindgen]
impl InkBoard {
    /// Mount a board on the canvas and toolbar with the given element
    /// ids. Sizes the canvas to a fraction of the window and reads its
    /// page offset once, here.
    ///
    /// Throws when either element is missing or the canvas has no 2d
    /// context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, toolbar_id: &str) -> Result<InkBoard, JsError> {
        // Set up panic hook for better error messages in console
        console_error_panic_hook_setup();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("no document to mount in"))?;
        let canvas = lookup_canvas(&document, canvas_id)?;
        if document.get_element_by_id(toolbar_id).is_none() {
            return Err(SetupError::MissingElement(toolbar_id.to_owned()).into());
        }

        let (width, height) = viewport_extent();
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = acquire_context(&canvas)?;
        let origin = Point::new(canvas.offset_left() as f32, canvas.offset_top() as f32);
        let surface = Canvas2dSurface::new(ctx, width as f64, height as f64);

        log::debug!("mounted {width}x{height} board on #{canvas_id}");
        Ok(InkBoard {
            board: DrawingBoard::new(surface, origin),
        })
    }

    /// Handle pointer down at client coordinates. Starts a stroke.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) {
        self.board.handle_pointer(PointerEvent::down(x, y));
    }

    /// Handle pointer move at client coordinates. Extends the stroke
    /// in progress, if any.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) {
        self.board.handle_pointer(PointerEvent::move_to(x, y));
    }

    /// Handle pointer up. Commits the stroke in progress, if any.
    pub fn handle_pointer_up(&mut self) {
        self.board.handle_pointer(PointerEvent::up());
    }

    /// Handle a click inside the toolbar, given the clicked element's
    /// id. Returns `true` if the id mapped to a board action.
    pub fn handle_toolbar_click(&mut self, target_id: &str) -> bool {
        match toolbar_click_command(target_id) {
            Some(command) => {
                self.board.handle_panel(command);
                true
            }
            None => false,
        }
    }

    /// Handle a change event from a toolbar input, given the element's
    /// id and its new value. Returns `true` if the value was accepted.
    pub fn handle_toolbar_change(&mut self, target_id: &str, value: &str) -> bool {
        match toolbar_change_command(target_id, value) {
            Some(command) => {
                self.board.handle_panel(command);
                true
            }
            None => false,
        }
    }

    /// Undo the most recent stroke. Returns `true` if one was removed.
    pub fn undo(&mut self) -> bool {
        self.board.undo()
    }

    /// Erase the canvas and forget all committed strokes.
    pub fn clear(&mut self) {
        self.board.clear();
    }

    /// Whether undo currently has a stroke to remove.
    pub fn can_undo(&self) -> bool {
        self.board.can_undo()
    }

    /// Number of committed strokes.
    pub fn stroke_count(&self) -> usize {
        self.board.history().len()
    }

    /// The committed history as a JSON array of strokes.
    pub fn history_json(&self) -> String {
        serde_json::to_string(self.board.history().strokes()).unwrap_or_else(|_| "[]".to_string())
    }
}

// ─── Toolbar id translation ──────────────────────────────────────────────

/// Map a clicked toolbar element id to a board command.
fn toolbar_click_command(target_id: &str) -> Option<PanelCommand> {
    match target_id {
        "clear" => Some(PanelCommand::Clear),
        "undo" => Some(PanelCommand::Undo),
        _ => None,
    }
}

/// Map a toolbar input change to a board command. Malformed values
/// yield `None` and leave the active style untouched.
fn toolbar_change_command(target_id: &str, value: &str) -> Option<PanelCommand> {
    match target_id {
        "stroke" => Color::from_hex(value).map(PanelCommand::SetColor),
        "lineWidth" => value
            .parse::<u32>()
            .ok()
            .map(|width| PanelCommand::SetWidth(width as f32)),
        _ => None,
    }
}

// ─── DOM lookup helpers ──────────────────────────────────────────────────

fn lookup_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::MissingElement(id.to_owned()))
}

fn acquire_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SetupError> {
    canvas
        .get_context("2d")
        .map_err(|_| SetupError::ContextUnavailable)?
        .ok_or(SetupError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SetupError::ContextUnavailable)
}

fn viewport_extent() -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return (
            (FALLBACK_VIEWPORT_WIDTH * VIEWPORT_FRACTION) as u32,
            (FALLBACK_VIEWPORT_HEIGHT * VIEWPORT_FRACTION) as u32,
        );
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
    (
        (width * VIEWPORT_FRACTION) as u32,
        (height * VIEWPORT_FRACTION) as u32,
    )
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Inkboard WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_clicks_map_to_commands() {
        assert_eq!(toolbar_click_command("clear"), Some(PanelCommand::Clear));
        assert_eq!(toolbar_click_command("undo"), Some(PanelCommand::Undo));
        assert_eq!(toolbar_click_command("toolbar"), None);
    }

    #[test]
    fn toolbar_changes_parse_their_values() {
        assert_eq!(
            toolbar_change_command("stroke", "#ff0000"),
            Some(PanelCommand::SetColor(Color::rgb(1.0, 0.0, 0.0)))
        );
        assert_eq!(
            toolbar_change_command("lineWidth", "7"),
            Some(PanelCommand::SetWidth(7.0))
        );
    }

    #[test]
    fn malformed_toolbar_changes_are_dropped() {
        assert_eq!(toolbar_change_command("stroke", "not-a-color"), None);
        assert_eq!(toolbar_change_command("lineWidth", "wide"), None);
        assert_eq!(toolbar_change_command("opacity", "1"), None);
    }
}
