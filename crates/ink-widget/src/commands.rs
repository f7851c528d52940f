//! Typed control-panel commands.
//!
//! Whatever UI produces a button click or an input change, the board only
//! ever receives one of these. Translation from raw DOM event targets
//! lives in the browser bridge, not here.

use ink_core::Color;

/// A command from the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCommand {
    /// Erase the surface and forget all committed strokes.
    Clear,
    /// Remove the newest committed stroke and replay the rest.
    Undo,
    /// Change the active pen color; only future samples are affected.
    SetColor(Color),
    /// Change the active pen width; only future samples are affected.
    SetWidth(f32),
}
