//! The drawing board controller.
//!
//! Owns the committed history, the in-progress stroke, and the active pen
//! style, and drives a [`DrawSurface`] from pointer events and panel
//! commands. Two rendering paths exist: live drawing issues one segment per
//! pointer move, while undo and clear rebuild the surface from history.
//! Both paths produce identical per-stroke command sequences, which is what
//! keeps the surface consistent with retained history at all times.

use ink_core::{Color, DrawSurface, Point, PointSample, Stroke, StrokeHistory};

use crate::commands::PanelCommand;
use crate::input::PointerEvent;

/// Pen width in effect until the panel changes it.
pub const DEFAULT_WIDTH: f32 = 5.0;

/// A freehand drawing widget bound to one surface.
///
/// The board is idle until a pointer goes down and painting until it comes
/// back up. Panel commands are valid in either state and change neither
/// the state nor the in-progress stroke.
#[derive(Debug)]
pub struct DrawingBoard<S> {
    surface: S,
    history: StrokeHistory,
    /// The stroke being built while the pointer is down. Logically
    /// separate from history until committed, then left empty.
    current: Stroke,
    painting: bool,
    active_color: Color,
    active_width: f32,
    /// Surface top-left in device coordinates, fixed at construction.
    origin: Point,
}

impl<S: DrawSurface> DrawingBoard<S> {
    #[must_use]
    pub fn new(surface: S, origin: Point) -> Self {
        Self {
            surface,
            history: StrokeHistory::new(),
            current: Stroke::new(),
            painting: false,
            active_color: Color::BLACK,
            active_width: DEFAULT_WIDTH,
            origin,
        }
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// Feed one pointer event. Out-of-order events (a move or up with no
    /// preceding down) are no-ops, never errors.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(self.to_local(x, y)),
            PointerEvent::Move { x, y } => self.pointer_move(self.to_local(x, y)),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Start a stroke. A second down mid-gesture restarts the current
    /// stroke; the samples captured so far are discarded, not committed.
    fn pointer_down(&mut self, p: Point) {
        self.painting = true;
        self.current = Stroke::new();
        self.current
            .push(PointSample::new(p, self.active_color, self.active_width));
        self.surface.begin_path(p);
    }

    /// Extend the stroke and render the new segment immediately.
    fn pointer_move(&mut self, p: Point) {
        if !self.painting {
            return;
        }
        log::trace!("sample at ({}, {})", p.x, p.y);
        self.current
            .push(PointSample::new(p, self.active_color, self.active_width));
        self.surface
            .draw_segment(p, self.active_color, self.active_width);
    }

    /// Finish the gesture, committing the buffer if it holds any samples.
    fn pointer_up(&mut self) {
        if !self.painting {
            return;
        }
        self.painting = false;

        let stroke = std::mem::take(&mut self.current);
        let samples = stroke.len();
        if self.history.commit(stroke) {
            log::debug!("committed stroke with {samples} samples");
        }
        self.surface.end_path();
    }

    // ─── Panel commands ──────────────────────────────────────────────────

    /// Apply one control-panel command.
    pub fn handle_panel(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::Clear => self.clear(),
            PanelCommand::Undo => {
                self.undo();
            }
            PanelCommand::SetColor(color) => self.set_color(color),
            PanelCommand::SetWidth(width) => self.set_width(width),
        }
    }

    /// Erase the surface and wipe history. Irreversible.
    pub fn clear(&mut self) {
        log::debug!("clearing surface and history");
        self.surface.clear();
        self.history.clear();
    }

    /// Remove the newest committed stroke and rebuild the surface from
    /// what remains. Returns `false`, issuing nothing, when history is
    /// empty.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            log::debug!("undo ignored: history is empty");
            return false;
        }
        self.history.replay(&mut self.surface);
        true
    }

    /// Change the active color. Samples already recorded keep theirs.
    pub fn set_color(&mut self, color: Color) {
        self.active_color = color;
    }

    /// Change the active width. Samples already recorded keep theirs.
    pub fn set_width(&mut self, width: f32) {
        self.active_width = width;
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn active_width(&self) -> f32 {
        self.active_width
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    fn to_local(&self, x: f32, y: f32) -> Point {
        Point::new(x - self.origin.x, y - self.origin.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_core::{DrawCmd, RecordingSurface};

    fn make_board() -> DrawingBoard<RecordingSurface> {
        DrawingBoard::new(RecordingSurface::new(), Point::new(0.0, 0.0))
    }

    #[test]
    fn move_before_any_down_is_ignored() {
        let mut board = make_board();
        board.handle_pointer(PointerEvent::move_to(5.0, 5.0));

        assert!(!board.is_painting());
        assert!(board.surface().commands().is_empty());
        assert!(board.history().is_empty());
    }

    #[test]
    fn duplicate_up_is_silent() {
        let mut board = make_board();
        board.handle_pointer(PointerEvent::down(1.0, 1.0));
        board.handle_pointer(PointerEvent::up());
        let issued = board.surface().commands().len();

        board.handle_pointer(PointerEvent::up());

        assert_eq!(board.surface().commands().len(), issued);
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn second_down_restarts_the_current_stroke() {
        let mut board = make_board();
        board.handle_pointer(PointerEvent::down(0.0, 0.0));
        board.handle_pointer(PointerEvent::move_to(1.0, 1.0));
        board.handle_pointer(PointerEvent::down(10.0, 10.0));
        board.handle_pointer(PointerEvent::up());

        // Only the restarted stroke reaches history.
        assert_eq!(board.history().len(), 1);
        let stroke = &board.history().strokes()[0];
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.first().unwrap().pos, Point::new(10.0, 10.0));
    }

    #[test]
    fn device_coordinates_are_translated_by_origin() {
        let mut board = DrawingBoard::new(RecordingSurface::new(), Point::new(10.0, 20.0));
        board.handle_pointer(PointerEvent::down(15.0, 27.0));

        assert_eq!(
            board.surface().commands(),
            vec![DrawCmd::BeginPath {
                at: Point::new(5.0, 7.0)
            }]
        );

        board.handle_pointer(PointerEvent::up());
        assert_eq!(
            board.history().strokes()[0].first().unwrap().pos,
            Point::new(5.0, 7.0)
        );
    }

    #[test]
    fn panel_dispatch_reaches_every_command() {
        let red = Color::rgb(1.0, 0.0, 0.0);

        let mut board = make_board();
        board.handle_panel(PanelCommand::SetColor(red));
        board.handle_panel(PanelCommand::SetWidth(9.0));
        assert_eq!(board.active_color(), red);
        assert_eq!(board.active_width(), 9.0);

        board.handle_pointer(PointerEvent::down(0.0, 0.0));
        board.handle_pointer(PointerEvent::up());
        assert!(board.can_undo());

        board.handle_panel(PanelCommand::Undo);
        assert!(!board.can_undo());

        board.handle_panel(PanelCommand::Clear);
        assert_eq!(board.surface().commands().last(), Some(&DrawCmd::Clear));
    }
}
