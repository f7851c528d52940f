//! The drawing-surface seam.
//!
//! The widget never talks to a concrete canvas; it issues commands through
//! [`DrawSurface`]. The browser bridge implements the trait over a Canvas2D
//! context, and [`RecordingSurface`] implements it as a command log so
//! capture and replay behavior can be asserted without a browser.

use crate::model::{Color, Point};

/// Rendering operations the widget needs from its host surface.
///
/// Segments are issued one at a time, each styled with the color and width
/// of the sample that produced it, round line caps. Styling is never
/// retroactive: a segment drawn earlier keeps its style even when later
/// samples differ.
pub trait DrawSurface {
    /// Open a new path positioned at `at`. Carries no styling; style only
    /// takes effect on [`draw_segment`](DrawSurface::draw_segment).
    fn begin_path(&mut self, at: Point);

    /// Extend the open path to `to` and stroke that one segment with the
    /// given color and width.
    fn draw_segment(&mut self, to: Point, color: Color, width: f32);

    /// Drop the open path. No visual effect; segments were already
    /// rendered as they arrived.
    fn end_path(&mut self);

    /// Erase the entire surface extent.
    fn clear(&mut self);
}

/// One issued surface command, as a value.
///
/// Lets tests and embedders capture exactly what the widget asked the
/// surface to do and compare sequences across live drawing and replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    BeginPath { at: Point },
    Segment { to: Point, color: Color, width: f32 },
    EndPath,
    Clear,
}

/// A [`DrawSurface`] that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, in issue order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the log empty.
    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_path(&mut self, at: Point) {
        self.commands.push(DrawCmd::BeginPath { at });
    }

    fn draw_segment(&mut self, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCmd::Segment { to, color, width });
    }

    fn end_path(&mut self) {
        self.commands.push(DrawCmd::EndPath);
    }

    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }
}
