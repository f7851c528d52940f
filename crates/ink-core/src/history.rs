//! Committed stroke history and full-surface replay.
//!
//! History is the widget's only durable state: an ordered list of committed
//! strokes, newest last. Undo pops the newest stroke and the surface is
//! rebuilt from what remains; there is no redo and no incremental erasure.

use crate::model::Stroke;
use crate::surface::DrawSurface;

/// Ordered list of committed strokes; insertion order is drawing order.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed stroke. Empty strokes are refused: nothing is
    /// stored and `false` is returned.
    pub fn commit(&mut self, stroke: Stroke) -> bool {
        if stroke.is_empty() {
            log::debug!("refusing to commit empty stroke");
            return false;
        }
        self.strokes.push(stroke);
        true
    }

    /// Remove and return the newest stroke.
    pub fn pop(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Forget all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Rebuild the surface from retained history: erase everything, then
    /// redraw every stroke oldest to newest.
    ///
    /// Each consecutive sample pair issues its own segment, styled with the
    /// destination sample's color and width. That keeps mid-stroke style
    /// changes on exactly the segments they were captured with. A
    /// one-sample stroke produces a begin/end pair and no segment.
    ///
    /// Replay is synchronous and proportional to total retained point
    /// count; it never inspects what was previously on the surface.
    pub fn replay(&self, surface: &mut impl DrawSurface) {
        log::debug!("replaying {} strokes", self.strokes.len());
        surface.clear();
        for stroke in &self.strokes {
            let Some((first, rest)) = stroke.samples().split_first() else {
                continue;
            };
            surface.begin_path(first.pos);
            for sample in rest {
                surface.draw_segment(sample.pos, sample.color, sample.width);
            }
            surface.end_path();
        }
    }
}
