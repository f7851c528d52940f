//! Canvas2D stroke output.
//!
//! Implements the board's drawing surface on top of an HTML `<canvas>`
//! via `CanvasRenderingContext2d`. Segments are stroked as they arrive,
//! so the page shows ink without waiting for the gesture to finish.

use ink_core::{Color, DrawSurface, Point};
use web_sys::CanvasRenderingContext2d;

/// A drawing surface backed by a browser 2d context.
pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dSurface {
    /// Wrap a 2d context. `width`/`height` are the canvas backing-store
    /// extents, used only by [`DrawSurface::clear`].
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl DrawSurface for Canvas2dSurface {
    fn begin_path(&mut self, at: Point) {
        self.ctx.begin_path();
        self.ctx.move_to(at.x as f64, at.y as f64);
    }

    fn draw_segment(&mut self, to: Point, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn end_path(&mut self) {
        // Drop the open subpath so the next stroke cannot join onto it.
        self.ctx.begin_path();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }
}
