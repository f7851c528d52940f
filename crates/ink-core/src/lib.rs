pub mod history;
pub mod model;
pub mod surface;

pub use history::StrokeHistory;
pub use model::{Color, Point, PointSample, Stroke};
pub use surface::{DrawCmd, DrawSurface, RecordingSurface};
