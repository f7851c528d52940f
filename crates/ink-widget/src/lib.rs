pub mod board;
pub mod commands;
pub mod input;

pub use board::DrawingBoard;
pub use commands::PanelCommand;
pub use input::PointerEvent;
