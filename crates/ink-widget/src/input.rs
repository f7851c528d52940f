//! Pointer events as delivered by the host input source.

/// A pointer event in absolute device coordinates.
///
/// The board translates positions into surface-local space before recording
/// them. `Up` carries no position: where the pointer is released never
/// affects what was captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

impl PointerEvent {
    pub const fn down(x: f32, y: f32) -> Self {
        Self::Down { x, y }
    }

    pub const fn move_to(x: f32, y: f32) -> Self {
        Self::Move { x, y }
    }

    pub const fn up() -> Self {
        Self::Up
    }

    /// The event's device position, where it has one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } => Some((x, y)),
            Self::Up => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_present_only_for_located_events() {
        assert_eq!(PointerEvent::down(1.0, 2.0).position(), Some((1.0, 2.0)));
        assert_eq!(PointerEvent::move_to(3.0, 4.0).position(), Some((3.0, 4.0)));
        assert_eq!(PointerEvent::up().position(), None);
    }
}
