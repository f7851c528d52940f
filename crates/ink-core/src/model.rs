//! Core data model for captured freehand strokes.
//!
//! A stroke is one pointer-down-to-pointer-up gesture, recorded as an
//! ordered sequence of point samples. Color and width are captured per
//! sample rather than per stroke, so a gesture whose style changes while
//! the pointer is down replays exactly as it was drawn.

use serde::{Deserialize, Serialize};

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// The default pen color.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        // Channels default to opaque; the short forms overwrite r/g/b only.
        let mut ch = [0u8, 0, 0, 255];
        match bytes.len() {
            3 | 4 => {
                for (slot, &c) in ch.iter_mut().zip(bytes) {
                    *slot = nibble(c)? * 17;
                }
            }
            6 | 8 => {
                for (slot, pair) in ch.iter_mut().zip(bytes.chunks_exact(2)) {
                    *slot = nibble(pair[0])? << 4 | nibble(pair[1])?;
                }
            }
            _ => return None,
        }
        Some(Self::rgba(
            ch[0] as f32 / 255.0,
            ch[1] as f32 / 255.0,
            ch[2] as f32 / 255.0,
            ch[3] as f32 / 255.0,
        ))
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        let a = (self.a * 255.0).round() as u8;
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Parse a single hex digit.
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A position in surface-local coordinates (device coordinates already
/// translated by the surface origin offset).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ─── Samples & strokes ───────────────────────────────────────────────────

/// One recorded observation within a stroke: where the pointer was, plus
/// the color and width active at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSample {
    pub pos: Point,
    pub color: Color,
    pub width: f32,
}

impl PointSample {
    pub const fn new(pos: Point, color: Color, width: f32) -> Self {
        Self { pos, color, width }
    }
}

/// One continuous pointer-down-to-pointer-up gesture, in capture order.
///
/// Strokes in committed history are non-empty and never mutated; both
/// invariants are enforced by [`StrokeHistory`](crate::history::StrokeHistory).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    samples: Vec<PointSample>,
}

impl Stroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: PointSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[PointSample] {
        &self.samples
    }

    pub fn first(&self) -> Option<&PointSample> {
        self.samples.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_full_hex() {
        let c = Color::from_hex("#1A2B3C").unwrap();
        assert_eq!(c.to_hex(), "#1A2B3C");
    }

    #[test]
    fn color_parses_shorthand_hex() {
        // #F00 expands to #FF0000
        let c = Color::from_hex("#F00").unwrap();
        assert_eq!(c.to_hex(), "#FF0000");
    }

    #[test]
    fn color_accepts_lowercase_and_bare_hex() {
        let c = Color::from_hex("#a29bfe").unwrap();
        assert_eq!(c.to_hex(), "#A29BFE");
        assert_eq!(Color::from_hex("a29bfe"), Some(c));
    }

    #[test]
    fn color_parses_alpha_forms() {
        let c = Color::from_hex("#FF000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 0.01);
        assert_eq!(c.to_hex(), "#FF000080");
    }

    #[test]
    fn color_rejects_garbage() {
        assert_eq!(Color::from_hex("red"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn stroke_records_samples_in_order() {
        let mut stroke = Stroke::new();
        stroke.push(PointSample::new(Point::new(1.0, 2.0), Color::BLACK, 5.0));
        stroke.push(PointSample::new(Point::new(3.0, 4.0), Color::BLACK, 5.0));

        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.samples()[0].pos, Point::new(1.0, 2.0));
        assert_eq!(stroke.samples()[1].pos, Point::new(3.0, 4.0));
    }

    #[test]
    fn empty_stroke_has_no_first_sample() {
        let stroke = Stroke::new();
        assert!(stroke.is_empty());
        assert_eq!(stroke.first(), None);
    }
}
