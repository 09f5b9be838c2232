//! Anchor - where a transient element is pinned on screen
//!
//! Ambient effects use viewport units so they scale with the window;
//! pointer reactions use the pixel coordinates of the event.

/// A point in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Centre of a client rect
    pub fn center_of(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::new(left + width / 2.0, top + height / 2.0)
    }
}

/// Fixed-position placement of a transient element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Rises from the ground: `left` in vw, `bottom` in vh
    Rising { left_vw: f32, bottom_vh: f32 },
    /// Falls from above: `left` in vw, `top` in vh
    Falling { left_vw: f32, top_vh: f32 },
    /// Top-left corner at a pixel point
    Point(Point),
    /// Centred on a pixel point
    Centered(Point),
}

impl Anchor {
    pub fn is_centered(&self) -> bool {
        matches!(self, Self::Centered(_))
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Rising { left_vw, bottom_vh } => {
                format!("left: {left_vw:.2}vw; bottom: {bottom_vh:.2}vh")
            }
            Self::Falling { left_vw, top_vh } => {
                format!("left: {left_vw:.2}vw; top: {top_vh:.2}vh")
            }
            Self::Point(p) | Self::Centered(p) => format!("left: {}px; top: {}px", p.x, p.y),
        }
    }
}
