//! Entity colors

use serde::{Serialize, Deserialize};

/// An RGBA color, each component in 0.0-1.0
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::from_rgb(1.0, 1.0, 0.0);
    pub const ORANGE: Self = Self::from_rgb(1.0, 0.65, 0.0);
    pub const MAGENTA: Self = Self::from_rgb(1.0, 0.0, 1.0);
    pub const CYAN: Self = Self::from_rgb(0.0, 1.0, 1.0);

    /// Create a new color from RGBA components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        let c = Color::from_rgb(0.5, 0.6, 0.7);
        assert_eq!(c, Color::new(0.5, 0.6, 0.7, 1.0));
    }
}
