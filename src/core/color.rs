use serde::{Deserialize, Serialize};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Default gradient start (`#F2C66B`).
    pub const GRADIENT_START: Self = Self::rgb8(0xF2, 0xC6, 0x6B);
    /// Default gradient end (`#D13D73`).
    pub const GRADIENT_END: Self = Self::rgb8(0xD1, 0x3D, 0x73);
    /// Background shadow-bar fill (`#eeefef`).
    pub const SHADOW: Self = Self::rgb8(0xEE, 0xEF, 0xEF);
    /// Axis domain/tick stroke (`#DCDDDC`).
    pub const AXIS_STROKE: Self = Self::rgb8(0xDC, 0xDD, 0xDC);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }
}
