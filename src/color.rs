//! RGBA fill colors for shapes and background.
//!
//! Stored as four `f32` components in 0.0 - 1.0. The named constants are the
//! palette the default configuration uses.

use serde::{Deserialize, Serialize};

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const AZURE: Self = Self::from_rgb8(0xF0, 0xFF, 0xFF);
    pub const OLIVEDRAB: Self = Self::from_rgb8(0x6B, 0x8E, 0x23);
    pub const PLUM: Self = Self::from_rgb8(0xDD, 0xA0, 0xDD);
    pub const BISQUE: Self = Self::from_rgb8(0xFF, 0xE4, 0xC4);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from 8-bit channels
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}
