//! Math space <-> canvas space
//!
//! Math space is centered on the playing field with y pointing up, in grid
//! units. Canvas space has its origin top-left with y pointing down, in
//! pixels. One grid unit spans `2 * scale` pixels.
//!
//! `scale` must be non-zero; at zero `to_math` divides by zero and returns
//! non-finite coordinates.

use serde::{Deserialize, Serialize};

use super::key::GridKey;
use super::vec2d::Vec2D;
use crate::consts::*;

/// Convert a math-space position to canvas pixels
#[inline]
pub fn to_canvas(v: Vec2D, width: u32, height: u32, scale: f64) -> Vec2D {
    let (w, h) = (f64::from(width), f64::from(height));
    Vec2D::new((2.0 * scale) * (v.x + w / 2.0), (2.0 * scale) * (-v.y + h))
}

/// Convert canvas pixels to a math-space position
#[inline]
pub fn to_math(v: Vec2D, width: u32, height: u32, scale: f64) -> Vec2D {
    let (w, h) = (f64::from(width), f64::from(height));
    Vec2D::new(v.x / (2.0 * scale) - w / 2.0, -v.y / (2.0 * scale) + h)
}

/// Playing field dimensions and pixel scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playground {
    /// Columns per row
    pub width: u32,
    /// Number of rows
    pub height: u32,
    /// Pixels per half grid unit
    pub scale: f64,
}

impl Default for Playground {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLAYGROUND_WIDTH,
            height: DEFAULT_PLAYGROUND_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Playground {
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    pub fn to_canvas(&self, v: Vec2D) -> Vec2D {
        to_canvas(v, self.width, self.height, self.scale)
    }

    pub fn to_math(&self, v: Vec2D) -> Vec2D {
        to_math(v, self.width, self.height, self.scale)
    }

    /// Pixel center of a grid slot
    pub fn cell_to_canvas(&self, key: GridKey) -> Vec2D {
        self.to_canvas(key.position())
    }

    /// Canvas size in pixels covering the whole field
    pub fn canvas_size(&self) -> Vec2D {
        Vec2D::new(
            2.0 * self.scale * f64::from(self.width),
            2.0 * self.scale * f64::from(self.height),
        )
    }
}
