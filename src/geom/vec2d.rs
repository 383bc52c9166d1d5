//! Immutable 2D vector
//!
//! Every operation returns a new value. Dividing by zero follows IEEE-754 and
//! yields infinities or NaN instead of failing; callers keep divisors non-zero.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point or direction in math space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2D {
    pub x: f64,
    pub y: f64,
}

impl Vec2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_xy(self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn add(self, other: Vec2D) -> Vec2D {
        Vec2D::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Vec2D) -> Vec2D {
        Vec2D::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scalar_mul(self, scalar: f64) -> Vec2D {
        Vec2D::new(self.x * scalar, self.y * scalar)
    }

    /// Divide both components by `scalar`
    ///
    /// `scalar == 0.0` produces non-finite components.
    #[inline]
    pub fn scalar_div(self, scalar: f64) -> Vec2D {
        Vec2D::new(self.x / scalar, self.y / scalar)
    }

    /// Euclidean norm (overflow-safe, saturates to +inf)
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl std::fmt::Display for Vec2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::ops::Add for Vec2D {
    type Output = Vec2D;

    fn add(self, other: Vec2D) -> Vec2D {
        Vec2D::add(self, other)
    }
}

impl std::ops::Sub for Vec2D {
    type Output = Vec2D;

    fn sub(self, other: Vec2D) -> Vec2D {
        Vec2D::sub(self, other)
    }
}

impl std::ops::Mul<f64> for Vec2D {
    type Output = Vec2D;

    fn mul(self, scalar: f64) -> Vec2D {
        self.scalar_mul(scalar)
    }
}

impl std::ops::Div<f64> for Vec2D {
    type Output = Vec2D;

    fn div(self, scalar: f64) -> Vec2D {
        self.scalar_div(scalar)
    }
}

impl std::ops::Neg for Vec2D {
    type Output = Vec2D;

    fn neg(self) -> Vec2D {
        Vec2D::new(-self.x, -self.y)
    }
}

impl From<DVec2> for Vec2D {
    fn from(v: DVec2) -> Self {
        Vec2D::new(v.x, v.y)
    }
}

impl From<Vec2D> for DVec2 {
    fn from(v: Vec2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vec2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2D::new(x, y)
    }
}
