//! Launcher aiming
//!
//! Each input step turns the aim vector by `AIM_STEP` (half a degree).
//! Holding a key simply applies the step once per frame.

use std::str::FromStr;

use glam::{DMat2, DVec2};
use serde::{Deserialize, Serialize};

use super::vec2d::Vec2D;
use crate::consts::AIM_STEP;
use crate::error::GeometryError;

/// Rotation sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Counterclockwise
    Left,
    /// Clockwise
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Column-major rotation matrix for one aim step
    fn step_matrix(self) -> DMat2 {
        match self {
            Direction::Left => DMat2::from_angle(AIM_STEP),
            Direction::Right => DMat2::from_angle(-AIM_STEP),
        }
    }
}

impl FromStr for Direction {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GeometryError::InvalidArgument(format!(
                "unknown direction {s:?}, expected Left or Right"
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotate `point` by one aim step
#[inline]
pub fn rotate(point: Vec2D, direction: Direction) -> Vec2D {
    (direction.step_matrix() * DVec2::from(point)).into()
}

/// Rotate by a direction given as text ("Left"/"Right", any case)
pub fn rotate_named(point: Vec2D, direction: &str) -> Result<Vec2D, GeometryError> {
    Ok(rotate(point, direction.parse()?))
}

/// Apply `steps` aim steps in a row, as a held key would
pub fn rotate_steps(point: Vec2D, direction: Direction, steps: u32) -> Vec2D {
    let matrix = direction.step_matrix();
    let mut v = DVec2::from(point);
    for _ in 0..steps {
        v = matrix * v;
    }
    v.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Vec2D, b: Vec2D) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{a} != {b}"
        );
    }

    #[test]
    fn test_left_is_counterclockwise() {
        let v = rotate(Vec2D::new(1.0, 0.0), Direction::Left);
        assert!(v.y > 0.0);
        assert_close(v, Vec2D::new(AIM_STEP.cos(), AIM_STEP.sin()));
    }

    #[test]
    fn test_right_is_clockwise() {
        let v = rotate(Vec2D::new(1.0, 0.0), Direction::Right);
        assert!(v.y < 0.0);
        assert_close(v, Vec2D::new(AIM_STEP.cos(), -AIM_STEP.sin()));
    }

    #[test]
    fn test_matrix_product_layout() {
        // result.x = m00*x + m10*y, result.y = m01*x + m11*y
        let (s, c) = AIM_STEP.sin_cos();
        let p = Vec2D::new(2.0, 3.0);
        let cw = rotate(p, Direction::Right);
        assert_close(cw, Vec2D::new(c * 2.0 + s * 3.0, -s * 2.0 + c * 3.0));
        let ccw = rotate(p, Direction::Left);
        assert_close(ccw, Vec2D::new(c * 2.0 - s * 3.0, s * 2.0 + c * 3.0));
    }

    #[test]
    fn test_360_steps_is_half_turn() {
        let v = Vec2D::new(0.0, 1.0);
        assert_close(rotate_steps(v, Direction::Right, 360), Vec2D::new(0.0, -1.0));
        assert_close(rotate_steps(v, Direction::Left, 360), Vec2D::new(0.0, -1.0));
    }

    #[test]
    fn test_720_steps_is_full_turn() {
        let v = Vec2D::new(3.0, -2.0);
        assert_close(rotate_steps(v, Direction::Right, 720), v);
    }

    #[test]
    fn test_steps_match_repeated_rotate() {
        let mut v = Vec2D::new(0.0, 1.0);
        for _ in 0..90 {
            v = rotate(v, Direction::Left);
        }
        assert_close(v, rotate_steps(Vec2D::new(0.0, 1.0), Direction::Left, 90));
        // 45 degrees
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_close(v, Vec2D::new(-h, h));
    }

    #[test]
    fn test_rotate_named() {
        let p = Vec2D::new(1.0, 0.0);
        assert_eq!(rotate_named(p, "Left").unwrap(), rotate(p, Direction::Left));
        assert_eq!(rotate_named(p, "right").unwrap(), rotate(p, Direction::Right));
    }

    #[test]
    fn test_invalid_direction() {
        let err = rotate_named(Vec2D::new(1.0, 0.0), "Up").unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_text() {
        for dir in [Direction::Left, Direction::Right] {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    proptest! {
        #[test]
        fn prop_left_then_right_cancels(x in -1e3f64..1e3, y in -1e3f64..1e3) {
            let v = Vec2D::new(x, y);
            let back = rotate(rotate(v, Direction::Left), Direction::Right);
            prop_assert!((back.x - x).abs() < 1e-9);
            prop_assert!((back.y - y).abs() < 1e-9);
        }

        #[test]
        fn prop_rotation_keeps_length(x in -1e3f64..1e3, y in -1e3f64..1e3) {
            let v = Vec2D::new(x, y);
            let r = rotate(v, Direction::Right);
            prop_assert!((r.length() - v.length()).abs() < 1e-9);
        }
    }
}
