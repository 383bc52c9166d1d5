//! Grid keys
//!
//! A slot on the playing field is addressed by its math-space position. The
//! canonical text form is `"<x> <y>"` with each coordinate in Rust's shortest
//! round-trippable decimal form. Grid positions are always whole or half
//! units, so `GridKey` stores them doubled as integers and the text form is
//! only produced at the edges (logging, external callers).

use std::str::FromStr;

use super::vec2d::Vec2D;
use crate::error::GeometryError;

/// Encode a position as `"<x> <y>"`
///
/// Negative zero is written as `0` so that `-0.0` and `0.0` land in one slot.
pub fn encode(position: Vec2D) -> String {
    format!("{} {}", position.x + 0.0, position.y + 0.0)
}

/// Parse a `"<x> <y>"` key back into a position
pub fn decode(key: &str) -> Result<Vec2D, GeometryError> {
    let mut tokens = key.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(GeometryError::parse(key, "expected exactly two tokens"));
    };

    let parse = |token: &str| {
        let value = token
            .parse::<f64>()
            .map_err(|e| GeometryError::parse(key, format!("{token:?}: {e}")))?;
        // f64 parsing also accepts NaN and infinities
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::parse(key, format!("{token:?} is not a real number")))
        }
    };

    Ok(Vec2D::new(parse(x)?, parse(y)?))
}

/// Typed grid slot address
///
/// Holds `(2x, 2y)` so half-unit offsets stay exact and hashing never touches
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridKey {
    x2: i64,
    y2: i64,
}

impl GridKey {
    /// Key for a row/column position that is known to be on the lattice
    pub(crate) const fn from_halves(x2: i64, y2: i64) -> Self {
        Self { x2, y2 }
    }

    /// Math-space position of this slot
    pub fn position(&self) -> Vec2D {
        Vec2D::new(self.x2 as f64 / 2.0, self.y2 as f64 / 2.0)
    }
}

fn to_halves(value: f64) -> Option<i64> {
    let doubled = value * 2.0;
    // i64 covers every integer up to 2^63; anything larger is not a grid slot
    if doubled.is_finite() && doubled.fract() == 0.0 && doubled.abs() < 9.0e18 {
        Some(doubled as i64)
    } else {
        None
    }
}

impl TryFrom<Vec2D> for GridKey {
    type Error = GeometryError;

    fn try_from(position: Vec2D) -> Result<Self, Self::Error> {
        match (to_halves(position.x), to_halves(position.y)) {
            (Some(x2), Some(y2)) => Ok(GridKey { x2, y2 }),
            _ => Err(GeometryError::OffLattice {
                x: position.x,
                y: position.y,
            }),
        }
    }
}

impl FromStr for GridKey {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridKey::try_from(decode(s)?)
    }
}

impl std::fmt::Display for GridKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode(self.position()))
    }
}
