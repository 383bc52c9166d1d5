//! Bubble colors and the seeded palette used to fill a new grid

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// The bubble colors (six, like classic Snood)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// Single-letter tag for text dumps
    pub fn as_char(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
            Color::Orange => 'O',
        }
    }
}

/// Uniform color source over a fixed set, driven by a seeded PCG stream
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    rng: Pcg32,
}

impl Palette {
    pub fn new(colors: impl Into<Vec<Color>>, seed: u64) -> Self {
        Self {
            colors: colors.into(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Palette over every `Color`
    pub fn standard(seed: u64) -> Self {
        Self::new(Color::ALL, seed)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Draw the next color
    pub fn pick(&mut self) -> Result<Color, GeometryError> {
        self.colors
            .choose(&mut self.rng)
            .copied()
            .ok_or(GeometryError::EmptyPalette)
    }
}
