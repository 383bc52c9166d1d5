//! Bubble Shooter - geometry core
//!
//! Core modules:
//! - `geom`: Vectors, grid keys, the bubble grid, coordinate spaces and aiming
//! - `settings`: Playground configuration loaded from JSON
//! - `error`: Error types shared by the core and the settings loader

pub mod error;
pub mod geom;
pub mod settings;

pub use error::{ConfigError, GeometryError};
pub use geom::{BubbleGrid, Color, Direction, GridKey, Palette, Playground, Vec2D};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Rows (counted from row 0) that start filled with bubbles
    pub const COLORED_ROWS: u32 = 5;

    /// Launcher rotation per input step (radians, half a degree)
    pub const AIM_STEP: f64 = std::f64::consts::PI / 360.0;

    /// Playground defaults
    pub const DEFAULT_PLAYGROUND_WIDTH: u32 = 12;
    pub const DEFAULT_PLAYGROUND_HEIGHT: u32 = 16;
    /// Pixels per half grid unit (conversions multiply by 2 * SCALE)
    pub const DEFAULT_SCALE: f64 = 15.0;

    /// Largest accepted playground width or height
    pub const MAX_PLAYGROUND_DIMENSION: u32 = 1024;
}
