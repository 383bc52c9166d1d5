//! Geometry core
//!
//! Everything here is pure and deterministic:
//! - No global state (rotation matrices are built on demand)
//! - Randomness only through an explicit color source
//! - No rendering or platform dependencies

pub mod color;
pub mod grid;
pub mod key;
pub mod rotation;
pub mod space;
pub mod vec2d;

pub use color::{Color, Palette};
pub use grid::{BubbleGrid, create_bubble_grid, try_create_bubble_grid};
pub use key::{GridKey, decode, encode};
pub use rotation::{Direction, rotate, rotate_named, rotate_steps};
pub use space::{Playground, to_canvas, to_math};
pub use vec2d::Vec2D;
