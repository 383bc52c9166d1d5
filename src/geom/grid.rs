//! The hex-offset bubble grid.
//!
//! Sparse storage keyed by `GridKey`. Every slot of the playing field is
//! present from creation on; an empty slot is stored as `None` so "empty" and
//! "not a slot" stay distinguishable.
//!
//! Layout: row 0 sits at the top of the field (`y = height`), each further row
//! one unit lower. Odd rows are shifted right by half a unit, giving the
//! classic brick/hex packing.

use std::collections::HashMap;

use super::color::Color;
use super::key::GridKey;
use crate::consts::COLORED_ROWS;
use crate::error::GeometryError;

/// Map from slot to the bubble occupying it
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleGrid {
    slots: HashMap<GridKey, Option<Color>>,
    width: u32,
    height: u32,
}

impl BubbleGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Contents of a slot.
    ///
    /// `None` if the key is not a slot, `Some(None)` if the slot is empty.
    pub fn get(&self, key: GridKey) -> Option<Option<Color>> {
        self.slots.get(&key).copied()
    }

    /// Look up a slot by its text key
    pub fn get_by_str(&self, key: &str) -> Result<Option<Color>, GeometryError> {
        let key: GridKey = key.parse()?;
        self.get(key).ok_or(GeometryError::UnknownSlot(key))
    }

    pub fn contains_key(&self, key: GridKey) -> bool {
        self.slots.contains_key(&key)
    }

    /// Put a bubble into an existing slot.
    ///
    /// Returns what the slot held before.
    pub fn place(&mut self, key: GridKey, color: Color) -> Result<Option<Color>, GeometryError> {
        self.set(key, Some(color))
    }

    /// Empty an existing slot.
    ///
    /// Returns the bubble that was removed, if any.
    pub fn clear(&mut self, key: GridKey) -> Result<Option<Color>, GeometryError> {
        self.set(key, None)
    }

    fn set(&mut self, key: GridKey, value: Option<Color>) -> Result<Option<Color>, GeometryError> {
        let slot = self
            .slots
            .get_mut(&key)
            .ok_or(GeometryError::UnknownSlot(key))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Number of slots (empty or not)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a bubble
    pub fn bubble_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over every slot in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (GridKey, Option<Color>)> + '_ {
        self.slots.iter().map(|(key, slot)| (*key, *slot))
    }

    /// Iterate over occupied slots only
    pub fn bubbles(&self) -> impl Iterator<Item = (GridKey, Color)> + '_ {
        self.slots
            .iter()
            .filter_map(|(key, slot)| slot.map(|color| (*key, color)))
    }

    /// Key of the slot at (row, col), or `None` outside the field
    pub fn key_at(&self, row: u32, col: u32) -> Option<GridKey> {
        (row < self.height && col < self.width).then(|| slot_key(self.width, self.height, row, col))
    }
}

/// Key for (row, col) on a `width` x `height` field.
///
/// Position is `x = col + offset - width/2`, `y = height - row`, with
/// `offset = 0.5` on odd rows. Computed in half units to stay exact.
fn slot_key(width: u32, height: u32, row: u32, col: u32) -> GridKey {
    let offset2 = if row % 2 != 0 { 1 } else { 0 };
    let x2 = 2 * i64::from(col) + offset2 - i64::from(width);
    let y2 = 2 * (i64::from(height) - i64::from(row));
    GridKey::from_halves(x2, y2)
}

/// Build the starting grid, drawing colors from a fallible source.
///
/// The source is called once per colored slot, in row-major order; its first
/// error is returned unchanged.
pub fn try_create_bubble_grid<F, E>(
    width: u32,
    height: u32,
    mut color_source: F,
) -> Result<BubbleGrid, E>
where
    F: FnMut() -> Result<Color, E>,
{
    let mut slots = HashMap::with_capacity((width as usize).saturating_mul(height as usize));

    for row in 0..height {
        for col in 0..width {
            let key = slot_key(width, height, row, col);
            let slot = if row < COLORED_ROWS {
                Some(color_source()?)
            } else {
                None
            };
            slots.insert(key, slot);
        }
    }

    let grid = BubbleGrid {
        slots,
        width,
        height,
    };
    log::debug!(
        "Created {}x{} bubble grid: {} slots, {} bubbles",
        width,
        height,
        grid.len(),
        grid.bubble_count()
    );
    Ok(grid)
}

/// Build the starting grid with an infallible color source
pub fn create_bubble_grid<F>(width: u32, height: u32, mut color_source: F) -> BubbleGrid
where
    F: FnMut() -> Color,
{
    let infallible = || Ok::<_, std::convert::Infallible>(color_source());
    match try_create_bubble_grid(width, height, infallible) {
        Ok(grid) => grid,
        Err(never) => match never {},
    }
}
