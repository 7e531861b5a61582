//! World module - the one-dimensional strip of tiles.
//!
//! A [`World`] is a fixed-length run of tiles backed by a small inline array.
//! Cells are only ever relabeled; the strip never grows or shrinks after
//! construction, so clones are cheap copies and moves never allocate.

use arrayvec::ArrayVec;
use thiserror::Error;

use tui_chase_types::{Mode, Tile, MAX_WORLD};

/// Raised when a tile that must be unique is missing or duplicated.
///
/// This can only happen if a move was mis-applied somewhere; the session
/// treats it as fatal rather than trying to repair the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("invariant violation: expected exactly one {tile:?}, found {count}")]
    InvariantViolation { tile: Tile, count: usize },
}

/// The ordered strip of cells making up the playable area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    cells: ArrayVec<Tile, MAX_WORLD>,
}

impl World {
    /// Build the starting world for a mode.
    pub fn starting(mode: Mode) -> Self {
        Self::from_tiles(mode.starting_layout())
    }

    /// Build a world from an explicit tile layout.
    ///
    /// # Panics
    ///
    /// Panics if the layout exceeds [`MAX_WORLD`] cells.
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut cells = ArrayVec::new();
        cells.extend(tiles.iter().copied());
        Self { cells }
    }

    /// Number of cells on the strip.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, left to right.
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Number of cells currently holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }

    /// Index of the unique cell holding `tile`.
    ///
    /// Fails if the tile is missing or appears more than once.
    pub fn locate(&self, tile: Tile) -> Result<usize, WorldError> {
        let mut found = None;
        let mut count = 0;
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == tile {
                count += 1;
                found = Some(index);
            }
        }
        match found {
            Some(index) if count == 1 => Ok(index),
            _ => Err(WorldError::InvariantViolation { tile, count }),
        }
    }

    /// Copy of this world with cell `index` relabeled to `tile`.
    ///
    /// The receiver is untouched.
    pub fn relabeled(&self, index: usize, tile: Tile) -> World {
        let mut next = self.clone();
        next.cells[index] = tile;
        next
    }
}
