use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell as marked by the player. `Pencil` is reserved for
/// provisional marks and carries no behavior yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Unmarked,
    Filled,
    Empty,
    Pencil,
}

impl CellState {
    /// The only fact validation cares about: everything that is not
    /// `Filled` counts as not filled.
    pub fn is_filled(&self) -> bool {
        matches!(self, CellState::Filled)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            CellState::Unmarked => ".",
            CellState::Filled => "\u{25A0}",
            CellState::Empty => "x",
            CellState::Pencil => "?",
        };
        write!(f, "{}", glyph)
    }
}

pub type Grid = Vec<Vec<CellState>>;
pub type MistakeGrid = Vec<Vec<bool>>;

/// Fresh all-`Unmarked` square grid.
pub fn empty_grid(size: usize) -> Grid {
    vec![vec![CellState::Unmarked; size]; size]
}

/// Fresh all-clear square mistake grid.
pub fn empty_mistakes(size: usize) -> MistakeGrid {
    vec![vec![false; size]; size]
}
