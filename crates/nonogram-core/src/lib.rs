pub mod catalog;
pub mod clues;
pub mod grid;
pub mod validation;

pub use catalog::{ColorOverlay, Puzzle};
pub use clues::{calculate_clues, line_clues, Clues};
pub use grid::{empty_grid, empty_mistakes, CellState, Grid, MistakeGrid};
pub use validation::{is_solved, mistake_map};
