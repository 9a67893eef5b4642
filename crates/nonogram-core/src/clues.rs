use serde::{Deserialize, Serialize};

use crate::grid::{CellState, Grid};

/// Run-length clues for every row and column of a solution grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clues {
    pub row_clues: Vec<Vec<u32>>,
    pub col_clues: Vec<Vec<u32>>,
}

impl Clues {
    /// Longest row clue sequence, for aligning clue ribbons.
    pub fn max_row_len(&self) -> usize {
        self.row_clues.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Longest column clue sequence.
    pub fn max_col_len(&self) -> usize {
        self.col_clues.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Run lengths of consecutive filled cells along one line, in reading
/// order. A line with no filled cells yields `[0]`, never an empty
/// sequence; renderers rely on that sentinel.
pub fn line_clues(line: &[CellState]) -> Vec<u32> {
    let mut clues = Vec::new();
    let mut count = 0u32;
    for cell in line {
        if cell.is_filled() {
            count += 1;
        } else if count > 0 {
            clues.push(count);
            count = 0;
        }
    }
    if count > 0 {
        clues.push(count);
    }
    if clues.is_empty() {
        clues.push(0);
    }
    clues
}

/// Derive clues for every row and column of a solution grid.
pub fn calculate_clues(solution: &Grid) -> Clues {
    let size = solution.len();
    let row_clues = solution.iter().map(|row| line_clues(row)).collect();
    let col_clues = (0..size)
        .map(|col| {
            let line: Vec<CellState> = solution.iter().map(|row| row[col]).collect();
            line_clues(&line)
        })
        .collect();
    Clues {
        row_clues,
        col_clues,
    }
}
