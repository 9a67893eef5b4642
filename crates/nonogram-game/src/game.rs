use log::{debug, info};
use nonogram_core::catalog::Puzzle;
use nonogram_core::clues::Clues;
use nonogram_core::grid::{empty_grid, empty_mistakes, CellState, Grid, MistakeGrid};
use nonogram_core::validation::{is_solved, mistake_map};
use serde::{Deserialize, Serialize};

/// Lives a fresh session starts with.
pub const MAX_LIVES: u32 = 3;

/// Active interaction mode: what a cell click attempts to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Fill,
    MarkEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Solved,
    GameOver,
}

/// One player's session against one puzzle. The engine functions stay
/// pure; all mutable state lives here.
pub struct Game {
    pub puzzle: Puzzle,
    pub clues: Clues,
    pub player: Grid,
    /// Cells the player got wrong; locked for the rest of the session.
    pub permanent_mistakes: MistakeGrid,
    /// Highlight map from the last explicit check; `None` once stale.
    pub mistakes: Option<MistakeGrid>,
    pub lives: u32,
    pub state: GameState,
    pub tool: Tool,
}

impl Game {
    pub fn new(puzzle: Puzzle) -> Self {
        let size = puzzle.size;
        let clues = puzzle.clues();
        Self {
            puzzle,
            clues,
            player: empty_grid(size),
            permanent_mistakes: empty_mistakes(size),
            mistakes: None,
            lives: MAX_LIVES,
            state: GameState::Playing,
            tool: Tool::Fill,
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// True when the cell is locked by a recorded permanent mistake.
    pub fn is_locked(&self, row: usize, col: usize) -> bool {
        self.permanent_mistakes[row][col]
    }

    /// Apply the active tool to one cell. Every move is auto-checked: a
    /// wrong fill or wrong empty mark is forced to `Empty`, locks the
    /// cell, and costs a life. This is distinct from [`Game::check`],
    /// which never touches lives.
    pub fn click(&mut self, row: usize, col: usize) {
        if self.state != GameState::Playing {
            return;
        }
        if row >= self.puzzle.size || col >= self.puzzle.size {
            return;
        }
        if self.permanent_mistakes[row][col] {
            return;
        }

        let current = self.player[row][col];
        let proposed = match self.tool {
            Tool::Fill => {
                if current == CellState::Filled {
                    CellState::Unmarked
                } else {
                    CellState::Filled
                }
            }
            Tool::MarkEmpty => {
                if current == CellState::Empty {
                    CellState::Unmarked
                } else {
                    CellState::Empty
                }
            }
        };

        let solution_filled = self.puzzle.solution[row][col].is_filled();
        let is_mistake = (proposed == CellState::Filled && !solution_filled)
            || (proposed == CellState::Empty && solution_filled);

        if is_mistake {
            // Forced to an empty mark regardless of the tool used, even
            // when the player was marking empty and was simply early.
            self.player[row][col] = CellState::Empty;
            self.permanent_mistakes[row][col] = true;
            self.lives -= 1;
            debug!("mistake at ({}, {}), {} lives left", row, col, self.lives);
            if self.lives == 0 {
                info!("out of lives on puzzle {}", self.puzzle.id);
                self.state = GameState::GameOver;
            }
        } else {
            self.player[row][col] = proposed;
        }

        // Whatever the last check reported is stale now.
        self.mistakes = None;
    }

    /// Explicit check: recompute the highlight map and settle the solved
    /// flag. Lives and permanent mistakes are untouched.
    pub fn check(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        if is_solved(&self.player, &self.puzzle.solution) {
            info!("puzzle {} solved", self.puzzle.id);
            self.state = GameState::Solved;
        }
        self.mistakes = Some(mistake_map(&self.player, &self.puzzle.solution));
    }

    /// Restart the current puzzle: fresh grid, full lives, no mistakes.
    pub fn reset(&mut self) {
        let size = self.puzzle.size;
        self.player = empty_grid(size);
        self.permanent_mistakes = empty_mistakes(size);
        self.mistakes = None;
        self.lives = MAX_LIVES;
        self.state = GameState::Playing;
    }

    /// Swap in another puzzle and reinitialize the session around it.
    pub fn switch_puzzle(&mut self, puzzle: Puzzle) {
        self.clues = puzzle.clues();
        self.puzzle = puzzle;
        self.reset();
    }
}
