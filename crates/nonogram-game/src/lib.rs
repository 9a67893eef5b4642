pub mod game;

pub use game::{Game, GameState, Tool, MAX_LIVES};
