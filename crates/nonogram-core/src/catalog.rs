use serde::Serialize;

use crate::clues::{calculate_clues, Clues};
use crate::grid::{CellState, Grid};

/// Per-cell CSS colors revealed on solve; `None` outside the picture.
pub type ColorOverlay = Vec<Vec<Option<&'static str>>>;

/// One hand-authored puzzle from the static catalog.
#[derive(Clone, Debug, Serialize)]
pub struct Puzzle {
    pub id: &'static str,
    pub name: &'static str,
    pub size: usize,
    pub solution: Grid,
    pub colors: ColorOverlay,
    pub difficulty: Option<&'static str>,
    pub category: Option<&'static str>,
}

impl Puzzle {
    /// Row and column clues, derived once per puzzle load.
    pub fn clues(&self) -> Clues {
        calculate_clues(&self.solution)
    }
}

/// Raw pixel-art tables: one character per cell, `#` filled, `.` blank.
/// Color rows use the puzzle's palette, `.` where the cell has no color.
struct PuzzleData {
    id: &'static str,
    name: &'static str,
    rows: &'static [&'static str],
    color_rows: &'static [&'static str],
    palette: &'static [(char, &'static str)],
}

const CAT: PuzzleData = PuzzleData {
    id: "cat",
    name: "Cat",
    rows: &[
        "..##...##.",
        ".####.###.",
        "##########",
        "##.####.##",
        "##########",
        "###.##.###",
        ".########.",
        "..######..",
        ".##...##..",
        "##.....##.",
    ],
    color_rows: &[
        "..oo...oo.",
        ".oyyo.oyo.",
        "oyyyyyyyyo",
        "oy.oyyo.yo",
        "oyyyyyyyyo",
        "oyy.oo.yyo",
        ".oyyyyyyo.",
        "..oyyyyo..",
        ".oo...oo..",
        "oo.....oo.",
    ],
    palette: &[('o', "#333"), ('y', "#f9c16a")],
};

const HEART: PuzzleData = PuzzleData {
    id: "heart",
    name: "Heart",
    rows: &[
        ".##....##.",
        "####..####",
        "##########",
        "##########",
        ".########.",
        "..######..",
        "...####...",
        "....##....",
        "..........",
        "..........",
    ],
    color_rows: &[
        ".rr....rr.",
        "rrrr..rrrr",
        "rrrrrrrrrr",
        "rrrrrrrrrr",
        ".rrrrrrrr.",
        "..rrrrrr..",
        "...rrrr...",
        "....rr....",
        "..........",
        "..........",
    ],
    palette: &[('r', "#e63946")],
};

const PINE_TREE: PuzzleData = PuzzleData {
    id: "pinetree",
    name: "Pine Tree",
    rows: &[
        "....#.....",
        "...###....",
        "..#####...",
        ".#######..",
        "#########.",
        "...###....",
        "...###....",
        "...###....",
        "....#.....",
        "....#.....",
    ],
    color_rows: &[
        "....g.....",
        "...ggg....",
        "..ggggg...",
        ".ggggggg..",
        "ggggggggg.",
        "...ggg....",
        "...ggg....",
        "...ggg....",
        "....t.....",
        "....t.....",
    ],
    palette: &[('g', "#388e3c"), ('t', "#8d5524")],
};

fn decode(data: &PuzzleData) -> Puzzle {
    let solution: Grid = data
        .rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|ch| {
                    if ch == '#' {
                        CellState::Filled
                    } else {
                        CellState::Unmarked
                    }
                })
                .collect()
        })
        .collect();
    let colors: ColorOverlay = data
        .color_rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|ch| {
                    data.palette
                        .iter()
                        .find(|(key, _)| *key == ch)
                        .map(|(_, color)| *color)
                })
                .collect()
        })
        .collect();
    Puzzle {
        id: data.id,
        name: data.name,
        size: data.rows.len(),
        solution,
        colors,
        difficulty: None,
        category: None,
    }
}

/// The full catalog, in display order.
pub fn all() -> Vec<Puzzle> {
    [&CAT, &HEART, &PINE_TREE].iter().map(|d| decode(d)).collect()
}

/// Look a puzzle up by its unique id.
pub fn by_id(id: &str) -> Option<Puzzle> {
    all().into_iter().find(|p| p.id == id)
}
