use crate::grid::{Grid, MistakeGrid};

/// Check if `player` and the solution agree on the filled/not-filled
/// fact for every cell. `Unmarked`, `Empty`, and `Pencil` are all
/// equivalent to "not filled" here. Mismatched dimensions fail closed.
pub fn is_solved(player: &Grid, solution: &Grid) -> bool {
    if player.len() != solution.len() {
        return false;
    }
    player.iter().zip(solution).all(|(prow, srow)| {
        prow.len() == srow.len()
            && prow
                .iter()
                .zip(srow)
                .all(|(p, s)| p.is_filled() == s.is_filled())
    })
}

/// Per-cell disagreement under the same rule as [`is_solved`], for
/// highlighting only. Shape follows the player grid; cells without a
/// solution counterpart are reported mistaken.
pub fn mistake_map(player: &Grid, solution: &Grid) -> MistakeGrid {
    player
        .iter()
        .enumerate()
        .map(|(i, prow)| {
            prow.iter()
                .enumerate()
                .map(|(j, p)| match solution.get(i).and_then(|srow| srow.get(j)) {
                    Some(s) => p.is_filled() != s.is_filled(),
                    None => true,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::grid::{empty_grid, CellState};

    fn grid(bits: &[&[u8]]) -> Grid {
        bits.iter()
            .map(|row| {
                row.iter()
                    .map(|b| {
                        if *b == 1 {
                            CellState::Filled
                        } else {
                            CellState::Unmarked
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn solution_matches_itself() {
        let s = grid(&[&[1, 0], &[0, 1]]);
        assert!(is_solved(&s, &s));
    }

    #[test]
    fn marked_empty_counts_as_not_filled() {
        let solution = grid(&[&[1, 0], &[0, 1]]);
        let mut player = solution.clone();
        player[0][1] = CellState::Empty;
        player[1][0] = CellState::Pencil;
        assert!(is_solved(&player, &solution));
    }

    #[test]
    fn missing_fill_is_not_solved() {
        let solution = grid(&[&[1, 0], &[0, 1]]);
        let player = grid(&[&[1, 0], &[0, 0]]);
        assert!(!is_solved(&player, &solution));
        let map = mistake_map(&player, &solution);
        assert_eq!(map, vec![vec![false, false], vec![false, true]]);
    }

    #[test]
    fn extra_fill_is_not_solved() {
        let solution = grid(&[&[1, 0], &[0, 1]]);
        let player = grid(&[&[1, 1], &[0, 1]]);
        assert!(!is_solved(&player, &solution));
        let map = mistake_map(&player, &solution);
        assert_eq!(map, vec![vec![false, true], vec![false, false]]);
    }

    #[test]
    fn dimension_mismatch_fails_closed() {
        let solution = grid(&[&[0, 0], &[0, 0]]);
        assert!(!is_solved(&empty_grid(3), &solution));
        // Ragged player row: also not solved, no panic.
        let ragged = vec![
            vec![CellState::Unmarked, CellState::Unmarked],
            vec![CellState::Unmarked],
        ];
        assert!(!is_solved(&ragged, &solution));
    }

    #[test]
    fn mistake_map_marks_cells_beyond_solution() {
        let solution = grid(&[&[0]]);
        let player = empty_grid(2);
        let map = mistake_map(&player, &solution);
        assert_eq!(map, vec![vec![false, true], vec![true, true]]);
    }

    fn cell() -> impl Strategy<Value = CellState> {
        prop_oneof![
            Just(CellState::Unmarked),
            Just(CellState::Filled),
            Just(CellState::Empty),
            Just(CellState::Pencil),
        ]
    }

    fn square(size: usize) -> impl Strategy<Value = Grid> {
        prop::collection::vec(prop::collection::vec(cell(), size), size)
    }

    proptest! {
        #[test]
        fn any_grid_solves_itself(g in square(5)) {
            prop_assert!(is_solved(&g, &g));
        }

        #[test]
        fn solved_iff_mistake_map_clear(player in square(5), solution in square(5)) {
            let clear = mistake_map(&player, &solution)
                .iter()
                .flatten()
                .all(|m| !m);
            prop_assert_eq!(is_solved(&player, &solution), clear);
        }
    }
}
