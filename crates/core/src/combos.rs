//! Winning-line enumeration.
//!
//! A winning combo is an ordered triple of coordinates. For an N x N board
//! every horizontal, vertical and diagonal run of [`WIN_LENGTH`] cells is a
//! combo, at every offset that fits on the board.
//!
//! Combos are generated in a fixed order which doubles as the tie-break when
//! one move completes several lines at once:
//!
//! 1. rows, top to bottom, each left to right by start column
//! 2. columns, left to right, each top to bottom by start row
//! 3. diagonals by start cell (row-major); for each start cell the
//!    down-right diagonal comes before the down-left one

use crate::types::{Position, WIN_LENGTH};

/// Coordinates of one winning line
pub type WinningCombo = [Position; WIN_LENGTH];

/// Number of combos on an N x N board:
/// `N*(N-2)` rows + `N*(N-2)` columns + `2*(N-2)^2` diagonals.
pub fn combo_count(size: usize) -> usize {
    let span = size.saturating_sub(WIN_LENGTH - 1);
    2 * size * span + 2 * span * span
}

/// Enumerate every winning combo for a board of `size` in generation order
pub fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let span = size.saturating_sub(WIN_LENGTH - 1);
    let mut combos = Vec::with_capacity(combo_count(size));

    for row in 0..size {
        for start_col in 0..span {
            combos.push(line(|i| Position::new(row, start_col + i)));
        }
    }

    for col in 0..size {
        for start_row in 0..span {
            combos.push(line(|i| Position::new(start_row + i, col)));
        }
    }

    for start_row in 0..span {
        for start_col in 0..span {
            combos.push(line(|i| Position::new(start_row + i, start_col + i)));
            combos.push(line(|i| {
                Position::new(start_row + i, start_col + WIN_LENGTH - 1 - i)
            }));
        }
    }

    combos
}

#[inline]
fn line(f: impl Fn(usize) -> Position) -> WinningCombo {
    std::array::from_fn(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn classic_board_has_eight_lines() {
        let combos = winning_combos(3);
        assert_eq!(combos.len(), 8);
        assert_eq!(combo_count(3), 8);

        // Rows first, then columns, then the two diagonals.
        assert_eq!(combos[0], [p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(combos[2], [p(2, 0), p(2, 1), p(2, 2)]);
        assert_eq!(combos[3], [p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(combos[6], [p(0, 0), p(1, 1), p(2, 2)]);
        assert_eq!(combos[7], [p(0, 2), p(1, 1), p(2, 0)]);
    }

    #[test]
    fn larger_boards_include_every_offset() {
        let combos = winning_combos(5);
        assert_eq!(combos.len(), combo_count(5));
        assert_eq!(combos.len(), 15 + 15 + 18);

        assert!(combos.contains(&[p(0, 2), p(0, 3), p(0, 4)]));
        assert!(combos.contains(&[p(2, 4), p(3, 4), p(4, 4)]));
        assert!(combos.contains(&[p(1, 1), p(2, 2), p(3, 3)]));
        assert!(combos.contains(&[p(2, 4), p(3, 3), p(4, 2)]));
    }

    #[test]
    fn combos_stay_on_the_board() {
        for size in 3..=8 {
            for combo in winning_combos(size) {
                assert!(combo.iter().all(|c| c.row < size && c.col < size));
            }
        }
    }

    #[test]
    fn degenerate_sizes_have_no_lines() {
        assert!(winning_combos(0).is_empty());
        assert!(winning_combos(2).is_empty());
        assert_eq!(combo_count(2), 0);
    }

    proptest::proptest! {
        #[test]
        fn combos_are_distinct(size in 3usize..=12) {
            let combos = winning_combos(size);
            let unique: std::collections::HashSet<_> = combos.iter().collect();
            proptest::prop_assert_eq!(unique.len(), combos.len());
        }
    }
}
