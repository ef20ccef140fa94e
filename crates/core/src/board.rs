//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell holds a [`Move`]: its own
//! coordinate plus the label occupying it (empty when unplayed).
//! Uses a flat vector in row-major order (row * size + col).
//! A cell's `(row, col)` always matches its grid position; only labels change.

use crate::types::{Move, Position};

/// The game board - `size` x `size` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|i| Move::empty(i / size, i % size))
            .collect();
        Self { size, cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Move> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    /// Label at a position, `None` if out of bounds
    pub fn label_at(&self, pos: Position) -> Option<&str> {
        self.get(pos.row, pos.col).map(|mv| mv.label.as_str())
    }

    /// Write a move into its cell, replacing whatever was there
    /// Returns false if out of bounds
    pub fn set(&mut self, mv: Move) -> bool {
        match self.index(mv.row, mv.col) {
            Some(idx) => {
                self.cells[idx] = mv;
                true
            }
            None => false,
        }
    }

    /// Check if a cell is in bounds and unplayed
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(mv) if !mv.is_played())
    }

    /// Check if every cell carries a label
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Move::is_played)
    }

    /// Number of labeled cells
    pub fn played_count(&self) -> usize {
        self.cells.iter().filter(|mv| mv.is_played()).count()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Move]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Reset every cell to unplayed
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.label.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(3);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 2), Some(2));
        assert_eq!(board.index(1, 0), Some(3));
        assert_eq!(board.index(2, 2), Some(8));
        assert_eq!(board.index(3, 0), None);
        assert_eq!(board.index(0, 3), None);
    }

    #[test]
    fn test_cells_know_their_position() {
        let board = Board::new(4);
        for (row, cells) in board.rows().enumerate() {
            for (col, mv) in cells.iter().enumerate() {
                assert_eq!(mv.position(), Position::new(row, col));
                assert!(!mv.is_played());
            }
        }
        assert_eq!(board.rows().count(), 4);
    }

    #[test]
    fn test_set_overwrites_and_rejects_out_of_bounds() {
        let mut board = Board::new(3);
        assert!(board.set(Move::new(1, 2, "X")));
        assert_eq!(board.label_at(Position::new(1, 2)), Some("X"));
        assert!(board.set(Move::new(1, 2, "O")));
        assert_eq!(board.label_at(Position::new(1, 2)), Some("O"));

        assert!(!board.set(Move::new(3, 0, "X")));
        assert_eq!(board.label_at(Position::new(3, 0)), None);
        assert_eq!(board.played_count(), 1);
    }

    #[test]
    fn test_full_and_clear() {
        let mut board = Board::new(3);
        assert!(!board.is_full());
        for row in 0..3 {
            for col in 0..3 {
                board.set(Move::new(row, col, "X"));
            }
        }
        assert!(board.is_full());
        assert!(!board.is_empty_at(0, 0));

        board.clear();
        assert_eq!(board, Board::new(3));
        assert!(board.is_empty_at(0, 0));
        assert!(!board.is_empty_at(5, 5));
    }
}
