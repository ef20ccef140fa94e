//! Game state module - manages the complete game state
//!
//! This module ties together the core components: board, winning combos and
//! score counters. It handles move validation, win/tie detection and turn
//! management for one board size.
//!
//! Turn order is left to the caller: [`GameEngine::process_move`] never
//! toggles players and never checks validity itself. A UI is expected to run
//! `is_valid_move` -> `process_move` -> `is_tied` / `has_winner` and only then
//! decide whether to toggle the player.

use std::collections::HashSet;
use std::mem;

use log::debug;

use crate::board::Board;
use crate::combos::{winning_combos, WinningCombo};
use crate::error::{validate_board_size, GameError};
use crate::scoring::ScoreCounter;
use crate::types::{Color, Move, Player, Position};

/// Coarse game phase derived from the winner flag and the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Tied,
}

/// Complete game state for one board size
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    /// Precomputed once per engine; depends only on the board size.
    combos: Vec<WinningCombo>,
    /// Players restored by `reset_game`.
    starting_players: (Player, Player),
    current_player: Player,
    next_player: Player,
    has_winner: bool,
    winning_combo: Option<WinningCombo>,
    scores: ScoreCounter,
}

impl GameEngine {
    /// Create a new game on a `board_size` x `board_size` board with the
    /// default players ("X" in blue moves first, "O" in green second)
    pub fn new(board_size: usize) -> Result<Self, GameError> {
        Self::with_players(board_size, Player::x(), Player::o())
    }

    /// Create a new game with explicit starting players
    pub fn with_players(board_size: usize, first: Player, second: Player) -> Result<Self, GameError> {
        let board_size = validate_board_size(board_size)?;
        Ok(Self {
            board: Board::new(board_size),
            combos: winning_combos(board_size),
            current_player: first.clone(),
            next_player: second.clone(),
            starting_players: (first, second),
            has_winner: false,
            winning_combo: None,
            scores: ScoreCounter::new(),
        })
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every winning line for this board size, in evaluation order
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.combos
    }

    pub fn current_player(&self) -> &Player {
        &self.current_player
    }

    pub fn next_player(&self) -> &Player {
        &self.next_player
    }

    /// Coordinates of the line that won the game, empty while nobody has won
    pub fn winning_combo(&self) -> &[Position] {
        self.winning_combo
            .as_ref()
            .map(|combo| combo.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether a move may be played
    ///
    /// True iff no winner has been declared and the target cell is unplayed.
    /// The move's label is not compared against the current player.
    /// Coordinates outside the board are never playable.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        !self.has_winner && self.board.is_empty_at(mv.row, mv.col)
    }

    /// Write a move into the board and look for a completed line
    ///
    /// The cell is overwritten unconditionally, so callers must validate with
    /// [`is_valid_move`](Self::is_valid_move) first. Combos are scanned in
    /// generation order; the first one whose three cells share a single
    /// non-empty label becomes the winning combo.
    ///
    /// Returns [`GameError::OutOfBounds`] without touching state if the move
    /// lies outside the board.
    pub fn process_move(&mut self, mv: Move) -> Result<(), GameError> {
        let (row, col) = (mv.row, mv.col);
        if !self.board.set(mv) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            });
        }

        if let Some(combo) = self.find_completed_combo() {
            debug!("line completed at {:?}", combo);
            self.has_winner = true;
            self.winning_combo = Some(combo);
        }
        Ok(())
    }

    fn find_completed_combo(&self) -> Option<WinningCombo> {
        self.combos
            .iter()
            .find(|combo| {
                let labels: HashSet<&str> = combo
                    .iter()
                    .filter_map(|&pos| self.board.label_at(pos))
                    .collect();
                labels.len() == 1 && !labels.contains("")
            })
            .copied()
    }

    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// True iff nobody has won and every cell is labeled
    pub fn is_tied(&self) -> bool {
        !self.has_winner && self.board.is_full()
    }

    pub fn status(&self) -> GameStatus {
        if self.has_winner {
            GameStatus::Won
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Swap current and next player
    pub fn toggle_player(&mut self) {
        mem::swap(&mut self.current_player, &mut self.next_player);
    }

    /// Change the current player's display color
    pub fn set_current_player_color(&mut self, color: Color) {
        self.current_player = self.current_player.with_color(color);
    }

    /// Start a new round on the same board size
    ///
    /// Restores the starting players and their colors, clears the winner and
    /// the board. Scores are kept.
    pub fn reset_game(&mut self) {
        let (first, second) = self.starting_players.clone();
        self.current_player = first;
        self.next_player = second;
        self.has_winner = false;
        self.winning_combo = None;
        self.board.clear();
    }

    pub fn increment_score(&mut self, label: &str) {
        self.scores.increment(label);
    }

    pub fn score(&self, label: &str) -> u32 {
        self.scores.get(label)
    }

    pub fn scores(&self) -> &ScoreCounter {
        &self.scores
    }
}
