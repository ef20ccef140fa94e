//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for
//! Tic-Tac-Toe generalized to N x N boards. It has **zero dependencies** on
//! UI or I/O, making it:
//!
//! - **Deterministic**: the same moves always produce the same state
//! - **Testable**: unit tests for every rule, property tests in `tests/`
//! - **Portable**: any front end (terminal, GUI, headless) binds to the same API
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid of moves with bounds-checked access
//! - [`combos`]: enumeration of every 3-in-a-row line for a board size
//! - [`game_state`]: the [`GameEngine`] - validation, win/tie detection, turns
//! - [`scoring`]: per-label win counters
//! - [`error`]: configuration and caller errors
//!
//! # Game Rules
//!
//! - Boards are square with a side between 3 and 10
//! - Three identical labels in a row, column or diagonal win, at any offset
//! - A full board without a winning line is a tie
//! - Scores survive `reset_game`; a new board size means a new engine
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameEngine;
//! use tui_tictactoe_types::{Move, Position};
//!
//! let mut game = GameEngine::new(3).unwrap();
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     let mv = Move::new(row, col, game.current_player().label.clone());
//!     assert!(game.is_valid_move(&mv));
//!     game.process_move(mv).unwrap();
//!     if !game.has_winner() {
//!         game.toggle_player();
//!     }
//! }
//!
//! assert!(game.has_winner());
//! assert_eq!(
//!     game.winning_combo(),
//!     &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
//! );
//! ```

pub mod board;
pub mod combos;
pub mod error;
pub mod game_state;
pub mod scoring;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use combos::{combo_count, winning_combos, WinningCombo};
pub use error::{validate_board_size, GameError};
pub use game_state::{GameEngine, GameStatus};
pub use scoring::ScoreCounter;
