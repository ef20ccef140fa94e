//! Terminal input module.
//!
//! This module is intentionally independent of any game logic. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! terminal click coordinates.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, left_click, should_quit};
