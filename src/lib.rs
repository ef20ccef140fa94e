//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tictactoe::{core,session,input,term,types}`
//! and hosts the runtime [`config`] shared by the binary and the tests.

pub mod config;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_session as session;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
