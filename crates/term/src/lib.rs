//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget/layout
//! libraries and instead renders into a simple framebuffer that is flushed to
//! the terminal with `crossterm`.
//!
//! Goals:
//! - Keep `core` and `session` free of terminal concerns
//! - Share one geometry between drawing and mouse hit-testing
//! - Redraw only what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_session as session;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, BoardLayout, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
