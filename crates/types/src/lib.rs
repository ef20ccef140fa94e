//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game engine, session controller, terminal rendering).
//!
//! # Board Dimensions
//!
//! Boards are square, `N x N`, with rows and columns indexed `0..N`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_BOARD_SIZE` | 3 | Smallest board that has a winning line |
//! | `MAX_BOARD_SIZE` | 10 | Largest board that fits an 80x24 terminal |
//! | `DEFAULT_BOARD_SIZE` | 3 | Classic 3x3 game |
//! | `WIN_LENGTH` | 3 | Cells in a winning line, on every board size |
//!
//! # Players
//!
//! Two players take part in every game. Labels are fixed (`"X"` and `"O"`),
//! colors are opaque display attributes the engine only passes through.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Color, GameAction, Move, Player, Position};
//!
//! let x = Player::x();
//! assert_eq!(x.label, "X");
//! assert_eq!(x.color, Color::Blue);
//!
//! // Colors parse from their names (case-insensitive)
//! assert_eq!(Color::from_str("Light-Blue"), Some(Color::LightBlue));
//!
//! // An unplayed cell carries an empty label
//! let cell = Move::empty(1, 2);
//! assert!(!cell.is_played());
//! assert_eq!(cell.position(), Position::new(1, 2));
//!
//! assert_eq!(GameAction::CursorLeft.cursor_delta(), Some((0, -1)));
//! assert_eq!(GameAction::Place.cursor_delta(), None);
//! ```

/// Smallest supported board size (a 3-in-a-row needs at least 3 cells per line)
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board size
///
/// With one-row cells and grid lines a board needs `2N + 1` rows plus the
/// three header rows, so 10 is the most an 80x24 terminal shows.
pub const MAX_BOARD_SIZE: usize = 10;

/// Board size used when nothing else is configured
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Number of identical labels in a line that wins the game
pub const WIN_LENGTH: usize = 3;

/// Label of the player who moves first
pub const FIRST_LABEL: &str = "X";

/// Label of the player who moves second
pub const SECOND_LABEL: &str = "O";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_limits() {
        assert_eq!(MIN_BOARD_SIZE, WIN_LENGTH);
        assert!(DEFAULT_BOARD_SIZE >= MIN_BOARD_SIZE);
        assert!(DEFAULT_BOARD_SIZE <= MAX_BOARD_SIZE);
    }

    #[test]
    fn default_players() {
        assert_eq!(Player::x(), Player::new(FIRST_LABEL, Color::Blue));
        assert_eq!(Player::o(), Player::new(SECOND_LABEL, Color::Green));
    }

    #[test]
    fn color_names_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_str(color.name()), Some(color));
        }
        assert_eq!(Color::from_str("lightblue"), Some(Color::LightBlue));
        assert_eq!(Color::from_str("grey"), Some(Color::Gray));
        assert_eq!(Color::from_str("chartreuse"), None);
    }

    #[test]
    fn palette_cycles_and_wraps() {
        let palette = Color::PLAYER_PALETTE;
        let last = palette[palette.len() - 1];
        assert_eq!(last.next_in(palette), palette[0]);
        assert_eq!(palette[0].next_in(palette), palette[1]);
        // Colors outside the palette restart it.
        assert_eq!(Color::Black.next_in(palette), palette[0]);
    }

    #[test]
    fn move_tracks_position_and_label() {
        let mv = Move::new(2, 0, "O");
        assert!(mv.is_played());
        assert_eq!(mv.position(), Position::new(2, 0));
        assert_eq!(Move::at(Position::new(2, 0), "O"), mv);
    }
}

/// A cell coordinate on the board, zero-based `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single cell's coordinate plus the label occupying it
///
/// An empty label represents an unplayed cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub label: String,
}

impl Move {
    /// Create a move placing `label` at `(row, col)`
    pub fn new(row: usize, col: usize, label: impl Into<String>) -> Self {
        Self {
            row,
            col,
            label: label.into(),
        }
    }

    /// Create a move at a [`Position`]
    pub fn at(pos: Position, label: impl Into<String>) -> Self {
        Self::new(pos.row, pos.col, label)
    }

    /// An unplayed cell at `(row, col)`
    pub fn empty(row: usize, col: usize) -> Self {
        Self::new(row, col, String::new())
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Whether a label occupies this cell
    pub fn is_played(&self) -> bool {
        !self.label.is_empty()
    }
}

/// Display color for players and the board background
///
/// The game engine treats colors as opaque values; only the terminal view
/// maps them to actual RGB output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Cyan,
    Magenta,
    Yellow,
    White,
    LightBlue,
    Gray,
    Black,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Color; 12] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
        Color::Purple,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::White,
        Color::LightBlue,
        Color::Gray,
        Color::Black,
    ];

    /// Colors offered when a player changes color
    pub const PLAYER_PALETTE: &'static [Color] = &[
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
        Color::Purple,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
    ];

    /// Colors offered for the board background
    pub const BACKGROUND_PALETTE: &'static [Color] = &[
        Color::LightBlue,
        Color::Gray,
        Color::Black,
        Color::White,
        Color::Yellow,
        Color::Green,
    ];

    /// Parse a color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Color;
    ///
    /// assert_eq!(Color::from_str("RED"), Some(Color::Red));
    /// assert_eq!(Color::from_str("light_blue"), Some(Color::LightBlue));
    /// assert_eq!(Color::from_str("mauve"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "red" => Some(Color::Red),
            "orange" => Some(Color::Orange),
            "purple" => Some(Color::Purple),
            "cyan" => Some(Color::Cyan),
            "magenta" => Some(Color::Magenta),
            "yellow" => Some(Color::Yellow),
            "white" => Some(Color::White),
            "light-blue" | "lightblue" => Some(Color::LightBlue),
            "gray" | "grey" => Some(Color::Gray),
            "black" => Some(Color::Black),
            _ => None,
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::LightBlue => "light-blue",
            Color::Gray => "gray",
            Color::Black => "black",
        }
    }

    /// The color after `self` in `palette`, wrapping around.
    ///
    /// A color that is not part of the palette moves to the palette's first entry.
    pub fn next_in(&self, palette: &[Color]) -> Color {
        match palette.iter().position(|c| c == self) {
            Some(i) => palette[(i + 1) % palette.len()],
            None => palette.first().copied().unwrap_or(*self),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A participant: fixed label plus a user-chosen display color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub label: String,
    pub color: Color,
}

impl Player {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// Default first player: "X" in blue
    pub fn x() -> Self {
        Self::new(FIRST_LABEL, Color::Blue)
    }

    /// Default second player: "O" in green
    pub fn o() -> Self {
        Self::new(SECOND_LABEL, Color::Green)
    }

    /// Same label, different color
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            label: self.label.clone(),
            color,
        }
    }
}

/// User intents produced by the input layer and consumed by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Place the current player's label at the cursor
    Place,
    /// Start a new round, keeping scores
    Restart,
    /// Cycle the current player's color
    CyclePlayerColor,
    /// Cycle the board background color
    CycleBackground,
    /// Start over on a board one size larger (scores reset)
    GrowBoard,
    /// Start over on a board one size smaller (scores reset)
    ShrinkBoard,
    ToggleHelp,
}

impl GameAction {
    /// Cursor displacement `(d_row, d_col)` for movement actions
    pub fn cursor_delta(&self) -> Option<(isize, isize)> {
        match self {
            GameAction::CursorUp => Some((-1, 0)),
            GameAction::CursorDown => Some((1, 0)),
            GameAction::CursorLeft => Some((0, -1)),
            GameAction::CursorRight => Some((0, 1)),
            _ => None,
        }
    }
}
