//! Session controller (front-end facing).
//!
//! A [`Session`] owns one [`GameEngine`] plus the display-only state a front
//! end needs: cursor, the color each cell was painted with, the background
//! color and the status line. It applies [`GameAction`]s exactly the way a
//! click handler does:
//!
//! 1. reject the move unless `is_valid_move`
//! 2. paint the cell in the current player's color and `process_move`
//! 3. tie -> announce it; win -> bump the winner's score; otherwise toggle
//!
//! Nothing here touches the terminal, so every flow is unit-testable.

pub mod status;

use log::{debug, info};

use tui_tictactoe_core::{validate_board_size, GameEngine, GameError};
use tui_tictactoe_types::{Color, GameAction, Move, Player, Position, DEFAULT_BOARD_SIZE};

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use status::Status;

/// Starting parameters for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub board_size: usize,
    pub first: Player,
    pub second: Player,
    pub background: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            first: Player::x(),
            second: Player::o(),
            background: Color::LightBlue,
        }
    }
}

/// Result of trying to play a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Cell already taken or the round is over
    Rejected,
    /// Move accepted, turn passed to the other player
    Continue,
    /// Move completed a line for `label`
    Won { label: String },
    /// Move filled the board without a winner
    Tied,
}

#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    first: Player,
    second: Player,
    cursor: Position,
    /// Color each cell was painted with when played (row-major).
    painted: Vec<Option<Color>>,
    background: Color,
    status: Status,
    show_help: bool,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        let engine = GameEngine::with_players(
            config.board_size,
            config.first.clone(),
            config.second.clone(),
        )?;
        let size = engine.board_size();
        let status = Status::turn(engine.current_player());
        Ok(Self {
            engine,
            first: config.first,
            second: config.second,
            cursor: Position::default(),
            painted: vec![None; size * size],
            background: config.background,
            status,
            show_help: false,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn board_size(&self) -> usize {
        self.engine.board_size()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Color the cell at `pos` was painted with, if it has been played
    pub fn cell_color(&self, pos: Position) -> Option<Color> {
        let size = self.board_size();
        if pos.row >= size || pos.col >= size {
            return None;
        }
        self.painted[pos.row * size + pos.col]
    }

    /// Apply a user action.
    ///
    /// Returns the move outcome for [`GameAction::Place`], `None` otherwise.
    pub fn apply(&mut self, action: GameAction) -> Option<MoveOutcome> {
        if let Some((d_row, d_col)) = action.cursor_delta() {
            self.move_cursor(d_row, d_col);
            return None;
        }

        match action {
            GameAction::Place => return Some(self.play(self.cursor)),
            GameAction::Restart => self.restart(),
            GameAction::CyclePlayerColor => self.cycle_player_color(),
            GameAction::CycleBackground => self.cycle_background(),
            GameAction::GrowBoard => self.step_board_size(1),
            GameAction::ShrinkBoard => self.step_board_size(-1),
            GameAction::ToggleHelp => self.show_help = !self.show_help,
            GameAction::CursorUp
            | GameAction::CursorDown
            | GameAction::CursorLeft
            | GameAction::CursorRight => {}
        }
        None
    }

    /// Move the cursor, clamped to the board
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let max = self.board_size().saturating_sub(1);
        self.cursor = Position::new(
            self.cursor.row.saturating_add_signed(d_row).min(max),
            self.cursor.col.saturating_add_signed(d_col).min(max),
        );
    }

    /// Place the cursor on a cell (e.g. after a mouse click)
    pub fn set_cursor(&mut self, pos: Position) {
        let max = self.board_size().saturating_sub(1);
        self.cursor = Position::new(pos.row.min(max), pos.col.min(max));
    }

    /// Play the current player's label at `pos`
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        let player = self.engine.current_player().clone();
        let mv = Move::at(pos, player.label.clone());
        if !self.engine.is_valid_move(&mv) {
            debug!("rejected {} at {}", player.label, pos);
            return MoveOutcome::Rejected;
        }

        if self.engine.process_move(mv).is_err() {
            return MoveOutcome::Rejected;
        }
        let size = self.board_size();
        self.painted[pos.row * size + pos.col] = Some(player.color);
        debug!("{} played {}", player.label, pos);

        if self.engine.is_tied() {
            info!("round tied on {}x{} board", size, size);
            self.status = Status::tie();
            MoveOutcome::Tied
        } else if self.engine.has_winner() {
            self.engine.increment_score(&player.label);
            info!(
                "{} wins with {:?}, score now {:?}",
                player.label,
                self.engine.winning_combo(),
                self.score_pair()
            );
            self.status = Status::win(&player, self.labels(), self.score_pair());
            MoveOutcome::Won {
                label: player.label,
            }
        } else {
            self.engine.toggle_player();
            self.status = Status::turn(self.engine.current_player());
            MoveOutcome::Continue
        }
    }

    /// Start a new round on the same board, keeping scores
    pub fn restart(&mut self) {
        self.engine.reset_game();
        self.painted.fill(None);
        self.cursor = Position::default();
        self.status = Status::turn(self.engine.current_player());
        info!("round restarted");
    }

    /// Replace the game with one on a `size` x `size` board. Scores reset.
    pub fn resize_board(&mut self, size: usize) -> Result<(), GameError> {
        let size = validate_board_size(size)?;
        self.engine = GameEngine::with_players(size, self.first.clone(), self.second.clone())?;
        self.painted = vec![None; size * size];
        self.cursor = Position::default();
        self.status = Status::turn(self.engine.current_player());
        info!("board resized to {}x{}", size, size);
        Ok(())
    }

    fn step_board_size(&mut self, delta: isize) {
        let target = self.board_size().saturating_add_signed(delta);
        if let Err(err) = self.resize_board(target) {
            debug!("resize ignored: {}", err);
        }
    }

    /// Give the current player the next color from the player palette
    pub fn cycle_player_color(&mut self) {
        let color = self
            .engine
            .current_player()
            .color
            .next_in(Color::PLAYER_PALETTE);
        self.engine.set_current_player_color(color);
        self.status = Status::turn(self.engine.current_player());
        info!("{} now plays in {}", self.engine.current_player().label, color);
    }

    /// Move to the next background color
    pub fn cycle_background(&mut self) {
        self.background = self.background.next_in(Color::BACKGROUND_PALETTE);
        info!("background set to {}", self.background);
    }

    /// Scores of the two players as `(first, second)`
    pub fn score_pair(&self) -> (u32, u32) {
        (
            self.engine.score(&self.first.label),
            self.engine.score(&self.second.label),
        )
    }

    /// Labels of the two players as `(first, second)`
    pub fn labels(&self) -> (&str, &str) {
        (&self.first.label, &self.second.label)
    }
}
