//! Runtime configuration: defaults, environment variables and command line.
//!
//! Precedence is CLI flag > environment variable > default. Environment
//! values that fail to parse are ignored; CLI values that fail to parse are
//! rejected by clap.
//!
//! | Flag | Env var | Default |
//! |------|---------|---------|
//! | `-b, --board-size` | `TICTACTOE_BOARD_SIZE` | 3 |
//! | `--x-color` | `TICTACTOE_X_COLOR` | blue |
//! | `--o-color` | `TICTACTOE_O_COLOR` | green |
//! | `--background` | `TICTACTOE_BACKGROUND` | light-blue |
//! | `--log-file` | `TICTACTOE_LOG_PATH` | none |

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::validate_board_size;
use crate::session::SessionConfig;
use crate::types::{Color, Player, DEFAULT_BOARD_SIZE, FIRST_LABEL, SECOND_LABEL};

/// Command line arguments
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(author, version, about = "Tic-Tac-Toe on N x N boards, in the terminal", long_about = None)]
pub struct Cli {
    /// Board side length (3-10)
    #[arg(short, long)]
    pub board_size: Option<usize>,

    /// Color of player X
    #[arg(long, value_parser = parse_color)]
    pub x_color: Option<Color>,

    /// Color of player O
    #[arg(long, value_parser = parse_color)]
    pub o_color: Option<Color>,

    /// Board background color
    #[arg(long, value_parser = parse_color)]
    pub background: Option<Color>,

    /// Write logs to this file (the terminal is owned by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = Color::ALL.iter().map(Color::name).collect();
        format!("unknown color '{}' (expected one of: {})", s, names.join(", "))
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub board_size: usize,
    pub x_color: Color,
    pub o_color: Color,
    pub background: Color,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            x_color: Color::Blue,
            o_color: Color::Green,
            background: Color::LightBlue,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Resolve the configuration from the process environment and `cli`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = Self::from_env();
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let color = |key: &str, fallback: Color| {
            lookup(key)
                .and_then(|s| Color::from_str(&s))
                .unwrap_or(fallback)
        };

        let board_size = lookup("TICTACTOE_BOARD_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.board_size);

        let log_path = lookup("TICTACTOE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            board_size,
            x_color: color("TICTACTOE_X_COLOR", defaults.x_color),
            o_color: color("TICTACTOE_O_COLOR", defaults.o_color),
            background: color("TICTACTOE_BACKGROUND", defaults.background),
            log_path,
        }
    }

    /// Override fields with any flags given on the command line
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(size) = cli.board_size {
            self.board_size = size;
        }
        if let Some(color) = cli.x_color {
            self.x_color = color;
        }
        if let Some(color) = cli.o_color {
            self.o_color = color;
        }
        if let Some(color) = cli.background {
            self.background = color;
        }
        if let Some(path) = &cli.log_file {
            self.log_path = Some(path.clone());
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_board_size(self.board_size).context("invalid board size")?;
        Ok(())
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            board_size: self.board_size,
            first: Player::new(FIRST_LABEL, self.x_color),
            second: Player::new(SECOND_LABEL, self.o_color),
            background: self.background,
        }
    }
}
