//! Status line shown above the board.

use tui_tictactoe_types::{Color, Player};

/// A message plus the color it is displayed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub color: Color,
}

impl Status {
    pub fn new(message: impl Into<String>, color: Color) -> Self {
        Self {
            message: message.into(),
            color,
        }
    }

    /// "X's Turn", in the player's color
    pub fn turn(player: &Player) -> Self {
        Self::new(format!("{}'s Turn", player.label), player.color)
    }

    pub fn tie() -> Self {
        Self::new("It's a Tie!", Color::Red)
    }

    /// Winner announcement followed by the running score
    pub fn win(winner: &Player, labels: (&str, &str), scores: (u32, u32)) -> Self {
        Self::new(
            format!(
                "Player \"{}\" Wins!  Scores: {} - {}, {} - {}",
                winner.label, labels.0, scores.0, labels.1, scores.1
            ),
            winner.color,
        )
    }
}
