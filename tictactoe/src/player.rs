use serde::{Deserialize, Serialize};

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// The symbol this player puts on the board.
    ///
    /// This also identifies whose turn it is, so it should be unique among
    /// the players of one game.
    pub label: String,
    /// Only meaningful to whoever renders the board.
    pub color: String,
}

impl Player {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// The classic pair: `X` in blue moves first, then `O` in red.
pub fn default_players() -> Vec<Player> {
    vec![Player::new("X", "blue"), Player::new("O", "red")]
}
