/// The error type for [`Game::check_move()`](crate::Game::check_move), i.e. why a move may not be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { row: i64, col: i64 },
    CellOccupied { row: i64, col: i64, occupant: String },
    EmptyLabel,
    NotActivePlayer { expected: String, got: String },
    GameAlreadyWon,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { row, col } =>
                write!(f, "Cell ({}, {}) is outside of the board", row, col),
            IllegalMove::CellOccupied { row, col, occupant } =>
                write!(f, "Cell ({}, {}) was already played by {}", row, col, occupant),
            IllegalMove::EmptyLabel =>
                write!(f, "A move needs a non-empty label"),
            IllegalMove::NotActivePlayer { expected, got } =>
                write!(f, "It is {}'s turn, but {} tried to move", expected, got),
            IllegalMove::GameAlreadyWon =>
                write!(f, "The game already has a winner"),
        }
    }
}

/// The error type for constructing a [`Game`](crate::Game).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidConfig {
    NoPlayers,
    ZeroBoardSize,
    BoardTooLarge { size: usize },
}

impl std::error::Error for InvalidConfig {}

impl std::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidConfig::NoPlayers => write!(f, "A game needs at least one player"),
            InvalidConfig::ZeroBoardSize => write!(f, "The board size must be at least 1"),
            InvalidConfig::BoardTooLarge { size } => write!(
                f,
                "A board size of {} is larger than the maximum of {}",
                size,
                crate::MAX_BOARD_SIZE
            ),
        }
    }
}
