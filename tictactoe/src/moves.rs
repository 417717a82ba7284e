use serde::{Deserialize, Serialize};

/// A label placed on a cell, or the content of a cell.
///
/// The same type serves both purposes: every cell of the [`Board`](crate::Board)
/// holds a `Move`, and cells that have not been played yet hold one with an
/// empty label.
///
/// Coordinates are signed so that callers can hand in whatever the user typed;
/// anything off the board is rejected by [`Game::is_valid_move()`](crate::Game::is_valid_move).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i64,
    pub col: i64,
    /// Empty for an unplayed cell.
    #[serde(default)]
    pub label: String,
}

impl Move {
    pub fn new(row: i64, col: i64, label: impl Into<String>) -> Self {
        Self {
            row,
            col,
            label: label.into(),
        }
    }

    /// The content of a cell nobody has played yet.
    pub fn empty(row: i64, col: i64) -> Self {
        Self {
            row,
            col,
            label: String::new(),
        }
    }

    pub fn is_played(&self) -> bool {
        !self.label.is_empty()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_played() {
            write!(f, "{} at ({}, {})", self.label, self.row, self.col)
        } else {
            write!(f, "empty cell ({}, {})", self.row, self.col)
        }
    }
}

/// The position of a cell that is known to be on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_not_played() {
        assert!(!Move::empty(1, 2).is_played());
        assert!(Move::new(1, 2, "X").is_played());
    }

    #[test]
    fn label_defaults_to_empty_when_deserializing() {
        let mv: Move = serde_json::from_str(r#"{"row": 2, "col": 0}"#).unwrap();
        assert_eq!(mv, Move::empty(2, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Move::new(0, 2, "O").to_string(), "O at (0, 2)");
        assert_eq!(Move::empty(1, 1).to_string(), "empty cell (1, 1)");
        assert_eq!(Coord::new(3, 4).to_string(), "(3, 4)");
    }
}
