mod lines;

use std::ops::Index;

pub use lines::*;
use serde::Serialize;

use crate::{Coord, InvalidConfig, Move};

pub const DEFAULT_BOARD_SIZE: usize = 3;

/// The largest board a [`Game`](crate::Game) accepts.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Rejects board sizes a game can't be set up with.
pub fn check_board_size(size: usize) -> Result<(), InvalidConfig> {
    match size {
        0 => Err(InvalidConfig::ZeroBoardSize),
        size if size > MAX_BOARD_SIZE => Err(InvalidConfig::BoardTooLarge { size }),
        _ => Ok(()),
    }
}

/// A square grid where every cell holds a [`Move`].
///
/// Unplayed cells hold a move with an empty label, and the coordinates stored
/// in each move always equal the cell's own position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Row-major, always `size * size` entries.
    cells: Vec<Move>,
    size: usize,
}

impl Board {
    /// Creates a board with all cells empty.
    pub fn new(size: usize) -> Self {
        let mut board = Self {
            cells: Vec::with_capacity(size * size),
            size,
        };
        board.clear();
        board
    }

    /// The number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, row: i64, col: i64) -> bool {
        self.coord(row, col).is_some()
    }

    /// Converts signed coordinates to a [`Coord`] if they lie on the board.
    pub fn coord(&self, row: i64, col: i64) -> Option<Coord> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.size)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.size)?;
        Some(Coord { row, col })
    }

    /// Returns `None` if the coordinates are off the board.
    pub fn get(&self, row: i64, col: i64) -> Option<&Move> {
        self.coord(row, col).map(|coord| &self[coord])
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        !self[coord].is_played()
    }

    /// Are there no empty cells left?
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Move::is_played)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Move> {
        self.cells.iter()
    }

    /// One slice per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Move]> {
        // chunks() panics on a chunk size of 0
        self.cells.chunks(self.size.max(1))
    }

    /// The label shared by every cell of `combo`, if there is one and it's
    /// not the empty label.
    pub fn line_owner(&self, combo: &[Coord]) -> Option<&str> {
        let (first, rest) = combo.split_first()?;
        let label = self[*first].label.as_str();
        if label.is_empty() || rest.iter().any(|&coord| self[coord].label != label) {
            None
        } else {
            Some(label)
        }
    }

    /// Overwrites a cell. The coordinates of `mv` must match `coord`.
    pub(crate) fn set(&mut self, coord: Coord, mv: Move) {
        debug_assert_eq!(
            (mv.row, mv.col),
            (coord.row as i64, coord.col as i64),
            "move stored at the wrong position"
        );
        let idx = self.index_of(coord);
        self.cells[idx] = mv;
    }

    /// Empties every cell.
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
        for row in 0..self.size {
            for col in 0..self.size {
                self.cells.push(Move::empty(row as i64, col as i64));
            }
        }
    }

    fn index_of(&self, coord: Coord) -> usize {
        debug_assert!(coord.row < self.size && coord.col < self.size);
        coord.row * self.size + coord.col
    }
}

impl Index<Coord> for Board {
    type Output = Move;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.index_of(coord)]
    }
}
