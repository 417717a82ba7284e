use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    check_board_size, default_players, winning_combos, Board, Coord, GameConfig, IllegalMove,
    InvalidConfig, Move, Player, WinningCombo, DEFAULT_BOARD_SIZE,
};

/// Where a game stands, derived from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Tied,
}

/// The rules engine: owns the board and decides which moves are legal, who
/// won, and whose turn it is.
///
/// Playing a turn takes several calls, and the caller decides when to make them:
///
/// 1. [`Self::is_valid_move()`] (or [`Self::check_move()`] to learn why not),
/// 2. [`Self::submit_move()`],
/// 3. [`Self::has_winner()`] / [`Self::is_tied()`],
/// 4. [`Self::toggle_active_player()`].
///
/// [`Self::play_move()`] bundles the first three.
#[derive(Clone, Debug)]
pub struct Game {
    /// Never empty.
    players: Vec<Player>,
    active_player_idx: usize,
    board: Board,
    /// Computed once from the board size.
    winning_combos: Vec<WinningCombo>,
    /// Set by `submit_move()` when a move completes a line.
    winning_combo: Option<WinningCombo>,
}

impl Default for Game {
    /// `X` against `O` on a 3 x 3 board.
    fn default() -> Self {
        Self::build(default_players(), DEFAULT_BOARD_SIZE)
    }
}

impl Game {
    /// Creates a game with an empty board, where the first of `players` moves first.
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, InvalidConfig> {
        if players.is_empty() {
            return Err(InvalidConfig::NoPlayers);
        }
        check_board_size(board_size)?;
        Ok(Self::build(players, board_size))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, InvalidConfig> {
        Self::new(config.players.clone(), config.board_size)
    }

    fn build(players: Vec<Player>, board_size: usize) -> Self {
        debug!(num_players = players.len(), board_size, "Setting up a new game");
        Self {
            players,
            active_player_idx: 0,
            board: Board::new(board_size),
            winning_combos: winning_combos(board_size),
            winning_combo: None,
        }
    }

    /// Is `mv` a legal move for the active player right now?
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Like [`Self::is_valid_move()`], but says what is wrong with the move.
    ///
    /// If several things are wrong, the first of these is reported: being
    /// out of bounds, an occupied cell, an empty label, the wrong player, and
    /// the game having been won already.
    pub fn check_move(&self, mv: &Move) -> Result<(), IllegalMove> {
        let coord = self
            .board
            .coord(mv.row, mv.col)
            .ok_or(IllegalMove::OutOfBounds {
                row: mv.row,
                col: mv.col,
            })?;
        let occupant = &self.board[coord];
        if occupant.is_played() {
            return Err(IllegalMove::CellOccupied {
                row: mv.row,
                col: mv.col,
                occupant: occupant.label.clone(),
            });
        }
        if !mv.is_played() {
            return Err(IllegalMove::EmptyLabel);
        }
        let active_player = self.active_player();
        if mv.label != active_player.label {
            return Err(IllegalMove::NotActivePlayer {
                expected: active_player.label.clone(),
                got: mv.label.clone(),
            });
        }
        if self.has_winner() {
            return Err(IllegalMove::GameAlreadyWon);
        }
        Ok(())
    }

    /// Writes `mv` onto the board and records the line it completes, if any.
    ///
    /// This does not check whether the move is legal; the cell is overwritten
    /// no matter what is on it. Call [`Self::is_valid_move()`] first.
    /// Moves that lie off the board can't be written and are ignored.
    pub fn submit_move(&mut self, mv: Move) {
        let Some(coord) = self.board.coord(mv.row, mv.col) else {
            warn!(row = mv.row, col = mv.col, "Ignoring move outside of the board");
            return;
        };
        trace!(row = mv.row, col = mv.col, label = %mv.label, "Submitting move");
        self.board.set(coord, mv);

        // An unchecked write may have broken the recorded line
        if self
            .winning_combo
            .as_ref()
            .is_some_and(|combo| combo.contains(&coord) && self.board.line_owner(combo).is_none())
        {
            debug!(row = coord.row, col = coord.col, "Recorded line was overwritten");
            self.winning_combo = None;
        }

        let label = self.board[coord].label.as_str();
        // First match in table order wins when several lines are completed at once
        let completed = self
            .winning_combos
            .iter()
            .find(|combo| combo.contains(&coord) && self.board.line_owner(combo) == Some(label))
            .cloned();
        if let Some(combo) = completed {
            debug!(label = %self.board[coord].label, line = ?combo, "Line completed");
            self.winning_combo = Some(combo);
        }
    }

    /// Checks, plays and evaluates a move in one step.
    ///
    /// On success the move is on the board and the resulting status is
    /// returned. The active player is not changed.
    pub fn play_move(&mut self, mv: Move) -> Result<GameStatus, IllegalMove> {
        self.check_move(&mv)?;
        self.submit_move(mv);
        Ok(self.status())
    }

    /// Is there a line on the board whose cells all carry the same label?
    ///
    /// This looks at the board itself rather than at what `submit_move()` recorded.
    pub fn has_winner(&self) -> bool {
        self.winning_combos
            .iter()
            .any(|combo| self.board.line_owner(combo).is_some())
    }

    /// Is the board full without anybody having won?
    pub fn is_tied(&self) -> bool {
        !self.has_winner() && self.board.is_full()
    }

    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Hands the turn to the next player, wrapping around after the last one.
    pub fn toggle_active_player(&mut self) {
        match (self.active_player_idx + 1).checked_rem(self.players.len()) {
            Some(idx) => {
                self.active_player_idx = idx;
                trace!(player = %self.players[idx].label, "Active player changed");
            }
            None => {
                warn!(
                    player_idx = self.active_player_idx,
                    "No next player to switch to, keeping the active one"
                );
            }
        }
    }

    /// Empties the board and forgets the winner.
    ///
    /// The active player stays the same.
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.winning_combo = None;
        debug!(player = %self.active_player().label, "Game reset");
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active_player_idx]
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The line recorded by the move that won the game, or an empty slice.
    pub fn winning_combo(&self) -> &[Coord] {
        self.winning_combo.as_deref().unwrap_or_default()
    }

    /// Every line on the board, in the order they are checked.
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.winning_combos
    }

    /// The player who owns the recorded winning line.
    pub fn winner(&self) -> Option<&Player> {
        let label = self.board.line_owner(self.winning_combo.as_deref()?)?;
        self.players.iter().find(|player| player.label == label)
    }
}
