use std::fmt;
use crate::board::{Board, Player, CELLS};
use crate::error::{Error, Result};
use crate::search::eval::{check_outcome, Outcome};

/// A board together with the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    turn: Player,
}

impl Position {
    pub fn startpos() -> Self { Self::with_first(Player::X) }

    pub fn with_first(first: Player) -> Self { Self { board: Board::empty(), turn: first } }

    pub fn new(board: Board, turn: Player) -> Self { Self { board, turn } }

    /// Side to move is X when both sides have the same number of marks.
    pub fn from_board(board: Board) -> Result<Self> {
        board.validate()?;
        let turn = if board.count(Player::X) > board.count(Player::O) { Player::O } else { Player::X };
        Ok(Self { board, turn })
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Player { self.turn }

    pub fn outcome(&self) -> Outcome { check_outcome(&self.board) }

    pub fn is_over(&self) -> bool { self.outcome() != Outcome::None }

    pub fn make_move(&mut self, idx: usize) -> Result<()> {
        if idx >= CELLS { return Err(Error::CellOutOfRange(idx)); }
        if self.is_over() { return Err(Error::GameOver); }
        if !self.board.is_empty_at(idx) { return Err(Error::CellOccupied(idx)); }
        self.board.set(idx, self.turn);
        self.turn = self.turn.opponent();
        Ok(())
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() { return Vec::new(); }
        self.board.empties().collect()
    }

    pub fn legal_moves_count(&self) -> usize { self.legal_moves().len() }

    pub fn set_from_start_and_moves(first: Player, moves: &[usize]) -> Result<Self> {
        let mut pos = Self::with_first(first);
        for &m in moves { pos.make_move(m)?; }
        Ok(pos)
    }
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.turn)
    }
}
