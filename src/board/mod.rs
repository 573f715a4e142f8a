pub mod position;

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::Error;

pub use position::Position;

pub const CELLS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self { Player::X => Player::O, Player::O => Player::X }
    }

    pub fn symbol(self) -> char {
        match self { Player::X => 'X', Player::O => 'O' }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.symbol()) }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            other => Err(Error::Parse(format!("player '{other}'"))),
        }
    }
}

/// Row-major 3x3 grid. Index 0 is the top-left cell, 8 the bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; CELLS],
}

impl Board {
    pub fn empty() -> Self { Self::default() }

    pub fn from_cells(cells: [Option<Player>; CELLS]) -> Self { Self { cells } }

    pub fn cells(&self) -> &[Option<Player>; CELLS] { &self.cells }

    pub fn get(&self, idx: usize) -> Option<Player> { self.cells.get(idx).copied().flatten() }

    pub fn is_empty_at(&self, idx: usize) -> bool { idx < CELLS && self.cells[idx].is_none() }

    // Only the search engines and Position write cells; both own their copy.
    pub(crate) fn set(&mut self, idx: usize, p: Player) { self.cells[idx] = Some(p); }
    pub(crate) fn clear(&mut self, idx: usize) { self.cells[idx] = None; }

    /// Empty cell indices in ascending order.
    pub fn empties(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().enumerate().filter(|(_, c)| c.is_none()).map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool { self.cells.iter().all(|c| c.is_some()) }

    pub fn count(&self, p: Player) -> usize { self.cells.iter().filter(|&&c| c == Some(p)).count() }

    /// Nine characters, `-` for empty. Used as the transposition cache key prefix.
    pub fn key(&self) -> String {
        self.cells.iter().map(|c| c.map_or('-', Player::symbol)).collect()
    }

    /// Rejects boards that cannot arise from alternating play.
    pub fn validate(&self) -> Result<(), Error> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x.abs_diff(o) > 1 {
            return Err(Error::InvalidBoard(format!("mark imbalance: {x} X vs {o} O")));
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Accepts `X`, `O` and `-`/`.`/`_` for empty; whitespace, `/` and `|` are separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELLS];
        let mut n = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '/' || ch == '|' { continue; }
            let cell = match ch {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '-' | '.' | '_' => None,
                other => return Err(Error::InvalidBoard(format!("unexpected symbol '{other}'"))),
            };
            if n >= CELLS { return Err(Error::InvalidBoard(format!("more than {CELLS} cells in '{s}'"))); }
            cells[n] = cell;
            n += 1;
        }
        if n != CELLS { return Err(Error::InvalidBoard(format!("expected {CELLS} cells, got {n}"))); }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = self.cells[row * 3 + col].map_or('.', Player::symbol);
                write!(f, "{c}")?;
                if col < 2 { write!(f, " ")?; }
            }
            if row < 2 { writeln!(f)?; }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_key_roundtrip_layout() {
        let b: Board = "XOX/OXO/---".parse().unwrap();
        assert_eq!(b.key(), "XOXOXO---");
        assert_eq!(b.get(0), Some(Player::X));
        assert_eq!(b.get(6), None);
        assert_eq!(b.empties().collect::<Vec<_>>(), vec![6, 7, 8]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("XOX".parse::<Board>().is_err());
        assert!("XOXOXO---X".parse::<Board>().is_err());
        assert!("XOZOXO---".parse::<Board>().is_err());
    }

    #[test]
    fn validate_checks_imbalance() {
        let ok: Board = "XX-O-----".parse().unwrap();
        assert!(ok.validate().is_ok());
        let bad: Board = "XXX------".parse().unwrap();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn display_is_three_rows() {
        let b: Board = "X--/-O-/--X".parse().unwrap();
        assert_eq!(b.to_string(), "X . .\n. O .\n. . X");
    }
}
