use crate::board::{Board, Player};

/// Rows, then columns, then diagonals. Detection order follows this table.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    None,
    Win { player: Player, line: [usize; 3] },
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool { !matches!(self, Outcome::None) }

    pub fn winner(&self) -> Option<Player> {
        match self { Outcome::Win { player, .. } => Some(*player), _ => None }
    }
}

pub fn check_outcome(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(p) = board.get(a) {
            if board.get(b) == Some(p) && board.get(c) == Some(p) {
                return Outcome::Win { player: p, line };
            }
        }
    }
    if board.is_full() { Outcome::Draw } else { Outcome::None }
}

// Fixed magnitude: a win is +10 however many plies away it is.
pub fn score(outcome: &Outcome, perspective: Player) -> Option<i32> {
    match outcome {
        Outcome::None => None,
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Win { player, .. } => Some(if *player == perspective { WIN_SCORE } else { LOSS_SCORE }),
    }
}

/// Terminal score of `board` for `perspective`, `None` while the game continues.
pub fn evaluate(board: &Board, perspective: Player) -> Option<i32> {
    score(&check_outcome(board), perspective)
}
