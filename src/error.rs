use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("cannot parse {0}")]
    Parse(String),
    #[error("cell {0} is out of range (expected 0..=8)")]
    CellOutOfRange(usize),
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
    #[error("game is already over")]
    GameOver,
    #[error("it is not this side's turn to move")]
    NotYourTurn,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
