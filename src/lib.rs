// Tic-tac-toe engine: instrumented minimax and alpha-beta search
pub mod board;
pub mod error;
pub mod search;
pub mod session;
pub mod selfplay;
pub mod verify;

pub use board::{Board, Player, Position};
pub use error::{Error, Result};
pub use search::{select_move, Algorithm, Metrics, SearchResult};
