//! Connect-Four rules: the board, its line geometry, and a single game session.
//!
//! - [`Board`] - 7×6 grid with gravity-stacking placement and terminal detection
//! - [`Line`] / [`Orientation`] - every straight run of four cells on the board
//! - [`Game`] - a board plus turn order and the current [`GameStatus`]
//!
//! The crate knows nothing about evaluation; see `connect4-evaluator` for move selection.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("column {column} is out of range (0..{})", Board::WIDTH)]
pub struct ColumnOutOfRangeError {
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("column {column} is full")]
pub struct ColumnFullError {
    pub column: usize,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum DropError {
    #[display("{_0}")]
    OutOfRange(ColumnOutOfRangeError),
    #[display("{_0}")]
    ColumnFull(ColumnFullError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    #[display("game is already over ({_0})")]
    GameOver(#[error(not(source))] GameStatus),
    #[display("{_0}")]
    Drop(DropError),
}

impl From<DropError> for PlayError {
    fn from(err: DropError) -> Self {
        Self::Drop(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("expected {expected} cells, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[display("unexpected character {ch:?} at index {index}")]
    InvalidCell { index: usize, ch: char },
    #[display("floating piece at column {column}, row {row}")]
    FloatingPiece { column: usize, row: usize },
}
