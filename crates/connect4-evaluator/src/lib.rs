//! Heuristic evaluation and move selection for Connect Four.
//!
//! The evaluator is a pipeline of pure functions over a [`Board`](connect4_engine::Board):
//!
//! ```text
//! WindowFeatures (per-window piece counts, blocked windows zeroed)
//!     ↓
//! ScoreTables (per-cell score for each player, weighted by a ParamSet)
//!     ↓
//! move_selector (one-ply blend of offense, defense and lookahead)
//! ```
//!
//! 1. **Window features** ([`window_feature`]) - counts each player's pieces in all 69 lines
//!    of four. Windows holding both colors are dead and count as empty.
//! 2. **Score tables** ([`score_table`]) - sums `piece_base ^ count` over the windows through
//!    every empty cell and weights the sums by orientation.
//! 3. **Move selection** ([`move_selector`]) - values every open column from the score tables
//!    and picks the best one.
//!
//! All weights live in a [`ParamSet`](param_set::ParamSet), which is what the training crate
//! tunes. [`policy`] wraps the selector behind the [`MovePolicy`](policy::MovePolicy) trait so
//! game loops can mix it with other move sources.
//!
//! Nothing here searches deeper than one ply; strength comes entirely from the weights.
//!
//! # Example
//!
//! ```
//! use connect4_engine::{Board, Player};
//! use connect4_evaluator::{move_selector, param_set::ParamSet};
//!
//! let mut board = Board::EMPTY;
//! for _ in 0..3 {
//!     board.drop_piece(2, Player::Red).unwrap();
//! }
//!
//! // Yellow blocks the vertical three.
//! let column = move_selector::play_move(&mut board, Player::Yellow, &ParamSet::DEFAULT).unwrap();
//! assert_eq!(column, 2);
//! ```

pub mod move_selector;
pub mod param_set;
pub mod policy;
pub mod score_table;
pub mod window_feature;

/// Returned when a move is requested on a board with no open column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal move: the board is full")]
pub struct NoLegalMoveError;
