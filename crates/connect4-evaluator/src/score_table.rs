//! Scoring engine: turns window counts into a per-cell score for each player.
//!
//! For an empty cell and a player, every window containing the cell contributes
//! `piece_base ^ count`, where `count` is that player's (blocked-rule adjusted) piece count in
//! the window. Contributions are summed per orientation and the four sums are combined with
//! the orientation weights:
//!
//! ```text
//! score = vertical·Σv + horizontal·Σh + diagonal·Σ↗ + diagonal·Σ↘
//! ```
//!
//! The exponent makes a window with three own pieces worth far more than two windows with
//! one piece each. Occupied cells always score zero.

use std::array;

use connect4_engine::{Board, Orientation, Player};

use crate::{param_set::ParamSet, window_feature::WindowFeatures};

/// A 7×6 grid of scores indexed by `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTable {
    scores: [[f64; Board::HEIGHT]; Board::WIDTH],
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::ZERO
    }
}

impl ScoreTable {
    pub const ZERO: Self = Self {
        scores: [[0.0; Board::HEIGHT]; Board::WIDTH],
    };

    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> f64 {
        self.scores[column][row]
    }

    /// Iterates `((column, row), score)` for every cell, column by column.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.scores.iter().enumerate().flat_map(|(column, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(row, &score)| ((column, row), score))
        })
    }
}

/// Score tables for both players, computed for one board and one parameter set.
///
/// # Example
///
/// ```
/// use connect4_engine::{Board, Player};
/// use connect4_evaluator::{param_set::ParamSet, score_table::ScoreTables};
///
/// let mut board = Board::EMPTY;
/// board.drop_piece(3, Player::Red).unwrap();
///
/// let tables = ScoreTables::evaluate(&board, &ParamSet::DEFAULT);
/// assert_eq!(tables.player(Player::Red).get(3, 0), 0.0);
/// assert!(tables.player(Player::Red).get(3, 1) > tables.player(Player::Yellow).get(3, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTables {
    tables: [ScoreTable; 2],
}

impl ScoreTables {
    /// Extracts window features from `board` and scores them.
    #[must_use]
    pub fn evaluate(board: &Board, params: &ParamSet) -> Self {
        Self::compute(board, &WindowFeatures::extract(board), params)
    }

    /// Scores pre-extracted `features`; `board` only decides which cells are empty.
    #[must_use]
    pub fn compute(board: &Board, features: &WindowFeatures, params: &ParamSet) -> Self {
        let base = params.piece_base();
        let mut sums = [[ScoreTable::ZERO; Orientation::ALL.len()]; 2];

        for (o, &orientation) in Orientation::ALL.iter().enumerate() {
            for window in features.orientation(orientation) {
                for player in Player::ALL {
                    let value = base.powi(i32::from(window.counts.count(player)));
                    let table = &mut sums[player.index()][o];
                    for (column, row) in window.line.cells() {
                        if board.cell(column, row).is_empty() {
                            table.scores[column][row] += value;
                        }
                    }
                }
            }
        }

        let weights = Orientation::ALL.map(|o| params.orientation_weight(o));
        let tables = array::from_fn(|p| {
            let mut combined = ScoreTable::ZERO;
            for (column, cells) in combined.scores.iter_mut().enumerate() {
                for (row, score) in cells.iter_mut().enumerate() {
                    *score = sums[p]
                        .iter()
                        .zip(weights)
                        .map(|(table, weight)| table.scores[column][row] * weight)
                        .sum();
                }
            }
            combined
        });
        Self { tables }
    }

    #[must_use]
    pub fn player(&self, player: Player) -> &ScoreTable {
        &self.tables[player.index()]
    }
}
