//! Move selection: one-ply blend of offense, defense and lookahead over the score tables.
//!
//! For every open column, with `row` its lowest empty row:
//!
//! ```text
//! own       = score[mover][column][row]
//! defense   = score[opponent][column][row] · opponent_block
//! lookahead = score[opponent][column][row + 1] · next_move   (0 on the top row)
//! value     = own + defense - lookahead
//! ```
//!
//! The column with the strictly greatest value wins, scanning left to right. The scan starts
//! from column 3 with a value of -1, so column 3 is kept when no open column beats -1. If the
//! kept column is full, the leftmost open column is played instead (the fallback).

use connect4_engine::{Board, Player};

use crate::{NoLegalMoveError, param_set::ParamSet, score_table::ScoreTables};

/// Column picked before any value is compared.
pub const DEFAULT_COLUMN: usize = 3;
/// Value a column has to beat to replace [`DEFAULT_COLUMN`].
pub const INITIAL_BEST_VALUE: f64 = -1.0;

/// The selector's decision for one move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnChoice {
    pub column: usize,
    /// Value of the chosen column, `None` when the column came from the fallback path.
    pub value: Option<f64>,
    /// Set when the best-value column was full and the leftmost open column was used.
    pub used_fallback: bool,
}

/// Computes the value of every column; full columns get `None`.
#[must_use]
pub fn column_values(
    board: &Board,
    tables: &ScoreTables,
    mover: Player,
    params: &ParamSet,
) -> [Option<f64>; Board::WIDTH] {
    let own = tables.player(mover);
    let opponent = tables.player(mover.opponent());
    std::array::from_fn(|column| {
        let row = board.lowest_open_row(column)?;
        let mut value = own.get(column, row) + opponent.get(column, row) * params.opponent_block();
        if row < Board::TOP_ROW {
            value -= opponent.get(column, row + 1) * params.next_move();
        }
        Some(value)
    })
}

/// Picks a column for `mover`, or `None` if the board is full.
#[must_use]
pub fn select_column(
    board: &Board,
    tables: &ScoreTables,
    mover: Player,
    params: &ParamSet,
) -> Option<ColumnChoice> {
    let mut best = ColumnChoice {
        column: DEFAULT_COLUMN,
        value: None,
        used_fallback: false,
    };
    let mut best_value = INITIAL_BEST_VALUE;
    for (column, value) in column_values(board, tables, mover, params)
        .into_iter()
        .enumerate()
    {
        if let Some(value) = value
            && value > best_value
        {
            best_value = value;
            best.column = column;
            best.value = Some(value);
        }
    }

    if board.is_column_full(best.column) {
        let column = board.open_columns().next()?;
        log::warn!(
            "column {} is full, falling back to column {column} for {mover}",
            best.column
        );
        return Some(ColumnChoice {
            column,
            value: None,
            used_fallback: true,
        });
    }
    Some(best)
}

/// Chooses a column for `mover` with `params` and drops the piece there.
///
/// This is the move request used by game loops: features, scores and selection are
/// recomputed from the current board on every call.
///
/// # Example
///
/// ```
/// use connect4_engine::{Board, Player};
/// use connect4_evaluator::{move_selector, param_set::ParamSet};
///
/// let mut board = Board::EMPTY;
/// let column = move_selector::play_move(&mut board, Player::Red, &ParamSet::DEFAULT).unwrap();
/// assert_eq!(column, 3);
/// assert_eq!(board.piece_count(), 1);
/// ```
pub fn play_move(
    board: &mut Board,
    mover: Player,
    params: &ParamSet,
) -> Result<usize, NoLegalMoveError> {
    let tables = ScoreTables::evaluate(board, params);
    let choice = select_column(board, &tables, mover, params).ok_or(NoLegalMoveError)?;
    board
        .drop_piece(choice.column, mover)
        .map_err(|_| NoLegalMoveError)?;
    Ok(choice.column)
}
