//! Move policies: who decides the next column for a player.
//!
//! A [`MovePolicy`] only inspects the board; applying the move is left to the caller, so game
//! loops can drive heuristic players and other move sources (e.g. a human at a terminal)
//! through the same interface.

use std::fmt;

use connect4_engine::{Board, Player};

use crate::{
    move_selector::{self, ColumnChoice},
    param_set::ParamSet,
    score_table::ScoreTables,
};

/// Chooses a column for the side to move.
pub trait MovePolicy: fmt::Debug + Send + Sync {
    /// Returns an open column for `mover`, or `None` if the board is full.
    fn choose_column(&self, board: &Board, mover: Player) -> Option<ColumnChoice>;
}

/// Plays the column picked by the move selector under a fixed parameter set.
///
/// # Example
///
/// ```
/// use connect4_engine::{Board, Player};
/// use connect4_evaluator::{
///     param_set::ParamSet,
///     policy::{HeuristicPolicy, MovePolicy},
/// };
///
/// let policy = HeuristicPolicy::new(ParamSet::DEFAULT);
/// let choice = policy.choose_column(&Board::EMPTY, Player::Yellow).unwrap();
/// assert_eq!(choice.column, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicPolicy {
    params: ParamSet,
}

impl HeuristicPolicy {
    #[must_use]
    pub const fn new(params: ParamSet) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &ParamSet {
        &self.params
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose_column(&self, board: &Board, mover: Player) -> Option<ColumnChoice> {
        let tables = ScoreTables::evaluate(board, &self.params);
        move_selector::select_column(board, &tables, mover, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_play_move() {
        let policy = HeuristicPolicy::new(ParamSet::DEFAULT);
        let mut board = Board::EMPTY;
        let mut mover = Player::Red;
        while board.status().is_in_progress() {
            let chosen = policy.choose_column(&board, mover).unwrap().column;
            let mut played = board.clone();
            let column = move_selector::play_move(&mut played, mover, policy.params()).unwrap();
            assert_eq!(chosen, column);
            board = played;
            mover = mover.opponent();
        }
        assert_eq!(policy.choose_column(&board, mover).is_some(), !board.is_full());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let policies: [Box<dyn MovePolicy>; 2] = [
            Box::new(HeuristicPolicy::new(ParamSet::DEFAULT)),
            Box::new(HeuristicPolicy::new(
                ParamSet::new(6.0, 2.0, 0.6, 1.0, 0.5, 0.5).unwrap(),
            )),
        ];
        for policy in &policies {
            let choice = policy.choose_column(&Board::EMPTY, Player::Red).unwrap();
            assert!(choice.column < Board::WIDTH);
        }
    }
}
