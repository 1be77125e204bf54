use crate::{
    DropError, PlayError,
    core::{Board, GameStatus, Player},
};

/// A single game: board, side to move and the status after the last half-move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    half_moves: usize,
    status: GameStatus,
}

impl Game {
    /// Starts an empty game where `first` drops the first piece.
    #[must_use]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::EMPTY,
            to_move: first,
            half_moves: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Starts a game whose first piece is already placed by `opener` in `column`.
    ///
    /// The opponent of `opener` moves next.
    pub fn with_opening(column: usize, opener: Player) -> Result<Self, DropError> {
        let mut game = Self::new(opener);
        game.board.drop_piece(column, opener)?;
        game.half_moves = 1;
        game.to_move = opener.opponent();
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn half_moves(&self) -> usize {
        self.half_moves
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Drops a piece for the side to move and returns the resulting status.
    ///
    /// The turn passes to the opponent only if the drop succeeded.
    pub fn play(&mut self, column: usize) -> Result<GameStatus, PlayError> {
        if self.status.is_over() {
            return Err(PlayError::GameOver(self.status));
        }
        self.board.drop_piece(column, self.to_move)?;
        self.half_moves += 1;
        self.to_move = self.to_move.opponent();
        self.status = self.board.status();
        Ok(self.status)
    }
}
