use crate::{ColumnFullError, ColumnOutOfRangeError, DropError};

use super::{
    line::Line,
    player::{Cell, Player},
};

/// Verdict of [`Board::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("{_0} wins")]
    Won(Player),
    #[display("draw")]
    Draw,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !self.is_in_progress()
    }

    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// The 7×6 Connect-Four grid.
///
/// Columns are indexed `0..7` left to right and rows `0..6` bottom to top. Pieces only
/// enter through [`Board::drop_piece`], so a cell is occupied only if every cell below
/// it in the same column is occupied.
///
/// # Example
///
/// ```
/// use connect4_engine::{Board, Cell, Player};
///
/// let mut board = Board::EMPTY;
/// assert_eq!(board.drop_piece(3, Player::Red), Ok(0));
/// assert_eq!(board.drop_piece(3, Player::Yellow), Ok(1));
/// assert_eq!(board.cell(3, 1), Cell::Piece(Player::Yellow));
/// assert_eq!(board.lowest_open_row(3), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [[Cell; Board::HEIGHT]; Board::WIDTH],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = 7;
    pub const HEIGHT: usize = 6;
    pub const TOP_ROW: usize = Self::HEIGHT - 1;
    pub const CELL_COUNT: usize = Self::WIDTH * Self::HEIGHT;

    pub const EMPTY: Self = Self {
        columns: [[Cell::Empty; Self::HEIGHT]; Self::WIDTH],
    };

    /// Clears every cell.
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Returns the cell at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.columns[column][row]
    }

    /// Returns the lowest empty row of `column`, or `None` if the column is full.
    ///
    /// # Panics
    ///
    /// Panics if `column` is outside the board.
    #[must_use]
    pub fn lowest_open_row(&self, column: usize) -> Option<usize> {
        self.columns[column].iter().position(|cell| cell.is_empty())
    }

    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        !self.columns[column][Self::TOP_ROW].is_empty()
    }

    /// Iterates columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::WIDTH).filter(|&column| !self.is_column_full(column))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.open_columns().next().is_none()
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Places a piece for `player` on top of `column` and returns the row it landed in.
    ///
    /// The board is left unchanged on error.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, DropError> {
        if column >= Self::WIDTH {
            return Err(ColumnOutOfRangeError { column }.into());
        }
        let row = self
            .lowest_open_row(column)
            .ok_or(ColumnFullError { column })?;
        self.columns[column][row] = Cell::Piece(player);
        Ok(row)
    }

    /// Sets a cell without enforcing gravity. Used by the text parser, which validates
    /// gravity itself.
    pub(crate) fn set_cell(&mut self, column: usize, row: usize, cell: Cell) {
        self.columns[column][row] = cell;
    }

    /// Checks for four in a row in any orientation, then for a draw.
    ///
    /// A draw is declared when the top row is completely filled without a winner.
    /// Orientations are scanned vertical, horizontal, diagonal-up, diagonal-down and the
    /// first complete line found decides the winner.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        for line in Line::all() {
            let [first, rest @ ..] = line.cells().map(|(c, r)| self.cell(c, r));
            if let Some(player) = first.player()
                && rest.iter().all(|&cell| cell == first)
            {
                return GameStatus::Won(player);
            }
        }
        if (0..Self::WIDTH).all(|column| self.is_column_full(column)) {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    /// Iterates rows from top to bottom, each as a left-to-right slice of cells.
    pub fn rows_top_down(&self) -> impl Iterator<Item = [Cell; Board::WIDTH]> + '_ {
        (0..Self::HEIGHT)
            .rev()
            .map(|row| std::array::from_fn(|column| self.cell(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn board_with(moves: &[(usize, Player)]) -> Board {
        let mut board = Board::EMPTY;
        for &(column, player) in moves {
            board.drop_piece(column, player).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::EMPTY;
        for column in 0..Board::WIDTH {
            assert_eq!(board.lowest_open_row(column), Some(0));
            for row in 0..Board::HEIGHT {
                assert!(board.cell(column, row).is_empty());
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_drop_stacks_with_gravity() {
        let mut board = Board::EMPTY;
        for row in 0..Board::HEIGHT {
            assert_eq!(board.drop_piece(4, Player::Red), Ok(row));
        }
        assert!(board.is_column_full(4));
        assert_eq!(board.lowest_open_row(4), None);
        assert_eq!(
            board.drop_piece(4, Player::Yellow),
            Err(DropError::ColumnFull(ColumnFullError { column: 4 })),
        );
        assert_eq!(board.piece_count(), Board::HEIGHT);
    }

    #[test]
    fn test_drop_out_of_range() {
        let mut board = Board::EMPTY;
        assert_eq!(
            board.drop_piece(Board::WIDTH, Player::Red),
            Err(DropError::OutOfRange(ColumnOutOfRangeError { column: 7 })),
        );
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_reset() {
        let mut board = board_with(&[(0, Player::Red), (1, Player::Yellow)]);
        board.reset();
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[
            (2, Player::Yellow),
            (2, Player::Yellow),
            (2, Player::Yellow),
            (2, Player::Yellow),
        ]);
        assert_eq!(board.status(), GameStatus::Won(Player::Yellow));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[
            (3, Player::Red),
            (4, Player::Red),
            (5, Player::Red),
            (6, Player::Red),
        ]);
        assert_eq!(board.status(), GameStatus::Won(Player::Red));
    }

    #[test]
    fn test_diagonal_up_win() {
        use Player::{Red as R, Yellow as Y};
        let board = board_with(&[
            (0, R),
            (1, Y),
            (1, R),
            (2, Y),
            (2, Y),
            (2, R),
            (3, Y),
            (3, Y),
            (3, Y),
            (3, R),
        ]);
        assert_eq!(board.status(), GameStatus::Won(R));
    }

    #[test]
    fn test_diagonal_down_win() {
        use Player::{Red as R, Yellow as Y};
        let board = board_with(&[
            (6, Y),
            (5, R),
            (5, Y),
            (4, R),
            (4, R),
            (4, Y),
            (3, R),
            (3, R),
            (3, R),
            (3, Y),
        ]);
        assert_eq!(board.status(), GameStatus::Won(Y));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board_with(&[(0, Player::Red), (1, Player::Red), (2, Player::Red)]);
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // Rows alternate RRYYRRY / YYRRYYR, which never produces four in a row.
        let mut board = Board::EMPTY;
        for row in 0..Board::HEIGHT {
            for column in 0..Board::WIDTH {
                let red = (column / 2) % 2 == row % 2;
                let player = if red { Player::Red } else { Player::Yellow };
                board.drop_piece(column, player).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_random_playouts_keep_gravity() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let mut board = Board::EMPTY;
            let mut player = Player::Red;
            while board.status().is_in_progress() {
                let open: Vec<_> = board.open_columns().collect();
                let column = open[rng.random_range(0..open.len())];
                board.drop_piece(column, player).unwrap();
                player = player.opponent();
            }
            for column in 0..Board::WIDTH {
                let height = board.lowest_open_row(column).unwrap_or(Board::HEIGHT);
                for row in 0..Board::HEIGHT {
                    assert_eq!(board.cell(column, row).is_empty(), row >= height);
                }
            }
        }
    }
}
