//! Text forms of [`Board`]: the compact 42-character exchange format and the bordered grid
//! used for terminal display.
//!
//! The compact format lists 6 rows of 7 cells starting from the bottom row, left to right.
//! `R`/`r` is a red piece, `Y`/`y` a yellow piece, and a space or `.` an empty cell.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseBoardError;

use super::{
    board::Board,
    player::{Cell, Player},
};

impl Board {
    /// Renders the board in the compact format accepted by [`FromStr`].
    ///
    /// # Example
    ///
    /// ```
    /// use connect4_engine::{Board, Player};
    ///
    /// let mut board = Board::EMPTY;
    /// board.drop_piece(1, Player::Yellow).unwrap();
    /// let text = board.to_compact_string();
    /// assert_eq!(text.len(), 42);
    /// assert!(text.starts_with(" Y     "));
    /// assert_eq!(text.parse::<Board>().unwrap(), board);
    /// ```
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        (0..Self::HEIGHT)
            .flat_map(|row| (0..Self::WIDTH).map(move |column| self.cell(column, row).symbol()))
            .collect()
    }
}

fn parse_cell(index: usize, ch: char) -> Result<Cell, ParseBoardError> {
    match ch {
        ' ' | '.' => Ok(Cell::Empty),
        'R' | 'r' => Ok(Cell::Piece(Player::Red)),
        'Y' | 'y' => Ok(Cell::Piece(Player::Yellow)),
        _ => Err(ParseBoardError::InvalidCell { index, ch }),
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != Self::CELL_COUNT {
            return Err(ParseBoardError::InvalidLength {
                expected: Self::CELL_COUNT,
                actual,
            });
        }

        let mut board = Board::EMPTY;
        for (index, ch) in s.chars().enumerate() {
            let (row, column) = (index / Self::WIDTH, index % Self::WIDTH);
            let cell = parse_cell(index, ch)?;
            if !cell.is_empty() && row > 0 && board.cell(column, row - 1).is_empty() {
                return Err(ParseBoardError::FloatingPiece { column, row });
            }
            board.set_cell(column, row, cell);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "-----------------------------";
        writeln!(f, "{RULE}")?;
        for row in self.rows_top_down() {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell.symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{RULE}")?;
        write!(f, " ")?;
        for column in 1..=Self::WIDTH {
            write!(f, " {column}  ")?;
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
