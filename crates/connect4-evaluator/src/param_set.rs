//! The six tunable weights of the evaluation function.
//!
//! | parameter        | role                                                             |
//! |------------------|------------------------------------------------------------------|
//! | `piece_base`     | exponent base applied to a player's piece count in a window      |
//! | `horizontal`     | multiplier for horizontal windows                                |
//! | `vertical`       | multiplier for vertical windows                                  |
//! | `diagonal`       | multiplier for both diagonal orientations                        |
//! | `opponent_block` | share of the opponent's cell score credited for blocking it      |
//! | `next_move`      | share of the opponent's score in the cell above that is deducted |
//!
//! [`ParamSet::new`] and [`ParamSet::with`] only accept finite, strictly positive values.
//! [`ParamSet::new_unchecked`] skips validation; the move selector stays legal for any
//! values, but scores are only guaranteed non-negative for validated sets.

use std::fmt;

use connect4_engine::Orientation;
use serde::{Deserialize, Serialize};

/// Names one of the six parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    #[display("Pieces")]
    PieceBase,
    #[display("Horizontal")]
    Horizontal,
    #[display("Vertical")]
    Vertical,
    #[display("Diagonal")]
    Diagonal,
    #[display("OpponentBlock")]
    OpponentBlock,
    #[display("NextMove")]
    NextMove,
}

impl Param {
    pub const ALL: [Self; 6] = [
        Self::PieceBase,
        Self::Horizontal,
        Self::Vertical,
        Self::Diagonal,
        Self::OpponentBlock,
        Self::NextMove,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("parameter {param} must be finite and positive, got {value}")]
pub struct ParamSetError {
    pub param: Param,
    pub value: f64,
}

/// A complete set of evaluation weights.
///
/// # Example
///
/// ```
/// use connect4_evaluator::param_set::{Param, ParamSet};
///
/// let tuned = ParamSet::DEFAULT.with(Param::Horizontal, 1.4).unwrap();
/// assert_eq!(tuned.get(Param::Horizontal), 1.4);
/// assert_eq!(tuned.get(Param::PieceBase), 6.0);
/// assert!(ParamSet::DEFAULT.with(Param::Vertical, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParamValues", into = "ParamValues")]
pub struct ParamSet {
    values: ParamValues,
}

/// Unvalidated parameter values, convertible into a [`ParamSet`] with `try_into`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamValues {
    pub piece_base: f64,
    pub horizontal: f64,
    pub vertical: f64,
    pub diagonal: f64,
    pub opponent_block: f64,
    pub next_move: f64,
}

impl TryFrom<ParamValues> for ParamSet {
    type Error = ParamSetError;

    fn try_from(values: ParamValues) -> Result<Self, Self::Error> {
        let set = Self { values };
        for param in Param::ALL {
            validate(param, set.get(param))?;
        }
        Ok(set)
    }
}

impl From<ParamSet> for ParamValues {
    fn from(set: ParamSet) -> Self {
        set.values
    }
}

fn validate(param: Param, value: f64) -> Result<f64, ParamSetError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParamSetError { param, value })
    }
}

impl Default for ParamSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParamSet {
    /// Reference weights: base 6, unit orientation weights, half-weight block and lookahead.
    pub const DEFAULT: Self = Self::new_unchecked(6.0, 1.0, 1.0, 1.0, 0.5, 0.5);

    /// Creates a validated parameter set.
    pub fn new(
        piece_base: f64,
        horizontal: f64,
        vertical: f64,
        diagonal: f64,
        opponent_block: f64,
        next_move: f64,
    ) -> Result<Self, ParamSetError> {
        ParamValues {
            piece_base,
            horizontal,
            vertical,
            diagonal,
            opponent_block,
            next_move,
        }
        .try_into()
    }

    /// Creates a parameter set without checking that the values are finite and positive.
    #[must_use]
    pub const fn new_unchecked(
        piece_base: f64,
        horizontal: f64,
        vertical: f64,
        diagonal: f64,
        opponent_block: f64,
        next_move: f64,
    ) -> Self {
        Self {
            values: ParamValues {
                piece_base,
                horizontal,
                vertical,
                diagonal,
                opponent_block,
                next_move,
            },
        }
    }

    #[must_use]
    pub const fn get(&self, param: Param) -> f64 {
        let v = &self.values;
        match param {
            Param::PieceBase => v.piece_base,
            Param::Horizontal => v.horizontal,
            Param::Vertical => v.vertical,
            Param::Diagonal => v.diagonal,
            Param::OpponentBlock => v.opponent_block,
            Param::NextMove => v.next_move,
        }
    }

    /// Returns a copy with `param` replaced by a validated `value`.
    pub fn with(mut self, param: Param, value: f64) -> Result<Self, ParamSetError> {
        let value = validate(param, value)?;
        let v = &mut self.values;
        let slot = match param {
            Param::PieceBase => &mut v.piece_base,
            Param::Horizontal => &mut v.horizontal,
            Param::Vertical => &mut v.vertical,
            Param::Diagonal => &mut v.diagonal,
            Param::OpponentBlock => &mut v.opponent_block,
            Param::NextMove => &mut v.next_move,
        };
        *slot = value;
        Ok(self)
    }

    #[must_use]
    pub const fn piece_base(&self) -> f64 {
        self.values.piece_base
    }

    #[must_use]
    pub const fn opponent_block(&self) -> f64 {
        self.values.opponent_block
    }

    #[must_use]
    pub const fn next_move(&self) -> f64 {
        self.values.next_move
    }

    /// Weight applied to windows of `orientation`. Both diagonals share one weight.
    #[must_use]
    pub const fn orientation_weight(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.values.vertical,
            Orientation::Horizontal => self.values.horizontal,
            Orientation::DiagonalUp | Orientation::DiagonalDown => self.values.diagonal,
        }
    }
}

/// Prints every parameter with one decimal place, e.g. `Pieces 6.0 Horizontal 1.0 ...`.
impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in Param::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{param} {:.1}", self.get(param))?;
        }
        Ok(())
    }
}
