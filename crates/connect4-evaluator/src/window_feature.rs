//! Window features: per-player piece counts for every line of four on the board.
//!
//! Each of the 69 [`Line`]s is a window. A window holding pieces of both players can never
//! be completed by either side, so its counts are zeroed ("blocked"). Features are a pure
//! function of the board and are recomputed from scratch for every evaluation.

use arrayvec::ArrayVec;
use connect4_engine::{Board, Cell, LINE_COUNT, Line, Orientation, Player};

/// Piece counts of one window after the blocked-window rule has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowCounts {
    counts: [u8; 2],
}

impl WindowCounts {
    pub const ZERO: Self = Self { counts: [0; 2] };

    /// Counts both players' pieces in `line`, zeroing both if both are present.
    #[must_use]
    pub fn from_line(board: &Board, line: Line) -> Self {
        let mut counts = [0; 2];
        for (column, row) in line.cells() {
            if let Cell::Piece(player) = board.cell(column, row) {
                counts[player.index()] += 1;
            }
        }
        if counts.iter().all(|&n| n > 0) {
            return Self::ZERO;
        }
        Self { counts }
    }

    #[must_use]
    pub const fn count(self, player: Player) -> u8 {
        self.counts[player.index()]
    }
}

/// One window and its counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowFeature {
    pub line: Line,
    pub counts: WindowCounts,
}

/// Counts for every window on the board, in [`Line::all`] order.
///
/// # Example
///
/// ```
/// use connect4_engine::{Board, Line, Orientation, Player};
/// use connect4_evaluator::window_feature::WindowFeatures;
///
/// let mut board = Board::EMPTY;
/// board.drop_piece(0, Player::Red).unwrap();
/// board.drop_piece(0, Player::Red).unwrap();
///
/// let features = WindowFeatures::extract(&board);
/// let bottom = Line { orientation: Orientation::Vertical, column: 0, row: 0 };
/// assert_eq!(features.get(bottom).unwrap().count(Player::Red), 2);
/// assert_eq!(features.get(bottom).unwrap().count(Player::Yellow), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFeatures {
    windows: ArrayVec<WindowFeature, LINE_COUNT>,
}

impl WindowFeatures {
    #[must_use]
    pub fn extract(board: &Board) -> Self {
        let windows = Line::all()
            .map(|line| WindowFeature {
                line,
                counts: WindowCounts::from_line(board, line),
            })
            .collect();
        Self { windows }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowFeature> {
        self.windows.iter()
    }

    /// Iterates the windows of a single orientation.
    pub fn orientation(&self, orientation: Orientation) -> impl Iterator<Item = &WindowFeature> {
        self.windows
            .iter()
            .filter(move |w| w.line.orientation == orientation)
    }

    /// Looks up the counts of a window by its orientation and anchor.
    #[must_use]
    pub fn get(&self, line: Line) -> Option<WindowCounts> {
        self.windows
            .iter()
            .find(|w| w.line == line)
            .map(|w| w.counts)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn line(orientation: Orientation, column: usize, row: usize) -> Line {
        Line {
            orientation,
            column,
            row,
        }
    }

    #[test]
    fn test_empty_board_has_zero_counts() {
        let features = WindowFeatures::extract(&Board::EMPTY);
        assert_eq!(features.iter().count(), LINE_COUNT);
        assert!(features.iter().all(|w| w.counts == WindowCounts::ZERO));
        for orientation in Orientation::ALL {
            assert_eq!(
                features.orientation(orientation).count(),
                orientation.line_count()
            );
        }
    }

    #[test]
    fn test_counts_per_player() {
        let mut board = Board::EMPTY;
        for column in [1, 2, 3] {
            board.drop_piece(column, Player::Yellow).unwrap();
        }
        let features = WindowFeatures::extract(&board);

        let h0 = features.get(line(Orientation::Horizontal, 0, 0)).unwrap();
        assert_eq!(h0.count(Player::Yellow), 3);
        assert_eq!(h0.count(Player::Red), 0);
        let h3 = features.get(line(Orientation::Horizontal, 3, 0)).unwrap();
        assert_eq!(h3.count(Player::Yellow), 1);
        let v2 = features.get(line(Orientation::Vertical, 2, 0)).unwrap();
        assert_eq!(v2.count(Player::Yellow), 1);
    }

    #[test]
    fn test_blocked_window_is_zeroed() {
        let mut board = Board::EMPTY;
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(1, Player::Red).unwrap();
        board.drop_piece(2, Player::Red).unwrap();
        board.drop_piece(3, Player::Yellow).unwrap();
        let features = WindowFeatures::extract(&board);

        assert_eq!(
            features.get(line(Orientation::Horizontal, 0, 0)),
            Some(WindowCounts::ZERO),
        );
        assert_eq!(
            features
                .get(line(Orientation::Horizontal, 3, 0))
                .unwrap()
                .count(Player::Yellow),
            1,
        );
    }

    #[test]
    fn test_missing_window() {
        let features = WindowFeatures::extract(&Board::EMPTY);
        assert_eq!(features.get(line(Orientation::Horizontal, 4, 0)), None);
    }

    #[test]
    fn test_random_boards_respect_count_bounds() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut board = Board::EMPTY;
        let mut player = Player::Red;
        for _ in 0..500 {
            if board.status().is_over() {
                board.reset();
            }
            let open: Vec<_> = board.open_columns().collect();
            board
                .drop_piece(open[rng.random_range(0..open.len())], player)
                .unwrap();
            player = player.opponent();

            for w in WindowFeatures::extract(&board).iter() {
                let red = w.counts.count(Player::Red);
                let yellow = w.counts.count(Player::Yellow);
                assert!(red <= 4 && yellow <= 4, "{w:?}");
                assert!(red == 0 || yellow == 0, "blocked window kept counts: {w:?}");

                let pieces = w
                    .line
                    .cells()
                    .iter()
                    .filter(|&&(c, r)| !board.cell(c, r).is_empty())
                    .count();
                assert!(usize::from(red + yellow) <= pieces);
            }
        }
    }
}
