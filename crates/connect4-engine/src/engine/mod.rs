//! Game session logic on top of the core board.
//!
//! - [`Game`] - board, side to move and status for one game
//!
//! # Example
//!
//! ```
//! use connect4_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new(Player::Red);
//! for column in [0, 1, 0, 1, 0, 1] {
//!     game.play(column).unwrap();
//! }
//! assert_eq!(game.play(0).unwrap(), GameStatus::Won(Player::Red));
//! ```

pub use self::game::*;

mod game;
