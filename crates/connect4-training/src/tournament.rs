//! Gate tournaments: a fixed series of games between an incumbent and a candidate.
//!
//! The incumbent always plays red and the candidate yellow. Game `i` of a gate opens with a
//! piece already in column `i % 7`: on even games it belongs to the incumbent and the
//! candidate replies, on odd games it belongs to the candidate and the incumbent replies.
//! Both policies are deterministic, so a gate's result depends only on the two parameter
//! sets and the number of games.
//!
//! Games of a gate are independent and are played on scoped threads.

use std::{fmt, thread};

use connect4_engine::{Board, Game, GameStatus, Player};
use connect4_evaluator::policy::MovePolicy;
use serde::{Deserialize, Serialize};

/// Side of the incumbent.
pub const INCUMBENT: Player = Player::Red;
/// Side of the candidate.
pub const CANDIDATE: Player = Player::Yellow;

/// Win/loss/draw counts of one gate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateTally {
    pub candidate_wins: usize,
    pub incumbent_wins: usize,
    pub draws: usize,
}

impl GateTally {
    pub fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(CANDIDATE) => self.candidate_wins += 1,
            Some(INCUMBENT) => self.incumbent_wins += 1,
            _ => self.draws += 1,
        }
    }

    #[must_use]
    pub const fn games(&self) -> usize {
        self.candidate_wins + self.incumbent_wins + self.draws
    }

    /// Whether the candidate won by more than `margin` games.
    #[must_use]
    pub const fn passes(&self, margin: usize) -> bool {
        self.candidate_wins > self.incumbent_wins + margin
    }
}

impl fmt::Display for GateTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R-wins {} Y-wins {} Draws {}",
            self.incumbent_wins, self.candidate_wins, self.draws
        )
    }
}

/// The pre-placed first piece of a gate game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening {
    pub column: usize,
    pub player: Player,
}

impl Opening {
    #[must_use]
    pub const fn for_game(index: usize) -> Self {
        Self {
            column: index % Board::WIDTH,
            player: if index % 2 == 0 { INCUMBENT } else { CANDIDATE },
        }
    }
}

/// Plays one game to the end and returns its final status.
///
/// A policy that returns no column, or a column the board rejects, forfeits the game.
pub fn play_game(red: &dyn MovePolicy, yellow: &dyn MovePolicy, opening: Opening) -> GameStatus {
    let mut game = match Game::with_opening(opening.column, opening.player) {
        Ok(game) => game,
        Err(err) => {
            log::warn!("invalid opening {opening:?}: {err}");
            return GameStatus::Won(opening.player.opponent());
        }
    };

    while game.status().is_in_progress() {
        let mover = game.to_move();
        let policy = match mover {
            Player::Red => red,
            Player::Yellow => yellow,
        };
        let Some(choice) = policy.choose_column(game.board(), mover) else {
            log::warn!("{mover} found no move on a board in progress");
            return GameStatus::Won(mover.opponent());
        };
        if let Err(err) = game.play(choice.column) {
            log::warn!("{mover} made an illegal move: {err}");
            return GameStatus::Won(mover.opponent());
        }
    }
    game.status()
}

/// Plays `games` games of `candidate` against `incumbent` and tallies the results.
pub fn play_gate(
    candidate: &dyn MovePolicy,
    incumbent: &dyn MovePolicy,
    games: usize,
) -> GateTally {
    let mut results = vec![GameStatus::InProgress; games];
    thread::scope(|s| {
        for (index, result) in results.iter_mut().enumerate() {
            s.spawn(move || {
                *result = play_game(incumbent, candidate, Opening::for_game(index));
            });
        }
    });

    let mut tally = GateTally::default();
    for status in results {
        tally.record(status);
    }
    tally
}
