//! The weight optimizer: randomized hill climbing behind two acceptance gates.
//!
//! Each round:
//!
//! 1. **Sample** - draw a candidate from the baseline ([`sampling::sample_candidate`]).
//! 2. **Gate 1** - the candidate plays the baseline. Unless it wins by more than the margin,
//!    the round ends.
//! 3. **Gate 2** - the candidate plays the current (last adopted) set under the same rules.
//! 4. **Adopt** - a candidate that passes both gates becomes the current set.
//!
//! There is no convergence test; [`Optimizer::run`] always plays the configured number of
//! rounds. All randomness comes from one seeded [`Pcg32`] stream, so a seed reproduces a
//! run exactly.

use std::fmt;

use connect4_evaluator::{
    param_set::{ParamSet, ParamSetError},
    policy::HeuristicPolicy,
};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    EmptySampleRangeError,
    config::OptimizerConfig,
    sampling,
    tournament::{self, GateTally},
};

/// A candidate that passed both gates.
///
/// Displays as one line of the tuning report: the round, the second gate's red and yellow
/// wins, and the adopted values.
///
/// ```
/// use connect4_evaluator::param_set::ParamSet;
/// use connect4_training::{optimizer::Adoption, tournament::GateTally};
///
/// let gate = GateTally { candidate_wins: 9, incumbent_wins: 4, draws: 1 };
/// let adoption = Adoption { round: 17, gate1: gate, gate2: gate, params: ParamSet::DEFAULT };
/// assert_eq!(
///     adoption.to_string(),
///     "17 R 4 Y 9 Pieces 6.0 Horizontal 1.0 Vertical 1.0 Diagonal 1.0 OpponentBlock 0.5 NextMove 0.5",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adoption {
    pub round: usize,
    pub gate1: GateTally,
    pub gate2: GateTally,
    pub params: ParamSet,
}

impl fmt::Display for Adoption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} R {} Y {} {}",
            self.round, self.gate2.incumbent_wins, self.gate2.candidate_wins, self.params
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum RoundOutcome {
    RejectedByBaseline(GateTally),
    RejectedByCurrent { gate1: GateTally, gate2: GateTally },
    Adopted(Adoption),
}

#[derive(Debug, Clone)]
pub struct Optimizer {
    config: OptimizerConfig,
    seed: u64,
    rng: Pcg32,
    baseline: ParamSet,
    current: ParamSet,
    rounds_played: usize,
}

impl Optimizer {
    /// Creates an optimizer whose baseline and current sets are [`ParamSet::DEFAULT`].
    pub fn new(config: OptimizerConfig) -> Result<Self, EmptySampleRangeError> {
        let range = &config.sample_range;
        if range.is_empty() {
            return Err(EmptySampleRangeError {
                start: range.start,
                end: range.end,
            });
        }
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("optimizer seed: {seed}");
        Ok(Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            baseline: ParamSet::DEFAULT,
            current: ParamSet::DEFAULT,
            rounds_played: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The seed in use, drawn at construction when none was configured.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn baseline(&self) -> &ParamSet {
        &self.baseline
    }

    /// The most recently adopted set, or the baseline if nothing has been adopted.
    #[must_use]
    pub fn current(&self) -> &ParamSet {
        &self.current
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Plays a single round and adopts the candidate if it passes both gates.
    pub fn run_round(&mut self) -> Result<RoundOutcome, ParamSetError> {
        let round = self.rounds_played;
        let params = sampling::sample_candidate(
            &mut self.rng,
            &self.baseline,
            self.config.sampled,
            &self.config.sample_range,
        )?;
        self.rounds_played += 1;

        let games = self.config.games_per_gate;
        let margin = self.config.win_margin;
        let candidate = HeuristicPolicy::new(params);

        let gate1 = tournament::play_gate(&candidate, &HeuristicPolicy::new(self.baseline), games);
        if !gate1.passes(margin) {
            log::debug!("round {round}: rejected by baseline ({gate1})");
            return Ok(RoundOutcome::RejectedByBaseline(gate1));
        }

        let gate2 = tournament::play_gate(&candidate, &HeuristicPolicy::new(self.current), games);
        if !gate2.passes(margin) {
            log::debug!("round {round}: rejected by current ({gate2})");
            return Ok(RoundOutcome::RejectedByCurrent { gate1, gate2 });
        }

        self.current = params;
        log::info!("round {round}: adopted {params}");
        Ok(RoundOutcome::Adopted(Adoption {
            round,
            gate1,
            gate2,
            params,
        }))
    }

    /// Plays the remaining rounds, handing each outcome to `on_round` along with the number of
    /// rounds played so far.
    ///
    /// Returns the number of adoptions. Stops at the first error from sampling or `on_round`.
    pub fn run<F, E>(&mut self, mut on_round: F) -> Result<usize, E>
    where
        F: FnMut(&RoundOutcome, usize) -> Result<(), E>,
        E: From<ParamSetError>,
    {
        let mut adopted = 0;
        while self.rounds_played < self.config.rounds {
            let outcome = self.run_round()?;
            if outcome.is_adopted() {
                adopted += 1;
            }
            on_round(&outcome, self.rounds_played)?;
        }
        Ok(adopted)
    }
}

#[cfg(test)]
mod tests {
    use connect4_evaluator::param_set::Param;

    use super::*;
    use crate::config::SampledParams;

    fn config(rounds: usize, seed: u64) -> OptimizerConfig {
        OptimizerConfig {
            rounds,
            seed: Some(seed),
            ..OptimizerConfig::default()
        }
    }

    #[test]
    fn test_current_changes_only_on_adoption() {
        let mut optimizer = Optimizer::new(config(30, 7)).unwrap();
        for _ in 0..30 {
            let before = *optimizer.current();
            match optimizer.run_round().unwrap() {
                RoundOutcome::RejectedByBaseline(gate1) => {
                    assert!(!gate1.passes(2), "{gate1}");
                    assert_eq!(*optimizer.current(), before);
                }
                RoundOutcome::RejectedByCurrent { gate1, gate2 } => {
                    assert!(gate1.passes(2) && !gate2.passes(2), "{gate1} / {gate2}");
                    assert_eq!(*optimizer.current(), before);
                }
                RoundOutcome::Adopted(adoption) => {
                    assert!(adoption.gate1.passes(2) && adoption.gate2.passes(2));
                    assert_eq!(*optimizer.current(), adoption.params);
                }
            }
            assert_eq!(*optimizer.baseline(), ParamSet::DEFAULT);
        }
        assert_eq!(optimizer.rounds_played(), 30);
    }

    #[test]
    fn test_seed_reproduces_run() {
        let outcomes = |seed| {
            let mut optimizer = Optimizer::new(config(8, seed)).unwrap();
            let outcomes: Vec<_> = (0..8).map(|_| optimizer.run_round().unwrap()).collect();
            (outcomes, *optimizer.current())
        };
        assert_eq!(outcomes(99), outcomes(99));
    }

    #[test]
    fn test_run_plays_every_round() {
        let mut optimizer = Optimizer::new(config(12, 3)).unwrap();
        let mut played = Vec::new();
        let adopted = optimizer
            .run(|outcome, rounds| {
                assert!(outcome.is_rejected_by_baseline(), "{outcome:?}");
                played.push(rounds);
                Ok::<_, ParamSetError>(())
            })
            .unwrap();
        assert_eq!(optimizer.rounds_played(), 12);
        assert_eq!(played, (1..=12).collect::<Vec<_>>());
        assert_eq!(adopted, 0);

        // Nothing is left to play.
        let rest = optimizer.run(|_, _| -> Result<(), ParamSetError> { panic!("no rounds remain") });
        assert_eq!(rest, Ok(0));
    }

    #[test]
    fn test_adoption_replaces_current() {
        let mut optimizer = Optimizer::new(config(22, 1)).unwrap();
        for _ in 0..21 {
            let outcome = optimizer.run_round().unwrap();
            assert!(outcome.is_rejected_by_baseline(), "{outcome:?}");
            assert_eq!(*optimizer.current(), ParamSet::DEFAULT);
        }

        let RoundOutcome::Adopted(adoption) = optimizer.run_round().unwrap() else {
            panic!("round 21 should adopt");
        };
        assert_eq!(adoption.round, 21);
        assert!(adoption.gate1.passes(2) && adoption.gate2.passes(2));
        // Current still equals the baseline, so both gates replay the same games.
        assert_eq!(adoption.gate1, adoption.gate2);
        assert_ne!(adoption.params, ParamSet::DEFAULT);
        assert_eq!(*optimizer.current(), adoption.params);
        assert_eq!(*optimizer.baseline(), ParamSet::DEFAULT);
        assert!(
            adoption
                .to_string()
                .starts_with("21 R 5 Y 8 Pieces 6.0 Horizontal 1.9 Vertical 2.0 "),
            "{adoption}"
        );

        // `run` reports the same adoption through its callback.
        let mut optimizer = Optimizer::new(config(22, 1)).unwrap();
        let mut reported = Vec::new();
        let adopted = optimizer
            .run(|outcome, _| {
                if let RoundOutcome::Adopted(adoption) = outcome {
                    reported.push(*adoption);
                }
                Ok::<_, ParamSetError>(())
            })
            .unwrap();
        assert_eq!(adopted, 1);
        assert_eq!(reported, [adoption]);
        assert_eq!(*optimizer.current(), adoption.params);
    }

    #[test]
    fn test_rejected_by_current_keeps_current() {
        let mut optimizer = Optimizer::new(config(400, 1)).unwrap();
        let mut rejected = None;
        while optimizer.rounds_played() < 400 {
            let before = *optimizer.current();
            let outcome = optimizer.run_round().unwrap();
            if let RoundOutcome::RejectedByCurrent { gate1, gate2 } = outcome {
                assert!(gate1.passes(2) && !gate2.passes(2), "{gate1} / {gate2}");
                assert_eq!(*optimizer.current(), before);
                rejected = Some(optimizer.rounds_played());
                break;
            }
        }
        assert!(rejected.is_some());
        assert_ne!(*optimizer.current(), ParamSet::DEFAULT);
    }

    #[test]
    fn test_no_games_never_adopts() {
        let mut optimizer = Optimizer::new(OptimizerConfig {
            games_per_gate: 0,
            sampled: SampledParams::All,
            ..config(5, 1)
        })
        .unwrap();
        for _ in 0..5 {
            assert_eq!(
                optimizer.run_round().unwrap(),
                RoundOutcome::RejectedByBaseline(GateTally::default()),
            );
        }
    }

    #[test]
    fn test_invalid_ranges() {
        assert_eq!(
            Optimizer::new(OptimizerConfig {
                sample_range: 2.0..1.0,
                ..OptimizerConfig::default()
            })
            .unwrap_err(),
            EmptySampleRangeError {
                start: 2.0,
                end: 1.0
            },
        );

        let mut optimizer = Optimizer::new(OptimizerConfig {
            sample_range: -1.0..0.0,
            ..config(1, 0)
        })
        .unwrap();
        assert_eq!(optimizer.run_round().unwrap_err().param, Param::Horizontal);
        assert_eq!(optimizer.rounds_played(), 0);
    }

    #[test]
    fn test_adoption_serializes() {
        let adoption = Adoption {
            round: 3,
            gate1: GateTally {
                candidate_wins: 8,
                incumbent_wins: 5,
                draws: 1,
            },
            gate2: GateTally {
                candidate_wins: 7,
                incumbent_wins: 4,
                draws: 3,
            },
            params: ParamSet::DEFAULT.with(Param::Vertical, 1.5).unwrap(),
        };
        let json = serde_json::to_value(adoption).unwrap();
        assert_eq!(json["round"], 3);
        assert_eq!(json["gate2"]["candidate_wins"], 7);
        assert_eq!(json["params"]["vertical"], 1.5);
        let back: Adoption = serde_json::from_value(json).unwrap();
        assert_eq!(back, adoption);
        assert_eq!(
            adoption.to_string(),
            "3 R 4 Y 7 Pieces 6.0 Horizontal 1.0 Vertical 1.5 Diagonal 1.0 OpponentBlock 0.5 NextMove 0.5",
        );
    }
}
