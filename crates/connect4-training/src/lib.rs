//! Self-play tuning of the evaluation weights.
//!
//! The optimizer improves a [`ParamSet`](connect4_evaluator::param_set::ParamSet) by playing
//! heuristic players against each other:
//!
//! ```text
//! sampling (candidate drawn around the baseline)
//!     ↓
//! tournament, gate 1 (candidate vs. baseline)
//!     ↓ passes
//! tournament, gate 2 (candidate vs. current)
//!     ↓ passes
//! adoption (candidate becomes current)
//! ```
//!
//! - [`config`] - round budget, gate size, win margin, sampling range and seed
//! - [`sampling`] - draws candidates
//! - [`tournament`] - plays the games of one gate
//! - [`optimizer`] - drives rounds and reports adoptions
//!
//! # Example
//!
//! ```
//! use connect4_evaluator::param_set::ParamSetError;
//! use connect4_training::{
//!     config::OptimizerConfig,
//!     optimizer::{Optimizer, RoundOutcome},
//! };
//!
//! let config = OptimizerConfig { rounds: 3, seed: Some(42), ..OptimizerConfig::default() };
//! let mut optimizer = Optimizer::new(config).unwrap();
//! let adopted = optimizer
//!     .run(|outcome, _| {
//!         if let RoundOutcome::Adopted(adoption) = outcome {
//!             println!("{adoption}");
//!         }
//!         Ok::<_, ParamSetError>(())
//!     })
//!     .unwrap();
//! assert_eq!(optimizer.rounds_played(), 3);
//! assert!(adopted <= 3);
//! ```
//!
//! # Current Limitations
//!
//! - **Greedy acceptance**: candidates are always drawn around the baseline, never around the
//!   current set, so the search does not build on earlier adoptions.
//! - **Small gates**: 14 games separate two sets; deterministic players make those games
//!   highly correlated, so a gate is a noisy measure of strength.

pub mod config;
pub mod optimizer;
pub mod sampling;
pub mod tournament;

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("sample range {start}..{end} is empty")]
pub struct EmptySampleRangeError {
    pub start: f64,
    pub end: f64,
}
