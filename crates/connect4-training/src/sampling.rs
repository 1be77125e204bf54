//! Candidate sampling.

use std::ops::Range;

use connect4_evaluator::param_set::{ParamSet, ParamSetError};
use rand::Rng;

use crate::config::SampledParams;

/// Draws a candidate from `baseline`, replacing each parameter in `sampled` with a uniform
/// value from `range`.
///
/// Parameters are drawn in [`Param::ALL`](connect4_evaluator::param_set::Param::ALL) order,
/// so a seeded generator yields the same candidate sequence on every run. Fails if `range`
/// produces a value that is not strictly positive.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn sample_candidate<R>(
    rng: &mut R,
    baseline: &ParamSet,
    sampled: SampledParams,
    range: &Range<f64>,
) -> Result<ParamSet, ParamSetError>
where
    R: Rng + ?Sized,
{
    sampled
        .params()
        .iter()
        .try_fold(*baseline, |set, &param| {
            set.with(param, rng.random_range(range.clone()))
        })
}
