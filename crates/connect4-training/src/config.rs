//! Optimizer settings and their reference values.

use std::ops::Range;

use connect4_evaluator::param_set::Param;

/// Rounds in a full optimization run.
pub const DEFAULT_ROUNDS: usize = 10_000;
/// Games played by each acceptance gate.
pub const GAMES_PER_GATE: usize = 14;
/// The candidate must win more than `incumbent_wins + WIN_MARGIN` games to pass a gate.
pub const WIN_MARGIN: usize = 2;
/// Range candidate values are drawn from.
pub const SAMPLE_RANGE: Range<f64> = 0.51..2.01;

/// Which parameters a candidate draws fresh values for; the rest are copied from the baseline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SampledParams {
    /// Horizontal and vertical weights only.
    #[default]
    HorizontalVertical,
    /// All six parameters.
    All,
}

impl SampledParams {
    #[must_use]
    pub const fn params(self) -> &'static [Param] {
        match self {
            Self::HorizontalVertical => &[Param::Horizontal, Param::Vertical],
            Self::All => &Param::ALL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    pub rounds: usize,
    pub games_per_gate: usize,
    pub win_margin: usize,
    pub sample_range: Range<f64>,
    pub sampled: SampledParams,
    /// Seed for candidate sampling. A random seed is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            games_per_gate: GAMES_PER_GATE,
            win_margin: WIN_MARGIN,
            sample_range: SAMPLE_RANGE,
            sampled: SampledParams::default(),
            seed: None,
        }
    }
}
