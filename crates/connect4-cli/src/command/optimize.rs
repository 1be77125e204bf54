use std::path::PathBuf;

use connect4_training::{
    config::{self, OptimizerConfig, SampledParams},
    optimizer::{Optimizer, RoundOutcome},
};

use crate::{command::play, util::Output};

const PROGRESS_INTERVAL: usize = 500;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct OptimizeArg {
    /// Number of rounds to run
    #[arg(long, default_value_t = config::DEFAULT_ROUNDS)]
    rounds: usize,
    /// Seed for candidate sampling (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Games played by each acceptance gate
    #[arg(long, default_value_t = config::GAMES_PER_GATE)]
    games_per_gate: usize,
    /// Required margin of candidate wins over incumbent wins
    #[arg(long, default_value_t = config::WIN_MARGIN)]
    win_margin: usize,
    /// Lower bound of sampled values
    #[arg(long, default_value_t = config::SAMPLE_RANGE.start)]
    sample_min: f64,
    /// Upper bound (exclusive) of sampled values
    #[arg(long, default_value_t = config::SAMPLE_RANGE.end)]
    sample_max: f64,
    /// Resample all six parameters instead of the horizontal and vertical weights only
    #[arg(long)]
    sample_all: bool,
    /// Print adoptions as JSON lines
    #[arg(long)]
    json: bool,
    /// Output file path for adoptions
    #[arg(long)]
    output: Option<PathBuf>,
    /// Save the final parameter set as JSON
    #[arg(long)]
    save_params: Option<PathBuf>,
    /// Play against the tuned parameters afterwards
    #[arg(long)]
    play: bool,
}

impl OptimizeArg {
    fn to_config(&self) -> OptimizerConfig {
        OptimizerConfig {
            rounds: self.rounds,
            games_per_gate: self.games_per_gate,
            win_margin: self.win_margin,
            sample_range: self.sample_min..self.sample_max,
            sampled: if self.sample_all {
                SampledParams::All
            } else {
                SampledParams::HorizontalVertical
            },
            seed: self.seed,
        }
    }
}

pub(crate) fn run(arg: &OptimizeArg) -> anyhow::Result<()> {
    let mut optimizer = Optimizer::new(arg.to_config())?;
    let rounds = optimizer.config().rounds;
    eprintln!(
        "Optimizing for {rounds} rounds ({} games per gate, seed {})",
        optimizer.config().games_per_gate,
        optimizer.seed()
    );

    let mut output = Output::from_output_path(arg.output.clone())?;
    let mut adopted_so_far = 0;
    let adopted = optimizer.run(|outcome, played| -> anyhow::Result<()> {
        if let RoundOutcome::Adopted(adoption) = outcome {
            adopted_so_far += 1;
            if arg.json {
                output.write_json_line(adoption)?;
            } else {
                output.write_line(&adoption.to_string())?;
            }
        }
        if played % PROGRESS_INTERVAL == 0 {
            eprintln!("  Round {played}/{rounds}: {adopted_so_far} adopted");
        }
        Ok(())
    })?;

    drop(output);

    eprintln!();
    eprintln!("Optimization completed");
    eprintln!("  Rounds: {rounds}");
    eprintln!("  Adopted: {adopted}");
    eprintln!("  Seed: {}", optimizer.seed());
    eprintln!("  Final parameters: {}", optimizer.current());
    if let Some(path) = &arg.output {
        eprintln!("  Adoptions: {}", path.display());
    }

    if let Some(path) = &arg.save_params {
        Output::save_json(optimizer.current(), Some(path.clone()))?;
        eprintln!("  Parameters saved: {}", path.display());
    }

    if arg.play {
        play::run_with_params(None, *optimizer.current())?;
    }
    Ok(())
}
