use clap::{Parser, Subcommand};

use self::{optimize::OptimizeArg, play::PlayArg, suggest::SuggestArg};

mod optimize;
mod play;
mod suggest;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the computer in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Tune the evaluation weights by self-play
    Optimize(#[clap(flatten)] OptimizeArg),
    /// Suggest a move for a board given in the 42-character format
    Suggest(#[clap(flatten)] SuggestArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Optimize(arg) => optimize::run(&arg)?,
        Mode::Suggest(arg) => suggest::run(&arg)?,
    }
    Ok(())
}
