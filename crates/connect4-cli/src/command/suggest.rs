use std::path::PathBuf;

use anyhow::Context as _;
use connect4_engine::{Board, Player};
use connect4_evaluator::{move_selector, param_set::ParamSet};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerArg {
    Red,
    #[default]
    Yellow,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::Red => Player::Red,
            PlayerArg::Yellow => Player::Yellow,
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SuggestArg {
    /// Board as 42 characters, bottom row first (`R`, `Y`, and ` ` or `.` for empty)
    board: String,
    /// Side to move
    #[arg(long, value_enum, default_value_t)]
    player: PlayerArg,
    /// Parameter set file (JSON); the default weights are used if omitted
    #[arg(long)]
    params: Option<PathBuf>,
    /// Also write the move to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SuggestArg) -> anyhow::Result<()> {
    let SuggestArg {
        board,
        player,
        params,
        output,
    } = arg;
    let mut board = board
        .parse::<Board>()
        .with_context(|| format!("Invalid board: {board:?}"))?;
    let params = util::load_params(params.as_deref())?;
    let status = board.status();
    if status.is_over() {
        log::warn!("suggesting a move on a finished game ({status})");
    }

    let line = suggest(&mut board, (*player).into(), &params)?;
    println!("{line}");
    if let Some(path) = output {
        Output::open(path.clone())?.write_line(&line)?;
    }
    log::debug!("board after the move:\n{board}");
    Ok(())
}

/// Plays the suggested move on `board` and returns it as `Move N` with a 1-based column.
fn suggest(board: &mut Board, player: Player, params: &ParamSet) -> anyhow::Result<String> {
    let column = move_selector::play_move(board, player, params)?;
    Ok(format!("Move {}", column + 1))
}
