use std::{
    fmt,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use connect4_engine::{Board, Game, GameStatus, Player};
use connect4_evaluator::{
    NoLegalMoveError,
    param_set::ParamSet,
    policy::{HeuristicPolicy, MovePolicy},
};

use crate::util;

const HUMAN: Player = Player::Red;
const COMPUTER: Player = Player::Yellow;
const PROMPT: &str = "Select the column (1 to 7)";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Number of games to play (default: until input ends)
    #[arg(long)]
    games: Option<usize>,
    /// Parameter set for the computer (JSON, as written by `optimize --save-params`)
    #[arg(long)]
    params: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { games, params } = arg;
    let params = util::load_params(params.as_deref())?;
    run_with_params(*games, params)
}

pub(crate) fn run_with_params(games: Option<usize>, params: ParamSet) -> anyhow::Result<()> {
    log::debug!("computer parameters: {params}");
    let tally = play_session(io::stdin().lock(), io::stdout().lock(), params, games)?;
    eprintln!("Session finished: {tally}");
    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    red_wins: usize,
    yellow_wins: usize,
    draws: usize,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
    }

    fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R-wins {} Y-wins {} Draws {}",
            self.red_wins, self.yellow_wins, self.draws
        )
    }
}

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
enum ColumnInputError {
    #[display("{_0:?} is not a column number")]
    NotANumber(#[error(not(source))] String),
    #[display("column {_0} does not exist, choose 1 to {}", Board::WIDTH)]
    OutOfRange(#[error(not(source))] usize),
    #[display("column {_0} is full")]
    Full(#[error(not(source))] usize),
}

/// Parses a 1-based column number typed by the human and checks that it can be played.
fn parse_column(line: &str, board: &Board) -> Result<usize, ColumnInputError> {
    let line = line.trim();
    let number = line
        .parse::<usize>()
        .map_err(|_| ColumnInputError::NotANumber(line.to_owned()))?;
    if !(1..=Board::WIDTH).contains(&number) {
        return Err(ColumnInputError::OutOfRange(number));
    }
    let column = number - 1;
    if board.is_column_full(column) {
        return Err(ColumnInputError::Full(number));
    }
    Ok(column)
}

/// Plays games until `games` are finished or input ends. The human moves first in even games.
fn play_session<R, W>(
    mut input: R,
    mut output: W,
    params: ParamSet,
    games: Option<usize>,
) -> anyhow::Result<Tally>
where
    R: BufRead,
    W: Write,
{
    let computer = HeuristicPolicy::new(params);
    let mut tally = Tally::default();
    while games.is_none_or(|n| tally.games() < n) {
        let first = if tally.games() % 2 == 0 { HUMAN } else { COMPUTER };
        let Some(status) = play_game(&mut input, &mut output, &computer, first)? else {
            break;
        };
        tally.record(status);
        writeln!(output, "Winner {}   {tally}", winner_symbol(status))?;
    }
    output.flush()?;
    Ok(tally)
}

fn winner_symbol(status: GameStatus) -> char {
    status.winner().map_or('-', Player::symbol)
}

/// Plays one game, or returns `None` if input ended before it finished.
fn play_game<R, W>(
    input: &mut R,
    output: &mut W,
    computer: &dyn MovePolicy,
    first: Player,
) -> anyhow::Result<Option<GameStatus>>
where
    R: BufRead,
    W: Write,
{
    let mut game = Game::new(first);
    writeln!(output, "{}", game.board())?;
    while game.status().is_in_progress() {
        let column = if game.to_move() == HUMAN {
            let Some(column) = read_column(input, output, game.board())? else {
                return Ok(None);
            };
            column
        } else {
            let choice = computer
                .choose_column(game.board(), COMPUTER)
                .ok_or(NoLegalMoveError)?;
            writeln!(output, "Computer plays column {}", choice.column + 1)?;
            choice.column
        };
        game.play(column)?;
        writeln!(output, "{}", game.board())?;
    }
    Ok(Some(game.status()))
}

fn read_column<R, W>(input: &mut R, output: &mut W, board: &Board) -> anyhow::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            return Ok(None);
        }
        match parse_column(&line, board) {
            Ok(column) => return Ok(Some(column)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
