//! Play tic-tac-toe (or k-in-a-row) against the engine.
//!
//! RUST_LOG=debug shows each completed deepening depth.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use game_search::core::Player;
use game_search::games::TicTacToe;
use game_search::players::{
    play_match, AlphaBetaPlayer, DepthLimitedPlayer, Human, MinimaxPlayer, RandomPlayer, Strategy,
    TimedPlayer,
};
use game_search::search::{SearchConfig, TimedConfig};
use game_search::{Game, SearchResult};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Opponent {
    Minimax,
    Alphabeta,
    Depth,
    Timed,
    Random,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    /// X, moves first
    Max,
    /// O
    Min,
}

#[derive(Parser)]
#[command(author, version, about = "Play k-in-a-row against a game-tree search", long_about = None)]
struct Args {
    /// Engine strategy
    #[arg(long, value_enum, default_value = "timed")]
    opponent: Opponent,

    /// Seconds per engine move for the timed opponent
    #[arg(long, default_value_t = 1.0)]
    budget: f64,

    /// Depth limit for the depth opponent
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Side the human plays
    #[arg(long, value_enum, default_value = "max")]
    human_plays: Side,

    /// Board width
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Board height
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Marks in a row needed to win
    #[arg(long, default_value_t = 3)]
    k: usize,
}

fn engine(args: &Args) -> Box<dyn Strategy<TicTacToe>> {
    match args.opponent {
        Opponent::Minimax => Box::new(MinimaxPlayer),
        Opponent::Alphabeta => Box::new(AlphaBetaPlayer),
        Opponent::Depth => Box::new(DepthLimitedPlayer::new(
            SearchConfig::default().with_depth_limit(args.depth),
        )),
        Opponent::Timed => Box::new(TimedPlayer::new(TimedConfig::from_secs_f64(args.budget))),
        Opponent::Random => Box::new(RandomPlayer::new(args.seed)),
    }
}

/// Prints the board before each human move.
struct Narrated<S>(S);

impl<S: Strategy<TicTacToe>> Strategy<TicTacToe> for Narrated<S> {
    fn choose(&mut self, game: &TicTacToe, state: &<TicTacToe as Game>::State) -> SearchResult<usize> {
        println!("\n{}", state);
        self.0.choose(game, state)
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let human_side = match args.human_plays {
        Side::Max => Player::Max,
        Side::Min => Player::Min,
    };
    let Some(game) = TicTacToe::try_with_size(args.width, args.height, args.k) else {
        Args::command()
            .error(
                ErrorKind::ValueValidation,
                format!(
                    "a {}x{} board cannot hold {} in a row",
                    args.width, args.height, args.k
                ),
            )
            .exit()
    };
    let mut human = Narrated(Human::stdio());
    let mut engine = engine(&args);

    let result = match human_side {
        Player::Max => play_match(&game, &mut human, engine.as_mut(), None),
        Player::Min => play_match(&game, engine.as_mut(), &mut human, None),
    };

    match result {
        Ok(outcome) => {
            println!("\n{}", outcome.final_state);
            match outcome.winner() {
                Some(winner) if winner == human_side => println!("You win."),
                Some(_) => println!("The engine wins."),
                None => println!("Draw."),
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
