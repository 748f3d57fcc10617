//! Player adapters: every way of choosing a move behind one interface.
//!
//! A game loop only needs `Strategy::choose(game, state)`. Search players
//! delegate to `search`; `RandomPlayer` and `Human` need no search at all.
//!
//! ## Usage
//!
//! ```rust
//! use game_search::games::TicTacToe;
//! use game_search::players::{play_match, AlphaBetaPlayer, RandomPlayer};
//!
//! let game = TicTacToe::new();
//! let outcome = play_match(&game, &mut AlphaBetaPlayer, &mut RandomPlayer::new(42), None).unwrap();
//!
//! // Perfect play never loses tic-tac-toe.
//! assert!(outcome.utility.unwrap() >= 0.0);
//! ```

pub mod arena;
pub mod human;
pub mod strategy;

pub use arena::{play_match, MatchOutcome};
pub use human::Human;
pub use strategy::{AlphaBetaPlayer, DepthLimitedPlayer, MinimaxPlayer, RandomPlayer, Strategy, TimedPlayer};
