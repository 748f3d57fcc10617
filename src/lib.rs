//! # game-search
//!
//! A search engine for two-player, zero-sum, perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine knows nothing about boards or pieces.
//!    Games plug in by implementing the `Game` trait over their own state
//!    and move types.
//!
//! 2. **Pure Transitions**: `make_move` returns a new state. Search never
//!    mutates a position, so every branch owns its own states.
//!
//! 3. **Exact Agrees With Pruned**: alpha-beta is an optimization of
//!    minimax and must choose the same move, ties included.
//!
//! ## Architecture
//!
//! - **Exact search**: minimax and full alpha-beta to terminal states.
//!
//! - **Bounded search**: alpha-beta with a cutoff predicate and evaluation
//!   function; the depth-limited form uses the game's heuristic.
//!
//! - **Anytime search**: iterative deepening as a lazy sequence, and a
//!   time-bounded driver that runs it on a cancellable worker thread and
//!   returns the deepest depth completed in time.
//!
//! ## Modules
//!
//! - `core`: Players, utilities, RNG
//! - `rules`: The `Game` trait
//! - `search`: Minimax, alpha-beta, iterative deepening
//! - `players`: `Strategy` adapters and the match driver
//! - `games`: Reference games
//! - `error`: Error taxonomy

pub mod core;
pub mod error;
pub mod games;
pub mod players;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, Utility};

pub use crate::error::{SearchError, SearchResult};

pub use crate::rules::Game;

pub use crate::search::{
    alpha_beta_full_search, alpha_beta_search, alpha_beta_search_limited, iterative_alpha_beta,
    minimax_decision, timed_alpha_beta_search, timed_alpha_beta_search_with_fallback, Decision,
    IterativeDeepening, SearchConfig, SearchStats, TimedConfig,
};

pub use crate::players::{
    play_match, AlphaBetaPlayer, DepthLimitedPlayer, Human, MatchOutcome, MinimaxPlayer, RandomPlayer,
    Strategy, TimedPlayer,
};
