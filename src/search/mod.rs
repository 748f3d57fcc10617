//! Adversarial search over any `Game`.
//!
//! ## Overview
//!
//! - **Exact search**: `minimax_decision` and `alpha_beta_full_search`
//!   explore to terminal states and always agree on the chosen move
//! - **Bounded search**: `alpha_beta_search` takes a cutoff predicate and an
//!   evaluation function; `alpha_beta_search_limited` fixes them to a depth
//!   limit and the game's heuristic
//! - **Iterative deepening**: `iterative_alpha_beta` yields the
//!   depth-limited decision at limits 0, 1, 2, ...;
//!   `timed_alpha_beta_search` runs that sequence on a worker thread and
//!   returns the deepest decision completed within a wall-clock budget
//!
//! Search never mutates a state; every branch works on the fresh states
//! returned by `Game::successors`.
//!
//! ## Usage
//!
//! ```rust
//! use game_search::games::TicTacToe;
//! use game_search::rules::Game;
//! use game_search::search::{alpha_beta_full_search, minimax_decision};
//!
//! let game = TicTacToe::new();
//! let state = game.initial();
//! let state = game.make_move(&4, &state);
//! let state = game.make_move(&0, &state);
//!
//! let ab = alpha_beta_full_search(&game, &state).unwrap();
//! let mm = minimax_decision(&game, &state).unwrap();
//! assert_eq!(ab, mm);
//! ```

pub mod alphabeta;
pub mod config;
pub mod iterative;
pub mod minimax;
pub mod stats;

pub use alphabeta::{
    alpha_beta_full_search, alpha_beta_full_search_with_stats, alpha_beta_search,
    alpha_beta_search_limited, alpha_beta_search_limited_with_stats, alpha_beta_search_with_stats,
};
pub use config::{SearchConfig, TimedConfig};
pub use iterative::{
    iterative_alpha_beta, timed_alpha_beta_search, timed_alpha_beta_search_with_fallback, Decision,
    IterativeDeepening,
};
pub use minimax::{minimax_decision, minimax_decision_with_stats, minimax_value};
pub use stats::SearchStats;

use crate::error::{SearchError, SearchResult};
use crate::rules::Game;

/// Check the root preconditions shared by every search without building
/// successors. For the timed driver, which searches on another thread.
pub(crate) fn check_root<G: Game>(game: &G, state: &G::State) -> SearchResult<()> {
    if game.is_terminal(state) {
        return Err(SearchError::TerminalState);
    }
    if game.legal_moves(state).is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(())
}

/// Successors of a search root, or the precondition it violates. Same
/// checks as `check_root`, reusing the successors the search needs anyway.
pub(crate) fn root_successors<G: Game>(
    game: &G,
    state: &G::State,
) -> SearchResult<Vec<(G::Move, G::State)>> {
    if game.is_terminal(state) {
        return Err(SearchError::TerminalState);
    }
    let children = game.successors(state);
    if children.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(children)
}
