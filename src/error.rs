//! Error types for search and player operations.
//!
//! Contract violations (searching from a dead position, applying an illegal
//! move through the checked path) and budget failures surface to the caller
//! unchanged. Interactive input mistakes never reach this type; the human
//! adapter reprompts instead.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while choosing a move.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Search was asked to decide from a state with no legal moves.
    #[error("no legal moves available at the search root")]
    NoLegalMoves,

    /// Search was asked to decide from a terminal state.
    #[error("search root is a terminal state")]
    TerminalState,

    /// A move that is not legal at the given state.
    #[error("illegal move: {action}")]
    IllegalMove { action: String },

    /// The time budget expired before the shallowest search completed.
    #[error("time budget of {budget:?} expired before depth 0 completed")]
    BudgetTooSmall { budget: Duration },

    /// An in-flight search was abandoned. Never surfaced by public drivers.
    #[error("search cancelled")]
    Cancelled,

    /// The interactive input stream ended before a move was entered.
    #[error("input closed before a move was entered")]
    InputClosed,

    /// Reading input or writing a prompt failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// True for programmer errors: calling search or `try_make_move`
    /// outside their preconditions.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SearchError::NoLegalMoves | SearchError::TerminalState | SearchError::IllegalMove { .. }
        )
    }
}

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
