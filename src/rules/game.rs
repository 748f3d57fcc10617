//! Game trait for concrete game implementations.
//!
//! A `Game` value is a stateless description of rules. Every position is a
//! separate `State` value: `make_move` returns a fresh state and never
//! mutates its input, so each branch of a search owns its own states.

use std::fmt::Debug;

use crate::core::{Player, Utility};
use crate::error::{SearchError, SearchResult};

/// Rules of a two-player, zero-sum, perfect-information game.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return an empty vec if nothing can be played; search
///   treats that as an end of the line even if `is_terminal` is false
/// - `make_move`: Must be pure; may panic on an illegal move
/// - `utility`: Only meaningful when `is_terminal` holds, and must satisfy
///   `utility(s, Max) == -utility(s, Min)`
/// - `heuristic` and `successors`: Overridable for speed, but an override
///   must not change their observable results on terminal states (for
///   `heuristic`) or the move/state pairing (for `successors`)
pub trait Game {
    /// A complete position.
    type State: Clone;

    /// A move a player may apply to a state.
    type Move: Clone + PartialEq + Debug;

    /// The starting position.
    fn initial(&self) -> Self::State;

    /// Whose move it is. Unspecified on terminal states.
    fn to_move(&self, state: &Self::State) -> Player;

    /// Moves available at `state`, in the order search explores them.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply a move, returning the resulting state.
    ///
    /// Calling this with a move that is not legal at `state` is a contract
    /// violation; implementations may panic.
    fn make_move(&self, action: &Self::Move, state: &Self::State) -> Self::State;

    /// Value of a terminal state from `player`'s perspective.
    fn utility(&self, state: &Self::State, player: Player) -> Utility;

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    // === Convenience Methods ===

    /// Static estimate of a state from `player`'s perspective.
    ///
    /// Default: the utility on terminal states, 0 elsewhere.
    fn heuristic(&self, state: &Self::State, player: Player) -> Utility {
        if self.is_terminal(state) {
            self.utility(state, player)
        } else {
            0.0
        }
    }

    /// Every legal move paired with the state it produces.
    ///
    /// Default implementation applies each of `legal_moves` in order.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Move, Self::State)> {
        self.legal_moves(state)
            .into_iter()
            .map(|action| {
                let next = self.make_move(&action, state);
                (action, next)
            })
            .collect()
    }

    /// Apply a move after checking that it is legal.
    fn try_make_move(&self, action: &Self::Move, state: &Self::State) -> SearchResult<Self::State> {
        if self.legal_moves(state).contains(action) {
            Ok(self.make_move(action, state))
        } else {
            Err(SearchError::IllegalMove {
                action: format!("{:?}", action),
            })
        }
    }
}
