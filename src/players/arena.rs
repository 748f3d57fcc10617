//! Game loop: alternate two strategies until the game ends.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Utility};
use crate::error::SearchResult;
use crate::rules::Game;

use super::strategy::Strategy;

/// Result of a played-out match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome<S, M> {
    /// Position the match stopped at.
    pub final_state: S,

    /// Moves played, in order.
    pub moves: Vec<M>,

    /// Final utility from `Max`'s perspective, or None if the match stopped
    /// at a non-terminal state (ply cap reached, or nothing to play).
    pub utility: Option<Utility>,
}

impl<S, M> MatchOutcome<S, M> {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// The winning side, if the match finished with a non-zero utility.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.utility {
            Some(u) if u > 0.0 => Some(Player::Max),
            Some(u) if u < 0.0 => Some(Player::Min),
            _ => None,
        }
    }
}

/// Play from the initial state, asking whichever side `to_move` names.
///
/// Every chosen move is checked for legality; a strategy error or an
/// illegal move ends the match with that error.
pub fn play_match<G, A, B>(
    game: &G,
    max: &mut A,
    min: &mut B,
    max_plies: Option<usize>,
) -> SearchResult<MatchOutcome<G::State, G::Move>>
where
    G: Game,
    A: Strategy<G> + ?Sized,
    B: Strategy<G> + ?Sized,
{
    let mut state = game.initial();
    let mut moves = Vec::new();

    while !game.is_terminal(&state) {
        if max_plies.map_or(false, |cap| moves.len() >= cap) {
            log::info!("match stopped at ply cap {}", moves.len());
            break;
        }
        if game.legal_moves(&state).is_empty() {
            log::info!("match stopped: no legal moves at ply {}", moves.len());
            break;
        }

        let player = game.to_move(&state);
        let action = match player {
            Player::Max => max.choose(game, &state)?,
            Player::Min => min.choose(game, &state)?,
        };
        log::trace!("ply {}: {} plays {:?}", moves.len(), player, action);

        state = game.try_make_move(&action, &state)?;
        moves.push(action);
    }

    let utility = if game.is_terminal(&state) {
        Some(game.utility(&state, Player::Max))
    } else {
        None
    };
    log::info!("match over after {} plies, utility for Max: {:?}", moves.len(), utility);

    Ok(MatchOutcome {
        final_state: state,
        moves,
        utility,
    })
}
