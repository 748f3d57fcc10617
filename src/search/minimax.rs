//! Exhaustive minimax.
//!
//! Recurses to terminal states only, so it is practical only for games
//! whose whole tree is small. It is the reference every alpha-beta variant
//! must agree with.

use std::time::Instant;

use crate::core::{Player, Utility};
use crate::error::{SearchError, SearchResult};
use crate::rules::Game;

use super::root_successors;
use super::stats::SearchStats;

/// Choose the move with the highest minimax value for the player to move.
///
/// Values are computed from the root mover's perspective throughout the
/// recursion. Ties go to the first such move in successor order.
///
/// Fails with a contract violation if `state` is terminal or has no legal
/// moves.
pub fn minimax_decision<G: Game>(game: &G, state: &G::State) -> SearchResult<G::Move> {
    minimax_decision_with_stats(game, state).map(|(action, _)| action)
}

/// `minimax_decision`, also returning the search statistics.
pub fn minimax_decision_with_stats<G: Game>(
    game: &G,
    state: &G::State,
) -> SearchResult<(G::Move, SearchStats)> {
    let start = Instant::now();
    let children = root_successors(game, state)?;
    let player = game.to_move(state);
    let mut stats = SearchStats::new();

    let mut best: Option<(G::Move, Utility)> = None;
    for (action, next) in children {
        let value = minimax_value(game, &next, player, 1, &mut stats);
        // Strict comparison keeps the leftmost maximum.
        if best.as_ref().map_or(true, |(_, v)| value > *v) {
            best = Some((action, value));
        }
    }

    stats.exhausted = true;
    stats.time_us = start.elapsed().as_micros() as u64;

    best.map(|(action, _)| (action, stats)).ok_or(SearchError::NoLegalMoves)
}

/// Minimax value of `state` from `player`'s perspective.
///
/// A non-terminal state with no successors is scored by `utility`, since
/// nothing can be played from it.
pub fn minimax_value<G: Game>(
    game: &G,
    state: &G::State,
    player: Player,
    ply: usize,
    stats: &mut SearchStats,
) -> Utility {
    stats.visit(ply);

    if game.is_terminal(state) {
        stats.leaf_evaluations += 1;
        return game.utility(state, player);
    }

    let children = game.successors(state);
    if children.is_empty() {
        stats.leaf_evaluations += 1;
        return game.utility(state, player);
    }

    let values = children
        .iter()
        .map(|(_, next)| minimax_value(game, next, player, ply + 1, stats));

    if game.to_move(state) == player {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fig52::{Fig52, Fig52State};

    #[test]
    fn test_minimax_values_of_example_tree() {
        let game = Fig52;
        let mut stats = SearchStats::new();

        let b = minimax_value(&game, &Fig52State::node("B"), Player::Max, 1, &mut stats);
        let c = minimax_value(&game, &Fig52State::node("C"), Player::Max, 1, &mut stats);
        let d = minimax_value(&game, &Fig52State::node("D"), Player::Max, 1, &mut stats);

        assert_eq!((b, c, d), (3.0, 2.0, 2.0));
    }

    #[test]
    fn test_minimax_value_from_min_perspective_is_negated() {
        let game = Fig52;
        let mut stats = SearchStats::new();
        let a = minimax_value(&game, &game.initial(), Player::Max, 0, &mut stats);

        assert_eq!(a, 3.0);
        assert_eq!(stats.leaf_evaluations, 9);
        assert_eq!(stats.depth_reached, 2);
    }

    #[test]
    fn test_minimax_decision_stats() {
        let game = Fig52;
        let (action, stats) = minimax_decision_with_stats(&game, &game.initial()).unwrap();

        assert_eq!(action, 1);
        // Three interior nodes and nine leaves.
        assert_eq!(stats.nodes, 12);
        assert!(stats.exhausted);
    }

    #[test]
    fn test_minimax_rejects_terminal_root() {
        let game = Fig52;
        let err = minimax_decision(&game, &Fig52State::node("B2")).unwrap_err();
        assert!(matches!(err, SearchError::TerminalState));
    }
}
