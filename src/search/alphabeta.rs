//! Alpha-beta search: exact and cutoff variants.
//!
//! All variants share one recursion. The exact variant cuts off only at
//! terminal states and scores them with `utility`, so it returns the same
//! move as `minimax_decision` for every input. The cutoff variant consults
//! a caller-supplied predicate before expanding each node and scores cut
//! nodes with a caller-supplied evaluation function.
//!
//! ## Depth
//!
//! The cutoff predicate receives the depth of the node being expanded,
//! counted from 0 at the root's successors. `alpha_beta_search_limited(L)`
//! therefore expands successors down to depth L and scores whatever lies
//! one ply further with the game's heuristic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::core::{Player, Utility};
use crate::error::{SearchError, SearchResult};
use crate::rules::Game;

use super::root_successors;
use super::stats::SearchStats;

/// Alpha-beta to terminal states.
///
/// Chooses exactly the move `minimax_decision` would, including its
/// leftmost tie-breaking.
pub fn alpha_beta_full_search<G: Game>(game: &G, state: &G::State) -> SearchResult<G::Move> {
    alpha_beta_full_search_with_stats(game, state).map(|(action, _)| action)
}

/// `alpha_beta_full_search`, also returning the search statistics.
pub fn alpha_beta_full_search_with_stats<G: Game>(
    game: &G,
    state: &G::State,
) -> SearchResult<(G::Move, SearchStats)> {
    AlphaBeta::new(
        game,
        |s: &G::State, _: usize| game.is_terminal(s),
        |s: &G::State, p: Player| game.utility(s, p),
        None,
    )
    .decide(state)
}

/// Alpha-beta with a pluggable cutoff predicate and evaluation function.
///
/// `cutoff(state, depth)` is consulted before each node is expanded; when
/// it holds, `eval(state, root_mover)` is used instead of recursing.
pub fn alpha_beta_search<G, C, E>(game: &G, cutoff: C, eval: E, state: &G::State) -> SearchResult<G::Move>
where
    G: Game,
    C: Fn(&G::State, usize) -> bool,
    E: Fn(&G::State, Player) -> Utility,
{
    alpha_beta_search_with_stats(game, cutoff, eval, state).map(|(action, _)| action)
}

/// `alpha_beta_search`, also returning the search statistics.
pub fn alpha_beta_search_with_stats<G, C, E>(
    game: &G,
    cutoff: C,
    eval: E,
    state: &G::State,
) -> SearchResult<(G::Move, SearchStats)>
where
    G: Game,
    C: Fn(&G::State, usize) -> bool,
    E: Fn(&G::State, Player) -> Utility,
{
    AlphaBeta::new(game, cutoff, eval, None).decide(state)
}

/// Depth-limited alpha-beta: cut off at terminal states or below `limit`,
/// scoring with the game's heuristic.
pub fn alpha_beta_search_limited<G: Game>(limit: usize, game: &G, state: &G::State) -> SearchResult<G::Move> {
    alpha_beta_search_limited_with_stats(limit, game, state).map(|(action, _)| action)
}

/// `alpha_beta_search_limited`, also returning the search statistics.
pub fn alpha_beta_search_limited_with_stats<G: Game>(
    limit: usize,
    game: &G,
    state: &G::State,
) -> SearchResult<(G::Move, SearchStats)> {
    limited_search(limit, game, state, None)
}

/// Depth-limited alpha-beta that gives up with `SearchError::Cancelled`
/// as soon as `cancel` is raised.
pub(crate) fn limited_search<G: Game>(
    limit: usize,
    game: &G,
    state: &G::State,
    cancel: Option<&AtomicBool>,
) -> SearchResult<(G::Move, SearchStats)> {
    AlphaBeta::new(
        game,
        |s: &G::State, depth: usize| depth > limit || game.is_terminal(s),
        |s: &G::State, p: Player| game.heuristic(s, p),
        cancel,
    )
    .decide(state)
}

/// One alpha-beta run from a fixed root.
struct AlphaBeta<'a, G: Game, C, E> {
    game: &'a G,
    cutoff: C,
    eval: E,
    cancel: Option<&'a AtomicBool>,
    /// The root mover; all values are from this player's perspective.
    player: Player,
    /// Set when a non-terminal node was cut off.
    cut_short: bool,
    stats: SearchStats,
}

impl<'a, G, C, E> AlphaBeta<'a, G, C, E>
where
    G: Game,
    C: Fn(&G::State, usize) -> bool,
    E: Fn(&G::State, Player) -> Utility,
{
    fn new(game: &'a G, cutoff: C, eval: E, cancel: Option<&'a AtomicBool>) -> Self {
        Self {
            game,
            cutoff,
            eval,
            cancel,
            player: Player::Max,
            cut_short: false,
            stats: SearchStats::new(),
        }
    }

    fn decide(mut self, state: &G::State) -> SearchResult<(G::Move, SearchStats)> {
        let start = Instant::now();
        let children = root_successors(self.game, state)?;
        self.player = self.game.to_move(state);

        // Each root child is searched with the best value so far as alpha.
        // A child that fails low returns a bound no greater than that value,
        // so with strict comparison it never displaces an earlier move.
        let mut alpha = f64::NEG_INFINITY;
        let mut best: Option<(G::Move, Utility)> = None;
        for (action, next) in children {
            let value = self.value(&next, alpha, f64::INFINITY, 0)?;
            if best.as_ref().map_or(true, |(_, v)| value > *v) {
                best = Some((action, value));
            }
            alpha = alpha.max(value);
        }

        self.stats.exhausted = !self.cut_short;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        best.map(|(action, _)| (action, self.stats))
            .ok_or(SearchError::NoLegalMoves)
    }

    fn value(&mut self, state: &G::State, alpha: Utility, beta: Utility, depth: usize) -> SearchResult<Utility> {
        if let Some(flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(SearchError::Cancelled);
            }
        }
        self.stats.visit(depth + 1);

        if (self.cutoff)(state, depth) {
            if !self.game.is_terminal(state) {
                self.cut_short = true;
            }
            return Ok(self.leaf(state));
        }

        let children = self.game.successors(state);
        if children.is_empty() {
            return Ok(self.leaf(state));
        }

        if self.game.to_move(state) == self.player {
            self.max_value(&children, alpha, beta, depth)
        } else {
            self.min_value(&children, alpha, beta, depth)
        }
    }

    fn max_value(
        &mut self,
        children: &[(G::Move, G::State)],
        mut alpha: Utility,
        beta: Utility,
        depth: usize,
    ) -> SearchResult<Utility> {
        let mut v = f64::NEG_INFINITY;
        for (i, (_, next)) in children.iter().enumerate() {
            v = v.max(self.value(next, alpha, beta, depth + 1)?);
            if v >= beta {
                if i + 1 < children.len() {
                    self.stats.prunes += 1;
                }
                return Ok(v);
            }
            alpha = alpha.max(v);
        }
        Ok(v)
    }

    fn min_value(
        &mut self,
        children: &[(G::Move, G::State)],
        alpha: Utility,
        mut beta: Utility,
        depth: usize,
    ) -> SearchResult<Utility> {
        let mut v = f64::INFINITY;
        for (i, (_, next)) in children.iter().enumerate() {
            v = v.min(self.value(next, alpha, beta, depth + 1)?);
            if v <= alpha {
                if i + 1 < children.len() {
                    self.stats.prunes += 1;
                }
                return Ok(v);
            }
            beta = beta.min(v);
        }
        Ok(v)
    }

    fn leaf(&mut self, state: &G::State) -> Utility {
        self.stats.leaf_evaluations += 1;
        (self.eval)(state, self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fig52::{Fig52, Fig52State};
    use crate::search::minimax::minimax_decision_with_stats;

    #[test]
    fn test_full_search_on_example_tree() {
        let game = Fig52;
        let (action, stats) = alpha_beta_full_search_with_stats(&game, &game.initial()).unwrap();

        assert_eq!(action, 1);
        assert!(stats.exhausted);
        // C is refuted by its first leaf (2 <= 3), skipping C2 and C3.
        assert!(stats.prunes >= 1);
    }

    #[test]
    fn test_full_search_visits_fewer_nodes_than_minimax() {
        let game = Fig52;
        let (_, ab) = alpha_beta_full_search_with_stats(&game, &game.initial()).unwrap();
        let (_, mm) = minimax_decision_with_stats(&game, &game.initial()).unwrap();

        assert!(ab.nodes < mm.nodes);
        assert!(ab.leaf_evaluations < mm.leaf_evaluations);
    }

    #[test]
    fn test_cutoff_at_depth_zero_uses_eval() {
        let game = Fig52;
        // Score the root's successors directly; the eval prefers D.
        let eval = |s: &Fig52State, _p: Player| if s.name() == "D" { 10.0 } else { 0.0 };
        let (action, stats) =
            alpha_beta_search_with_stats(&game, |_, _| true, eval, &game.initial()).unwrap();

        assert_eq!(action, 3);
        assert_eq!(stats.leaf_evaluations, 3);
        assert!(!stats.exhausted);
    }

    #[test]
    fn test_eval_sees_root_mover() {
        let game = Fig52;
        let eval = |_: &Fig52State, p: Player| {
            assert_eq!(p, Player::Max);
            0.0
        };
        alpha_beta_search(&game, |_, _| true, eval, &game.initial()).unwrap();
    }

    #[test]
    fn test_limited_search_deep_enough_is_exact() {
        let game = Fig52;
        let (action, stats) = alpha_beta_search_limited_with_stats(0, &game, &game.initial()).unwrap();

        // The root's successors are expanded at depth 0 and their leaves
        // are terminal, so limit 0 already resolves the whole tree.
        assert_eq!(action, 1);
        assert!(stats.exhausted);
    }

    #[test]
    fn test_cancelled_search_returns_no_move() {
        let game = Fig52;
        let cancel = AtomicBool::new(true);
        let err = limited_search(5, &game, &game.initial(), Some(&cancel)).unwrap_err();
        assert!(matches!(err, SearchError::Cancelled));
    }
}
