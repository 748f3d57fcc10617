//! Iterative deepening and the time-bounded driver.
//!
//! `IterativeDeepening` is a lazy, unbounded sequence: element `d` is the
//! decision of `alpha_beta_search_limited(d)`, computed from scratch when it
//! is pulled. Nothing is carried over between depths.
//!
//! `timed_alpha_beta_search` pulls that sequence on a worker thread while
//! the caller waits on a deadline. Each finished depth is published as one
//! channel message stamped with its completion time; only messages
//! completed by the deadline count. When the deadline fires the caller
//! raises the cancel flag and returns without joining the worker, which
//! drops its partial search the next time it checks the flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};
use crate::rules::Game;

use super::alphabeta::{alpha_beta_search_limited, limited_search};
use super::check_root;
use super::config::TimedConfig;
use super::stats::SearchStats;

/// Lazy sequence of depth-limited decisions at limits 0, 1, 2, ...
///
/// Never ends on its own; bound it with `take` or a deadline.
///
/// ```rust
/// use game_search::games::TicTacToe;
/// use game_search::rules::Game;
/// use game_search::search::iterative_alpha_beta;
///
/// let game = TicTacToe::new();
/// let state = game.initial();
/// let moves: Vec<_> = iterative_alpha_beta(&game, &state)
///     .take(3)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(moves.len(), 3);
/// ```
pub struct IterativeDeepening<'a, G: Game> {
    game: &'a G,
    state: G::State,
    depth: usize,
}

/// Start iterative deepening from `state`.
pub fn iterative_alpha_beta<'a, G: Game>(game: &'a G, state: &G::State) -> IterativeDeepening<'a, G> {
    IterativeDeepening {
        game,
        state: state.clone(),
        depth: 0,
    }
}

impl<'a, G: Game> IterativeDeepening<'a, G> {
    /// Depth limit the next element will be computed at.
    #[must_use]
    pub fn next_depth(&self) -> usize {
        self.depth
    }

    /// Start the sequence over from depth 0.
    pub fn restart(&mut self) {
        self.depth = 0;
    }
}

impl<'a, G: Game> Clone for IterativeDeepening<'a, G> {
    fn clone(&self) -> Self {
        Self {
            game: self.game,
            state: self.state.clone(),
            depth: self.depth,
        }
    }
}

impl<'a, G: Game> Iterator for IterativeDeepening<'a, G> {
    type Item = SearchResult<G::Move>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = alpha_beta_search_limited(self.depth, self.game, &self.state);
        self.depth += 1;
        Some(result)
    }
}

/// Outcome of a time-bounded search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision<M> {
    /// The chosen move.
    pub action: M,

    /// Deepest depth limit whose search completed in time, or None if the
    /// caller-seeded fallback was returned.
    pub depth: Option<usize>,

    /// Statistics of the search that produced `action`.
    pub stats: SearchStats,
}

/// Best move obtainable within `config.budget` by iterative deepening.
///
/// Returns the decision of the deepest depth limit that finished before
/// the deadline. Deepening also stops early at `config.max_depth` or when a
/// depth resolved the whole tree. Fails with `BudgetTooSmall` if depth 0
/// did not finish in time.
pub fn timed_alpha_beta_search<G>(
    game: &G,
    state: &G::State,
    config: &TimedConfig,
) -> SearchResult<Decision<G::Move>>
where
    G: Game + Clone + Send + 'static,
    G::State: Send + 'static,
    G::Move: Send + 'static,
{
    run_timed(game, state, config, None)
}

/// `timed_alpha_beta_search`, returning `fallback` instead of failing when
/// depth 0 does not finish in time.
pub fn timed_alpha_beta_search_with_fallback<G>(
    game: &G,
    state: &G::State,
    config: &TimedConfig,
    fallback: G::Move,
) -> SearchResult<Decision<G::Move>>
where
    G: Game + Clone + Send + 'static,
    G::State: Send + 'static,
    G::Move: Send + 'static,
{
    run_timed(game, state, config, Some(fallback))
}

/// One completed depth, as sent by the worker.
struct Published<M> {
    depth: usize,
    action: M,
    stats: SearchStats,
    completed_at: Instant,
}

fn run_timed<G>(
    game: &G,
    state: &G::State,
    config: &TimedConfig,
    fallback: Option<G::Move>,
) -> SearchResult<Decision<G::Move>>
where
    G: Game + Clone + Send + 'static,
    G::State: Send + 'static,
    G::Move: Send + 'static,
{
    // Contract violations must not masquerade as an expired budget.
    check_root(game, state)?;

    // A budget past the end of the clock has no deadline; only the worker
    // finishing ends the wait.
    let deadline = Instant::now().checked_add(config.budget);
    let cancel = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    let worker = {
        let game = game.clone();
        let state = state.clone();
        let cancel = Arc::clone(&cancel);
        let max_depth = config.max_depth;
        thread::Builder::new()
            .name("iterative-deepening".to_string())
            .spawn(move || deepen(&game, &state, max_depth, &cancel, &tx))?
    };

    let mut last: Option<Published<G::Move>> = None;
    let mut accept = |published: Published<G::Move>| {
        if deadline.map_or(true, |deadline| published.completed_at <= deadline) {
            log::debug!(
                "depth {} complete: {:?} ({} nodes, {} prunes)",
                published.depth,
                published.action,
                published.stats.nodes,
                published.stats.prunes
            );
            last = Some(published);
        }
    };

    let mut finished = false;
    loop {
        let received = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                rx.recv_timeout(deadline - now)
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(published) => accept(published),
            Err(RecvTimeoutError::Timeout) => break,
            Err(RecvTimeoutError::Disconnected) => {
                finished = true;
                break;
            }
        }
    }

    cancel.store(true, Ordering::Relaxed);
    // A depth may have been published just before the deadline but not yet
    // received; its timestamp decides whether it counts.
    while let Ok(published) = rx.try_recv() {
        accept(published);
    }

    if finished {
        // The worker hung up: it ran out of depths, or the game panicked.
        if let Err(payload) = worker.join() {
            std::panic::resume_unwind(payload);
        }
    }

    match last {
        Some(published) => {
            log::info!(
                "timed search chose {:?} at depth {} within {:?}",
                published.action,
                published.depth,
                config.budget
            );
            Ok(Decision {
                action: published.action,
                depth: Some(published.depth),
                stats: published.stats,
            })
        }
        None => match fallback {
            Some(action) => {
                log::warn!("budget {:?} expired before depth 0; using fallback {:?}", config.budget, action);
                Ok(Decision {
                    action,
                    depth: None,
                    stats: SearchStats::default(),
                })
            }
            None => {
                log::warn!("budget {:?} expired before depth 0", config.budget);
                Err(SearchError::BudgetTooSmall { budget: config.budget })
            }
        },
    }
}

/// Worker loop: search each depth in turn and publish it once complete.
fn deepen<G: Game>(
    game: &G,
    state: &G::State,
    max_depth: Option<usize>,
    cancel: &AtomicBool,
    tx: &Sender<Published<G::Move>>,
) {
    for depth in 0.. {
        if max_depth.map_or(false, |max| depth > max) {
            break;
        }
        let (action, stats) = match limited_search(depth, game, state, Some(cancel)) {
            Ok(found) => found,
            Err(_) => break,
        };
        let exhausted = stats.exhausted;
        let published = Published {
            depth,
            action,
            stats,
            completed_at: Instant::now(),
        };
        if tx.send(published).is_err() || exhausted {
            break;
        }
    }
}
