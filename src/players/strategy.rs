//! The uniform move-choosing interface and its search-backed players.

use crate::core::GameRng;
use crate::error::{SearchError, SearchResult};
use crate::rules::Game;
use crate::search::{
    alpha_beta_full_search, alpha_beta_search_limited, minimax_decision, timed_alpha_beta_search,
    SearchConfig, TimedConfig,
};

/// Anything that can pick a move: a search, a random policy, a human.
///
/// Implementations return a legal move or fail; they hold no search logic
/// of their own beyond delegating to `search`.
pub trait Strategy<G: Game> {
    /// Choose a move at `state`.
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move>;
}

impl<G, F> Strategy<G> for F
where
    G: Game,
    F: FnMut(&G, &G::State) -> SearchResult<G::Move>,
{
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move> {
        self(game, state)
    }
}

/// Plays `minimax_decision`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxPlayer;

impl<G: Game> Strategy<G> for MinimaxPlayer {
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move> {
        minimax_decision(game, state)
    }
}

/// Plays `alpha_beta_full_search`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaBetaPlayer;

impl<G: Game> Strategy<G> for AlphaBetaPlayer {
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move> {
        alpha_beta_full_search(game, state)
    }
}

/// Plays depth-limited alpha-beta with the game's heuristic.
#[derive(Clone, Debug, Default)]
pub struct DepthLimitedPlayer {
    config: SearchConfig,
}

impl DepthLimitedPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a player with the given depth limit.
    pub fn with_depth(depth: usize) -> Self {
        Self::new(SearchConfig::default().with_depth_limit(depth))
    }
}

impl<G: Game> Strategy<G> for DepthLimitedPlayer {
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move> {
        alpha_beta_search_limited(self.config.depth_limit, game, state)
    }
}

/// Plays time-bounded iterative deepening.
#[derive(Clone, Debug, Default)]
pub struct TimedPlayer {
    config: TimedConfig,
}

impl TimedPlayer {
    pub fn new(config: TimedConfig) -> Self {
        Self { config }
    }
}

impl<G> Strategy<G> for TimedPlayer
where
    G: Game + Clone + Send + 'static,
    G::State: Send + 'static,
    G::Move: Send + 'static,
{
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move> {
        timed_alpha_beta_search(game, state, &self.config).map(|decision| decision.action)
    }
}

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl<G: Game> Strategy<G> for RandomPlayer {
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move> {
        let moves = game.legal_moves(state);
        self.rng.choose(&moves).cloned().ok_or(SearchError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Fig52, TicTacToe, TicTacToeState};

    #[test]
    fn test_search_players_on_example_tree() {
        let game = Fig52;
        let root = game.initial();

        assert_eq!(MinimaxPlayer.choose(&game, &root).unwrap(), 1);
        assert_eq!(AlphaBetaPlayer.choose(&game, &root).unwrap(), 1);
        assert_eq!(DepthLimitedPlayer::with_depth(0).choose(&game, &root).unwrap(), 1);
        assert_eq!(TimedPlayer::default().choose(&game, &root).unwrap(), 1);
    }

    #[test]
    fn test_closure_is_a_strategy() {
        let game = TicTacToe::new();
        let mut first_legal =
            |g: &TicTacToe, s: &TicTacToeState| g.legal_moves(s).first().copied().ok_or(SearchError::NoLegalMoves);

        let state = game.make_move(&0, &game.initial());
        assert_eq!(Strategy::<TicTacToe>::choose(&mut first_legal, &game, &state).unwrap(), 1);
    }

    #[test]
    fn test_random_player_is_legal_and_seeded() {
        let game = TicTacToe::new();
        let state = game.initial();

        let mut a = RandomPlayer::new(7);
        let mut b = RandomPlayer::new(7);
        for _ in 0..10 {
            let action = a.choose(&game, &state).unwrap();
            assert!(game.legal_moves(&state).contains(&action));
            assert_eq!(action, b.choose(&game, &state).unwrap());
        }
    }

    #[test]
    fn test_random_player_without_moves() {
        let game = Fig52;
        let leaf = crate::games::Fig52State::node("B1");
        let err = RandomPlayer::new(1).choose(&game, &leaf).unwrap_err();
        assert!(matches!(err, SearchError::NoLegalMoves));
    }
}
