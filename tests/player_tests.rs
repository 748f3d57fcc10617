//! Player adapter and match tests.

use std::io::Cursor;
use std::time::Duration;

use game_search::core::Player;
use game_search::games::{Fig52, TicTacToe};
use game_search::players::{
    play_match, AlphaBetaPlayer, DepthLimitedPlayer, Human, MinimaxPlayer, RandomPlayer, Strategy,
    TimedPlayer,
};
use game_search::rules::Game;
use game_search::search::TimedConfig;
use game_search::SearchError;

// =============================================================================
// Interchangeable Strategies
// =============================================================================

#[test]
fn test_strategies_are_interchangeable() {
    let game = Fig52;
    let root = game.initial();

    let mut players: Vec<Box<dyn Strategy<Fig52>>> = vec![
        Box::new(MinimaxPlayer),
        Box::new(AlphaBetaPlayer),
        Box::new(DepthLimitedPlayer::with_depth(2)),
        Box::new(TimedPlayer::new(TimedConfig::default().with_budget(Duration::from_millis(200)))),
        Box::new(Human::new(Cursor::new(b"m\n1\n".to_vec()), Vec::new())),
    ];

    for player in players.iter_mut() {
        assert_eq!(player.choose(&game, &root).unwrap(), 1);
    }
}

// =============================================================================
// Matches
// =============================================================================

#[test]
fn test_perfect_play_draws() {
    let game = TicTacToe::new();
    let outcome = play_match(&game, &mut AlphaBetaPlayer, &mut AlphaBetaPlayer, None).unwrap();

    assert_eq!(outcome.utility, Some(0.0));
    assert_eq!(outcome.plies(), 9);
    assert_eq!(outcome.winner(), None);
}

#[test]
fn test_alpha_beta_never_loses_to_random() {
    let game = TicTacToe::new();
    for seed in 0..5 {
        let as_max = play_match(&game, &mut AlphaBetaPlayer, &mut RandomPlayer::new(seed), None).unwrap();
        assert_ne!(as_max.winner(), Some(Player::Min), "lost as Max with seed {}", seed);

        let as_min = play_match(&game, &mut RandomPlayer::new(seed), &mut AlphaBetaPlayer, None).unwrap();
        assert_ne!(as_min.winner(), Some(Player::Max), "lost as Min with seed {}", seed);
    }
}

#[test]
fn test_full_depth_limit_holds_optimal_opponent_to_a_draw() {
    let game = TicTacToe::new();

    let mut deep = DepthLimitedPlayer::with_depth(9);
    let outcome = play_match(&game, &mut deep, &mut AlphaBetaPlayer, None).unwrap();
    assert_eq!(outcome.utility, Some(0.0));

    let mut deep = DepthLimitedPlayer::with_depth(9);
    let outcome = play_match(&game, &mut AlphaBetaPlayer, &mut deep, None).unwrap();
    assert_eq!(outcome.utility, Some(0.0));
}

#[test]
fn test_timed_player_never_loses_to_random() {
    let game = TicTacToe::new();
    let mut timed = TimedPlayer::new(TimedConfig::default().with_budget(Duration::from_millis(300)));

    let outcome = play_match(&game, &mut timed, &mut RandomPlayer::new(11), None).unwrap();
    assert_ne!(outcome.winner(), Some(Player::Min));
    assert!(game.is_terminal(&outcome.final_state));
}

#[test]
fn test_random_matches_replay_with_seed() {
    let game = TicTacToe::new();
    let first = play_match(&game, &mut RandomPlayer::new(5), &mut RandomPlayer::new(6), None).unwrap();
    let second = play_match(&game, &mut RandomPlayer::new(5), &mut RandomPlayer::new(6), None).unwrap();

    assert_eq!(first.moves, second.moves);
    assert_eq!(first.final_state, second.final_state);
}

#[test]
fn test_human_against_engine() {
    let game = TicTacToe::new();
    // Blank lines, help, and taken cells are reprompted, not fatal.
    let script = "4\n\n0\n?\n8\n2\n6\n1\n3\n5\n7\n";
    let mut human = Human::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

    // The script may run dry before the game ends; the engine as Min must
    // not lose either way.
    match play_match(&game, &mut human, &mut AlphaBetaPlayer, None) {
        Ok(outcome) => assert_ne!(outcome.winner(), Some(Player::Max)),
        Err(err) => assert!(matches!(err, SearchError::InputClosed)),
    }
}
