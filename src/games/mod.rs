//! Reference games for testing the engine.
//!
//! - `Fig52`: the fixed two-ply textbook tree, small enough to verify by hand
//! - `TicTacToe`: 3x3 tic-tac-toe, generalized to k-in-a-row on any board,
//!   with an open-lines heuristic for depth-limited play

pub mod fig52;
pub mod tictactoe;

pub use fig52::{Fig52, Fig52State};
pub use tictactoe::{TicTacToe, TicTacToeState};
