//! Game trait for concrete game implementations.
//!
//! Games implement `Game` to define:
//! - The initial position and whose turn it is
//! - Legal moves and how they transform a state
//! - Terminal positions and their utility
//!
//! The search engine calls into `Game` but never interprets
//! game-specific concepts directly.

pub mod game;

pub use game::Game;
