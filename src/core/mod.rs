//! Core engine types: players, utilities, RNG.
//!
//! These are game-agnostic. Concrete games describe their own states and
//! moves through the `Game` trait in `rules`.

pub mod player;
pub mod rng;

pub use player::{Player, Utility};
pub use rng::GameRng;
