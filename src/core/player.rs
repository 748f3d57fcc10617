//! The two sides of a zero-sum game and the utility scale they share.
//!
//! ## Player
//!
//! `Max` and `Min` optimize in opposite directions over the same
//! `Utility`. A utility reported from one side's perspective is negated to
//! read it from the other side.

use serde::{Deserialize, Serialize};

/// Real-valued game score, always reported from one player's perspective.
pub type Utility = f64;

/// One of the two players of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The maximizing side; moves first in every bundled game.
    Max,
    /// The minimizing side.
    Min,
}

impl Player {
    /// Both players, `Max` first.
    pub const BOTH: [Player; 2] = [Player::Max, Player::Min];

    /// The other player. `p.opponent().opponent() == p` for both players.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Sign that converts a utility from `Max`'s perspective into this
    /// player's perspective.
    ///
    /// ```
    /// use game_search::core::Player;
    ///
    /// let for_max = 3.0;
    /// assert_eq!(for_max * Player::Min.sign(), -3.0);
    /// assert_eq!(for_max * Player::Max.sign(), 3.0);
    /// ```
    #[must_use]
    pub const fn sign(self) -> Utility {
        match self {
            Player::Max => 1.0,
            Player::Min => -1.0,
        }
    }

    /// Re-express a utility from `Max`'s perspective as seen by this player.
    #[must_use]
    pub fn perspective(self, max_utility: Utility) -> Utility {
        max_utility * self.sign()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Max => write!(f, "Max"),
            Player::Min => write!(f, "Min"),
        }
    }
}
