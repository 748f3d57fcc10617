//! The two-ply textbook tree.
//!
//! Max moves at `A` to one of `B`, `C`, `D`; Min then moves to a leaf.
//! Moves are numbered 1-3 at every node. Leaf values, from Max's
//! perspective:
//!
//! ```text
//!            A
//!     1/     2|     3\
//!     B       C       D
//!   3 12 8  2 4 6  14 5 2
//! ```
//!
//! Min's best replies give B = 3, C = 2, D = 2, so Max's minimax move is 1.

use crate::core::{Player, Utility};
use crate::rules::Game;

static INTERIOR: [(&str, [&str; 3]); 4] = [
    ("A", ["B", "C", "D"]),
    ("B", ["B1", "B2", "B3"]),
    ("C", ["C1", "C2", "C3"]),
    ("D", ["D1", "D2", "D3"]),
];

static LEAVES: [(&str, Utility); 9] = [
    ("B1", 3.0),
    ("B2", 12.0),
    ("B3", 8.0),
    ("C1", 2.0),
    ("C2", 4.0),
    ("C3", 6.0),
    ("D1", 14.0),
    ("D2", 5.0),
    ("D3", 2.0),
];

/// A node of the tree, named as in the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fig52State(&'static str);

impl Fig52State {
    /// The node with the given name. Unknown names behave as dead ends.
    #[must_use]
    pub const fn node(name: &'static str) -> Self {
        Self(name)
    }

    /// Node name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }

    fn children(&self) -> Option<&'static [&'static str; 3]> {
        INTERIOR
            .iter()
            .find(|(name, _)| *name == self.0)
            .map(|(_, children)| children)
    }

    fn leaf_value(&self) -> Option<Utility> {
        LEAVES.iter().find(|(name, _)| *name == self.0).map(|(_, v)| *v)
    }
}

/// Rules of the two-ply tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fig52;

impl Game for Fig52 {
    type State = Fig52State;
    type Move = u8;

    fn initial(&self) -> Fig52State {
        Fig52State("A")
    }

    fn to_move(&self, state: &Fig52State) -> Player {
        if state.0 == "A" {
            Player::Max
        } else {
            Player::Min
        }
    }

    fn legal_moves(&self, state: &Fig52State) -> Vec<u8> {
        match state.children() {
            Some(_) => vec![1, 2, 3],
            None => vec![],
        }
    }

    fn make_move(&self, action: &u8, state: &Fig52State) -> Fig52State {
        let children = state
            .children()
            .unwrap_or_else(|| panic!("illegal move {} at terminal node {}", action, state.0));
        match action {
            1..=3 => Fig52State(children[usize::from(*action) - 1]),
            _ => panic!("illegal move {} at node {}", action, state.0),
        }
    }

    fn utility(&self, state: &Fig52State, player: Player) -> Utility {
        player.perspective(state.leaf_value().unwrap_or(0.0))
    }

    fn is_terminal(&self, state: &Fig52State) -> bool {
        state.leaf_value().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        let game = Fig52;
        let root = game.initial();

        let children: Vec<_> = game.successors(&root).into_iter().map(|(_, s)| s.name()).collect();
        assert_eq!(children, vec!["B", "C", "D"]);

        let c = game.make_move(&2, &root);
        assert_eq!(game.to_move(&c), Player::Min);
        assert_eq!(game.make_move(&3, &c).name(), "C3");
    }

    #[test]
    fn test_leaves_are_zero_sum() {
        let game = Fig52;
        for (name, value) in LEAVES {
            let leaf = Fig52State::node(name);
            assert!(game.is_terminal(&leaf));
            assert!(game.legal_moves(&leaf).is_empty());
            assert_eq!(game.utility(&leaf, Player::Max), value);
            assert_eq!(game.utility(&leaf, Player::Min), -value);
        }
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn test_move_from_leaf_panics() {
        let game = Fig52;
        let _ = game.make_move(&1, &Fig52State::node("B1"));
    }
}
