//! Tic-tac-toe and its k-in-a-row generalization.
//!
//! `Max` plays X and moves first. A move is the index of an empty cell,
//! `row * width + col`. The game ends when a player has `k` marks in a
//! row (horizontally, vertically, or diagonally) or the board is full.

use std::fmt;

use crate::core::{Player, Utility};
use crate::rules::Game;

static DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Board position plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToeState {
    width: usize,
    cells: Vec<Option<Player>>,
    to_move: Player,
    winner: Option<Player>,
}

impl TicTacToeState {
    /// Mark at `(row, col)`, if any.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * self.width + col]
    }

    /// The player who completed a line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Some(Player::Max) => "X",
                    Some(Player::Min) => "O",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// k-in-a-row on a `width` x `height` board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicTacToe {
    width: usize,
    height: usize,
    k: usize,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Standard 3x3, three in a row.
    pub fn new() -> Self {
        Self::with_size(3, 3, 3)
    }

    /// A `width` x `height` board won by `k` in a row.
    ///
    /// # Panics
    ///
    /// If the board is empty or `k` does not fit on it.
    pub fn with_size(width: usize, height: usize, k: usize) -> Self {
        assert!(width > 0 && height > 0, "Board must have at least one cell");
        assert!(k > 0 && k <= width.max(height), "k must fit on the board");
        Self { width, height, k }
    }

    /// `with_size`, or None if the board is empty or `k` does not fit.
    pub fn try_with_size(width: usize, height: usize, k: usize) -> Option<Self> {
        let fits = width > 0 && height > 0 && k > 0 && k <= width.max(height);
        fits.then(|| Self::with_size(width, height, k))
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Length of the run of `player`'s marks through `index` along
    /// `(dr, dc)`, counting both directions.
    fn run_length(&self, cells: &[Option<Player>], index: usize, (dr, dc): (isize, isize), player: Player) -> usize {
        let (row, col) = ((index / self.width) as isize, (index % self.width) as isize);
        let mut count = 1;
        for sign in [1, -1] {
            let (mut r, mut c) = (row + sign * dr, col + sign * dc);
            while self.in_bounds(r, c) && cells[r as usize * self.width + c as usize] == Some(player) {
                count += 1;
                r += sign * dr;
                c += sign * dc;
            }
        }
        count
    }

    /// Every line of `k` cells on the board, as cell indices.
    fn lines(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let k = self.k as isize;
        (0..self.height as isize).flat_map(move |row| {
            (0..self.width as isize).flat_map(move |col| {
                DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
                    let end = (row + (k - 1) * dr, col + (k - 1) * dc);
                    if !self.in_bounds(end.0, end.1) {
                        return None;
                    }
                    Some(
                        (0..k)
                            .map(|i| (row + i * dr) as usize * self.width + (col + i * dc) as usize)
                            .collect(),
                    )
                })
            })
        })
    }

    /// Lines still winnable by `player` minus lines still winnable by the
    /// opponent, scaled into (-1, 1).
    fn open_lines(&self, state: &TicTacToeState, player: Player) -> Utility {
        let mut total = 0usize;
        let mut score = 0isize;
        for line in self.lines() {
            total += 1;
            let blocked_for = |p: Player| line.iter().any(|&i| state.cells[i] == Some(p.opponent()));
            if !blocked_for(player) {
                score += 1;
            }
            if !blocked_for(player.opponent()) {
                score -= 1;
            }
        }
        score as Utility / (total + 1) as Utility
    }
}

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Move = usize;

    fn initial(&self) -> TicTacToeState {
        TicTacToeState {
            width: self.width,
            cells: vec![None; self.width * self.height],
            to_move: Player::Max,
            winner: None,
        }
    }

    fn to_move(&self, state: &TicTacToeState) -> Player {
        state.to_move
    }

    fn legal_moves(&self, state: &TicTacToeState) -> Vec<usize> {
        if state.winner.is_some() {
            return vec![];
        }
        state
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    fn make_move(&self, action: &usize, state: &TicTacToeState) -> TicTacToeState {
        assert!(
            state.winner.is_none() && state.cells.get(*action) == Some(&None),
            "illegal move {}",
            action
        );

        let player = state.to_move;
        let mut cells = state.cells.clone();
        cells[*action] = Some(player);

        let won = DIRECTIONS
            .iter()
            .any(|&dir| self.run_length(&cells, *action, dir, player) >= self.k);

        TicTacToeState {
            width: self.width,
            cells,
            to_move: player.opponent(),
            winner: if won { Some(player) } else { None },
        }
    }

    fn utility(&self, state: &TicTacToeState, player: Player) -> Utility {
        match state.winner {
            Some(winner) if winner == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn is_terminal(&self, state: &TicTacToeState) -> bool {
        state.winner.is_some() || state.is_full()
    }

    fn heuristic(&self, state: &TicTacToeState, player: Player) -> Utility {
        if self.is_terminal(state) {
            self.utility(state, player)
        } else {
            self.open_lines(state, player)
        }
    }
}
