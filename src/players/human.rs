//! Interactive player reading moves from a text stream.
//!
//! At the prompt an empty line reprompts, `?` prints help, `m` lists the
//! legal moves, and anything else is parsed as a move. Unparseable or
//! illegal input prints a diagnostic and reprompts.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use crate::error::{SearchError, SearchResult};
use crate::rules::Game;

use super::strategy::Strategy;

const HELP: &str = "\
Enter a move, or one of:
  ?   show this help
  m   list the legal moves";

/// A human at a prompt.
pub struct Human<R, W> {
    input: R,
    output: W,
}

impl Human<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Human<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<G, R, W> Strategy<G> for Human<R, W>
where
    G: Game,
    G::Move: FromStr + Display,
    R: BufRead,
    W: Write,
{
    fn choose(&mut self, game: &G, state: &G::State) -> SearchResult<G::Move> {
        let legal = game.legal_moves(state);
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        loop {
            write!(self.output, "Your move? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SearchError::InputClosed);
            }

            match line.trim() {
                "" => continue,
                "?" => writeln!(self.output, "{}", HELP)?,
                "m" => {
                    let listed: Vec<String> = legal.iter().map(ToString::to_string).collect();
                    writeln!(self.output, "Legal moves: {}", listed.join(" "))?;
                }
                text => match text.parse::<G::Move>() {
                    Ok(action) if legal.contains(&action) => return Ok(action),
                    Ok(action) => writeln!(self.output, "Illegal move: {}", action)?,
                    Err(_) => writeln!(self.output, "Can't parse move: {}", text)?,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Fig52, TicTacToe};
    use std::io::Cursor;

    fn human(script: &str) -> Human<Cursor<Vec<u8>>, Vec<u8>> {
        Human::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(player: Human<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(player.into_inner().1).unwrap()
    }

    #[test]
    fn test_reads_legal_move() {
        let game = TicTacToe::new();
        let mut player = human("4\n");
        assert_eq!(player.choose(&game, &game.initial()).unwrap(), 4);
    }

    #[test]
    fn test_reprompts_until_legal() {
        let game = TicTacToe::new();
        let state = game.make_move(&4, &game.initial());
        let mut player = human("\nabc\n4\n9\n?\nm\n 2 \n");

        assert_eq!(player.choose(&game, &state).unwrap(), 2);

        let out = transcript(player);
        assert_eq!(out.matches("Your move? ").count(), 7);
        assert!(out.contains("Can't parse move: abc"));
        assert!(out.contains("Illegal move: 4"));
        assert!(out.contains("Illegal move: 9"));
        assert!(out.contains("list the legal moves"));
        assert!(out.contains("Legal moves: 0 1 2 3 5 6 7 8"));
    }

    #[test]
    fn test_input_closed() {
        let game = Fig52;
        let mut player = human("7\n");
        let err = player.choose(&game, &game.initial()).unwrap_err();
        assert!(matches!(err, SearchError::InputClosed));
    }
}
