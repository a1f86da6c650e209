// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Game input.
use ahash::AHashMap;
use anyhow::{Context, Result, bail};
use log::{info, warn};
use rand::Rng;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use holdem_eval::{Board, Card, CardSet, Deck, Hand};

/// The community cards and the players hands.
#[derive(Debug)]
pub struct Game {
    /// The community cards.
    pub board: Board,
    /// The players hands.
    pub hands: Vec<Hand>,
}

impl Game {
    /// Parses a game, the first line has the community cards and each other
    /// line a player name followed by two cards.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let [board, hands @ ..] = lines else {
            bail!("At least 2 lines of input are required.");
        };

        if hands.is_empty() {
            bail!("At least 2 lines of input are required.");
        }

        let board = board.as_ref().parse::<Board>()?;
        let hands = hands
            .iter()
            .map(|line| line.as_ref().parse::<Hand>())
            .collect::<holdem_eval::Result<Vec<_>>>()?;

        let game = Self { board, hands };
        game.warn_duplicates();
        Ok(game)
    }

    /// Deals a random game with the given number of players.
    pub fn deal<R: Rng>(players: usize, rng: &mut R) -> Result<Self> {
        let mut deck = Deck::new_and_shuffled(rng);

        let board = (0..Board::SIZE)
            .map(|_| deck.deal())
            .collect::<Option<CardSet>>()
            .context("Not enough cards for the board")?;
        let board = Board::new(board)?;

        let hands = (1..=players)
            .map(|n| -> Result<Hand> {
                let cards = (0..Hand::SIZE)
                    .map(|_| deck.deal())
                    .collect::<Option<Vec<_>>>()
                    .context("Not enough cards for the players")?;
                Ok(Hand::new(format!("Player{n}"), cards)?)
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Dealt board {board} to {players} players");
        Ok(Self { board, hands })
    }

    /// Cards dealt twice are accepted but logged.
    fn warn_duplicates(&self) {
        let mut seen = AHashMap::<Card, usize>::default();
        let hole_cards = self.hands.iter().flat_map(|h| h.cards());
        for card in self.board.cards().iter().copied().chain(hole_cards) {
            *seen.entry(card).or_default() += 1;
        }

        for (card, count) in seen.into_iter().filter(|(_, count)| *count > 1) {
            warn!("Card {card} is dealt {count} times");
        }
    }
}

/// Reads the input lines from a file or from stdin.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    let data = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read input file {}", path.display()))?,
        None => {
            let mut data = String::new();
            io::stdin()
                .read_to_string(&mut data)
                .context("Cannot read from stdin")?;
            data
        }
    };

    Ok(lines(&data))
}

/// Splits the input into trimmed non-empty lines.
fn lines(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines() {
        assert_eq!(lines("foo\nbar"), ["foo", "bar"]);
        assert_eq!(lines("foo\r\nbar\r\n"), ["foo", "bar"]);
        assert_eq!(lines("  foo \n\n\t bar\t\n  \n"), ["foo", "bar"]);
        assert!(lines("").is_empty());
    }

    #[test]
    fn parse_game() {
        let game = Game::parse(&["KH KD KS AD AS", "Bar TS JD", "Foo AC TD"]).unwrap();
        assert_eq!(game.board.to_string(), "AD AS KD KH KS");
        assert_eq!(game.hands.len(), 2);
        assert_eq!(game.hands[1].name(), "Foo");
    }

    #[test]
    fn parse_errors() {
        let err = Game::parse(&["KH KD KS AD AS"]).unwrap_err();
        assert_eq!(err.to_string(), "At least 2 lines of input are required.");

        let err = Game::parse::<&str>(&[]).unwrap_err();
        assert_eq!(err.to_string(), "At least 2 lines of input are required.");

        let err = Game::parse(&["KH KD KS AD", "Bar TS JD"]).unwrap_err();
        assert_eq!(err.to_string(), "The board must have 5 distinct cards, found 4");

        let err = Game::parse(&["KH KD KS AD AS", "Bar TS"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Player 'Bar' must have 2 distinct cards, found 1"
        );

        let err = Game::parse(&["KH KD KS AD AS", "Bar TS JX"]).unwrap_err();
        assert_eq!(err.to_string(), "'X' is not a valid suit");

        let err = Game::parse(&["KH KD KS AD AS", "Bar TS 1D"]).unwrap_err();
        assert_eq!(err.to_string(), "'1' is not a valid face");
    }

    #[test]
    fn deal_game() {
        let game = Game::deal(10, &mut rand::rng()).unwrap();
        assert_eq!(game.board.cards().len(), Board::SIZE);
        assert_eq!(game.hands.len(), 10);
        assert_eq!(game.hands[9].name(), "Player10");

        let mut cards = game.board.cards().clone();
        for hand in &game.hands {
            cards = cards.union(&hand.cards().into_iter().collect());
        }
        assert_eq!(cards.len(), Board::SIZE + 10 * Hand::SIZE);
    }
}
