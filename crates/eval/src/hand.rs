// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Player hands and community cards.
use std::{fmt, str::FromStr};

use holdem_cards::{Card, CardSet, Error, Result};

/// A player hand, the player name and two hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    name: String,
    cards: [Card; 2],
}

impl Hand {
    /// The number of hole cards.
    pub const SIZE: usize = 2;

    /// Creates a hand with the given player name and two distinct cards.
    pub fn new<I>(name: impl Into<String>, cards: I) -> Result<Self>
    where
        I: IntoIterator<Item = Card>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::MissingName);
        }

        let cards = cards.into_iter().collect::<CardSet>();
        match *cards.as_slice() {
            [c1, c2] => Ok(Self {
                name,
                cards: [c1, c2],
            }),
            _ => Err(Error::WrongCardCount {
                what: format!("Player '{name}'"),
                expected: Self::SIZE,
                found: cards.len(),
            }),
        }
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hole cards, highest first.
    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    /// The seven cards pool made of the hole cards and the board.
    pub fn pool(&self, board: &Board) -> CardSet {
        self.cards
            .iter()
            .copied()
            .collect::<CardSet>()
            .union(board.cards())
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses a hand line, e.g. `"Bar TS JD"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let name = tokens.next().ok_or(Error::MissingName)?;
        let cards = tokens.map(str::parse::<Card>).collect::<Result<Vec<_>>>()?;
        Hand::new(name, cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.cards[0], self.cards[1])
    }
}

/// The five community cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: CardSet,
}

impl Board {
    /// The number of community cards.
    pub const SIZE: usize = 5;

    /// Creates a board from five distinct cards.
    pub fn new(cards: CardSet) -> Result<Self> {
        if cards.len() != Self::SIZE {
            return Err(Error::WrongCardCount {
                what: "The board".to_string(),
                expected: Self::SIZE,
                found: cards.len(),
            });
        }

        Ok(Self { cards })
    }

    /// The board cards, highest first.
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses the board line, e.g. `"KH KD KS AD AS"`.
    fn from_str(s: &str) -> Result<Self> {
        Board::new(s.parse()?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::{Rank, Suit};

    #[test]
    fn parse_hand() {
        let hand = "Bar TS JD".parse::<Hand>().unwrap();
        assert_eq!(hand.name(), "Bar");
        assert_eq!(
            hand.cards(),
            [
                Card::new(Rank::Jack, Suit::Diamonds),
                Card::new(Rank::Ten, Suit::Spades)
            ]
        );
        assert_eq!(hand.to_string(), "Bar: JD TS");

        let hand = "  Foo   AC  TD ".parse::<Hand>().unwrap();
        assert_eq!(hand.name(), "Foo");
    }

    #[test]
    fn hand_errors() {
        let err = "Foo AC".parse::<Hand>().unwrap_err();
        assert_eq!(
            err,
            Error::WrongCardCount {
                what: "Player 'Foo'".to_string(),
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "Player 'Foo' must have 2 distinct cards, found 1");

        assert!(matches!(
            "Foo AC KD 2S".parse::<Hand>(),
            Err(Error::WrongCardCount { found: 3, .. })
        ));
        assert!(matches!(
            "Foo AC AC".parse::<Hand>(),
            Err(Error::WrongCardCount { found: 1, .. })
        ));
        assert_eq!("Foo AC KX".parse::<Hand>(), Err(Error::InvalidSuit('X')));
        assert_eq!("".parse::<Hand>(), Err(Error::MissingName));
        assert_eq!(Hand::new("", []), Err(Error::MissingName));
    }

    #[test]
    fn parse_board() {
        let board = "KH KD KS AD AS".parse::<Board>().unwrap();
        assert_eq!(board.cards().len(), Board::SIZE);
        assert_eq!(board.to_string(), "AD AS KD KH KS");

        assert!(matches!(
            "KH KD KS AD".parse::<Board>(),
            Err(Error::WrongCardCount { expected: 5, found: 4, .. })
        ));
        assert!(matches!(
            "KH KD KS AD AD".parse::<Board>(),
            Err(Error::WrongCardCount { found: 4, .. })
        ));
        assert!(matches!(
            "KH KD KS AD AS 2C".parse::<Board>(),
            Err(Error::WrongCardCount { found: 6, .. })
        ));
    }

    #[test]
    fn hand_pool() {
        let board = "KH KD KS AD AS".parse::<Board>().unwrap();
        let hand = "Foo AC TD".parse::<Hand>().unwrap();

        let pool = hand.pool(&board);
        assert_eq!(pool.len(), 7);
        assert_eq!(pool.to_string(), "AC AD AS KD KH KS TD");
    }
}
