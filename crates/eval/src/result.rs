// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand classification results.
use std::{cmp::Ordering, fmt};

use holdem_cards::{Card, CardSet};

/// The number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// A hand category with the cards that decide it.
///
/// Cards in each group are sorted by descending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandKind {
    /// Ten to Ace of the same suit.
    RoyalFlush {
        /// The five cards, ace first.
        cards: Vec<Card>,
    },
    /// Five cards in sequence of the same suit.
    StraightFlush {
        /// The five cards, top card first, a wheel ends with the ace.
        cards: Vec<Card>,
    },
    /// Four cards of the same rank.
    FourOfAKind {
        /// The four cards.
        quad: Vec<Card>,
    },
    /// Three cards of one rank and two of another.
    FullHouse {
        /// The three cards.
        triple: Vec<Card>,
        /// The two cards.
        pair: Vec<Card>,
    },
    /// Five cards of the same suit.
    Flush {
        /// The five highest cards of the suit.
        cards: Vec<Card>,
    },
    /// Five cards in sequence.
    Straight {
        /// The five cards, top card first, a wheel ends with the ace.
        cards: Vec<Card>,
    },
    /// Three cards of the same rank.
    ThreeOfAKind {
        /// The three cards.
        triple: Vec<Card>,
    },
    /// Two pairs.
    TwoPair {
        /// The highest pair.
        high_pair: Vec<Card>,
        /// The lowest pair.
        low_pair: Vec<Card>,
    },
    /// Two cards of the same rank.
    OnePair {
        /// The two cards.
        pair: Vec<Card>,
    },
    /// None of the above.
    HighCard {
        /// The five highest cards.
        cards: Vec<Card>,
    },
}

impl HandKind {
    /// The category strength, 0 for a royal flush to 9 for a high card.
    pub fn hand_rank(&self) -> u8 {
        match self {
            HandKind::RoyalFlush { .. } => 0,
            HandKind::StraightFlush { .. } => 1,
            HandKind::FourOfAKind { .. } => 2,
            HandKind::FullHouse { .. } => 3,
            HandKind::Flush { .. } => 4,
            HandKind::Straight { .. } => 5,
            HandKind::ThreeOfAKind { .. } => 6,
            HandKind::TwoPair { .. } => 7,
            HandKind::OnePair { .. } => 8,
            HandKind::HighCard { .. } => 9,
        }
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandKind::RoyalFlush { .. } => "Royal Flush",
            HandKind::StraightFlush { .. } => "Straight Flush",
            HandKind::FourOfAKind { .. } => "Four of a Kind",
            HandKind::FullHouse { .. } => "Full House",
            HandKind::Flush { .. } => "Flush",
            HandKind::Straight { .. } => "Straight",
            HandKind::ThreeOfAKind { .. } => "Three of a Kind",
            HandKind::TwoPair { .. } => "Two Pair",
            HandKind::OnePair { .. } => "Pair",
            HandKind::HighCard { .. } => "High",
        }
    }

    /// Describes the deciding cards, e.g. `"Ace King"` for aces full of kings.
    pub fn description(&self) -> String {
        match self {
            HandKind::RoyalFlush { cards } => cards
                .first()
                .map(|c| c.suit().name())
                .unwrap_or_default()
                .to_string(),
            HandKind::FullHouse {
                triple: high,
                pair: low,
            }
            | HandKind::TwoPair {
                high_pair: high,
                low_pair: low,
            } => format!("{} {}", face(high), face(low)),
            HandKind::StraightFlush { cards }
            | HandKind::Flush { cards }
            | HandKind::Straight { cards }
            | HandKind::HighCard { cards }
            | HandKind::FourOfAKind { quad: cards }
            | HandKind::ThreeOfAKind { triple: cards }
            | HandKind::OnePair { pair: cards } => face(cards).to_string(),
        }
    }

    /// The deciding cards, most significant group first.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            HandKind::FullHouse {
                triple: high,
                pair: low,
            }
            | HandKind::TwoPair {
                high_pair: high,
                low_pair: low,
            } => high.iter().chain(low).copied().collect(),
            HandKind::RoyalFlush { cards }
            | HandKind::StraightFlush { cards }
            | HandKind::Flush { cards }
            | HandKind::Straight { cards }
            | HandKind::HighCard { cards }
            | HandKind::FourOfAKind { quad: cards }
            | HandKind::ThreeOfAKind { triple: cards }
            | HandKind::OnePair { pair: cards } => cards.clone(),
        }
    }

    /// Values compared between hands of the same category, before kickers.
    fn tiebreak_values(&self) -> Vec<u8> {
        match self {
            HandKind::RoyalFlush { .. } => Vec::new(),
            HandKind::StraightFlush { cards } | HandKind::Straight { cards } => {
                vec![top_value(cards)]
            }
            HandKind::FullHouse {
                triple: high,
                pair: low,
            }
            | HandKind::TwoPair {
                high_pair: high,
                low_pair: low,
            } => vec![top_value(high), top_value(low)],
            HandKind::Flush { cards } | HandKind::HighCard { cards } => {
                cards.iter().map(Card::value).collect()
            }
            HandKind::FourOfAKind { quad: cards }
            | HandKind::ThreeOfAKind { triple: cards }
            | HandKind::OnePair { pair: cards } => vec![top_value(cards)],
        }
    }
}

fn face(cards: &[Card]) -> &'static str {
    cards.first().map(|c| c.rank().name()).unwrap_or_default()
}

fn top_value(cards: &[Card]) -> u8 {
    cards.first().map_or(0, Card::value)
}

/// The best hand found in a pool of cards.
///
/// Results compare by hand strength: a greater result is a stronger hand and
/// two results are equal when neither hand beats the other, even if they were
/// made with different cards.
#[derive(Debug, Clone)]
pub struct HandResult {
    kind: HandKind,
    kickers: Vec<Card>,
    pool: CardSet,
}

impl HandResult {
    /// Creates a result taking the kickers from the pool cards not in `kind`.
    pub(crate) fn new(kind: HandKind, pool: &CardSet) -> Self {
        let decisive = kind.cards();
        let kickers = pool
            .iter()
            .filter(|c| !decisive.contains(c))
            .take(HAND_SIZE.saturating_sub(decisive.len()))
            .copied()
            .collect();

        Self {
            kind,
            kickers,
            pool: pool.clone(),
        }
    }

    /// The hand category and deciding cards.
    pub fn kind(&self) -> &HandKind {
        &self.kind
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The category strength, 0 for a royal flush to 9 for a high card.
    pub fn hand_rank(&self) -> u8 {
        self.kind.hand_rank()
    }

    /// Describes the deciding cards.
    pub fn description(&self) -> String {
        self.kind.description()
    }

    /// The cards that complete the best five, highest first.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// The pool this result was found in.
    pub fn pool(&self) -> &CardSet {
        &self.pool
    }

    /// The best five cards, deciding cards first and then kickers.
    pub fn best_hand(&self) -> Vec<Card> {
        let mut cards = self.kind.cards();
        cards.extend_from_slice(&self.kickers);
        cards
    }

    fn tiebreak_values(&self) -> Vec<u8> {
        let mut values = self.kind.tiebreak_values();
        values.extend(self.kickers.iter().map(Card::value));
        values
    }
}

/// Pool cards outside the best five never count.
impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        // A lower hand rank is a stronger hand.
        other
            .hand_rank()
            .cmp(&self.hand_rank())
            .then_with(|| self.tiebreak_values().cmp(&other.tiebreak_values()))
    }
}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandResult {}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.description())
    }
}
