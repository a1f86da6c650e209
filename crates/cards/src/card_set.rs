// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! A set of unique cards.
use ahash::AHashMap;
use log::trace;
use std::{fmt, hash::Hash, str::FromStr};

use crate::{Card, Error, Rank, Result, Suit};

/// The number of cards in a straight.
const STRAIGHT_LEN: usize = 5;

/// The kind of straight [CardSet::find_straight] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StraightKind {
    /// Five cards in sequence of any suit.
    Plain,
    /// Ten to Ace of the same suit.
    Royal,
    /// Five cards in sequence of the same suit.
    StraightFlush,
}

/// A set of unique cards.
///
/// Cards are kept sorted by descending face value and a card that is already
/// in the set is dropped:
///
/// ```
/// # use holdem_cards::CardSet;
/// let set: CardSet = "2C KD 2C AS".parse().unwrap();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_string(), "AS KD 2C");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// The number of cards in the set.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the cards from the highest to the lowest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.cards.iter()
    }

    /// The cards from the highest to the lowest.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the set contains the given card.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns a set with the cards in `self` or `other`.
    pub fn union(&self, other: &CardSet) -> CardSet {
        self.iter().chain(other.iter()).copied().collect()
    }

    /// Returns a set with the cards in `self` that are not in `other`.
    pub fn difference(&self, other: &CardSet) -> CardSet {
        self.iter().filter(|c| !other.contains(c)).copied().collect()
    }

    /// Groups the cards by rank, each group is sorted by descending value.
    pub fn group_by_rank(&self) -> AHashMap<Rank, Vec<Card>> {
        self.group_by(|c| c.rank())
    }

    /// Groups the cards by suit, each group is sorted by descending value.
    pub fn group_by_suit(&self) -> AHashMap<Suit, Vec<Card>> {
        self.group_by(|c| c.suit())
    }

    /// Returns the rank groups with at least `n` cards, highest rank first.
    pub fn groups_of_at_least(&self, n: usize) -> Vec<Vec<Card>> {
        let mut groups = self
            .group_by_rank()
            .into_values()
            .filter(|g| g.len() >= n)
            .collect::<Vec<_>>();
        groups.sort_by(|g1, g2| g2[0].rank().cmp(&g1[0].rank()));
        groups
    }

    /// Finds five cards in sequence, highest card first.
    ///
    /// For flushes the search runs on each suit separately and the first suit
    /// with a straight wins. An ace closes a wheel (`5 4 3 2 A`) for plain
    /// straights and straight flushes, a royal flush must start from an ace.
    pub fn find_straight(&self, kind: StraightKind) -> Option<Vec<Card>> {
        match kind {
            StraightKind::Plain => find_run(&self.cards, kind),
            StraightKind::Royal | StraightKind::StraightFlush => {
                let suits = self.group_by_suit();
                Suit::suits()
                    .filter_map(|suit| suits.get(&suit))
                    .find_map(|cards| find_run(cards, kind))
            }
        }
    }

    fn group_by<K, F>(&self, key: F) -> AHashMap<K, Vec<Card>>
    where
        K: Eq + Hash,
        F: Fn(&Card) -> K,
    {
        let mut groups = AHashMap::<K, Vec<Card>>::default();
        for card in &self.cards {
            groups.entry(key(card)).or_default().push(*card);
        }

        groups
    }
}

/// Walks cards sorted by descending value looking for a five cards run.
fn find_run(cards: &[Card], kind: StraightKind) -> Option<Vec<Card>> {
    let mut run: Vec<Card> = Vec::with_capacity(STRAIGHT_LEN);

    for card in cards {
        match run.last().copied() {
            // Pairs don't break a straight.
            Some(last) if last.rank() == card.rank() => continue,
            Some(last) if card.is_immediately_after(&last) => run.push(*card),
            _ => {
                run.clear();
                if kind != StraightKind::Royal || card.rank() == Rank::Ace {
                    run.push(*card);
                }
            }
        }

        if run.len() == STRAIGHT_LEN {
            trace!("{kind:?} straight found {run:?}");
            return Some(run);
        }
    }

    // A run from five down to deuce becomes a wheel if there is an ace.
    if kind != StraightKind::Royal && run.len() == STRAIGHT_LEN - 1 {
        let last = run[run.len() - 1];
        let ace = cards
            .iter()
            .find(|c| c.rank() == Rank::Ace && c.is_immediately_after(&last));
        if let Some(ace) = ace {
            run.push(*ace);
            trace!("{kind:?} wheel found {run:?}");
            return Some(run);
        }
    }

    None
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut cards = iter.into_iter().collect::<Vec<_>>();
        cards.sort_by(Card::by_value_desc);
        cards.dedup();
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl FromStr for CardSet {
    type Err = Error;

    /// Parses whitespace separated cards, e.g. `"KH KD KS AD AS"`.
    fn from_str(s: &str) -> Result<Self> {
        s.split_whitespace().map(str::parse::<Card>).collect()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
