// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand matchers.
//!
//! Each matcher looks for one hand category in a pool of cards, [classify]
//! tries them from the strongest to the weakest category and the first match
//! wins, so a matcher can assume that all stronger categories are absent.
use log::debug;

use holdem_cards::{Card, CardSet, Rank, StraightKind, Suit};

use crate::result::{HAND_SIZE, HandKind, HandResult};

/// A matcher returns the hand kind if the pool contains it.
pub type Matcher = fn(&CardSet) -> Option<HandKind>;

/// The matchers from the strongest to the weakest category.
pub const MATCHERS: [Matcher; 10] = [
    find_royal_flush,
    find_straight_flush,
    find_four_of_a_kind,
    find_full_house,
    find_flush,
    find_straight,
    find_three_of_a_kind,
    find_two_pair,
    find_one_pair,
    find_high_card,
];

/// Classifies a pool of cards into its best hand.
///
/// The pool should have at least five cards, with fewer cards the result is a
/// high card made of what is there.
pub fn classify(pool: &CardSet) -> HandResult {
    let kind = MATCHERS
        .iter()
        .find_map(|matcher| matcher(pool))
        .unwrap_or_else(|| high_card(pool));
    let result = HandResult::new(kind, pool);
    debug!("Pool {pool} classified as {result}");
    result
}

/// Ten to Ace of the same suit.
pub fn find_royal_flush(pool: &CardSet) -> Option<HandKind> {
    pool.find_straight(StraightKind::Royal)
        .filter(|cards| cards[0].rank() == Rank::Ace)
        .map(|cards| HandKind::RoyalFlush { cards })
}

/// Five cards in sequence of the same suit, including the wheel.
pub fn find_straight_flush(pool: &CardSet) -> Option<HandKind> {
    pool.find_straight(StraightKind::StraightFlush)
        .map(|cards| HandKind::StraightFlush { cards })
}

/// Four cards of the same rank.
pub fn find_four_of_a_kind(pool: &CardSet) -> Option<HandKind> {
    pool.groups_of_at_least(4)
        .into_iter()
        .next()
        .map(|quad| HandKind::FourOfAKind { quad })
}

/// The highest triple with the highest pair left once the triple is removed.
pub fn find_full_house(pool: &CardSet) -> Option<HandKind> {
    for group in pool.groups_of_at_least(3) {
        let rest = pool.difference(&group.iter().copied().collect());
        if let Some(pair) = rest.groups_of_at_least(2).into_iter().next() {
            return Some(HandKind::FullHouse {
                triple: take(group, 3),
                pair: take(pair, 2),
            });
        }
    }

    None
}

/// The five highest cards of a suit with at least five cards.
pub fn find_flush(pool: &CardSet) -> Option<HandKind> {
    let mut suits = pool.group_by_suit();
    Suit::suits()
        .filter_map(|suit| suits.remove(&suit))
        .find(|cards| cards.len() >= HAND_SIZE)
        .map(|cards| HandKind::Flush {
            cards: take(cards, HAND_SIZE),
        })
}

/// Five cards in sequence of any suit, including the wheel.
pub fn find_straight(pool: &CardSet) -> Option<HandKind> {
    pool.find_straight(StraightKind::Plain)
        .map(|cards| HandKind::Straight { cards })
}

/// The highest three cards of the same rank.
pub fn find_three_of_a_kind(pool: &CardSet) -> Option<HandKind> {
    pool.groups_of_at_least(3)
        .into_iter()
        .next()
        .map(|triple| HandKind::ThreeOfAKind {
            triple: take(triple, 3),
        })
}

/// The two highest pairs.
pub fn find_two_pair(pool: &CardSet) -> Option<HandKind> {
    let mut pairs = pool.groups_of_at_least(2).into_iter();
    match (pairs.next(), pairs.next()) {
        (Some(high_pair), Some(low_pair)) => Some(HandKind::TwoPair {
            high_pair: take(high_pair, 2),
            low_pair: take(low_pair, 2),
        }),
        _ => None,
    }
}

/// The highest pair.
pub fn find_one_pair(pool: &CardSet) -> Option<HandKind> {
    pool.groups_of_at_least(2)
        .into_iter()
        .next()
        .map(|pair| HandKind::OnePair {
            pair: take(pair, 2),
        })
}

/// The five highest cards, always matches.
pub fn find_high_card(pool: &CardSet) -> Option<HandKind> {
    Some(high_card(pool))
}

fn high_card(pool: &CardSet) -> HandKind {
    HandKind::HighCard {
        cards: pool.iter().take(HAND_SIZE).copied().collect(),
    }
}

fn take(mut cards: Vec<Card>, n: usize) -> Vec<Card> {
    cards.truncate(n);
    cards
}
