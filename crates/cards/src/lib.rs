// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Holdem cards types.
//!
//! This crate defines the cards used by the hand evaluator:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.value() > kd.value());
//! assert!(kd.is_immediately_after(&ah));
//! ```
//!
//! a [CardSet] type that holds unique cards sorted by face value, with set
//! algebra, grouping, and straight detection:
//!
//! ```
//! # use holdem_cards::{CardSet, StraightKind};
//! let pool: CardSet = "3S 2C AD 4H 7S 5H KC".parse().unwrap();
//! let wheel = pool.find_straight(StraightKind::Plain).unwrap();
//! assert_eq!(wheel[0].to_string(), "5H");
//! assert_eq!(wheel[4].to_string(), "AD");
//! ```
//!
//! and a [Deck] type for shuffling and dealing random cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card_set;
mod deck;
mod error;

pub use card_set::{CardSet, StraightKind};
pub use deck::{Card, Deck, Rank, Suit};
pub use error::{Error, Result};
