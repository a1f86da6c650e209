// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Holdem hand classifier and ranker.
//!
//! The classifier finds the best five cards hand in a pool of cards trying
//! each hand category from the royal flush down to the high card, the first
//! category found is the best hand:
//!
//! ```
//! # use holdem_eval::*;
//! let pool: CardSet = "KH KD KS AD AS AC TD".parse().unwrap();
//! let result = classify(&pool);
//! assert_eq!(result.to_string(), "Full House Ace King");
//! assert_eq!(result.hand_rank(), 3);
//! ```
//!
//! To rank players create a [Board] with the community cards and a [Hand]
//! for each player, [rank] sorts the hands from the strongest to the weakest
//! breaking ties with kickers:
//!
//! ```
//! # use holdem_eval::*;
//! let board: Board = "KH KD KS AD AS".parse().unwrap();
//! let hands = vec!["Bar TS JD".parse().unwrap(), "Foo AC TD".parse().unwrap()];
//!
//! let rankings = rank(&board, hands);
//! assert_eq!(rankings[0].hand.name(), "Foo");
//! assert_eq!(rankings[0].rank, 1);
//! assert_eq!(rankings[1].result.to_string(), "Full House King Ace");
//! ```
//!
//! The **`parallel`** feature adds `rank_parallel` that classifies hands on
//! multiple threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod hand;
pub mod matchers;
mod ranking;
mod result;

pub use hand::{Board, Hand};
pub use matchers::classify;
#[cfg(feature = "parallel")]
pub use ranking::rank_parallel;
pub use ranking::{Ranking, rank};
pub use result::{HAND_SIZE, HandKind, HandResult};

// Reexport cards types.
pub use holdem_cards::{Card, CardSet, Deck, Error, Rank, Result, StraightKind, Suit};
