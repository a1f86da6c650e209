// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Validation errors.
use thiserror::Error;

/// Errors raised when building cards, hands, and boards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A suit char that is not one of `C`, `D`, `H`, `S`.
    #[error("'{0}' is not a valid suit")]
    InvalidSuit(char),
    /// A face char that is not one of `2`..`9`, `T`, `J`, `Q`, `K`, `A`.
    #[error("'{0}' is not a valid face")]
    InvalidFace(char),
    /// A card token that is not two chars long.
    #[error("'{0}' is not a valid card")]
    InvalidCard(String),
    /// A hand or board with the wrong number of distinct cards.
    #[error("{what} must have {expected} distinct cards, found {found}")]
    WrongCardCount {
        /// What was being built, e.g. "Player 'Foo'" or "The board".
        what: String,
        /// Required number of cards.
        expected: usize,
        /// Number of distinct cards supplied.
        found: usize,
    },
    /// A hand line without a player name.
    #[error("a hand must start with the player name")]
    MissingName,
}

/// Result alias for the cards crates.
pub type Result<T> = std::result::Result<T, Error>;
