// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Rankings output.
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use holdem_eval::{Card, Ranking};

/// Output options.
#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Appends the hole cards and the best five cards to each line.
    pub verbose: bool,
    /// Prints a JSON array instead of text lines.
    pub json: bool,
}

/// A ranking in the JSON output.
#[derive(Debug, Serialize)]
struct Row<'a> {
    rank: usize,
    player: &'a str,
    hand: String,
    hand_rank: u8,
    hole_cards: [Card; 2],
    best_hand: Vec<Card>,
}

impl<'a> From<&'a Ranking> for Row<'a> {
    fn from(ranking: &'a Ranking) -> Self {
        Self {
            rank: ranking.rank,
            player: ranking.hand.name(),
            hand: ranking.result.to_string(),
            hand_rank: ranking.result.hand_rank(),
            hole_cards: ranking.hand.cards(),
            best_hand: ranking.result.best_hand(),
        }
    }
}

/// Renders the rankings into output lines.
pub fn render(rankings: &[Ranking], options: Options) -> Result<Vec<String>> {
    if options.json {
        let rows = rankings.iter().map(Row::from).collect::<Vec<_>>();
        return Ok(vec![serde_json::to_string_pretty(&rows)?]);
    }

    rankings
        .iter()
        .map(|ranking| render_line(ranking, options.verbose))
        .collect()
}

fn render_line(ranking: &Ranking, verbose: bool) -> Result<String> {
    let mut line = format!(
        "{} {} {}",
        ranking.rank,
        ranking.hand.name(),
        ranking.result
    );

    if verbose {
        let [c1, c2] = ranking.hand.cards();
        write!(line, " [{c1} {c2}] (")?;
        for (idx, card) in ranking.result.best_hand().iter().enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            write!(line, "{card}")?;
        }
        line.push(')');
    }

    Ok(line)
}
