// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Holdem hands ranker CLI.
//!
//! Reads the community cards on the first line and a player per line:
//!
//! ```text
//! KH KD KS AD AS
//! Bar TS JD
//! Foo AC TD
//! ```
//!
//! and prints the players from the best to the worst hand:
//!
//! ```text
//! 1 Foo Full House Ace King
//! 2 Bar Full House King Ace
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use holdem_eval::{rank, rank_parallel};

mod input;
mod output;

#[derive(Debug, Parser)]
#[clap(version, about = "Ranks Texas Hold'em hands read from stdin or a file.")]
struct Cli {
    /// Read the game from this file instead of stdin.
    #[clap(long, short)]
    input: Option<PathBuf>,
    /// Deal a random game with this number of players.
    #[clap(long, conflicts_with = "input", value_parser = clap::value_parser!(u8).range(2..=10))]
    deal: Option<u8>,
    /// Print the hole cards and the best five cards.
    #[clap(long, short)]
    verbose: bool,
    /// Print the rankings as JSON.
    #[clap(long)]
    json: bool,
    /// Number of threads used to classify the hands.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// The log filter, a level (off, error, warn, info, debug, trace) or a
    /// list of module=level directives.
    #[clap(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .parse_filters(&cli.log)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let game = match cli.deal {
        Some(players) => input::Game::deal(players as usize, &mut rand::rng())?,
        None => input::Game::parse(&input::read_lines(cli.input.as_deref())?)?,
    };

    debug!("Ranking {} hands on {} tasks", game.hands.len(), cli.tasks);
    let rankings = if cli.tasks > 1 {
        rank_parallel(&game.board, game.hands, cli.tasks as usize)
    } else {
        rank(&game.board, game.hands)
    };

    let options = output::Options {
        verbose: cli.verbose,
        json: cli.json,
    };

    for line in output::render(&rankings, options)? {
        println!("{line}");
    }

    Ok(())
}
