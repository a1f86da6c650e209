// Copyright (C) 2025 Holdem Ranker Developers
// SPDX-License-Identifier: Apache-2.0

//! Hands ranking.
use log::debug;

use crate::{Board, Hand, HandResult, classify};

/// A ranked hand.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// The player hand.
    pub hand: Hand,
    /// The best hand made with the board.
    pub result: HandResult,
    /// The 1-based rank, hands of equal strength share the same rank.
    pub rank: usize,
}

/// Ranks hands from the strongest to the weakest.
///
/// Tied hands keep their input order and share the rank of the first of
/// them, the hand after them is ranked by its position (1, 1, 3).
pub fn rank(board: &Board, hands: Vec<Hand>) -> Vec<Ranking> {
    let results = hands
        .into_iter()
        .map(|hand| {
            let result = classify(&hand.pool(board));
            (hand, result)
        })
        .collect();
    order(results)
}

/// Ranks hands like [rank] classifying the hands on `num_tasks` threads.
///
/// Panics if `num_tasks` is zero.
#[cfg(feature = "parallel")]
pub fn rank_parallel(board: &Board, hands: Vec<Hand>, num_tasks: usize) -> Vec<Ranking> {
    use std::{panic, thread};

    assert!(num_tasks > 0);

    let chunk_size = hands.len().div_ceil(num_tasks).max(1);
    let results = thread::scope(|s| {
        let tasks = hands
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|hand| classify(&hand.pool(board)))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        tasks
            .into_iter()
            .flat_map(|task| task.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    order(hands.into_iter().zip(results).collect())
}

fn order(mut results: Vec<(Hand, HandResult)>) -> Vec<Ranking> {
    // Stable sort, strongest first.
    results.sort_by(|(_, r1), (_, r2)| r2.cmp(r1));

    let mut rankings = Vec::<Ranking>::with_capacity(results.len());
    for (pos, (hand, result)) in results.into_iter().enumerate() {
        let rank = match rankings.last() {
            Some(prev) if prev.result == result => prev.rank,
            _ => pos + 1,
        };

        debug!("Rank {rank} {} {result}", hand.name());
        rankings.push(Ranking { hand, result, rank });
    }

    rankings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hands(lines: &[&str]) -> Vec<Hand> {
        lines.iter().map(|l| l.parse().unwrap()).collect()
    }

    fn summary(rankings: &[Ranking]) -> Vec<String> {
        rankings
            .iter()
            .map(|r| format!("{} {} {}", r.rank, r.hand.name(), r.result))
            .collect()
    }

    #[test]
    fn full_house_tie_break() {
        let board = "KH KD KS AD AS".parse::<Board>().unwrap();
        let rankings = rank(&board, hands(&["Bar TS JD", "Foo AC TD"]));

        assert_eq!(
            summary(&rankings),
            ["1 Foo Full House Ace King", "2 Bar Full House King Ace"]
        );
    }

    #[test]
    fn straight_from_hole_cards() {
        let board = "2C 4D 6S 8H TC".parse::<Board>().unwrap();
        let rankings = rank(&board, hands(&["P1 3S 5H"]));

        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[0].result.to_string(), "Straight 6");
    }

    #[test]
    fn categories_order() {
        let board = "2H 7H 9H KD QS".parse::<Board>().unwrap();
        let rankings = rank(
            &board,
            hands(&["High 3C 4D", "Pair 2C 5D", "Flush 3H 4H", "Trips 9D 9S", "Straight JC TD"]),
        );

        assert_eq!(
            summary(&rankings),
            [
                "1 Flush Flush 9",
                "2 Straight Straight King",
                "3 Trips Three of a Kind 9",
                "4 Pair Pair 2",
                "5 High High King",
            ]
        );
    }

    #[test]
    fn ties_share_rank() {
        // The board straight plays for everyone.
        let board = "TC JD QH KS AC".parse::<Board>().unwrap();
        let rankings = rank(&board, hands(&["A 2C 3D", "B 4H 5S", "C KD KH", "D AD 9C"]));

        assert_eq!(
            summary(&rankings),
            [
                "1 A Straight Ace",
                "1 B Straight Ace",
                "1 C Straight Ace",
                "1 D Straight Ace",
            ]
        );

        let board = "2C 2D 7H 8S JC".parse::<Board>().unwrap();
        let rankings = rank(&board, hands(&["A AC 3D", "B AD 4H", "C 9D 9H"]));
        assert_eq!(
            summary(&rankings),
            [
                "1 C Two Pair 9 2",
                "2 A Pair 2",
                "2 B Pair 2",
            ]
        );
    }

    #[test]
    fn rank_after_ties_skips() {
        let board = "2C 2D 7H 8S JC".parse::<Board>().unwrap();
        let rankings = rank(&board, hands(&["A AC 3D", "B AD 4H", "C KD 3H"]));
        let ranks = rankings.iter().map(|r| r.rank).collect::<Vec<_>>();
        assert_eq!(ranks, [1, 1, 3]);
        assert_eq!(rankings[2].hand.name(), "C");
    }

    #[rstest]
    // Straight flush top card.
    #[case("5H 6H 7H 2C 3D", "A 8H 9H", "B 4H 8H")]
    // Four of a kind kicker.
    #[case("9C 9D 9H 9S 2D", "A AC 3D", "B KC QD")]
    // Full house pair.
    #[case("7C 7D 7H 3S 2D", "A KC KD", "B QC QD")]
    // Flush second card.
    #[case("AH 9H 5H 2C 3D", "A KH 4H", "B QH JH")]
    // Flush last card.
    #[case("AH KH QH 7H 3D", "A 5H 2C", "B 4H 2D")]
    // Straight top card, wheel is the lowest.
    #[case("2C 3D 4H 5S KD", "A 6C JD", "B AC JH")]
    // Three of a kind kicker.
    #[case("8C 8D 8H 2S 4D", "A AC 3D", "B KC QD")]
    // Two pair low pair.
    #[case("KC KD 2H 6S 9D", "A 8C 8D", "B 7C 7D")]
    // Two pair kicker.
    #[case("KC KD 4H 4S 9D", "A AC 2D", "B QC 3D")]
    // Pair kicker.
    #[case("AC 7D 5H 3S 2D", "A AD KD", "B AH QD")]
    // Pair second kicker.
    #[case("AC KD 5H 3S 2D", "A AD 9D", "B AH 8D")]
    // High card fifth card.
    #[case("AC KD 9H 6S 2D", "A 5C 3D", "B 4C 3H")]
    fn kickers_break_ties(#[case] board: &str, #[case] winner: &str, #[case] loser: &str) {
        let board = board.parse::<Board>().unwrap();
        let rankings = rank(&board, hands(&[loser, winner]));

        assert_eq!(rankings[0].hand.name(), "A");
        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].rank, 2);
        assert_eq!(rankings[0].result.hand_rank(), rankings[1].result.hand_rank());
    }

    #[rstest]
    // Royal flushes are always equal.
    #[case("TH JH QH KH AH", "A 2C 3D", "B 4C 5D")]
    // Kickers outside the best five don't count.
    #[case("AC AD KH QS JD", "A 3C 2D", "B 4C 3D")]
    // Flush cards beyond the fifth don't count.
    #[case("AH KH QH JH 9H", "A 2H 3C", "B 4H 3D")]
    fn true_ties(#[case] board: &str, #[case] first: &str, #[case] second: &str) {
        let board = board.parse::<Board>().unwrap();
        let rankings = rank(&board, hands(&[first, second]));

        assert_eq!(rankings[0].rank, 1);
        assert_eq!(rankings[1].rank, 1);
        assert_eq!(rankings[0].result, rankings[1].result);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial() {
        use holdem_cards::Deck;

        let mut rng = rand::rng();
        for num_tasks in 1..=4 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let board = (0..Board::SIZE)
                .filter_map(|_| deck.deal())
                .collect::<holdem_cards::CardSet>();
            let board = Board::new(board).unwrap();

            let players = (0..7)
                .map(|n| {
                    let cards = [deck.deal().unwrap(), deck.deal().unwrap()];
                    Hand::new(format!("P{n}"), cards).unwrap()
                })
                .collect::<Vec<_>>();

            let serial = rank(&board, players.clone());
            let parallel = rank_parallel(&board, players, num_tasks);
            assert_eq!(summary(&serial), summary(&parallel));
        }
    }
}
