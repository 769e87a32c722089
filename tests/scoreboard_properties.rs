//! Property-based tests for the bounded ranked board
//!
//! These tests verify invariants that should hold for all inputs:
//! - Scores are non-increasing from first to last entry
//! - The board never holds more than its capacity
//! - At capacity, a lower score leaves the board untouched
//! - At capacity, any other score evicts the previous minimum
//! - An admitted entry can be read back at the index it was placed at
//! - The scores kept are exactly the top `capacity` scores offered

use proptest::prelude::*;
use scoreboard::board::{GameEntry, Placement, Scoreboard};

fn scores() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..40)
}

fn entries(scores: &[i64]) -> Vec<GameEntry> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| GameEntry::new(format!("player-{i}"), *score))
        .collect()
}

fn board_scores(board: &Scoreboard<GameEntry>) -> Vec<i64> {
    board.iter().map(GameEntry::score).collect()
}

proptest! {
    /// Property: after every add the board is sorted and within capacity
    #[test]
    fn prop_sorted_and_bounded(capacity in 1usize..8, scores in scores()) {
        let mut board = Scoreboard::new(capacity).unwrap();

        for entry in entries(&scores) {
            board.add(entry);

            let current = board_scores(&board);
            prop_assert!(board.size() <= capacity);
            prop_assert!(
                current.windows(2).all(|pair| pair[0] >= pair[1]),
                "board out of order: {:?}",
                current
            );
        }
    }

    /// Property: a full board either rejects without change or evicts its minimum
    #[test]
    fn prop_full_board_rejects_or_evicts(capacity in 1usize..6, scores in scores()) {
        let mut board = Scoreboard::new(capacity).unwrap();

        for entry in entries(&scores) {
            let before = board.clone();
            let score = entry.score();
            let placement = board.add(entry.clone());

            if !before.is_full() {
                prop_assert_eq!(board.size(), before.size() + 1);
                prop_assert!(
                    matches!(placement, Placement::Inserted { .. }),
                    "growing board should only insert"
                );
                continue;
            }

            let minimum = before.last().map(GameEntry::score).unwrap();
            if score < minimum {
                prop_assert_eq!(placement, Placement::Rejected(entry));
                prop_assert_eq!(&board, &before);
            } else {
                prop_assert_eq!(board.size(), capacity);
                match placement {
                    Placement::Evicted { evicted, .. } => {
                        prop_assert_eq!(Some(&evicted), before.last());
                    }
                    other => prop_assert!(false, "expected eviction, got {:?}", other),
                }
            }
        }
    }

    /// Property: the reported index reads back the entry that was added
    #[test]
    fn prop_add_then_get_round_trips(capacity in 1usize..8, scores in scores()) {
        let mut board = Scoreboard::new(capacity).unwrap();

        for entry in entries(&scores) {
            let expected = entry.clone();
            if let Some(index) = board.add(entry).index() {
                prop_assert_eq!(board.get(index), Some(&expected));
            }
        }
    }

    /// Property: the board keeps the highest `capacity` scores offered
    #[test]
    fn prop_keeps_top_scores(capacity in 1usize..8, scores in scores()) {
        let mut board = Scoreboard::new(capacity).unwrap();
        board.extend(entries(&scores));

        let mut expected = scores.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(capacity);

        prop_assert_eq!(board_scores(&board), expected);
    }
}
