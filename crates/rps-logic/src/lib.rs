//! Match Logic for Rock Paper Scissors Arena
//!
//! Core game logic for two-player rock/paper/scissors matches.
//! This crate is compiled to:
//! - Native (for the console program)
//! - WASM (for browser match replay)

mod config;
mod error;
mod game;
mod input;
mod player;
mod random;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

use serde::{Deserialize, Serialize};

pub use config::{MatchConfig, MatchType};
pub use error::{Result, RpsError};
pub use game::{simulate, EndReason, DEFAULT_SIMULATION_ROUNDS, Match, MatchObserver, MatchReport, Phase, RoundRecord, Silent, Verdict};
pub use input::{read_choice, read_option, read_text_or, Prompt, ScriptedInput, INVALID_MOVE, MOVE_PROMPT};
pub use player::{Chooser, Interactive, Player};
pub use random::SeededRng;
pub use strategy::{describe_strategy, execute_strategy, Choice, Move, Strategy};

/// Which side of the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

/// Outcome of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Player1Wins,
    Player2Wins,
    Tie,
}

impl RoundResult {
    pub fn winner(self) -> Option<Seat> {
        match self {
            RoundResult::Player1Wins => Some(Seat::One),
            RoundResult::Player2Wins => Some(Seat::Two),
            RoundResult::Tie => None,
        }
    }
}

/// Outcome rule: rock beats scissors, scissors beats paper, paper beats rock
pub fn resolve(a: Move, b: Move) -> RoundResult {
    if a.beats(b) {
        RoundResult::Player1Wins
    } else if b.beats(a) {
        RoundResult::Player2Wins
    } else {
        RoundResult::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve, Move, RoundResult};
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = Move> {
        prop::sample::select(Move::ALL.to_vec())
    }

    #[test]
    fn test_outcome_table() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), RoundResult::Player1Wins);
        assert_eq!(resolve(Move::Scissors, Move::Paper), RoundResult::Player1Wins);
        assert_eq!(resolve(Move::Paper, Move::Rock), RoundResult::Player1Wins);
        assert_eq!(resolve(Move::Scissors, Move::Rock), RoundResult::Player2Wins);
        assert_eq!(resolve(Move::Paper, Move::Scissors), RoundResult::Player2Wins);
        assert_eq!(resolve(Move::Rock, Move::Paper), RoundResult::Player2Wins);
        for mv in Move::ALL {
            assert_eq!(resolve(mv, mv), RoundResult::Tie);
        }
    }

    #[test]
    fn test_each_move_beats_exactly_one() {
        for mv in Move::ALL {
            let wins = Move::ALL.iter().filter(|other| mv.beats(**other)).count();
            let losses = Move::ALL.iter().filter(|other| other.beats(mv)).count();
            assert_eq!(wins, 1, "{} beats {} moves", mv, wins);
            assert_eq!(losses, 1, "{} loses to {} moves", mv, losses);
        }
    }

    proptest! {
        #[test]
        fn prop_exactly_one_side_wins(a in any_move(), b in any_move()) {
            if a == b {
                prop_assert!(!a.beats(b) && !b.beats(a));
            } else {
                prop_assert!(a.beats(b) ^ b.beats(a));
            }
        }

        #[test]
        fn prop_resolve_is_antisymmetric(a in any_move(), b in any_move()) {
            let swapped = match resolve(b, a) {
                RoundResult::Player1Wins => RoundResult::Player2Wins,
                RoundResult::Player2Wins => RoundResult::Player1Wins,
                RoundResult::Tie => RoundResult::Tie,
            };
            prop_assert_eq!(resolve(a, b), swapped);
        }

        #[test]
        fn prop_resolve_is_pure(a in any_move(), b in any_move()) {
            let first = resolve(a, b);
            for _ in 0..5 {
                prop_assert_eq!(resolve(a, b), first);
            }
        }
    }
}
