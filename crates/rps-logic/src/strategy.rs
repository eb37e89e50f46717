//! Strategy definitions and execution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RpsError;
use crate::random::SeededRng;

/// A move in Rock Paper Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in cyclic order: each one is followed by the move that beats it.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// True if `self` dominates `other`
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// Successor in the cycle rock -> paper -> scissors -> rock
    pub fn next(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(RpsError::InvalidMove(s.to_string())),
        }
    }
}

/// What a player hands the controller each round: a move, or the request to stop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Play(Move),
    Quit,
}

impl FromStr for Choice {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("quit") {
            return Ok(Choice::Quit);
        }
        s.parse().map(Choice::Play)
    }
}

/// Scripted computer strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Same move every round.
    Fixed(Move),
    /// Uniform random choice each round.
    Random,
    /// Copy opponent's last move. Random first move.
    Mirror,
    /// Play the successor of our own last move. Random first move.
    Cycle,
}

impl Strategy {
    /// Menu label shown to the human player
    pub fn label(&self) -> String {
        match self {
            Strategy::Fixed(Move::Rock) => "Always Rock".to_string(),
            Strategy::Fixed(Move::Paper) => "Always Paper".to_string(),
            Strategy::Fixed(Move::Scissors) => "Always Scissors".to_string(),
            Strategy::Random => "Random".to_string(),
            Strategy::Mirror => "Reflect".to_string(),
            Strategy::Cycle => "Cycle".to_string(),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Random
    }
}

/// Execute a strategy for one round
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `opponent_history` - Opponent's past moves
/// * `my_history` - Our past moves
/// * `rng` - Random number generator for this round
pub fn execute_strategy(
    strategy: &Strategy,
    opponent_history: &[Move],
    my_history: &[Move],
    rng: &mut SeededRng,
) -> Move {
    match strategy {
        Strategy::Fixed(mv) => *mv,
        Strategy::Random => rng.next_move(),
        Strategy::Mirror => execute_mirror(opponent_history, rng),
        Strategy::Cycle => execute_cycle(my_history, rng),
    }
}

/// Mirror: repeat whatever the opponent played last
fn execute_mirror(opponent_history: &[Move], rng: &mut SeededRng) -> Move {
    match opponent_history.last() {
        Some(mv) => *mv,
        None => rng.next_move(),
    }
}

/// Cycle: step forward from our own last move
fn execute_cycle(my_history: &[Move], rng: &mut SeededRng) -> Move {
    match my_history.last() {
        Some(mv) => mv.next(),
        None => rng.next_move(),
    }
}

/// Get a human-readable description of a strategy
pub fn describe_strategy(strategy: &Strategy) -> String {
    match strategy {
        Strategy::Fixed(mv) => format!("Plays {} every round.", mv),
        Strategy::Random => "Picks rock, paper or scissors at random each round.".to_string(),
        Strategy::Mirror => "Copies opponent's last move. Starts at random.".to_string(),
        Strategy::Cycle => "Steps rock, paper, scissors from its own last move. Starts at random.".to_string(),
    }
}
