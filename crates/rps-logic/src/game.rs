//! Match execution engine
//!
//! A match moves through `RoundPending -> RoundResolved -> RoundPending ...`
//! until it reaches `MatchEnded`. Each call to [`Match::step`] performs one
//! transition, [`Match::play`] drives it to the end.

use std::cmp::Ordering;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::Result;
use crate::player::Player;
use crate::random::SeededRng;
use crate::strategy::{Choice, Move, Strategy};
use crate::{resolve, RoundResult, Seat};

/// Round cap applied to simulations that did not set one
pub const DEFAULT_SIMULATION_ROUNDS: u32 = 100;

/// Why the match stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A player reached the target win count
    TargetReached,
    /// This seat quit; the round in progress was not counted
    Quit(Seat),
    /// The configured round limit was hit
    RoundLimit,
}

/// Controller state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    RoundPending,
    RoundResolved,
    MatchEnded(EndReason),
}

/// Final standing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Winner(Seat),
    Tie,
    /// Equal scores although a target was configured
    UnexpectedTie,
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub result: RoundResult,
    pub score_a: u32,
    pub score_b: u32,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub name_a: String,
    pub name_b: String,
    pub rounds: Vec<RoundRecord>,
    pub score_a: u32,
    pub score_b: u32,
    pub ties: u32,
    pub rounds_played: u32,
    pub end: EndReason,
    pub verdict: Verdict,
}

impl MatchReport {
    /// Name of the winning player, if any
    pub fn winner_name(&self) -> Option<&str> {
        match self.verdict {
            Verdict::Winner(Seat::One) => Some(&self.name_a),
            Verdict::Winner(Seat::Two) => Some(&self.name_b),
            Verdict::Tie | Verdict::UnexpectedTie => None,
        }
    }
}

/// Hooks for reporting a match as it happens
pub trait MatchObserver {
    fn on_start(&mut self, _a: &Player<'_>, _b: &Player<'_>) {}
    fn on_round(&mut self, _record: &RoundRecord, _a: &Player<'_>, _b: &Player<'_>) {}
    fn on_end(&mut self, _report: &MatchReport) {}
}

/// Observer that reports nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl MatchObserver for Silent {}

/// A match between two players
#[derive(Debug)]
pub struct Match<'a> {
    a: Player<'a>,
    b: Player<'a>,
    config: MatchConfig,
    rng: SeededRng,
    phase: Phase,
    rounds: Vec<RoundRecord>,
    ties: u32,
}

impl<'a> Match<'a> {
    pub fn new(a: Player<'a>, b: Player<'a>, config: MatchConfig, rng: SeededRng) -> Self {
        Self {
            a,
            b,
            config,
            rng,
            phase: Phase::RoundPending,
            rounds: Vec::new(),
            ties: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_a(&self) -> &Player<'a> {
        &self.a
    }

    pub fn player_b(&self) -> &Player<'a> {
        &self.b
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Perform one state transition and return the new phase
    ///
    /// An error from a player's input source leaves the match in
    /// `RoundPending` with nothing recorded for the interrupted round.
    pub fn step(&mut self, observer: &mut dyn MatchObserver) -> Result<Phase> {
        self.phase = match self.phase {
            Phase::MatchEnded(reason) => Phase::MatchEnded(reason),
            Phase::RoundResolved => self.check_termination(),
            Phase::RoundPending => self.play_round(observer)?,
        };
        Ok(self.phase)
    }

    /// Run the match to completion
    pub fn play(mut self, observer: &mut dyn MatchObserver) -> Result<MatchReport> {
        info!(
            "match start: {} vs {} (target {:?}, seed {})",
            self.a.name(),
            self.b.name(),
            self.config.target_wins,
            self.rng.seed()
        );
        observer.on_start(&self.a, &self.b);

        let end = loop {
            if let Phase::MatchEnded(reason) = self.step(observer)? {
                break reason;
            }
        };

        let report = self.report(end);
        info!(
            "match over after {} rounds: {} {} - {} {} ({:?})",
            report.rounds_played, report.name_a, report.score_a, report.score_b, report.name_b, report.end
        );
        observer.on_end(&report);
        Ok(report)
    }

    fn check_termination(&self) -> Phase {
        if self.config.is_decided(self.a.score(), self.b.score()) {
            Phase::MatchEnded(EndReason::TargetReached)
        } else {
            Phase::RoundPending
        }
    }

    fn play_round(&mut self, observer: &mut dyn MatchObserver) -> Result<Phase> {
        if self.config.is_decided(self.a.score(), self.b.score()) {
            return Ok(Phase::MatchEnded(EndReason::TargetReached));
        }
        if let Some(limit) = self.config.round_limit {
            if self.rounds_played() >= limit {
                return Ok(Phase::MatchEnded(EndReason::RoundLimit));
            }
        }

        let round = self.rounds_played();
        let mut rng_a = self.rng.for_round(round, 0);
        let mut rng_b = self.rng.for_round(round, 1);

        // Player two is not asked once player one has quit
        let move_a = match self.a.choose(&mut rng_a)? {
            Choice::Play(mv) => mv,
            Choice::Quit => return Ok(self.quit(Seat::One)),
        };
        let move_b = match self.b.choose(&mut rng_b)? {
            Choice::Play(mv) => mv,
            Choice::Quit => return Ok(self.quit(Seat::Two)),
        };

        let result = resolve(move_a, move_b);
        match result.winner() {
            Some(Seat::One) => self.a.award(),
            Some(Seat::Two) => self.b.award(),
            None => self.ties += 1,
        }
        self.a.learn(move_a, move_b);
        self.b.learn(move_b, move_a);

        let record = RoundRecord {
            round: round + 1,
            move_a,
            move_b,
            result,
            score_a: self.a.score(),
            score_b: self.b.score(),
        };
        debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            record.round, move_a, move_b, result, record.score_a, record.score_b
        );
        observer.on_round(&record, &self.a, &self.b);
        self.rounds.push(record);

        Ok(Phase::RoundResolved)
    }

    fn quit(&self, seat: Seat) -> Phase {
        debug!("{:?} quit before round {}", seat, self.rounds_played() + 1);
        Phase::MatchEnded(EndReason::Quit(seat))
    }

    fn report(&self, end: EndReason) -> MatchReport {
        let (score_a, score_b) = (self.a.score(), self.b.score());
        let verdict = match score_a.cmp(&score_b) {
            Ordering::Greater => Verdict::Winner(Seat::One),
            Ordering::Less => Verdict::Winner(Seat::Two),
            Ordering::Equal if self.config.target_wins.is_some() => {
                // Only an early quit can leave a target match level
                if end == EndReason::TargetReached {
                    warn!("target match ended level at {}-{}", score_a, score_b);
                }
                Verdict::UnexpectedTie
            }
            Ordering::Equal => Verdict::Tie,
        };

        MatchReport {
            name_a: self.a.name().to_string(),
            name_b: self.b.name().to_string(),
            rounds: self.rounds.clone(),
            score_a,
            score_b,
            ties: self.ties,
            rounds_played: self.rounds_played(),
            end,
            verdict,
        }
    }
}

/// Play two computer strategies against each other
///
/// Configs without a round limit are capped at [`DEFAULT_SIMULATION_ROUNDS`]
/// since neither side ever quits and two strategies can tie forever.
pub fn simulate(
    strategy_a: Strategy,
    strategy_b: Strategy,
    config: MatchConfig,
    seed: u64,
    observer: &mut dyn MatchObserver,
) -> Result<MatchReport> {
    let config = match config.round_limit {
        Some(_) => config,
        None => config.with_round_limit(DEFAULT_SIMULATION_ROUNDS),
    };
    let game = Match::new(
        Player::computer(strategy_a),
        Player::computer(strategy_b),
        config,
        SeededRng::new(seed),
    );
    game.play(observer)
}
