//! Players and the move-selection capability they delegate to

use crate::error::Result;
use crate::input::{read_choice, Prompt};
use crate::random::SeededRng;
use crate::strategy::{execute_strategy, Choice, Move, Strategy};

/// Produces a player's next choice from the match so far
pub trait Chooser {
    fn choose(
        &mut self,
        my_history: &[Move],
        opponent_history: &[Move],
        rng: &mut SeededRng,
    ) -> Result<Choice>;
}

impl Chooser for Strategy {
    fn choose(
        &mut self,
        my_history: &[Move],
        opponent_history: &[Move],
        rng: &mut SeededRng,
    ) -> Result<Choice> {
        Ok(Choice::Play(execute_strategy(self, opponent_history, my_history, rng)))
    }
}

/// Human player reading moves from a prompt
#[derive(Debug)]
pub struct Interactive<P> {
    prompt: P,
}

impl<P: Prompt> Interactive<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }
}

impl<P: Prompt> Chooser for Interactive<P> {
    fn choose(&mut self, _: &[Move], _: &[Move], _: &mut SeededRng) -> Result<Choice> {
        read_choice(&mut self.prompt)
    }
}

/// One side of a match
///
/// Score and histories are only written by the match controller, one round
/// at a time, so `my_moves` and `their_moves` always have equal length.
pub struct Player<'a> {
    name: String,
    score: u32,
    my_moves: Vec<Move>,
    their_moves: Vec<Move>,
    chooser: Box<dyn Chooser + 'a>,
}

impl<'a> Player<'a> {
    pub fn new(name: impl Into<String>, chooser: impl Chooser + 'a) -> Self {
        Self {
            name: name.into(),
            score: 0,
            my_moves: Vec::new(),
            their_moves: Vec::new(),
            chooser: Box::new(chooser),
        }
    }

    /// Computer player named after its strategy, e.g. "Computer (Reflect)"
    pub fn computer(strategy: Strategy) -> Self {
        Self::new(format!("Computer ({})", strategy.label()), strategy)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn my_moves(&self) -> &[Move] {
        &self.my_moves
    }

    pub fn their_moves(&self) -> &[Move] {
        &self.their_moves
    }

    pub(crate) fn choose(&mut self, rng: &mut SeededRng) -> Result<Choice> {
        self.chooser.choose(&self.my_moves, &self.their_moves, rng)
    }

    pub(crate) fn learn(&mut self, mine: Move, theirs: Move) {
        self.my_moves.push(mine);
        self.their_moves.push(theirs);
    }

    pub(crate) fn award(&mut self) {
        self.score += 1;
    }
}

impl std::fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("score", &self.score)
            .field("rounds", &self.my_moves.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;

    #[test]
    fn test_strategy_chooser_reads_own_history() {
        let mut rng = SeededRng::new(1);
        let mut player = Player::computer(Strategy::Cycle);
        player.learn(Move::Paper, Move::Rock);

        assert_eq!(player.choose(&mut rng).unwrap(), Choice::Play(Move::Scissors));
    }

    #[test]
    fn test_mirror_chooser_reads_opponent_history() {
        let mut rng = SeededRng::new(1);
        let mut player = Player::computer(Strategy::Mirror);
        player.learn(Move::Paper, Move::Rock);

        assert_eq!(player.choose(&mut rng).unwrap(), Choice::Play(Move::Rock));
    }

    #[test]
    fn test_interactive_chooser() {
        let mut rng = SeededRng::new(1);
        let mut input = ScriptedInput::new(["sissors", "scissors", "quit"]);
        {
            let mut player = Player::new("Ada", Interactive::new(&mut input));
            assert_eq!(player.choose(&mut rng).unwrap(), Choice::Play(Move::Scissors));
            assert_eq!(player.choose(&mut rng).unwrap(), Choice::Quit);
        }
        assert_eq!(input.messages.len(), 1);
    }

    #[test]
    fn test_learn_keeps_histories_in_lockstep() {
        let mut player = Player::computer(Strategy::Fixed(Move::Rock));
        assert_eq!(player.name(), "Computer (Always Rock)");

        player.learn(Move::Rock, Move::Paper);
        player.learn(Move::Rock, Move::Scissors);
        player.award();

        assert_eq!(player.my_moves(), &[Move::Rock, Move::Rock]);
        assert_eq!(player.their_moves(), &[Move::Paper, Move::Scissors]);
        assert_eq!(player.score(), 1);
    }
}
