//! Line-oriented input sources and the retry loops built on them
//!
//! Every loop here blocks until it has a valid answer. Bad tokens are
//! reported through [`Prompt::say`] and asked again; only a closed or
//! failing source ends a loop early.

use std::collections::VecDeque;

use log::debug;

use crate::error::{Result, RpsError};
use crate::strategy::Choice;

pub const MOVE_PROMPT: &str = "Your move (rock/paper/scissors or quit): ";
pub const INVALID_MOVE: &str = "Invalid move. Please type rock, paper, scissors, or quit.";

/// Something that can ask a question and hand back one line of text
pub trait Prompt {
    /// Show `prompt` and block until a line is available.
    ///
    /// Returns [`RpsError::InputClosed`] once the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Show a message that needs no answer
    fn say(&mut self, message: &str);
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }

    fn say(&mut self, message: &str) {
        (**self).say(message)
    }
}

/// Ask for a move until we get rock, paper, scissors or quit
pub fn read_choice<P: Prompt + ?Sized>(prompt: &mut P) -> Result<Choice> {
    loop {
        let line = prompt.read_line(MOVE_PROMPT)?;
        match line.parse::<Choice>() {
            Ok(choice) => return Ok(choice),
            Err(err) => {
                debug!("rejected {}", err);
                prompt.say(INVALID_MOVE);
            }
        }
    }
}

/// Ask until the answer matches one of the option keys
///
/// # Arguments
/// * `question` - Prompt text shown before each attempt
/// * `options` - `(key, value)` pairs; the trimmed answer must equal a key
/// * `invalid` - Message shown after an unknown answer
pub fn read_option<P, T>(
    prompt: &mut P,
    question: &str,
    options: &[(&str, T)],
    invalid: &str,
) -> Result<T>
where
    P: Prompt + ?Sized,
    T: Clone,
{
    loop {
        let line = prompt.read_line(question)?;
        let answer = line.trim();
        match options.iter().find(|(key, _)| *key == answer) {
            Some((_, value)) => return Ok(value.clone()),
            None => {
                debug!("rejected choice {:?}", answer);
                prompt.say(invalid);
            }
        }
    }
}

/// Ask once for free text, substituting `default` for a blank answer
pub fn read_text_or<P: Prompt + ?Sized>(prompt: &mut P, question: &str, default: &str) -> Result<String> {
    let line = prompt.read_line(question)?;
    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Prompt fed from a fixed list of lines
///
/// Records everything it was asked and told, which makes it the stand-in
/// for a terminal in tests and scripted runs.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Prompt for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(RpsError::InputClosed)
    }

    fn say(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Move;

    #[test]
    fn test_read_choice_accepts_first_valid() {
        let mut input = ScriptedInput::new(["paper"]);
        assert_eq!(read_choice(&mut input).unwrap(), Choice::Play(Move::Paper));
        assert!(input.messages.is_empty());
        assert_eq!(input.prompts, vec![MOVE_PROMPT.to_string()]);
    }

    #[test]
    fn test_read_choice_retries_invalid_tokens() {
        let mut input = ScriptedInput::new(["", "spock", "r", " Scissors "]);
        assert_eq!(read_choice(&mut input).unwrap(), Choice::Play(Move::Scissors));
        assert_eq!(input.messages.len(), 3);
        assert!(input.messages.iter().all(|m| m == INVALID_MOVE));
        assert_eq!(input.prompts.len(), 4);
    }

    #[test]
    fn test_read_choice_quit() {
        let mut input = ScriptedInput::new(["nope", "QUIT", "rock"]);
        assert_eq!(read_choice(&mut input).unwrap(), Choice::Quit);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_read_choice_closed_input() {
        let mut input = ScriptedInput::new(["bogus"]);
        assert_eq!(read_choice(&mut input), Err(RpsError::InputClosed));
    }

    #[test]
    fn test_read_option() {
        let options = [("1", 'a'), ("2", 'b')];
        let mut input = ScriptedInput::new(["0", "a", " 2 "]);
        let picked = read_option(&mut input, "Pick: ", &options, "Pick 1 or 2.").unwrap();
        assert_eq!(picked, 'b');
        assert_eq!(input.messages, vec!["Pick 1 or 2.", "Pick 1 or 2."]);
    }

    #[test]
    fn test_read_text_or_default() {
        let mut input = ScriptedInput::new(["   ", "  Ada "]);
        assert_eq!(read_text_or(&mut input, "Name? ", "Human").unwrap(), "Human");
        assert_eq!(read_text_or(&mut input, "Name? ", "Human").unwrap(), "Ada");
    }
}
