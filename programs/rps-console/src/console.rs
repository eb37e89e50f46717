//! Terminal input and match reporting

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use dialoguer::Input;
use rps_logic::{MatchObserver, MatchReport, Player, Prompt, Result, RoundRecord, RoundResult, RpsError, Verdict};

/// Prompt backed by the process's stdin
///
/// Uses dialoguer line editing on a terminal and plain line reads when
/// input is piped in.
pub struct Terminal {
    interactive: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() }
    }

    fn read_piped(&self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Err(RpsError::InputClosed),
            _ => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !self.interactive {
            return self.read_piped(prompt);
        }
        Input::<String>::new()
            .with_prompt(prompt.trim_end().trim_end_matches(':'))
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map_err(|err| match err {
                dialoguer::Error::IO(err) => RpsError::from(err),
            })
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Prints rounds and the final result the way the table reads them out
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl MatchObserver for ConsoleReporter {
    fn on_start(&mut self, a: &Player<'_>, b: &Player<'_>) {
        println!("\n{}", "Game start!".bold());
        println!("{} vs {}\n", a.name(), b.name());
    }

    fn on_round(&mut self, record: &RoundRecord, a: &Player<'_>, b: &Player<'_>) {
        let lines = round_lines(record, a.name(), b.name());
        println!();
        for (i, line) in lines.iter().enumerate() {
            match (i, record.result) {
                (0, _) => println!("{}", line.bold()),
                (2, RoundResult::Tie) => println!("{}", line.yellow()),
                (2, _) => println!("{}", line.green()),
                _ => println!("{}", line),
            }
        }
    }

    fn on_end(&mut self, report: &MatchReport) {
        println!("\n{}", "Game over!".bold());
        println!("{}", final_score_line(report));
        println!("{}", verdict_line(report).cyan());
    }
}

/// Round header, moves, round winner and running score
pub fn round_lines(record: &RoundRecord, name_a: &str, name_b: &str) -> [String; 4] {
    let outcome = match record.result {
        RoundResult::Player1Wins => format!("{} wins the round!", name_a),
        RoundResult::Player2Wins => format!("{} wins the round!", name_b),
        RoundResult::Tie => "It's a tie!".to_string(),
    };
    [
        format!("Round {}", record.round),
        format!("{}: {} | {}: {}", name_a, record.move_a, name_b, record.move_b),
        outcome,
        format!("Score -> {}: {} | {}: {}", name_a, record.score_a, name_b, record.score_b),
    ]
}

pub fn final_score_line(report: &MatchReport) -> String {
    format!(
        "Final score -> {}: {} | {}: {}",
        report.name_a, report.score_a, report.name_b, report.score_b
    )
}

pub fn verdict_line(report: &MatchReport) -> String {
    match (report.verdict, report.winner_name()) {
        (Verdict::Winner(_), Some(name)) => format!("Winner: {}", name),
        (Verdict::UnexpectedTie, _) => "It's a tie (unexpected in target-wins mode).".to_string(),
        _ => "Match ended in a tie.".to_string(),
    }
}
