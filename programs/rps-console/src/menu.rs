//! Setup questions asked before the first round

use rps_logic::{read_option, read_text_or, MatchType, Move, Prompt, Result, Strategy};

/// Computer opponents in menu order
pub const OPPONENTS: [Strategy; 4] = [
    Strategy::Fixed(Move::Rock),
    Strategy::Random,
    Strategy::Mirror,
    Strategy::Cycle,
];

const KEYS: [&str; 4] = ["1", "2", "3", "4"];

pub fn choose_name<P: Prompt + ?Sized>(prompt: &mut P) -> Result<String> {
    read_text_or(prompt, "What's your name? ", "Human")
}

pub fn choose_opponent<P: Prompt + ?Sized>(prompt: &mut P) -> Result<Strategy> {
    prompt.say("Choose a computer opponent:");
    for (key, strategy) in KEYS.iter().zip(OPPONENTS.iter()) {
        prompt.say(&format!("{}. {}", key, strategy.label()));
    }

    let options: Vec<(&str, Strategy)> = KEYS.iter().copied().zip(OPPONENTS).collect();
    read_option(
        prompt,
        "Enter 1, 2, 3, or 4: ",
        &options,
        "Invalid choice. Please enter 1, 2, 3, or 4.",
    )
}

pub fn choose_match_type<P: Prompt + ?Sized>(prompt: &mut P) -> Result<MatchType> {
    prompt.say("\nMatch type:");
    for (key, kind) in KEYS.iter().zip(MatchType::ALL.iter()) {
        prompt.say(&format!("{}. {}", key, kind.label()));
    }

    let options: Vec<(&str, MatchType)> = KEYS.iter().copied().zip(MatchType::ALL).collect();
    read_option(
        prompt,
        "Enter 1, 2, or 3: ",
        &options,
        "Invalid choice. Please enter 1, 2, or 3.",
    )
}
