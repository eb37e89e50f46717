//! WASM bindings for browser match replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{describe_strategy, simulate, MatchConfig, Move, Silent, Strategy};

/// Parse a strategy from JSON
///
/// Accepts `"Random"`, `"Mirror"`, `"Cycle"` or `{"Fixed": "rock"}`.
fn parse_strategy(json: &str) -> Result<Strategy, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid strategy: {}", e))
}

/// Replay a computer-versus-computer match with full round-by-round details
///
/// # Arguments
/// * `strategy_a_json` - JSON serialized Strategy for player A
/// * `strategy_b_json` - JSON serialized Strategy for player B
/// * `seed` - Randomness seed
/// * `target_wins` - Wins needed to take the match; 0 plays to the round limit
/// * `round_limit` - Maximum rounds; 0 uses the default cap
///
/// # Returns
/// JSON serialized MatchReport
#[wasm_bindgen]
pub fn replay_match(
    strategy_a_json: &str,
    strategy_b_json: &str,
    seed: u64,
    target_wins: u32,
    round_limit: u32,
) -> Result<JsValue, JsError> {
    let strategy_a = parse_strategy(strategy_a_json)
        .map_err(|e| JsError::new(&format!("Invalid strategy A: {}", e)))?;
    let strategy_b = parse_strategy(strategy_b_json)
        .map_err(|e| JsError::new(&format!("Invalid strategy B: {}", e)))?;

    let target = (target_wins > 0).then_some(target_wins);
    let mut config = MatchConfig::new(target).map_err(|e| JsError::new(&e.to_string()))?;
    if round_limit > 0 {
        config = config.with_round_limit(round_limit);
    }

    let report = simulate(strategy_a, strategy_b, config, seed, &mut Silent)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn get_strategy_description(strategy_json: &str) -> Result<String, JsError> {
    let strategy = parse_strategy(strategy_json).map_err(|e| JsError::new(&e))?;
    Ok(describe_strategy(&strategy))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: String,
    name: String,
    description: String,
}

/// Get the strategies offered to players, in menu order
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = [
        Strategy::Fixed(Move::Rock),
        Strategy::Random,
        Strategy::Mirror,
        Strategy::Cycle,
    ]
    .iter()
    .map(|strategy| -> Result<StrategyInfo, serde_json::Error> {
        Ok(StrategyInfo {
            id: serde_json::to_string(strategy)?,
            name: strategy.label(),
            description: describe_strategy(strategy),
        })
    })
    .collect::<Result<_, serde_json::Error>>()
    .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))?;

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
