//! Match configuration

use serde::{Deserialize, Serialize};

use crate::error::{Result, RpsError};

/// How a match ends
///
/// Fixed for the lifetime of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// First player to this many round wins takes the match.
    /// `None` plays until someone quits.
    pub target_wins: Option<u32>,
    /// Hard cap on resolved rounds, for unattended computer matches
    pub round_limit: Option<u32>,
}

impl MatchConfig {
    /// Validated config; a target of zero would end the match before it starts
    pub fn new(target_wins: Option<u32>) -> Result<Self> {
        if target_wins == Some(0) {
            return Err(RpsError::InvalidTarget);
        }
        Ok(Self { target_wins, round_limit: None })
    }

    pub fn first_to(target_wins: u32) -> Result<Self> {
        Self::new(Some(target_wins))
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_round_limit(self, limit: u32) -> Self {
        Self { round_limit: Some(limit), ..self }
    }

    /// True once either score has reached the target
    pub fn is_decided(&self, score_a: u32, score_b: u32) -> bool {
        match self.target_wins {
            Some(target) => score_a >= target || score_b >= target,
            None => false,
        }
    }
}

/// Match types offered by the console menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    BestOfThree,
    BestOfFive,
    Unbounded,
}

impl MatchType {
    pub const ALL: [MatchType; 3] = [MatchType::BestOfThree, MatchType::BestOfFive, MatchType::Unbounded];

    pub fn target(self) -> Option<u32> {
        match self {
            MatchType::BestOfThree => Some(2),
            MatchType::BestOfFive => Some(3),
            MatchType::Unbounded => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchType::BestOfThree => "Best of 3 (first to 2 wins)",
            MatchType::BestOfFive => "Best of 5 (first to 3 wins)",
            MatchType::Unbounded => "Play until someone quits",
        }
    }
}

impl From<MatchType> for MatchConfig {
    fn from(kind: MatchType) -> Self {
        MatchConfig { target_wins: kind.target(), round_limit: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_rejected() {
        assert_eq!(MatchConfig::first_to(0), Err(RpsError::InvalidTarget));
        assert!(MatchConfig::first_to(1).is_ok());
        assert!(MatchConfig::new(None).is_ok());
    }

    #[test]
    fn test_match_type_targets() {
        assert_eq!(MatchConfig::from(MatchType::BestOfThree).target_wins, Some(2));
        assert_eq!(MatchConfig::from(MatchType::BestOfFive).target_wins, Some(3));
        assert_eq!(MatchConfig::from(MatchType::Unbounded), MatchConfig::unbounded());
    }

    #[test]
    fn test_is_decided() {
        let config = MatchConfig::first_to(2).unwrap();
        assert!(!config.is_decided(1, 1));
        assert!(config.is_decided(2, 0));
        assert!(config.is_decided(0, 2));
        assert!(!MatchConfig::unbounded().is_decided(100, 0));
    }
}
