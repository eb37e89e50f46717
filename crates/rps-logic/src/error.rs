//! Error codes for match setup and input handling

use std::fmt;

/// Errors surfaced by the game library
///
/// Invalid tokens are normally absorbed by the retry loops in [`crate::input`];
/// only a closed or failing input source escapes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RpsError {
    /// Token is not rock, paper or scissors
    InvalidMove(String),
    /// Target win count must be at least 1
    InvalidTarget,
    /// Input source reached end of input
    InputClosed,
    /// Input source failed
    Io(String),
}

pub type Result<T> = std::result::Result<T, RpsError>;

impl fmt::Display for RpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpsError::InvalidMove(token) => write!(f, "invalid move {:?}", token),
            RpsError::InvalidTarget => write!(f, "target wins must be at least 1"),
            RpsError::InputClosed => write!(f, "input closed before the match finished"),
            RpsError::Io(msg) => write!(f, "input error: {}", msg),
        }
    }
}

impl std::error::Error for RpsError {}

impl From<std::io::Error> for RpsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => RpsError::InputClosed,
            _ => RpsError::Io(err.to_string()),
        }
    }
}
