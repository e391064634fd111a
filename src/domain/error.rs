//! Domain error types

use thiserror::Error;

/// Errors that can occur while driving the GSM modem
#[derive(Error, Debug)]
pub enum GsmError {
    /// Opening the port failed, or a read/write/flush failed mid-exchange
    #[error("Serial port error: {0}")]
    Serial(String),

    /// None of the expected terminators showed up within the read budget
    #[error("match not found (expected {expected:?}, got {last:?})")]
    NoMatch {
        /// Candidate terminators that were waited for
        expected: Vec<String>,
        /// Last chunk read before giving up; empty if nothing arrived
        last: String,
    },

    #[error("Modem session is not connected")]
    NotConnected,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for modem operations
pub type GsmResult<T> = Result<T, GsmError>;
