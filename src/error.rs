//! Error type shared by every operation in this crate.

use std::time::SystemTimeError;

use thiserror::Error;

/// Errors raised while deriving or verifying tokens.
///
/// A token that simply does not match is not an error: [`verify`](crate::verify) reports it as
/// `Ok(false)`, whatever the cause of the mismatch.
#[derive(Debug, Error)]
pub enum Error {
    /// The time step was zero or negative.
    #[error("invalid time step {0}: must be a positive number of seconds")]
    InvalidStep(i64),

    /// The verification window reaches past the range of representable counters.
    #[error("window of {window} around counter {counter} overflows the counter range")]
    CounterOverflow {
        /// Base counter of the verification.
        counter: i64,
        /// Requested window.
        window: u32,
    },

    /// No time was given and the system clock is set before the Unix epoch.
    #[error("system clock is before the Unix epoch: {0}")]
    SystemTime(#[from] SystemTimeError),

    /// A token string is not valid base58 or does not hold a full digest.
    #[error("malformed token")]
    InvalidToken,

    /// A key or digest was built from a byte slice of the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
