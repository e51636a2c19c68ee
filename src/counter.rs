//! Time-step counters.
//!
//! A counter is the number of whole steps elapsed since the Unix epoch, `floor(time / step)`.
//! Counters are signed so that the window below counter 0, and times before the epoch, have a
//! well-defined value.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Default time step: one day.
pub const DEFAULT_STEP: i64 = 24 * 60 * 60;

/// Rejects steps that are not a positive number of seconds.
pub fn check_step(step: i64) -> Result<i64> {
    if step <= 0 {
        return Err(Error::InvalidStep(step));
    }
    Ok(step)
}

/// Computes the counter for `time` (Unix seconds) with the given step.
///
/// Division rounds towards negative infinity, so `time = -1` lands in counter `-1`.
///
/// # Errors
///
/// Returns [`Error::InvalidStep`] if `step` is not positive.
pub fn counter_at(step: i64, time: i64) -> Result<i64> {
    Ok(time.div_euclid(check_step(step)?))
}

/// Current Unix time in seconds.
///
/// # Errors
///
/// Fails if the system clock is set before the Unix epoch.
pub fn unix_now() -> Result<i64> {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    Ok(i64::try_from(secs).unwrap_or(i64::MAX))
}

/// Inclusive range of counters within `window` steps of `counter`.
pub(crate) fn window_range(counter: i64, window: u32) -> Result<core::ops::RangeInclusive<i64>> {
    let overflow = || Error::CounterOverflow { counter, window };
    let lo = counter.checked_sub(window.into()).ok_or_else(overflow)?;
    let hi = counter.checked_add(window.into()).ok_or_else(overflow)?;
    Ok(lo..=hi)
}
