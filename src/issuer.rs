//! Configured token issuance and verification.

use core::fmt;

use tracing::{debug, trace};

use crate::counter::{check_step, counter_at, unix_now, window_range, DEFAULT_STEP};
use crate::digest::{hmac_sha256, Digest};
use crate::error::Result;
use crate::salt::{salt_secret, SaltedSecret};
use crate::token;

/// Default verification window: one step either side of the current counter.
pub const DEFAULT_WINDOW: u32 = 1;

/// The key material a token is derived from.
#[derive(Clone, Copy)]
pub enum Key<'a> {
    /// A raw user secret, salted on every call.
    ///
    /// `salt` overrides the issuer's salt when present. `Some(b"")` is an explicit empty salt.
    Secret {
        secret: &'a [u8],
        salt: Option<&'a [u8]>,
    },
    /// A secret that was already salted, e.g. loaded from a database.
    Salted(SaltedSecret),
}

impl fmt::Debug for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret { salt, .. } => f
                .debug_struct("Secret")
                .field("salted_explicitly", &salt.is_some())
                .finish_non_exhaustive(),
            Self::Salted(salted) => f.debug_tuple("Salted").field(salted).finish(),
        }
    }
}

/// Per-call parameters.
///
/// Unset fields fall back to the [`Issuer`]'s settings, then to the crate defaults.
///
/// ```
/// use reset_token::Params;
///
/// let params = Params::secret("hunter2").salt("pepper").time(1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Params<'a> {
    pub key: Key<'a>,
    /// Seconds per counter increment.
    pub step: Option<i64>,
    /// Unix time in seconds. When neither this nor `counter` is set, the system clock is read.
    pub time: Option<i64>,
    /// Counter value; overrides `time` and `step`.
    pub counter: Option<i64>,
    /// Steps either side of the counter accepted by verification.
    pub window: Option<u32>,
}

impl<'a> Params<'a> {
    fn with_key(key: Key<'a>) -> Self {
        Self {
            key,
            step: None,
            time: None,
            counter: None,
            window: None,
        }
    }

    /// Parameters for a raw secret.
    pub fn secret<S: AsRef<[u8]> + ?Sized>(secret: &'a S) -> Self {
        Self::with_key(Key::Secret {
            secret: secret.as_ref(),
            salt: None,
        })
    }

    /// Parameters for a pre-salted secret.
    pub fn salted(salted: SaltedSecret) -> Self {
        Self::with_key(Key::Salted(salted))
    }

    /// Overrides the salt. Has no effect on a [`Key::Salted`] key.
    pub fn salt<S: AsRef<[u8]> + ?Sized>(mut self, salt: &'a S) -> Self {
        if let Key::Secret { secret, .. } = self.key {
            self.key = Key::Secret {
                secret,
                salt: Some(salt.as_ref()),
            };
        }
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn counter(mut self, counter: i64) -> Self {
        self.counter = Some(counter);
        self
    }

    pub fn window(mut self, window: u32) -> Self {
        self.window = Some(window);
        self
    }
}

/// Token settings shared by many calls.
///
/// An `Issuer` never changes after it is built and can be shared freely between threads. The
/// crate-level functions use [`DEFAULT_ISSUER`](crate::DEFAULT_ISSUER).
///
/// Keys are usually password hashes, so store the salt somewhere other than the password table.
///
/// Defaults give tokens a lifetime between 24 and 48 hours.
///
/// ```
/// use reset_token::{Issuer, Params};
///
/// let issuer = Issuer::new().with_salt("pepper").with_step(3600)?;
/// let token = issuer.generate(&Params::secret("hash-of-password").time(7200))?;
/// assert!(issuer.verify(&token, &Params::secret("hash-of-password").time(9000))?);
/// # Ok::<(), reset_token::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Issuer {
    salt: Vec<u8>,
    step: i64,
    window: u32,
}

impl Issuer {
    /// An issuer with an empty salt, a one-day step and a window of one.
    pub const fn new() -> Self {
        Self {
            salt: Vec::new(),
            step: DEFAULT_STEP,
            window: DEFAULT_WINDOW,
        }
    }

    pub fn with_salt<S: AsRef<[u8]>>(mut self, salt: S) -> Self {
        self.salt = salt.as_ref().to_vec();
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`](crate::Error::InvalidStep) if `step` is not positive.
    pub fn with_step(mut self, step: i64) -> Result<Self> {
        self.step = check_step(step)?;
        Ok(self)
    }

    pub fn with_window(mut self, window: u32) -> Self {
        self.window = window;
        self
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    /// Salts `secret` with `salt`, or with this issuer's salt when `salt` is `None`.
    pub fn digest_secret(&self, secret: &[u8], salt: Option<&[u8]>) -> SaltedSecret {
        salt_secret(secret, salt.unwrap_or(self.salt.as_slice()))
    }

    fn salted(&self, key: &Key<'_>) -> SaltedSecret {
        match *key {
            Key::Secret { secret, salt } => self.digest_secret(secret, salt),
            Key::Salted(salted) => salted,
        }
    }

    fn counter(&self, params: &Params<'_>) -> Result<i64> {
        let step = check_step(params.step.unwrap_or(self.step))?;
        if let Some(counter) = params.counter {
            return Ok(counter);
        }
        let time = match params.time {
            Some(time) => time,
            None => unix_now()?,
        };
        counter_at(step, time)
    }

    /// Computes the raw digest for the resolved key and counter.
    ///
    /// # Errors
    ///
    /// Fails on a non-positive step, or if the clock has to be read and is before the epoch.
    pub fn digest(&self, params: &Params<'_>) -> Result<Digest> {
        let counter = self.counter(params)?;
        Ok(hmac_sha256(&self.salted(&params.key), counter))
    }

    /// Generates a base58 token.
    ///
    /// # Errors
    ///
    /// Same as [`digest`](Self::digest).
    pub fn generate(&self, params: &Params<'_>) -> Result<String> {
        self.digest(params).map(|digest| token::encode(&digest))
    }

    /// Checks `presented` against every counter within the window and returns the offset of the
    /// earliest match from the base counter.
    ///
    /// All candidates are computed and compared even after a match, so the time taken does not
    /// reveal which one matched. A wrong secret, a wrong salt, an expired token and a malformed
    /// token all give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Fails on a non-positive step, a window that overflows the counter range, or an unreadable
    /// clock. Never fails because of the token itself.
    pub fn verify_delta(&self, presented: &str, params: &Params<'_>) -> Result<Option<i64>> {
        let counter = self.counter(params)?;
        let window = params.window.unwrap_or(self.window);
        let candidates = window_range(counter, window)?;
        let salted = self.salted(&params.key);

        let mut found = None;
        for candidate in candidates {
            trace!(candidate, "checking candidate counter");
            let expected = token::encode(&hmac_sha256(&salted, candidate));
            if token::matches(presented, &expected) && found.is_none() {
                found = Some(candidate - counter);
            }
        }

        match found {
            Some(delta) => debug!(delta, window, "token accepted"),
            None => debug!(window, "token rejected"),
        }
        Ok(found)
    }

    /// Returns whether `presented` is valid within the window.
    ///
    /// # Errors
    ///
    /// Same as [`verify_delta`](Self::verify_delta).
    pub fn verify(&self, presented: &str, params: &Params<'_>) -> Result<bool> {
        self.verify_delta(presented, params).map(|delta| delta.is_some())
    }
}

impl Default for Issuer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Issuer")
            .field("salted", &!self.salt.is_empty())
            .field("step", &self.step)
            .field("window", &self.window)
            .finish()
    }
}
