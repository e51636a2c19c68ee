//! Issuer settings loadable with serde.
//!
//! ```toml
//! salt = "a value kept outside the user database"
//! step = 3600
//! window = 2
//! ```
//!
//! Every field is optional and defaults to the crate defaults.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_STEP;
use crate::error::Result;
use crate::issuer::{Issuer, DEFAULT_WINDOW};

#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub salt: String,
    /// Seconds per counter increment.
    pub step: i64,
    pub window: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            salt: String::new(),
            step: DEFAULT_STEP,
            window: DEFAULT_WINDOW,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("salted", &!self.salt.is_empty())
            .field("step", &self.step)
            .field("window", &self.window)
            .finish()
    }
}

impl Issuer {
    /// Builds an issuer from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`](crate::Error::InvalidStep) if the configured step is not
    /// positive.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Issuer::new()
            .with_salt(&config.salt)
            .with_step(config.step)?
            .with_window(config.window))
    }
}
