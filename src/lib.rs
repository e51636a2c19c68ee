//! Time-limited one-time tokens derived from a user secret.
//!
//! Built for password reset links: the token is derived from something that changes when the
//! password does (typically the stored password hash), so a token dies with the password it was
//! issued for, and from the current time step, so it also dies on its own after a day or two.
//! Nothing needs to be stored between issuing a token and checking it.
//!
//! The derivation is:
//!
//! 1. `key = HMAC-SHA256(salt, secret)`
//! 2. `counter = floor(time / step)`
//! 3. `digest = HMAC-SHA256(key, counter as 8 big-endian bytes)`
//! 4. `token = base58(digest)`
//!
//! Verification recomputes the token for every counter within `window` steps of the current one.
//!
//! # Examples
//!
//! ```
//! use reset_token::Params;
//!
//! let password_hash = "$argon2id$v=19$m=65536,t=3,p=4$...";
//! let token = reset_token::generate(&Params::secret(password_hash).time(1_700_000_000))?;
//!
//! // a day later
//! let params = Params::secret(password_hash).time(1_700_086_400);
//! assert!(reset_token::verify(&token, &params)?);
//! # Ok::<(), reset_token::Error>(())
//! ```
//!
//! Applications that want their own salt, step or window build an [`Issuer`] instead of using
//! the crate-level functions.

/// Conversions shared by the 32-byte newtypes.
macro_rules! impl_byte_array {
    ($name:ident) => {
        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.0.as_ref()
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(raw: [u8; 32]) -> Self {
                Self(raw)
            }
        }

        impl core::convert::TryFrom<&[u8]> for $name {
            type Error = crate::Error;

            fn try_from(raw: &[u8]) -> crate::Result<Self> {
                <[u8; 32]>::try_from(raw)
                    .map(Self)
                    .map_err(|_| crate::Error::InvalidLength {
                        expected: 32,
                        actual: raw.len(),
                    })
            }
        }
    };
}

#[cfg(feature = "serde")]
pub mod config;
pub mod counter;
pub mod digest;
mod error;
mod issuer;
pub mod salt;
pub mod token;

pub use digest::Digest;
pub use error::{Error, Result};
pub use issuer::{Issuer, Key, Params, DEFAULT_WINDOW};
pub use salt::SaltedSecret;

/// The issuer behind the crate-level functions: empty salt, one-day step, window of one.
pub static DEFAULT_ISSUER: Issuer = Issuer::new();

/// Salts `secret`, with an empty salt unless one is given.
pub fn digest_secret(secret: &[u8], salt: Option<&[u8]>) -> SaltedSecret {
    DEFAULT_ISSUER.digest_secret(secret, salt)
}

/// See [`Issuer::digest`].
pub fn digest(params: &Params<'_>) -> Result<Digest> {
    DEFAULT_ISSUER.digest(params)
}

/// See [`Issuer::generate`].
pub fn generate(params: &Params<'_>) -> Result<String> {
    DEFAULT_ISSUER.generate(params)
}

/// See [`Issuer::verify`].
pub fn verify(token: &str, params: &Params<'_>) -> Result<bool> {
    DEFAULT_ISSUER.verify(token, params)
}

/// See [`Issuer::verify_delta`].
pub fn verify_delta(token: &str, params: &Params<'_>) -> Result<Option<i64>> {
    DEFAULT_ISSUER.verify_delta(token, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_match_default_issuer() {
        let issuer = Issuer::new();
        let params = Params::secret("xyzzy").time(123_456_789);
        assert_eq!(digest(&params).unwrap(), issuer.digest(&params).unwrap());
        let token = generate(&params).unwrap();
        assert_eq!(token, issuer.generate(&params).unwrap());
        assert!(verify(&token, &params).unwrap());
        assert_eq!(verify_delta(&token, &params).unwrap(), Some(0));
        assert_eq!(
            digest_secret(b"xyzzy", None),
            issuer.digest_secret(b"xyzzy", None)
        );
    }

    #[test]
    fn default_issuer_is_shareable() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let params = Params::secret("xyzzy").counter(i);
                    let token = generate(&params).unwrap();
                    verify(&token, &params).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
