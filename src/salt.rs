//! Salting of raw user secrets into derived keys.

use core::fmt;

use ring::hmac::{sign, Key as HmacKey, HMAC_SHA256};

/// A user secret digested with a salt.
///
/// This is the key every token is derived from: two parties holding the same `SaltedSecret`
/// generate and accept the same tokens. It is safe to cache (e.g. next to the password hash it
/// came from) and hand back through [`Key::Salted`](crate::Key::Salted), which skips re-salting.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct SaltedSecret(pub [u8; 32]);

impl_byte_array!(SaltedSecret);

// Key material stays out of logs and panic messages.
impl fmt::Debug for SaltedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaltedSecret").finish_non_exhaustive()
    }
}

/// Computes HMAC-SHA256 of `secret` keyed by `salt`.
///
/// An empty salt is a valid key; the result is still a keyed digest.
pub fn salt_secret(secret: &[u8], salt: &[u8]) -> SaltedSecret {
    let key = HmacKey::new(HMAC_SHA256, salt);
    let mut out = [0; 32];
    out.copy_from_slice(sign(&key, secret).as_ref());
    SaltedSecret(out)
}
