//! Keyed time-step digests.

use ring::hmac::{sign, Key as HmacKey, HMAC_SHA256};

use crate::salt::SaltedSecret;

/// HMAC-SHA256 of an 8-byte counter, keyed by a [`SaltedSecret`].
///
/// This is the full, untruncated HOTP hash: no dynamic truncation to decimal digits is applied.
/// Tokens are its base58 rendering (see [`token`](crate::token)).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Digest(pub [u8; 32]);

impl_byte_array!(Digest);

/// Computes the digest for a single counter value.
///
/// The counter is fed to HMAC as 8 big-endian bytes in two's complement, so counter `-1` is
/// `ff ff ff ff ff ff ff ff`.
pub fn hmac_sha256(key: &SaltedSecret, counter: i64) -> Digest {
    let key = HmacKey::new(HMAC_SHA256, key.as_ref());
    let mut out = [0; 32];
    out.copy_from_slice(sign(&key, &counter.to_be_bytes()).as_ref());
    Digest(out)
}
