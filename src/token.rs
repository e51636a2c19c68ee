//! URL-safe rendering of digests.
//!
//! Tokens use the Bitcoin base58 alphabet, which has no `+`, `/` or padding and avoids the
//! look-alike characters `0`, `O`, `I` and `l`. Leading zero bytes are kept, one `1` each, so
//! a token is between 32 and 44 characters long.

use subtle::ConstantTimeEq as _;

use crate::digest::Digest;
use crate::error::{Error, Result};

/// Renders a digest as a base58 token.
pub fn encode(digest: &Digest) -> String {
    bs58::encode(digest).into_string()
}

/// Recovers the digest from a token.
///
/// # Errors
///
/// Returns [`Error::InvalidToken`] if `token` is not base58 or does not decode to exactly
/// 32 bytes.
pub fn decode(token: &str) -> Result<Digest> {
    let bytes = bs58::decode(token)
        .into_vec()
        .map_err(|_| Error::InvalidToken)?;
    Digest::try_from(bytes.as_slice()).map_err(|_| Error::InvalidToken)
}

/// Compares a presented token to an expected one without short-circuiting on content.
pub(crate) fn matches(presented: &str, expected: &str) -> bool {
    bool::from(presented.as_bytes().ct_eq(expected.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_bytes_kept() {
        let mut raw = [0xff; 32];
        raw[0] = 0;
        raw[1] = 0;
        let token = encode(&Digest(raw));
        assert!(token.starts_with("11"));
        assert_eq!(decode(&token).unwrap(), Digest(raw));
    }

    #[test]
    fn zero_digest() {
        assert_eq!(encode(&Digest([0; 32])), "1".repeat(32));
    }

    #[test]
    fn decode_rejects_garbage() {
        // `0` is not in the alphabet
        assert!(matches!(decode("0abc"), Err(Error::InvalidToken)));
        // valid base58, but far too short
        assert!(matches!(decode("code"), Err(Error::InvalidToken)));
        assert!(matches!(decode(""), Err(Error::InvalidToken)));
    }

    #[test]
    fn compare() {
        assert!(matches("abc", "abc"));
        assert!(!matches("abc", "abd"));
        assert!(!matches("abc", "abcd"));
        assert!(!matches("", "abc"));
    }
}
