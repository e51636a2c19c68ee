use proptest::prelude::*;
use reset_token::{Issuer, Params};

proptest! {
    #[test]
    fn generated_tokens_verify(
        secret in proptest::collection::vec(any::<u8>(), 0..64),
        step in 1i64..=1_000_000,
        time in -1_000_000_000i64..4_000_000_000,
        window in 0u32..4,
    ) {
        let params = Params::secret(&secret).step(step).time(time).window(window);
        let token = reset_token::generate(&params).unwrap();
        prop_assert_eq!(reset_token::verify_delta(&token, &params).unwrap(), Some(0));
    }

    #[test]
    fn window_edges(
        secret in "[a-z]{1,16}",
        counter in -1_000i64..1_000,
        window in 0u32..4,
        shift in -6i64..=6,
    ) {
        let token = reset_token::generate(&Params::secret(&secret).counter(counter)).unwrap();
        let later = Params::secret(&secret).counter(counter + shift).window(window);
        let accepted = reset_token::verify(&token, &later).unwrap();
        prop_assert_eq!(accepted, shift.unsigned_abs() <= u64::from(window));
    }

    #[test]
    fn salted_key_is_equivalent(
        secret in "\\PC{0,24}",
        salt in "\\PC{0,24}",
        counter in any::<i32>(),
    ) {
        let issuer = Issuer::new().with_salt(&salt);
        let salted = issuer.digest_secret(secret.as_bytes(), None);
        let raw = Params::secret(&secret).counter(counter.into());
        let pre = Params::salted(salted).counter(counter.into());

        prop_assert_eq!(issuer.digest(&raw).unwrap(), issuer.digest(&pre).unwrap());
        let token = issuer.generate(&raw).unwrap();
        prop_assert_eq!(&token, &issuer.generate(&pre).unwrap());
        prop_assert!(issuer.verify(&token, &pre).unwrap());
        // same answer from the default issuer given the salt per call
        let explicit = Params::secret(&secret).salt(&salt).counter(counter.into());
        prop_assert!(reset_token::verify(&token, &explicit).unwrap());
    }

    #[test]
    fn arbitrary_strings_never_verify(
        presented in "\\PC{0,31}",
        secret in "[a-z]{1,16}",
        window in 0u32..4,
    ) {
        let params = Params::secret(&secret).time(0).window(window);
        prop_assert!(!reset_token::verify(&presented, &params).unwrap());
    }
}
