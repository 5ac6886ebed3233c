// Envelope wire-format guarantees:
//
// * every single-bit flip is detected
// * short inputs are rejected before any crypto
// * decompression failure is distinct from authentication failure

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use secretbox_codec::{
        constants::{COMPRESS_FLAG_BIT, COMPRESS_FLAG_BYTE, MIN_ENVELOPE_LEN, NONCE_LEN_24, TAG_LEN},
        compression::zlib_compress,
        crypto::{set_compress_flag, FixedKey},
        envelope::{open, overhead, seal_with_nonce, sealed_len, EnvelopeRef},
        Codec, CodecError, KdfParams, KeyMaterial,
    };

    const PAD: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";

    fn flip(buf: &[u8], bit: usize) -> Vec<u8> {
        let mut out = buf.to_vec();
        out[bit / 8] ^= 1 << (bit % 8);
        out
    }

// # 1. Tamper detection

    #[test]
    fn every_ciphertext_bit_flip_fails_authentication() {
        for compress in [false, true] {
            let codec = Codec::padded("qwerty", PAD, compress).unwrap();
            let env = codec.encrypt(b"hello world").unwrap();

            for bit in (NONCE_LEN_24 * 8)..(env.len() * 8) {
                let err = codec.decrypt(&flip(&env, bit)).unwrap_err();
                assert!(
                    matches!(err, CodecError::AuthenticationFailed),
                    "bit {} (compress={}) gave {:?}",
                    bit,
                    compress,
                    err
                );
            }
        }
    }

    #[test]
    fn nonce_bit_flips_also_fail_authentication() {
        let codec = Codec::padded("qwerty", PAD, false).unwrap();
        let env = codec.encrypt(b"hello world").unwrap();
        for bit in 0..(NONCE_LEN_24 * 8) {
            let err = codec.decrypt(&flip(&env, bit)).unwrap_err();
            assert!(matches!(err, CodecError::AuthenticationFailed), "nonce bit {}", bit);
        }
    }

    #[test]
    fn toggling_the_flag_on_the_wire_is_detected() {
        let codec = Codec::padded("qwerty", PAD, true).unwrap();
        let mut env = codec.encrypt(b"flagged").unwrap();
        env[COMPRESS_FLAG_BYTE] ^= COMPRESS_FLAG_BIT;
        assert!(matches!(codec.decrypt(&env).unwrap_err(), CodecError::AuthenticationFailed));
    }

    #[test]
    fn stretched_ciphertext_flip_fails_authentication() {
        let codec = Codec::stretched_with_params("s", KdfParams::new(4, 8, 1), false).unwrap();
        let env = codec.encrypt(b"abc").unwrap();
        for bit in [NONCE_LEN_24 * 8, env.len() * 8 - 1] {
            let err = codec.decrypt(&flip(&env, bit)).unwrap_err();
            assert!(matches!(err, CodecError::AuthenticationFailed));
        }
    }

    #[test]
    fn truncated_or_extended_envelopes_fail() {
        let codec = Codec::padded("qwerty", PAD, false).unwrap();
        let env = codec.encrypt(b"hello world").unwrap();

        let err = codec.decrypt(&env[..env.len() - 1]).unwrap_err();
        assert!(matches!(err, CodecError::AuthenticationFailed));

        let mut longer = env.clone();
        longer.push(0);
        let err = codec.decrypt(&longer).unwrap_err();
        assert!(matches!(err, CodecError::AuthenticationFailed));
    }

// # 2. Short input rejection

    #[test]
    fn short_inputs_are_too_short() {
        let fixed = Codec::padded("qwerty", PAD, false).unwrap();
        let stretched = Codec::stretched("qwerty", false);
        for n in 0..MIN_ENVELOPE_LEN {
            let input = vec![0u8; n];
            for codec in [&fixed, &stretched] {
                let err = codec.decrypt(&input).unwrap_err();
                assert!(
                    matches!(err, CodecError::TooShort { min, actual } if min == MIN_ENVELOPE_LEN && actual == n),
                    "len {} gave {:?}",
                    n,
                    err
                );
            }
        }
    }

    #[test]
    fn minimum_length_input_reaches_authentication() {
        let codec = Codec::padded("qwerty", PAD, false).unwrap();
        let err = codec.decrypt(&[0u8; MIN_ENVELOPE_LEN]).unwrap_err();
        assert!(matches!(err, CodecError::AuthenticationFailed));
    }

    #[test]
    fn empty_message_envelope_is_minimum_length() {
        let codec = Codec::padded("qwerty", PAD, false).unwrap();
        let env = codec.encrypt(b"").unwrap();
        assert_eq!(env.len(), MIN_ENVELOPE_LEN);
        assert_eq!(overhead(), NONCE_LEN_24 + TAG_LEN);
        assert!(codec.decrypt(&env).unwrap().is_empty());
    }

// # 3. Decompression failure

    #[test]
    fn flagged_garbage_payload_is_decompression_failure() {
        let fixed = FixedKey::new("qwerty", PAD).unwrap();
        let mut nonce = [0x10u8; NONCE_LEN_24];
        set_compress_flag(&mut nonce, true);

        let env = seal_with_nonce(fixed.session_key(), &nonce, b"not a zlib stream").unwrap();
        let codec = Codec::padded("qwerty", PAD, false).unwrap();

        let err = codec.decrypt(&env).unwrap_err();
        assert!(matches!(err, CodecError::DecompressionFailed(_)), "got {:?}", err);
    }

    #[test]
    fn flagged_truncated_zlib_is_decompression_failure() {
        let fixed = FixedKey::new("qwerty", PAD).unwrap();
        let mut nonce = [0x31u8; NONCE_LEN_24];
        set_compress_flag(&mut nonce, true);

        let full = zlib_compress(&b"a fairly long line of text to compress ".repeat(20), 6).unwrap();
        let cut = &full[..full.len() / 2];
        let env = seal_with_nonce(fixed.session_key(), &nonce, cut).unwrap();

        let keys = KeyMaterial::from(fixed);
        let err = open(&keys, &env).unwrap_err();
        assert!(matches!(err, CodecError::DecompressionFailed(_)), "got {:?}", err);
    }

    #[test]
    fn flagged_empty_payload_is_decompression_failure() {
        let fixed = FixedKey::new("qwerty", PAD).unwrap();
        let mut nonce = [0x44u8; NONCE_LEN_24];
        set_compress_flag(&mut nonce, true);

        let env = seal_with_nonce(fixed.session_key(), &nonce, &[]).unwrap();
        assert_eq!(env.len(), MIN_ENVELOPE_LEN);

        let codec = Codec::padded("qwerty", PAD, true).unwrap();
        let err = codec.decrypt(&env).unwrap_err();
        assert!(matches!(err, CodecError::DecompressionFailed(_)), "got {:?}", err);
    }

    #[test]
    fn hand_sealed_compressed_payload_opens() {
        let fixed = FixedKey::new("qwerty", PAD).unwrap();
        let mut nonce = [0x22u8; NONCE_LEN_24];
        set_compress_flag(&mut nonce, true);

        let payload = zlib_compress(b"hand made", 9).unwrap();
        let env = seal_with_nonce(fixed.session_key(), &nonce, &payload).unwrap();
        assert_eq!(env.len(), sealed_len(payload.len()));

        let keys = KeyMaterial::from(fixed);
        assert_eq!(open(&keys, &env).unwrap(), b"hand made");
    }

    #[test]
    fn parsed_view_matches_layout() {
        let codec = Codec::padded("qwerty", PAD, false).unwrap();
        let env = codec.encrypt(b"hello world").unwrap();
        let view = EnvelopeRef::parse(&env).unwrap();
        assert_eq!(view.nonce().as_slice(), &env[..NONCE_LEN_24]);
        assert_eq!(view.payload_len(), 11);
        assert_eq!(view.wire_len(), env.len());
        assert!(!view.is_compressed());
    }

// # 4. Properties

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_any_flip_is_rejected(msg in proptest::collection::vec(any::<u8>(), 0..256), seed in any::<usize>()) {
            let codec = Codec::padded("prop", PAD, false).unwrap();
            let env = codec.encrypt(&msg).unwrap();
            let bit = seed % (env.len() * 8);
            prop_assert!(codec.decrypt(&flip(&env, bit)).is_err());
        }
    }
}
