// ## 📂 File: `src/envelope/types.rs`

//! envelope/types.rs
//! Borrowed view over envelope bytes plus sizing helpers.

use crate::constants::{MIN_ENVELOPE_LEN, NONCE_LEN_24, TAG_LEN};
use crate::crypto::nonce::is_compress_flag_set;
use crate::types::CodecError;

/// Parsed (but not yet authenticated) envelope.
///
/// Nothing here is trustworthy until `open` has verified the tag.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeRef<'a> {
    nonce: &'a [u8; NONCE_LEN_24],
    ciphertext: &'a [u8],
}

impl<'a> EnvelopeRef<'a> {
    /// Split `buf` into nonce and sealed ciphertext.
    ///
    /// # Errors
    /// - `TooShort` if `buf` cannot hold a nonce and a tag.
    pub fn parse(buf: &'a [u8]) -> Result<Self, CodecError> {
        let too_short = || CodecError::TooShort { min: MIN_ENVELOPE_LEN, actual: buf.len() };
        if buf.len() < MIN_ENVELOPE_LEN {
            return Err(too_short());
        }
        let (nonce, ciphertext) = buf.split_at(NONCE_LEN_24);
        let nonce: &[u8; NONCE_LEN_24] = nonce.try_into().map_err(|_| too_short())?;
        Ok(Self { nonce, ciphertext })
    }

    pub fn nonce(&self) -> &'a [u8; NONCE_LEN_24] {
        self.nonce
    }

    /// Sealed payload including the trailing tag.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Compression flag as carried by the nonce.
    pub fn is_compressed(&self) -> bool {
        is_compress_flag_set(self.nonce)
    }

    /// Length of the (possibly compressed) payload once opened.
    pub fn payload_len(&self) -> usize {
        self.ciphertext.len() - TAG_LEN
    }

    /// Total size on the wire.
    pub fn wire_len(&self) -> usize {
        NONCE_LEN_24 + self.ciphertext.len()
    }
}

/// Bytes added around a payload: nonce + tag.
#[inline]
pub const fn overhead() -> usize {
    MIN_ENVELOPE_LEN
}

/// Envelope size for a payload of `payload_len` bytes (after any compression).
#[inline]
pub const fn sealed_len(payload_len: usize) -> usize {
    payload_len + MIN_ENVELOPE_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_at_nonce() {
        let mut buf = vec![0u8; MIN_ENVELOPE_LEN + 5];
        buf[NONCE_LEN_24 - 1] = 0x01;
        buf[NONCE_LEN_24] = 0xAB;
        let env = EnvelopeRef::parse(&buf).unwrap();
        assert!(env.is_compressed());
        assert_eq!(env.ciphertext()[0], 0xAB);
        assert_eq!(env.payload_len(), 5);
        assert_eq!(env.wire_len(), buf.len());
    }

    #[test]
    fn parse_rejects_short_input() {
        for n in 0..MIN_ENVELOPE_LEN {
            let err = EnvelopeRef::parse(&vec![0u8; n]).unwrap_err();
            assert!(matches!(err, CodecError::TooShort { min: 40, actual } if actual == n));
        }
    }
}
