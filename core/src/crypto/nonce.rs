// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Random nonce generation and the compression flag bit.
//!
//! Design:
//! - Every envelope gets a fresh 24-byte nonce from a `NonceSource`.
//! - The lowest-order bit of the last nonce byte is reserved: it is cleared
//!   after drawing randomness and set again iff the payload was compressed.
//!   The remaining 191 bits stay random, so collision odds are unaffected in
//!   practice.
//! - The randomness source is injected (`NonceSource`); `FixedNonceSource`
//!   pins it for reproducible envelopes.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::{COMPRESS_FLAG_BIT, COMPRESS_FLAG_BYTE, NONCE_LEN_24};
use crate::types::CodecError;

/// Source of nonce randomness. Must be safe to call from many threads.
pub trait NonceSource: Send + Sync {
    /// Fill `nonce` with fresh random bytes. Failure is fatal to the call.
    fn fill_nonce(&self, nonce: &mut [u8; NONCE_LEN_24]) -> Result<(), CodecError>;
}

/// Operating-system CSPRNG (`getrandom` through `rand::rngs::OsRng`).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn fill_nonce(&self, nonce: &mut [u8; NONCE_LEN_24]) -> Result<(), CodecError> {
        OsRng
            .try_fill_bytes(nonce)
            .map_err(|e| CodecError::Entropy(e.to_string()))
    }
}

/// Always yields the same nonce.
///
/// For test vectors only: reusing a nonce under one key destroys
/// confidentiality.
#[derive(Clone, Copy)]
pub struct FixedNonceSource([u8; NONCE_LEN_24]);

impl FixedNonceSource {
    pub fn new(nonce: [u8; NONCE_LEN_24]) -> Self {
        Self(nonce)
    }
}

impl fmt::Debug for FixedNonceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedNonceSource").finish()
    }
}

impl NonceSource for FixedNonceSource {
    fn fill_nonce(&self, nonce: &mut [u8; NONCE_LEN_24]) -> Result<(), CodecError> {
        nonce.copy_from_slice(&self.0);
        Ok(())
    }
}

/// Draw a nonce and stamp the compression flag.
#[inline]
pub fn generate_nonce(
    source: &dyn NonceSource,
    compressed: bool,
) -> Result<[u8; NONCE_LEN_24], CodecError> {
    let mut nonce = [0u8; NONCE_LEN_24];
    source.fill_nonce(&mut nonce)?;
    set_compress_flag(&mut nonce, compressed);
    Ok(nonce)
}

/// Clear the reserved bit, then set it iff `compressed`.
#[inline]
pub fn set_compress_flag(nonce: &mut [u8; NONCE_LEN_24], compressed: bool) {
    nonce[COMPRESS_FLAG_BYTE] &= !COMPRESS_FLAG_BIT;
    if compressed {
        nonce[COMPRESS_FLAG_BYTE] |= COMPRESS_FLAG_BIT;
    }
}

#[inline]
pub fn is_compress_flag_set(nonce: &[u8; NONCE_LEN_24]) -> bool {
    nonce[COMPRESS_FLAG_BYTE] & COMPRESS_FLAG_BIT == COMPRESS_FLAG_BIT
}
