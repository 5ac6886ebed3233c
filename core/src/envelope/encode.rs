//! src/envelope/encode.rs
//!
//! Envelope sealing.
//!
//! Design notes:
//! - Order matters: nonce (with flag) first, then key, then payload. The
//!   stretched-key strategy salts with the nonce, so the flag bit must already
//!   be final when the key is derived.
//! - Compression happens before sealing; the AEAD never sees raw plaintext
//!   when the flag is set.

use std::borrow::Cow;

use crate::compression::zlib_compress;
use crate::constants::{NONCE_LEN_24, TAG_LEN};
use crate::crypto::aead::aead_seal;
use crate::crypto::key::KeyMaterial;
use crate::crypto::nonce::{generate_nonce, NonceSource};
use crate::crypto::types::SessionKey;
use crate::types::CodecError;

/// Seal `plaintext` into a fresh envelope.
///
/// # Returns
/// - `nonce || AEAD(key, nonce, payload)` where payload is the zlib form of
///   `plaintext` iff `compress` is set.
///
/// # Errors
/// - `Entropy` if the nonce source fails.
/// - `KdfFailure` if stretching the key fails.
/// - `CompressionFailed` / `Aead` from the collaborators.
pub fn seal(
    keys: &KeyMaterial,
    compress: bool,
    level: u32,
    plaintext: &[u8],
    nonces: &dyn NonceSource,
) -> Result<Vec<u8>, CodecError> {
    let nonce = generate_nonce(nonces, compress)?;
    let key = keys.key_for(&nonce)?;

    let payload: Cow<'_, [u8]> = if compress {
        Cow::Owned(zlib_compress(plaintext, level).map_err(CodecError::CompressionFailed)?)
    } else {
        Cow::Borrowed(plaintext)
    };

    seal_with_nonce(&key, &nonce, &payload)
}

/// Seal an already prepared payload under an explicit nonce.
///
/// The flag bit in `nonce` is written as given; callers are responsible for
/// it matching the payload.
pub fn seal_with_nonce(
    key: &SessionKey,
    nonce: &[u8; NONCE_LEN_24],
    payload: &[u8],
) -> Result<Vec<u8>, CodecError> {
    let sealed = aead_seal(key, nonce, payload)?;
    debug_assert_eq!(sealed.len(), payload.len() + TAG_LEN);

    let mut out = Vec::with_capacity(NONCE_LEN_24 + sealed.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}
