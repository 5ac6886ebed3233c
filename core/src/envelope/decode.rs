//! src/envelope/decode.rs
//!
//! Envelope opening.
//!
//! Design notes:
//! - Length is checked before any key derivation or AEAD work.
//! - Authentication failure returns immediately; the unauthenticated bytes are
//!   never decompressed or surfaced.
//! - Decompression is driven by the received nonce only.

use crate::compression::zlib_decompress;
use crate::crypto::aead::aead_open;
use crate::crypto::key::KeyMaterial;
use crate::crypto::types::SessionKey;
use crate::envelope::types::EnvelopeRef;
use crate::types::CodecError;

/// Open an envelope and return the original plaintext.
///
/// # Errors
/// - `TooShort` if `envelope` is smaller than nonce + tag.
/// - `KdfFailure` if stretching the key fails.
/// - `AuthenticationFailed` on wrong key or any tampering.
/// - `DecompressionFailed` if the flag is set and the payload is not zlib.
pub fn open(keys: &KeyMaterial, envelope: &[u8]) -> Result<Vec<u8>, CodecError> {
    let env = EnvelopeRef::parse(envelope)?;
    let key = keys.key_for(env.nonce())?;
    open_with_key(&key, &env)
}

/// Open a parsed envelope with an already resolved key.
pub fn open_with_key(key: &SessionKey, env: &EnvelopeRef<'_>) -> Result<Vec<u8>, CodecError> {
    let opened = aead_open(key, env.nonce(), env.ciphertext())?;
    if env.is_compressed() {
        zlib_decompress(&opened).map_err(CodecError::DecompressionFailed)
    } else {
        Ok(opened)
    }
}
