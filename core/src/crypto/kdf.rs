// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! scrypt key stretching for the per-message key strategy.
//!
//! Design:
//! - key = scrypt(secret, salt = envelope nonce, N, r, p, 32)
//! - The nonce is the salt, so every message gets an independent key and the
//!   receiver can recompute it from the wire bytes alone.
//!
//! Notes:
//! - Deliberately slow and memory-hard (defaults: N = 32768, r = 8 → 32 MiB).
//! - Allocation failure or invalid parameters surface as `KdfFailure`; the
//!   call is never retried with weaker parameters.

use log::trace;

use crate::config::KdfParams;
use crate::constants::KEY_LEN_32;
use crate::crypto::types::SessionKey;
use crate::types::CodecError;

/// Stretch `secret` into a 32-byte session key salted with `salt`.
pub fn stretch_key(
    secret: &[u8],
    salt: &[u8],
    params: &scrypt::Params,
) -> Result<SessionKey, CodecError> {
    trace!(
        "scrypt: log_n={} r={} p={} salt_len={}",
        params.log_n(),
        params.r(),
        params.p(),
        salt.len()
    );

    let mut key = [0u8; KEY_LEN_32];
    scrypt::scrypt(secret, salt, params, &mut key)
        .map_err(|e| CodecError::KdfFailure(e.to_string()))?;
    let out = SessionKey::from_bytes(key);
    zeroize::Zeroize::zeroize(&mut key);
    Ok(out)
}

/// Same as [`stretch_key`] but from unresolved `KdfParams`.
pub fn stretch_key_with(
    secret: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<SessionKey, CodecError> {
    let resolved = params
        .to_scrypt()
        .map_err(|e| CodecError::KdfFailure(e.to_string()))?;
    stretch_key(secret, salt, &resolved)
}
