// ## src/crypto/aead.rs

//! crypto/aead.rs
//! Seal/open over XChaCha20-Poly1305.
//!
//! Design notes:
//! - 32-byte key, 24-byte nonce, 16-byte tag appended to the ciphertext.
//! - No associated data: the envelope has no header to bind.
//! - Tag verification is constant-time and fails closed (no partial plaintext).
//! - Empty messages are legal; they seal to a bare tag.

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};

use crate::constants::{NONCE_LEN_24, TAG_LEN};
use crate::crypto::types::SessionKey;
use crate::types::CodecError;

/// AEAD seal. Output is `msg.len() + TAG_LEN` bytes.
pub fn aead_seal(
    key: &SessionKey,
    nonce: &[u8; NONCE_LEN_24],
    msg: &[u8],
) -> Result<Vec<u8>, CodecError> {
    let cipher = XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    cipher
        .encrypt(XNonce::from_slice(nonce), msg)
        .map_err(|_| CodecError::Aead("XChaCha20-Poly1305 seal failed".into()))
}

/// AEAD open. Any tag mismatch (wrong key, flipped bit, truncation) maps to
/// `AuthenticationFailed`.
pub fn aead_open(
    key: &SessionKey,
    nonce: &[u8; NONCE_LEN_24],
    ciphertext_and_tag: &[u8],
) -> Result<Vec<u8>, CodecError> {
    if ciphertext_and_tag.len() < TAG_LEN {
        return Err(CodecError::AuthenticationFailed);
    }
    let cipher = XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    cipher
        .decrypt(XNonce::from_slice(nonce), ciphertext_and_tag)
        .map_err(|_| CodecError::AuthenticationFailed)
}
