use thiserror::Error;

use crate::compression::CompressionError;

/// Construction-time configuration failures. Fatal, never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fixed-key pad shorter than the key length.
    #[error("pad too short: need at least {min} bytes, got {actual}")]
    PadTooShort { min: usize, actual: usize },

    /// scrypt cost parameters rejected by the KDF.
    #[error("invalid KDF parameters: {0}")]
    InvalidKdfParams(String),

    /// Raw stream mode code outside the closed {encrypt, decrypt} set.
    #[error("invalid stream mode: {0} (expected 0 = encrypt or 1 = decrypt)")]
    InvalidMode(u8),
}

/// Unified codec error covering configuration, envelope parsing, AEAD,
/// compression and key stretching.
///
/// - `AuthenticationFailed` and `DecompressionFailed` are kept apart so callers
///   can tell "wrong key / tampered" from "corrupted compressed stream".
/// - Nothing here is retried internally.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input shorter than `nonce + tag`. Rejected before any crypto.
    #[error("envelope too short: need at least {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },

    /// AEAD open rejected the ciphertext (wrong key or tampering).
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Compression flag set but the opened payload is not a valid zlib stream.
    #[error("decompression failed: {0}")]
    DecompressionFailed(#[source] CompressionError),

    /// Compressing the plaintext before sealing failed.
    #[error("compression failed: {0}")]
    CompressionFailed(#[source] CompressionError),

    /// Key stretching failed at call time.
    #[error("key derivation failed: {0}")]
    KdfFailure(String),

    /// The nonce source could not produce randomness.
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// AEAD primitive refused to seal.
    #[error("AEAD seal failed: {0}")]
    Aead(String),
}

impl CodecError {
    /// True for errors raised while building a codec or adapter.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CodecError::Config(_))
    }
}
