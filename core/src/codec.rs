//! codec.rs
//! `Codec`: key material + compression toggle + nonce source.
//!
//! Design notes:
//! - Immutable after construction; `encrypt`/`decrypt` take `&self` and keep
//!   no per-call state, so one codec can serve many threads.
//! - Cloning is cheap: the nonce source is shared behind an `Arc`.
//! - Both key strategies share this one type; the strategy is data
//!   (`KeyMaterial`), not a separate codec implementation.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::config::{CodecConfig, KdfParams};
use crate::constants::DEFAULT_COMPRESSION_LEVEL;
use crate::crypto::key::{FixedKey, KeyMaterial, StretchedKey};
use crate::crypto::nonce::{NonceSource, OsNonceSource};
use crate::envelope::{self, sealed_len};
use crate::stream::types::Mode;
use crate::types::CodecError;

#[derive(Clone)]
pub struct Codec {
    keys: KeyMaterial,
    compress: bool,
    level: u32,
    nonces: Arc<dyn NonceSource>,
}

impl Codec {
    /// Codec over any key material, OS randomness, default zlib level.
    pub fn new(keys: impl Into<KeyMaterial>, compress: bool) -> Self {
        Self {
            keys: keys.into(),
            compress,
            level: DEFAULT_COMPRESSION_LEVEL,
            nonces: Arc::new(OsNonceSource),
        }
    }

    /// Fixed-key codec: key = first 32 bytes of (secret || pad).
    ///
    /// # Errors
    /// - `ConfigError::PadTooShort` if `pad` is shorter than 32 bytes.
    pub fn padded(
        secret: impl AsRef<[u8]>,
        pad: impl AsRef<[u8]>,
        compress: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self::new(FixedKey::new(secret, pad)?, compress))
    }

    /// Fixed-key codec with compression settings taken from `config`.
    /// `config.kdf` is ignored.
    pub fn padded_with_config(
        secret: impl AsRef<[u8]>,
        pad: impl AsRef<[u8]>,
        config: &CodecConfig,
    ) -> Result<Self, CodecError> {
        Ok(Self::new(FixedKey::new(secret, pad)?, config.compress)
            .with_compression_level(config.effective_level()))
    }

    /// Stretched-key codec with the default scrypt cost.
    pub fn stretched(secret: impl AsRef<[u8]>, compress: bool) -> Self {
        Self::new(StretchedKey::new(secret), compress)
    }

    /// Stretched-key codec with explicit scrypt cost.
    pub fn stretched_with_params(
        secret: impl AsRef<[u8]>,
        params: KdfParams,
        compress: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self::new(StretchedKey::with_params(secret, params)?, compress))
    }

    /// Stretched-key codec fully described by `config`.
    pub fn from_config(secret: impl AsRef<[u8]>, config: &CodecConfig) -> Result<Self, CodecError> {
        Ok(Self::stretched_with_params(secret, config.kdf, config.compress)?
            .with_compression_level(config.effective_level()))
    }

    /// zlib level for outgoing messages (clamped to 0..=9 at compression time).
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Replace the randomness source (deterministic sources are for tests).
    pub fn with_nonce_source(mut self, nonces: Arc<dyn NonceSource>) -> Self {
        self.nonces = nonces;
        self
    }

    /// Seal `plaintext` into `nonce || ciphertext`, compressing first if the
    /// codec is configured to.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CodecError> {
        let out = envelope::seal(&self.keys, self.compress, self.level, plaintext, self.nonces.as_ref())?;
        debug!(
            "encrypt: plaintext={}B envelope={}B compressed={} stretched={}",
            plaintext.len(),
            out.len(),
            self.compress,
            self.keys.is_stretched()
        );
        Ok(out)
    }

    /// Open an envelope. Decompression follows the flag in the received
    /// nonce, whatever this codec's own compression setting is.
    pub fn decrypt(&self, envelope: &[u8]) -> Result<Vec<u8>, CodecError> {
        let out = envelope::open(&self.keys, envelope)?;
        debug!(
            "decrypt: envelope={}B plaintext={}B stretched={}",
            envelope.len(),
            out.len(),
            self.keys.is_stretched()
        );
        Ok(out)
    }

    /// Dispatch on a stream mode.
    pub fn apply(&self, mode: Mode, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        match mode {
            Mode::Encrypt => self.encrypt(input),
            Mode::Decrypt => self.decrypt(input),
        }
    }

    /// Envelope size for `plaintext_len` bytes when compression is off.
    pub fn sealed_len_uncompressed(plaintext_len: usize) -> usize {
        sealed_len(plaintext_len)
    }

    pub fn compresses(&self) -> bool {
        self.compress
    }

    pub fn compression_level(&self) -> u32 {
        self.level
    }

    pub fn key_material(&self) -> &KeyMaterial {
        &self.keys
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("keys", &self.keys)
            .field("compress", &self.compress)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
