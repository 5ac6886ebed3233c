//! crypto/key.rs
//! The two key strategies and the descriptor the codec holds.
//!
//! - `FixedKey`: key = first 32 bytes of (secret || pad). Resolved once and
//!   reused for every message. Fast, no per-message stretching, no forward
//!   secrecy between messages.
//! - `StretchedKey`: key = scrypt(secret, nonce). Nothing is resolved up
//!   front; each seal/open pays the full KDF cost.

use std::fmt;

use zeroize::Zeroizing;

use crate::config::KdfParams;
use crate::constants::{KEY_LEN_32, MIN_PAD_LEN, NONCE_LEN_24};
use crate::crypto::kdf::stretch_key_with;
use crate::crypto::types::SessionKey;
use crate::types::{CodecError, ConfigError};

/// Padded user key, truncated to 32 bytes.
#[derive(Clone)]
pub struct FixedKey {
    key: SessionKey,
}

impl FixedKey {
    /// Build from a user secret and a pad of at least 32 bytes.
    ///
    /// The pad is typically a constant compiled into the application. Secrets
    /// longer than 32 bytes are truncated; the pad is then never consulted.
    pub fn new(secret: impl AsRef<[u8]>, pad: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let secret = secret.as_ref();
        let pad = pad.as_ref();
        if pad.len() < MIN_PAD_LEN {
            return Err(ConfigError::PadTooShort { min: MIN_PAD_LEN, actual: pad.len() });
        }

        let mut key = [0u8; KEY_LEN_32];
        let from_secret = secret.len().min(KEY_LEN_32);
        key[..from_secret].copy_from_slice(&secret[..from_secret]);
        key[from_secret..].copy_from_slice(&pad[..KEY_LEN_32 - from_secret]);

        let out = Self { key: SessionKey::from_bytes(key) };
        zeroize::Zeroize::zeroize(&mut key);
        Ok(out)
    }

    pub fn session_key(&self) -> &SessionKey {
        &self.key
    }
}

impl fmt::Debug for FixedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedKey").finish_non_exhaustive()
    }
}

/// Raw secret plus scrypt parameters. Keys are derived per message.
#[derive(Clone)]
pub struct StretchedKey {
    secret: Zeroizing<Vec<u8>>,
    params: KdfParams,
}

impl StretchedKey {
    /// Default (conservative) cost parameters. Secret length is unchecked.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Zeroizing::new(secret.as_ref().to_vec()),
            params: KdfParams::default(),
        }
    }

    /// Custom cost parameters, validated here rather than at first use.
    pub fn with_params(secret: impl AsRef<[u8]>, params: KdfParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            secret: Zeroizing::new(secret.as_ref().to_vec()),
            params,
        })
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// Derive the key for one message, salted with its nonce.
    pub fn derive(&self, nonce: &[u8; NONCE_LEN_24]) -> Result<SessionKey, CodecError> {
        stretch_key_with(&self.secret, nonce, &self.params)
    }
}

impl fmt::Debug for StretchedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StretchedKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Key material descriptor held by a codec.
#[derive(Clone, Debug)]
pub enum KeyMaterial {
    Fixed(FixedKey),
    Stretched(StretchedKey),
}

impl KeyMaterial {
    /// Resolve the AEAD key for the message carrying `nonce`.
    ///
    /// Fixed keys ignore the nonce; stretched keys run the KDF every call.
    pub fn key_for(&self, nonce: &[u8; NONCE_LEN_24]) -> Result<SessionKey, CodecError> {
        match self {
            KeyMaterial::Fixed(k) => Ok(k.session_key().clone()),
            KeyMaterial::Stretched(k) => k.derive(nonce),
        }
    }

    pub fn is_stretched(&self) -> bool {
        matches!(self, KeyMaterial::Stretched(_))
    }
}

impl From<FixedKey> for KeyMaterial {
    fn from(k: FixedKey) -> Self {
        KeyMaterial::Fixed(k)
    }
}

impl From<StretchedKey> for KeyMaterial {
    fn from(k: StretchedKey) -> Self {
        KeyMaterial::Stretched(k)
    }
}
