//! config.rs
//! Tunable knobs for the codec: compression and key stretching cost.
//!
//! Design notes:
//! - Defaults are the conservative constants from `constants.rs`.
//! - Both structs derive serde so deployments can keep them next to the rest
//!   of their configuration. Validation happens when a codec is built, not
//!   when the struct is deserialized.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMPRESSION_LEVEL, DEFAULT_SCRYPT_LOG_N, DEFAULT_SCRYPT_P, DEFAULT_SCRYPT_R,
    KEY_LEN_32, MAX_COMPRESSION_LEVEL,
};
use crate::types::ConfigError;

/// scrypt work-factor triple. `N = 2^log_n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfParams {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            log_n: DEFAULT_SCRYPT_LOG_N,
            r: DEFAULT_SCRYPT_R,
            p: DEFAULT_SCRYPT_P,
        }
    }
}

impl KdfParams {
    pub fn new(log_n: u8, r: u32, p: u32) -> Self {
        Self { log_n, r, p }
    }

    /// Cost parameter N.
    pub fn n(&self) -> u64 {
        1u64.checked_shl(self.log_n as u32).unwrap_or(0)
    }

    /// Resolve into scrypt's parameter type, rejecting anything scrypt refuses.
    pub fn to_scrypt(&self) -> Result<scrypt::Params, ConfigError> {
        scrypt::Params::new(self.log_n, self.r, self.p, KEY_LEN_32)
            .map_err(|e| ConfigError::InvalidKdfParams(format!("{} (log_n={}, r={}, p={})", e, self.log_n, self.r, self.p)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_scrypt().map(|_| ())
    }
}

/// Codec-level settings shared by both key strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Compress plaintext before sealing (flag travels in the nonce).
    pub compress: bool,
    /// zlib level, 0..=9.
    pub compression_level: u32,
    /// Only consulted by the stretched-key strategy.
    pub kdf: KdfParams,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compress: false,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            kdf: KdfParams::default(),
        }
    }
}

impl CodecConfig {
    pub fn new(compress: bool) -> Self {
        Self { compress, ..Self::default() }
    }

    /// Clamp the compression level into flate2's range.
    pub fn effective_level(&self) -> u32 {
        self.compression_level.min(MAX_COMPRESSION_LEVEL)
    }
}
