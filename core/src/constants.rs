//! constants.rs
//! Wire-format sizes, flag bit positions and conservative defaults.
//!
//! Design notes:
//! - Sizes mirror the AEAD primitive (XChaCha20-Poly1305): 32-byte key,
//!   24-byte nonce, 16-byte tag.
//! - The compression flag lives in the lowest-order bit of the last nonce byte.
//!   Changing either position breaks every envelope already on the wire.

/// Symmetric key length for the AEAD primitive.
pub const KEY_LEN_32: usize = 32;

/// Extended nonce length (XChaCha20-Poly1305).
pub const NONCE_LEN_24: usize = 24;

/// Fixed AEAD authentication overhead (Poly1305 tag).
pub const TAG_LEN: usize = 16;

/// Smallest byte sequence that can possibly be a valid envelope
/// (nonce + tag around an empty payload).
pub const MIN_ENVELOPE_LEN: usize = NONCE_LEN_24 + TAG_LEN;

/// Index of the nonce byte carrying the compression flag.
pub const COMPRESS_FLAG_BYTE: usize = NONCE_LEN_24 - 1;

/// Mask of the compression flag inside `COMPRESS_FLAG_BYTE`.
pub const COMPRESS_FLAG_BIT: u8 = 0x01;

/// Minimum pad length accepted by the fixed-key strategy.
pub const MIN_PAD_LEN: usize = KEY_LEN_32;

/// scrypt cost defaults: N = 2^15 = 32768, r = 8, p = 1.
pub const DEFAULT_SCRYPT_LOG_N: u8 = 15;
pub const DEFAULT_SCRYPT_R: u32 = 8;
pub const DEFAULT_SCRYPT_P: u32 = 1;

/// zlib level used when compression is enabled (flate2 scale, 0..=9).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;
pub const MAX_COMPRESSION_LEVEL: u32 = 9;
