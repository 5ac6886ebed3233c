//! envelope/mod.rs
//! The wire format of one encrypted message.
//!
//! ```text
//! envelope := nonce (24 bytes) || sealed_ciphertext (payload_len + 16)
//!             nonce[23] & 0x01 = payload was zlib-compressed
//! ```
//!
//! Notes:
//! - No magic, no version byte. The format is versioned by deployment.
//! - The flag bit is read from the received nonce on open, never from the
//!   opening codec's own settings.
//! - The nonce is covered indirectly: it feeds the AEAD, so flipping the flag
//!   bit on the wire fails authentication.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
