//! compression/mod.rs
//! Whole-message zlib compression applied before sealing.
//!
//! Notes:
//! - The envelope never records the codec or level; the only in-band signal
//!   is the nonce flag bit. Any reader must therefore speak zlib (RFC 1950).
//! - Level only affects the encoder; decoding is level-agnostic.

pub mod types;
pub mod zlib;

pub use types::*;
pub use zlib::*;
