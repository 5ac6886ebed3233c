//! stream/mod.rs
//! `Read`/`Write` adapters over a `Codec`.
//!
//! These are not streaming ciphers. The envelope is one AEAD message, so the
//! writer buffers everything until `flush`/`close` and the reader consumes the
//! whole source on its first `read`. Memory use is bounded by message size.
//!
//! Adapters hold mutable buffer/cursor state and take `&mut self`; use one
//! adapter per owner. The wrapped `Codec` itself can be cloned and shared.

pub mod types;
pub mod reader;
pub mod writer;

pub use types::*;
pub use reader::*;
pub use writer::*;
