//! secretbox-codec
//!
//! Symmetric authenticated encryption of whole messages with an in-band
//! compression flag, two key strategies and buffered `Read`/`Write`
//! adapters.
//!
//! Wire format: `nonce(24) || XChaCha20-Poly1305(payload)`, where the lowest
//! bit of `nonce[23]` says whether the payload is zlib-compressed.
//!
//! Sizes match NaCl secretbox (XSalsa20-Poly1305), but the cipher does not:
//! envelopes are not interchangeable with secretbox output.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Building blocks
pub mod compression;
pub mod crypto;
pub mod envelope;

// Codec and adapters
pub mod codec;
pub mod stream;

pub use codec::Codec;
pub use config::{CodecConfig, KdfParams};
pub use crypto::{FixedKey, KeyMaterial, StretchedKey};
pub use stream::{Mode, Reader, Writer};
pub use types::{CodecError, ConfigError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::Codec;
    pub use crate::config::{CodecConfig, KdfParams};
    pub use crate::crypto::{FixedKey, KeyMaterial, NonceSource, OsNonceSource, StretchedKey};
    pub use crate::stream::{Mode, ReadState, Reader, StreamError, Writer};
    pub use crate::types::{CodecError, ConfigError};
}
