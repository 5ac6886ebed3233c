pub mod types;
pub mod aead;
pub mod kdf;
pub mod key;
pub mod nonce;

pub use types::*;
pub use aead::*;
pub use kdf::*;
pub use key::*;
pub use nonce::*;
