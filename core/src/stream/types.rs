use std::io;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;

use crate::types::{CodecError, ConfigError};

/// What an adapter does with the bytes passing through it.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum Mode {
    Encrypt = 0,
    Decrypt = 1,
}

impl Mode {
    /// Map a raw mode code. Only 0 (encrypt) and 1 (decrypt) exist.
    pub fn from_code(raw: u8) -> Result<Self, ConfigError> {
        Mode::try_from_primitive(raw).map_err(|_| ConfigError::InvalidMode(raw))
    }
}

/// Reader lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadState {
    /// Nothing read from the source yet.
    Fresh,
    /// Source consumed and processed; result partly delivered.
    Filled,
    /// Result fully delivered, or processing failed. Reads return `Ok(0)`.
    Exhausted,
}

/// Adapter failure. Surfaces through `std::io::Error` (kind `InvalidData`)
/// with this value as the inner error.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("could not decrypt input: {0}")]
    DecryptFailed(#[source] CodecError),

    #[error("could not encrypt input: {0}")]
    EncryptFailed(#[source] CodecError),
}

impl StreamError {
    pub fn for_mode(mode: Mode, source: CodecError) -> Self {
        match mode {
            Mode::Encrypt => StreamError::EncryptFailed(source),
            Mode::Decrypt => StreamError::DecryptFailed(source),
        }
    }

    /// The codec error underneath.
    pub fn codec_error(&self) -> &CodecError {
        match self {
            StreamError::DecryptFailed(e) | StreamError::EncryptFailed(e) => e,
        }
    }

    /// Recover a `StreamError` from an `io::Error` produced by an adapter.
    pub fn from_io(err: &io::Error) -> Option<&StreamError> {
        err.get_ref().and_then(|inner| inner.downcast_ref::<StreamError>())
    }
}

impl From<StreamError> for io::Error {
    fn from(e: StreamError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_codes_are_closed() {
        assert_eq!(Mode::from_code(0).unwrap(), Mode::Encrypt);
        assert_eq!(Mode::from_code(1).unwrap(), Mode::Decrypt);
        assert_eq!(Mode::from_code(2).unwrap_err(), ConfigError::InvalidMode(2));
        assert_eq!(u8::from(Mode::Decrypt), 1);
    }

    #[test]
    fn io_error_round_trips_stream_error() {
        let io_err: io::Error = StreamError::DecryptFailed(CodecError::AuthenticationFailed).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
        let inner = StreamError::from_io(&io_err).unwrap();
        assert!(matches!(inner.codec_error(), CodecError::AuthenticationFailed));
    }
}
