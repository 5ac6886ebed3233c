use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    /// Encoder failed while consuming the plaintext.
    #[error("codec {codec} compress failed: {msg}")]
    CompressFailed { codec: &'static str, msg: String },

    /// Input is not a well-formed compressed stream.
    #[error("codec {codec} decompress failed: {msg}")]
    MalformedStream { codec: &'static str, msg: String },
}
