//! compression/zlib.rs
//! zlib (RFC 1950) via flate2, one stream per message.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::compression::types::CompressionError;
use crate::constants::MAX_COMPRESSION_LEVEL;

const CODEC: &str = "zlib";

/// Compress `input` as a single finished zlib stream.
pub fn zlib_compress(input: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    let level = Compression::new(level.min(MAX_COMPRESSION_LEVEL));
    let mut enc = ZlibEncoder::new(Vec::with_capacity(input.len() / 2 + 16), level);
    enc.write_all(input)
        .map_err(|e| CompressionError::CompressFailed { codec: CODEC, msg: e.to_string() })?;
    enc.finish()
        .map_err(|e| CompressionError::CompressFailed { codec: CODEC, msg: e.to_string() })
}

/// Decompress one complete zlib stream.
///
/// Fails on a bad header, a corrupt or truncated deflate body, an empty input
/// or a checksum mismatch.
/// Bytes after the end of the stream are ignored, as zlib readers
/// conventionally do.
pub fn zlib_decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut dec = ZlibDecoder::new(input);
    let mut out = Vec::with_capacity(input.len().saturating_mul(2));
    dec.read_to_end(&mut out)
        .map_err(|e| CompressionError::MalformedStream { codec: CODEC, msg: e.to_string() })?;
    Ok(out)
}
