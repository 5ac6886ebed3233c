//! stream/writer.rs
//! `Write` adapter: accumulates everything, emits one envelope (or one
//! plaintext, in decrypt mode) on `flush`/`close`.
//!
//! Caller responsibilities:
//! - Call `flush` or `close` exactly once per message. Nothing reaches the
//!   destination before that, and dropping the writer emits nothing.
//! - The accumulation buffer survives a flush. Flushing again without `reset`
//!   processes the same bytes again and emits a second, independent result.

use std::io::{self, Write};
use std::mem;

use log::debug;
use zeroize::Zeroize;

use crate::codec::Codec;
use crate::config::KdfParams;
use crate::stream::types::{Mode, StreamError};
use crate::types::CodecError;

pub struct Writer<W> {
    inner: W,
    codec: Codec,
    mode: Mode,
    buf: Vec<u8>,
}

impl<W> Writer<W> {
    /// Encrypting writer.
    pub fn new(inner: W, codec: Codec) -> Self {
        Self::with_mode(inner, codec, Mode::Encrypt)
    }

    pub fn with_mode(inner: W, codec: Codec, mode: Mode) -> Self {
        Self { inner, codec, mode, buf: Vec::new() }
    }

    /// Encrypting writer over a fixed (padded) key.
    pub fn padded(
        inner: W,
        secret: impl AsRef<[u8]>,
        pad: impl AsRef<[u8]>,
        compress: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self::new(inner, Codec::padded(secret, pad, compress)?))
    }

    /// Writer over a stretched key in either direction.
    pub fn stretched(inner: W, secret: impl AsRef<[u8]>, mode: Mode, compress: bool) -> Self {
        Self::with_mode(inner, Codec::stretched(secret, compress), mode)
    }

    /// Same as [`Writer::stretched`] with explicit scrypt cost.
    pub fn stretched_with_params(
        inner: W,
        secret: impl AsRef<[u8]>,
        params: KdfParams,
        mode: Mode,
        compress: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self::with_mode(inner, Codec::stretched_with_params(secret, params, compress)?, mode))
    }

    /// Clear the buffer and write to `inner` from now on. Returns the previous
    /// destination. The codec (and any resolved key) is kept.
    pub fn reset(&mut self, inner: W) -> W {
        debug!("writer reset: dropping {}B buffered", self.buf.len());
        self.buf.zeroize();
        mem::replace(&mut self.inner, inner)
    }

    /// Bytes accepted since construction or the last reset.
    pub fn buffered_len(&self) -> usize {
        self.buf.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Give back the destination without flushing.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Writer<W> {
    /// Alias for `flush`.
    pub fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl<W: Write> Write for Writer<W> {
    /// Buffers `data`. Never touches the destination and never short-writes.
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    /// Process the whole buffer and write the result to the destination in
    /// one `write_all`.
    fn flush(&mut self) -> io::Result<()> {
        let out = self
            .codec
            .apply(self.mode, &self.buf)
            .map_err(|e| StreamError::for_mode(self.mode, e))?;
        debug!("writer flush: mode={:?} in={}B out={}B", self.mode, self.buf.len(), out.len());
        self.inner.write_all(&out)?;
        self.inner.flush()
    }
}
