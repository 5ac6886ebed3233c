// ## 📂 File: `src/stream/reader.rs`

//! stream/reader.rs
//! `Read` adapter: pulls the whole source on first read, runs the codec once,
//! then hands the result out in caller-sized pieces.
//!
//! State machine:
//! - `Fresh`     → first `read` consumes the source (`read_to_end`)
//! - `Filled`    → result is being drained
//! - `Exhausted` → drained or failed; every `read` returns `Ok(0)`
//!
//! Notes:
//! - An I/O error while reading the source is returned as-is and the reader
//!   stays `Fresh`. Bytes the source already yielded are kept in `pending`,
//!   so a retried `read` (after `WouldBlock`, say) resumes where it stopped.
//! - A codec failure is returned once as `StreamError` and the reader goes
//!   straight to `Exhausted`. Nothing unauthenticated is ever delivered.

use std::io::{self, Read};
use std::mem;

use log::debug;
use zeroize::Zeroize;

use crate::codec::Codec;
use crate::config::KdfParams;
use crate::stream::types::{Mode, ReadState, StreamError};
use crate::types::CodecError;

pub struct Reader<R> {
    inner: R,
    codec: Codec,
    mode: Mode,
    state: ReadState,
    /// Source bytes gathered so far while `Fresh`.
    pending: Vec<u8>,
    result: Vec<u8>,
    pos: usize,
}

impl<R> Reader<R> {
    /// Decrypting reader.
    pub fn new(inner: R, codec: Codec) -> Self {
        Self::with_mode(inner, codec, Mode::Decrypt)
    }

    pub fn with_mode(inner: R, codec: Codec, mode: Mode) -> Self {
        Self {
            inner,
            codec,
            mode,
            state: ReadState::Fresh,
            pending: Vec::new(),
            result: Vec::new(),
            pos: 0,
        }
    }

    /// Decrypting reader over a fixed (padded) key.
    pub fn padded(
        inner: R,
        secret: impl AsRef<[u8]>,
        pad: impl AsRef<[u8]>,
    ) -> Result<Self, CodecError> {
        Ok(Self::new(inner, Codec::padded(secret, pad, false)?))
    }

    /// Reader over a stretched key in either direction. `compress` only
    /// matters when encrypting.
    pub fn stretched(inner: R, secret: impl AsRef<[u8]>, mode: Mode, compress: bool) -> Self {
        Self::with_mode(inner, Codec::stretched(secret, compress), mode)
    }

    /// Same as [`Reader::stretched`] with explicit scrypt cost.
    pub fn stretched_with_params(
        inner: R,
        secret: impl AsRef<[u8]>,
        params: KdfParams,
        mode: Mode,
        compress: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self::with_mode(inner, Codec::stretched_with_params(secret, params, compress)?, mode))
    }

    /// Back to `Fresh`, reading from `inner` from now on. Any undelivered
    /// result is discarded. Returns the previous source.
    pub fn reset(&mut self, inner: R) -> R {
        debug!("reader reset: state={:?} undelivered={}B", self.state, self.result.len() - self.pos);
        self.discard();
        self.pending.zeroize();
        self.state = ReadState::Fresh;
        mem::replace(&mut self.inner, inner)
    }

    pub fn state(&self) -> ReadState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn discard(&mut self) {
        self.result.zeroize();
        self.pos = 0;
    }
}

impl<R: Read> Reader<R> {
    fn fill(&mut self) -> io::Result<()> {
        // read_to_end appends whatever arrived before an error, so a
        // partial read survives in `pending` until the next attempt.
        self.inner.read_to_end(&mut self.pending)?;
        let mut input = mem::take(&mut self.pending);
        let outcome = self.codec.apply(self.mode, &input);
        let input_len = input.len();
        input.zeroize();

        match outcome {
            Ok(out) => {
                debug!("reader filled: mode={:?} in={}B out={}B", self.mode, input_len, out.len());
                self.result = out;
                self.pos = 0;
                self.state = ReadState::Filled;
                Ok(())
            }
            Err(e) => {
                self.discard();
                self.state = ReadState::Exhausted;
                Err(StreamError::for_mode(self.mode, e).into())
            }
        }
    }
}

impl<R: Read> Read for Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.state == ReadState::Fresh {
            self.fill()?;
        }
        if self.state == ReadState::Exhausted {
            return Ok(0);
        }

        let remaining = &self.result[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;

        if self.pos == self.result.len() {
            self.discard();
            self.state = ReadState::Exhausted;
        }
        Ok(n)
    }
}
