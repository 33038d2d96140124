//! Big-endian reads over a seekable byte source.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use font_types::Scalar;

use crate::ReadError;

/// A positionable reader over a seekable byte source.
///
/// All reads are big-endian and consume exactly the number of bytes they
/// ask for, or fail with [`ReadError::Truncated`]. The cursor keeps its own
/// copy of the position, so [`ByteCursor::position`] never touches the
/// underlying source.
pub struct ByteCursor<R> {
    inner: R,
    pos: u64,
    len: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Wrap a source, positioning the cursor at byte 0.
    pub fn new(mut inner: R) -> Result<Self, ReadError> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, pos: 0, len })
    }

    /// Read a scalar value and advance past it.
    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let mut raw = T::Raw::default();
        self.fill(raw.as_mut())?;
        Ok(T::from_raw(raw))
    }

    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        self.read()
    }

    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        self.read()
    }

    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        self.read()
    }

    /// Read a fixed number of raw bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `len` raw bytes.
    ///
    /// The length is checked against the source before anything is
    /// allocated, so a hostile length field can't cause a large allocation.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, ReadError> {
        if len as u64 > self.remaining() {
            return Err(self.truncated(len as u64));
        }
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Move to an absolute offset without reading.
    pub fn seek(&mut self, offset: u64) -> Result<(), ReadError> {
        self.pos = self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Advance by `n_bytes` without reading.
    pub fn skip(&mut self, n_bytes: u64) -> Result<(), ReadError> {
        self.seek(self.pos.saturating_add(n_bytes))
    }

    /// The current absolute offset.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Total length of the source, in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// `true` if the source has no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes left between the current position and the end of the source.
    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.pos)
    }

    /// Run `f` with the cursor at `offset`, then return to the current
    /// position.
    ///
    /// The position is restored whether or not `f` succeeds.
    pub fn read_at<T>(
        &mut self,
        offset: u64,
        f: impl FnOnce(&mut Self) -> Result<T, ReadError>,
    ) -> Result<T, ReadError> {
        let saved = self.pos;
        self.seek(offset)?;
        let result = f(self);
        self.seek(saved)?;
        result
    }

    /// Unwrap the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.pos += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(self.truncated(buf.len() as u64)),
            Err(e) => Err(e.into()),
        }
    }

    fn truncated(&self, needed: u64) -> ReadError {
        ReadError::Truncated {
            offset: self.pos,
            needed,
        }
    }
}
