use core::{cmp::min, fmt};

use super::until_nul;
use crate::{constants::NMEA_END_CHAR_2, error::BufferOverflow};

/// Fixed-capacity byte store a sentence is framed into.
///
/// At most `N - 1` bytes are ever stored, the last slot stays reserved the
/// way a C string reserves room for its terminator. Pushing into a full
/// buffer is refused with [`BufferOverflow`] instead of writing past the end.
#[derive(Clone)]
pub struct SentenceBuffer<const N: usize> {
    buffer: [u8; N],
    len: usize,
}

impl<const N: usize> SentenceBuffer<N> {
    /// Creates a new, empty `SentenceBuffer`.
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of bytes the buffer accepts before refusing pushes
    pub const fn data_capacity(&self) -> usize {
        N.saturating_sub(1)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len >= self.data_capacity()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn push(&mut self, byte: u8) -> Result<(), BufferOverflow> {
        if self.is_full() {
            return Err(BufferOverflow { capacity: N });
        }
        self.buffer[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }
}

impl<const N: usize> Default for SentenceBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for SentenceBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceBuffer")
            .field("capacity", &N)
            .field("data", &self.as_bytes())
            .finish()
    }
}

/// An accepted sentence: the framed bytes from `$` up to, but not including,
/// the `<LF>` terminator or the first NUL.
#[derive(Clone)]
pub struct Sentence<const N: usize> {
    inner: SentenceBuffer<N>,
}

impl<const N: usize> Sentence<N> {
    pub(crate) fn from_framed(framed: &SentenceBuffer<N>) -> Self {
        let mut inner = framed.clone();
        inner.len = until_nul(inner.as_bytes()).len();
        if inner.last() == Some(NMEA_END_CHAR_2) {
            inner.len -= 1;
        }
        Self { inner }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copies the sentence into `out`, truncating to its length. Returns the
    /// number of bytes written.
    pub fn copy_to(&self, out: &mut [u8]) -> usize {
        let n = min(out.len(), self.len());
        out[..n].copy_from_slice(&self.as_bytes()[..n]);
        n
    }
}

impl<const N: usize> PartialEq for Sentence<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for Sentence<N> {}

impl<const N: usize> PartialEq<[u8]> for Sentence<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> fmt::Debug for Sentence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.debug_tuple("Sentence").field(&s).finish(),
            None => f.debug_tuple("Sentence").field(&self.as_bytes()).finish(),
        }
    }
}

impl<const N: usize> fmt::Display for Sentence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_bytes() {
            fmt::Write::write_char(f, char::from(*b))?;
        }
        Ok(())
    }
}
