//! Sentence-level parsing: the buffer a sentence is framed into, the XOR
//! checksum trailer and the GGA fix-quality field.

mod buffer;
mod checksum;
mod fix;

pub use buffer::{Sentence, SentenceBuffer};
pub use checksum::{parse_hex, sentence_checksum, validate_checksum, ChecksumResult};
pub use fix::{parse_fix, FixQuality};

/// The bytes before the first NUL, a sentence never extends past one
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    bytes
        .iter()
        .position(|b| *b == 0)
        .map_or(bytes, |i| &bytes[..i])
}
