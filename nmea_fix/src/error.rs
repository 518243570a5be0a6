use core::fmt;

use crate::parser::ChecksumResult;

/// Reasons a single acquisition attempt produced no sentence.
///
/// None of these escape [`SentenceAcquirer::acquire`](crate::SentenceAcquirer::acquire);
/// the acquirer keeps the most recent one for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireError {
    /// The start marker never showed up within the search ceiling
    Framing,
    /// The sentence buffer filled up before a terminator was seen
    Overflow { capacity: usize },
    /// The trailer was missing or did not match the sentence body
    Checksum(ChecksumResult),
    /// Checksum matched but the receiver reports no position lock
    NoFix,
    /// The read loop ceiling elapsed without a terminated sentence
    Starvation,
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquireError::Framing => f.write_str("start marker not found"),
            AcquireError::Overflow { capacity } => write!(
                f,
                "sentence exceeds buffer capacity of {} bytes",
                capacity
            ),
            AcquireError::Checksum(result) => write!(f, "checksum rejected: {}", result),
            AcquireError::NoFix => f.write_str("receiver reports no fix"),
            AcquireError::Starvation => f.write_str("no terminated sentence received"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AcquireError {}

/// Returned when a byte is pushed into a full [`SentenceBuffer`](crate::SentenceBuffer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOverflow {
    pub capacity: usize,
}

impl fmt::Display for BufferOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not enough memory, capacity is {} bytes", self.capacity)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferOverflow {}

impl From<BufferOverflow> for AcquireError {
    fn from(e: BufferOverflow) -> Self {
        AcquireError::Overflow {
            capacity: e.capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    CapacityTooSmall { min: usize, got: usize },
    ZeroLimit(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CapacityTooSmall { min, got } => write!(
                f,
                "Sentence buffer capacity too small, expect at least {}, got {}",
                min, got
            ),
            ConfigError::ZeroLimit(field) => write!(f, "Limit {} must be non-zero", field),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_converts_into_acquire_error() {
        let err: AcquireError = BufferOverflow { capacity: 100 }.into();
        assert_eq!(err, AcquireError::Overflow { capacity: 100 });
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_mentions_cause() {
        let err = AcquireError::Checksum(ChecksumResult::Mismatch);
        assert!(err.to_string().contains("mismatch"));

        let err = ConfigError::ZeroLimit("read_loop_limit");
        assert!(err.to_string().contains("read_loop_limit"));
    }
}
