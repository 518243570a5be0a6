use log::{debug, trace, warn};

use crate::{
    config::AcquirerConfig,
    constants::{
        DEFAULT_SENTENCE_CAPACITY, MIN_SENTENCE_CAPACITY, NMEA_END_CHAR_2, NMEA_SYNC_CHAR,
    },
    error::{AcquireError, BufferOverflow, ConfigError},
    parser::{parse_fix, validate_checksum, ChecksumResult, FixQuality, Sentence, SentenceBuffer},
    transport::{Delay, Transport},
};

/// Result of one [`SentenceAcquirer::acquire`] call.
///
/// `Empty` carries no partial data; callers should simply try again later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionOutcome<const N: usize = DEFAULT_SENTENCE_CAPACITY> {
    /// Checksum matched and the receiver reports a fix
    Sentence(Sentence<N>, FixQuality),
    Empty,
}

impl<const N: usize> AcquisitionOutcome<N> {
    pub fn is_empty(&self) -> bool {
        matches!(self, AcquisitionOutcome::Empty)
    }

    pub fn sentence(&self) -> Option<&Sentence<N>> {
        match self {
            AcquisitionOutcome::Sentence(s, _) => Some(s),
            AcquisitionOutcome::Empty => None,
        }
    }

    pub fn fix(&self) -> FixQuality {
        match self {
            AcquisitionOutcome::Sentence(_, fix) => *fix,
            AcquisitionOutcome::Empty => FixQuality::NoFix,
        }
    }
}

impl<const N: usize> From<Result<(Sentence<N>, FixQuality), AcquireError>> for AcquisitionOutcome<N> {
    fn from(r: Result<(Sentence<N>, FixQuality), AcquireError>) -> Self {
        match r {
            Ok((sentence, fix)) => AcquisitionOutcome::Sentence(sentence, fix),
            Err(_) => AcquisitionOutcome::Empty,
        }
    }
}

/// Pulls one GGA sentence at a time out of a serial byte stream.
///
/// Each call to [`acquire`](Self::acquire) waits for data, searches for the
/// `$` start marker, frames bytes into a buffer of capacity `N` until `<LF>`,
/// then checks the checksum trailer and the fix-quality field. Every wait is
/// bounded by [`AcquirerConfig`]; there is no other way to cancel a call.
///
/// The last checksum result, fix quality and whether the last call observed
/// the receiver are kept between calls for polling. An acquirer must only be
/// driven from one place at a time.
pub struct SentenceAcquirer<T, D, const N: usize = DEFAULT_SENTENCE_CAPACITY> {
    transport: T,
    delay: D,
    config: AcquirerConfig,
    buffer: SentenceBuffer<N>,

    checksum: Option<ChecksumResult>,
    fix: FixQuality,
    observed: bool,
    last_error: Option<AcquireError>,
}

impl<T: Transport, D: Delay, const N: usize> SentenceAcquirer<T, D, N> {
    pub fn new(transport: T, delay: D, config: AcquirerConfig) -> Result<Self, ConfigError> {
        if N < MIN_SENTENCE_CAPACITY {
            return Err(ConfigError::CapacityTooSmall {
                min: MIN_SENTENCE_CAPACITY,
                got: N,
            });
        }
        config.validate()?;

        Ok(Self {
            transport,
            delay,
            config,
            buffer: SentenceBuffer::new(),
            checksum: None,
            fix: FixQuality::NoFix,
            observed: false,
            last_error: None,
        })
    }

    /// Reads one sentence from the transport.
    ///
    /// Returns [`AcquisitionOutcome::Empty`] for every failure; the reason is
    /// available from [`last_error`](Self::last_error) afterwards.
    pub fn acquire(&mut self) -> AcquisitionOutcome<N> {
        let result = self.try_acquire();
        match &result {
            Ok((sentence, fix)) => {
                debug!("Accepted sentence ({}, {} bytes)", fix, sentence.len());
                self.last_error = None;
            },
            Err(e) => {
                debug!("Acquisition failed: {}", e);
                self.last_error = Some(*e);
            },
        }
        result.into()
    }

    fn try_acquire(&mut self) -> Result<(Sentence<N>, FixQuality), AcquireError> {
        self.buffer.clear();

        let wait_ms = self.config.wait_interval_ms();
        let mut waits = 0;
        while !self.transport.bytes_available() && waits < self.config.initial_wait_retries {
            self.delay.delay_ms(wait_ms);
            waits += 1;
        }
        // Counts as observed once waiting is over, even if nothing arrived
        self.observed = true;
        trace!("Initial wait done after {} polls", waits);

        for _ in 0..self.config.read_loop_limit {
            if !self.transport.bytes_available() {
                self.delay.delay_ms(self.config.idle_poll_delay_ms);
                continue;
            }

            let mut byte = self.transport.read_byte();
            if self.buffer.is_empty() {
                byte = self.seek_start(byte);
                if byte != Some(NMEA_SYNC_CHAR) {
                    warn!(
                        "No start marker within {} bytes",
                        self.config.start_search_limit
                    );
                    while waits < self.config.drain_target() {
                        self.delay.delay_ms(wait_ms);
                        waits += 1;
                    }
                    self.clear_status();
                    return Err(AcquireError::Framing);
                }
                trace!("Start marker found");
            }

            let Some(byte) = byte else {
                // Transport claimed data but had none
                self.delay.delay_ms(self.config.idle_poll_delay_ms);
                continue;
            };

            if let Err(e) = self.buffer.push(byte) {
                return Err(self.overflow(e));
            }

            if byte == NMEA_END_CHAR_2 {
                return self.finish_sentence();
            }

            if self.buffer.is_full() {
                return Err(self.overflow(BufferOverflow { capacity: N }));
            }
        }

        debug!(
            "Read loop exhausted with {} bytes framed",
            self.buffer.len()
        );
        self.clear_status();
        Err(AcquireError::Starvation)
    }

    /// Reads until `$` or until the search ceiling runs out, starting from
    /// an already consumed byte
    fn seek_start(&mut self, mut byte: Option<u8>) -> Option<u8> {
        let mut reads = 0;
        while byte != Some(NMEA_SYNC_CHAR) && reads < self.config.start_search_limit {
            byte = self.transport.read_byte();
            reads += 1;
        }
        byte
    }

    fn finish_sentence(&mut self) -> Result<(Sentence<N>, FixQuality), AcquireError> {
        let framed = self.buffer.as_bytes();

        let checksum = validate_checksum(framed);
        self.checksum = Some(checksum);
        debug!("Framed {} bytes, checksum {}", framed.len(), checksum);
        if !checksum.is_match() {
            self.fix = FixQuality::NoFix;
            return Err(AcquireError::Checksum(checksum));
        }

        let fix = parse_fix(framed);
        self.fix = fix;
        if !fix.has_fix() {
            return Err(AcquireError::NoFix);
        }

        Ok((Sentence::from_framed(&self.buffer), fix))
    }

    fn overflow(&mut self, e: BufferOverflow) -> AcquireError {
        warn!("Sentence overflowed the {} byte buffer", e.capacity);
        self.clear_status();
        e.into()
    }

    fn clear_status(&mut self) {
        self.fix = FixQuality::NoFix;
        self.checksum = None;
        self.observed = false;
    }

    /// Checksum result of the last framed sentence, `None` after a failure
    /// that never got as far as a terminator
    pub fn checksum(&self) -> Option<ChecksumResult> {
        self.checksum
    }

    pub fn fix(&self) -> FixQuality {
        self.fix
    }

    /// Whether the last call got past the initial wait without a framing,
    /// overflow or starvation failure
    pub fn sentence_observed(&self) -> bool {
        self.observed
    }

    pub fn last_error(&self) -> Option<AcquireError> {
        self.last_error
    }

    /// Number of bytes framed by the last call
    pub fn framed_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn config(&self) -> &AcquirerConfig {
        &self.config
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }
}
