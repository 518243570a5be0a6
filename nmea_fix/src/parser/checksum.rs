use core::fmt;

use crate::constants::{
    NMEA_CHECKSUM_DELIMITER, NMEA_CHECKSUM_HI_OFFSET, NMEA_CHECKSUM_LO_OFFSET,
    NMEA_CHECKSUM_TRAILER_LEN,
};

use super::until_nul;

/// Outcome of checking the `*HH` trailer of a terminated sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChecksumResult {
    Match,
    Mismatch,
    /// Sentence too short for a trailer, or no `*` where the trailer should start
    Missing,
}

impl ChecksumResult {
    pub const fn is_match(self) -> bool {
        matches!(self, ChecksumResult::Match)
    }
}

impl fmt::Display for ChecksumResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumResult::Match => f.write_str("match"),
            ChecksumResult::Mismatch => f.write_str("mismatch"),
            ChecksumResult::Missing => f.write_str("missing"),
        }
    }
}

/// Decodes one upper-case hexadecimal digit.
///
/// Anything outside `0-9` and `A-F` decodes to zero instead of failing, so a
/// corrupted trailer is compared as a different value rather than rejected.
pub const fn parse_hex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// XOR checksum calculator for NMEA sentences.
///
/// Bytes at or above `0x80` are folded sign-extended, so besides the low
/// byte the calculator tracks the parity of such bytes. An odd count never
/// folds back to zero.
#[derive(Default)]
pub(crate) struct NmeaChecksumCalc {
    acc: u8,
    high_odd: bool,
}

impl NmeaChecksumCalc {
    pub(crate) const fn new() -> Self {
        Self {
            acc: 0,
            high_odd: false,
        }
    }

    /// Starts the fold from the checksum transmitted in the trailer, a
    /// matching body folds back to zero
    pub(crate) const fn seeded(received: u8) -> Self {
        Self {
            acc: received,
            high_odd: false,
        }
    }

    pub(crate) const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    pub(crate) const fn update_byte(&mut self, byte: u8) {
        self.acc ^= byte;
        if byte >= 0x80 {
            self.high_odd = !self.high_odd;
        }
    }

    pub(crate) const fn result(self) -> u8 {
        self.acc
    }

    pub(crate) const fn is_zero(&self) -> bool {
        self.acc == 0 && !self.high_odd
    }
}

/// Checks the checksum trailer of a terminated sentence.
///
/// `sentence` starts with the `$` marker and ends with `<CR><LF>`, so the
/// delimiter is expected five bytes from the end. Every byte after the
/// marker and before the delimiter takes part in the fold. A NUL ends the
/// sentence early, which leaves the trailer out of place.
pub fn validate_checksum(sentence: &[u8]) -> ChecksumResult {
    let sentence = until_nul(sentence);
    let len = sentence.len();
    if len <= NMEA_CHECKSUM_TRAILER_LEN {
        return ChecksumResult::Missing;
    }

    let delimiter_pos = len - NMEA_CHECKSUM_TRAILER_LEN;
    if sentence[delimiter_pos] != NMEA_CHECKSUM_DELIMITER {
        return ChecksumResult::Missing;
    }

    let received = parse_hex(sentence[len - NMEA_CHECKSUM_HI_OFFSET]) * 16
        + parse_hex(sentence[len - NMEA_CHECKSUM_LO_OFFSET]);

    let mut calc = NmeaChecksumCalc::seeded(received);
    calc.update(&sentence[1..delimiter_pos]);

    if calc.is_zero() {
        ChecksumResult::Match
    } else {
        ChecksumResult::Mismatch
    }
}

/// Computes the checksum of a sentence body (the bytes between `$` and `*`).
///
/// Only the low byte of the fold is returned; a body with an odd number of
/// bytes at or above `0x80` fails [`validate_checksum`] whatever the trailer.
pub fn sentence_checksum(body: &[u8]) -> u8 {
    let mut calc = NmeaChecksumCalc::new();
    calc.update(body);
    calc.result()
}
