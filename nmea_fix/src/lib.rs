//! # nmea_fix
//!
//! Acquires GGA fix sentences from an NMEA GPS receiver hanging off a
//! byte-oriented serial link, and tells whether the receiver has a position
//! lock.
//!
//! Acquiring Sentences
//! ===================
//!
//! A [`SentenceAcquirer`] is built from a [`Transport`] (the receive side of
//! the serial port), a [`Delay`] and an [`AcquirerConfig`]. Each call to
//! `acquire()` frames at most one sentence, checks its `*HH` checksum
//! trailer and its fix-quality field, and hands back either the sentence or
//! [`AcquisitionOutcome::Empty`]:
//! ```
//! use nmea_fix::{AcquirerConfig, AcquisitionOutcome, FixQuality, ReplayTransport, SentenceAcquirer, StdDelay};
//!
//! let data = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
//! let mut acquirer: SentenceAcquirer<_, _> =
//!     SentenceAcquirer::new(ReplayTransport::new(data), StdDelay, AcquirerConfig::default())?;
//!
//! match acquirer.acquire() {
//!     AcquisitionOutcome::Sentence(sentence, fix) => {
//!         assert_eq!(fix, FixQuality::StandardFix);
//!         assert!(sentence.as_str().unwrap().starts_with("$GPGGA"));
//!     }
//!     AcquisitionOutcome::Empty => {
//!         // Try again later, `acquirer.last_error()` says why
//!     }
//! }
//! # Ok::<(), nmea_fix::ConfigError>(())
//! ```
//!
//! Failures never surface as errors from `acquire()`. The last checksum
//! result, fix quality and whether the receiver was heard from stay
//! available through accessors until the next call.
//!
//! Checking Sentences
//! ==================
//!
//! The checksum and fix-quality checks are plain functions over a terminated
//! sentence and can be used on their own:
//! ```
//! use nmea_fix::{parse_fix, validate_checksum, ChecksumResult, FixQuality};
//!
//! let s = b"$GNGGA,155338.00,5129.48272,N,00002.27093,W,2,12,0.97,16.0,M,45.5,M,,0000*6D\r\n";
//! assert_eq!(validate_checksum(s), ChecksumResult::Match);
//! assert_eq!(parse_fix(s), FixQuality::DifferentialFix);
//! ```
//!
//! no_std Support
//! ==============
//!
//! Without the default `std` feature the crate is `no_std` and never
//! allocates: the sentence buffer is a fixed array whose capacity is the
//! acquirer's const generic parameter (100 bytes by default).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    acquirer::{AcquisitionOutcome, SentenceAcquirer},
    config::AcquirerConfig,
    constants::*,
    error::{AcquireError, BufferOverflow, ConfigError},
    parser::{
        parse_fix, parse_hex, sentence_checksum, validate_checksum, ChecksumResult, FixQuality,
        Sentence, SentenceBuffer,
    },
    power::{PowerControl, PowerLine},
    receiver::Receiver,
    transport::{Delay, ReplayTransport, Transport},
};

#[cfg(feature = "std")]
pub use crate::transport::StdDelay;

mod acquirer;
mod config;
mod constants;
mod error;
mod parser;
mod power;
mod receiver;
mod transport;
