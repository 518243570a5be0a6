#![allow(dead_code)]

use std::collections::VecDeque;

use nmea_fix::{sentence_checksum, Delay, Transport};

/// Body of the textbook GGA example, with the fix-quality field left as `{}`
pub const GGA_BODY_TEMPLATE: &str = "GPGGA,123519,4807.038,N,01131.000,E,{},08,0.9,545.4,M,46.9,M,,";

pub const VALID_GGA: &[u8] =
    b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";

/// Wraps `body` into `$<body>*HH\r\n` with a correct checksum
pub fn sentence_from_body(body: &str) -> Vec<u8> {
    format!("${}*{:02X}\r\n", body, sentence_checksum(body.as_bytes())).into_bytes()
}

/// A GGA sentence with the given fix-quality character, its last field
/// padded with `pad` zeros
pub fn gga(fix: char, pad: usize) -> Vec<u8> {
    let mut body = GGA_BODY_TEMPLATE.replace("{}", &fix.to_string());
    body.push_str(&"0".repeat(pad));
    sentence_from_body(&body)
}

/// Transport replaying a script where `None` stands for one poll that finds
/// the receive buffer empty
#[derive(Default)]
pub struct ScriptedTransport {
    script: VecDeque<Option<u8>>,
    pub polls: usize,
    pub reads: usize,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(mut self, data: &[u8]) -> Self {
        self.script.extend(data.iter().map(|b| Some(*b)));
        self
    }

    pub fn gap(mut self, polls: usize) -> Self {
        self.script.extend(std::iter::repeat(None).take(polls));
        self
    }

    /// Every byte of `data` preceded by `polls` empty polls
    pub fn trickle(mut self, data: &[u8], polls: usize) -> Self {
        for b in data {
            self = self.gap(polls);
            self.script.push_back(Some(*b));
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Transport for ScriptedTransport {
    fn bytes_available(&mut self) -> bool {
        self.polls += 1;
        match self.script.front() {
            Some(Some(_)) => true,
            Some(None) => {
                self.script.pop_front();
                false
            },
            None => false,
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.reads += 1;
        self.script.pop_front().flatten()
    }
}

/// Fake clock: records every requested delay instead of sleeping
#[derive(Default, Debug)]
pub struct RecordingDelay {
    pub delays: Vec<u32>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.delays.iter().map(|d| u64::from(*d)).sum()
    }

    pub fn count_of(&self, ms: u32) -> usize {
        self.delays.iter().filter(|d| **d == ms).count()
    }
}

impl Delay for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}
