use std::io::Read;

use log::warn;
use serialport::SerialPort;

pub mod cli;
pub use nmea_fix;
use nmea_fix::{PowerLine, Transport};

/// Modem control line used to switch the receiver's supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLine {
    Dtr,
    Rts,
}

/// Receive side of a serial port, polled one byte at a time
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    pub fn new(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl Transport for SerialTransport {
    fn bytes_available(&mut self) -> bool {
        match self.port.bytes_to_read() {
            Ok(n) => n > 0,
            Err(e) => {
                warn!("Failed to query serial port: {e}");
                false
            },
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        // Never wait on an empty FIFO
        if !self.bytes_available() {
            return None;
        }
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => None,
            Err(e) => {
                warn!("Serial read failed: {e}");
                None
            },
        }
    }
}

/// Drives a modem control line of a (cloned) serial port handle
pub struct SerialPowerLine {
    port: Box<dyn SerialPort>,
    line: ControlLine,
}

impl SerialPowerLine {
    pub fn new(port: Box<dyn SerialPort>, line: ControlLine) -> Self {
        Self { port, line }
    }

    fn write(&mut self, level: bool) {
        let r = match self.line {
            ControlLine::Dtr => self.port.write_data_terminal_ready(level),
            ControlLine::Rts => self.port.write_request_to_send(level),
        };
        if let Err(e) = r {
            warn!("Failed to drive {:?}: {e}", self.line);
        }
    }
}

impl PowerLine for SerialPowerLine {
    fn set_high(&mut self) {
        self.write(true);
    }

    fn set_low(&mut self) {
        self.write(false);
    }
}

/// Power line picked at runtime; `Unswitched` for receivers on a fixed supply
pub enum AnyPowerLine {
    Serial(SerialPowerLine),
    Unswitched,
}

impl PowerLine for AnyPowerLine {
    fn set_high(&mut self) {
        if let AnyPowerLine::Serial(l) = self {
            l.set_high();
        }
    }

    fn set_low(&mut self) {
        if let AnyPowerLine::Serial(l) = self {
            l.set_low();
        }
    }
}
