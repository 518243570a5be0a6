//! Seams to the hardware the acquirer runs against: the serial byte stream
//! and the delay primitive.

/// A non-blocking byte source, typically a UART receive FIFO.
pub trait Transport {
    /// Returns whether at least one byte can be read right now
    fn bytes_available(&mut self) -> bool;

    /// Reads the next byte. `None` means the receive buffer was empty, the
    /// call must not wait for data to arrive.
    fn read_byte(&mut self) -> Option<u8>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn bytes_available(&mut self) -> bool {
        (**self).bytes_available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }
}

/// Blocking delay source
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Sleeps the calling thread
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Serves bytes out of a slice, e.g. a recorded receiver log.
///
/// Every byte is available immediately; once the slice is consumed the
/// transport stays silent.
#[derive(Debug, Clone)]
pub struct ReplayTransport<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReplayTransport<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }
}

impl Transport for ReplayTransport<'_> {
    fn bytes_available(&mut self) -> bool {
        !self.is_exhausted()
    }

    fn read_byte(&mut self) -> Option<u8> {
        let b = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }
}
