use crate::{
    acquirer::{AcquisitionOutcome, SentenceAcquirer},
    config::AcquirerConfig,
    constants::DEFAULT_SENTENCE_CAPACITY,
    error::{AcquireError, ConfigError},
    parser::{ChecksumResult, FixQuality},
    power::{PowerControl, PowerLine},
    transport::{Delay, Transport},
};

/// A GPS receiver on a serial link with a switchable supply.
///
/// Powers the receiver on when constructed.
pub struct Receiver<T, D, P: PowerLine, const N: usize = DEFAULT_SENTENCE_CAPACITY> {
    acquirer: SentenceAcquirer<T, D, N>,
    power: PowerControl<P>,
}

impl<T: Transport, D: Delay, P: PowerLine, const N: usize> Receiver<T, D, P, N> {
    pub fn new(
        transport: T,
        delay: D,
        power_line: P,
        config: AcquirerConfig,
    ) -> Result<Self, ConfigError> {
        let acquirer = SentenceAcquirer::new(transport, delay, config)?;
        let mut power = PowerControl::new(power_line);
        power.turn_on();
        Ok(Self { acquirer, power })
    }

    pub fn turn_on(&mut self) {
        self.power.turn_on();
    }

    pub fn turn_off(&mut self) {
        self.power.turn_off();
    }

    pub fn acquire(&mut self) -> AcquisitionOutcome<N> {
        self.acquirer.acquire()
    }

    pub fn checksum(&self) -> Option<ChecksumResult> {
        self.acquirer.checksum()
    }

    pub fn fix(&self) -> FixQuality {
        self.acquirer.fix()
    }

    pub fn sentence_observed(&self) -> bool {
        self.acquirer.sentence_observed()
    }

    pub fn last_error(&self) -> Option<AcquireError> {
        self.acquirer.last_error()
    }

    pub fn acquirer_mut(&mut self) -> &mut SentenceAcquirer<T, D, N> {
        &mut self.acquirer
    }

    pub fn release(self) -> (SentenceAcquirer<T, D, N>, P) {
        (self.acquirer, self.power.release())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ReplayTransport;

    struct NoDelay;

    impl Delay for NoDelay {
        fn delay_ms(&mut self, _ms: u32) {}
    }

    #[derive(Default)]
    struct Pin {
        transitions: u32,
        high: bool,
    }

    impl PowerLine for Pin {
        fn set_high(&mut self) {
            self.transitions += 1;
            self.high = true;
        }

        fn set_low(&mut self) {
            self.transitions += 1;
            self.high = false;
        }
    }

    #[test]
    fn powered_on_at_construction() {
        let rx: Receiver<_, _, _> = Receiver::new(
            ReplayTransport::new(b""),
            NoDelay,
            Pin::default(),
            AcquirerConfig::default(),
        )
        .unwrap();
        let (_, pin) = rx.release();
        assert_eq!(pin.transitions, 1);
        assert!(!pin.high);
    }

    #[test]
    fn power_does_not_touch_status() {
        let data = b"$GPGGA,123519,4807.038,N,01131.000,E,2,08,0.9,545.4,M,46.9,M,,*44\r\n";
        let mut rx: Receiver<_, _, _> = Receiver::new(
            ReplayTransport::new(data),
            NoDelay,
            Pin::default(),
            AcquirerConfig::default(),
        )
        .unwrap();
        assert_eq!(rx.acquire().fix(), FixQuality::DifferentialFix);
        rx.turn_off();
        rx.turn_on();
        assert_eq!(rx.fix(), FixQuality::DifferentialFix);
        assert_eq!(rx.checksum(), Some(ChecksumResult::Match));
        assert!(rx.sentence_observed());
        assert_eq!(rx.last_error(), None);
    }
}
