#[macro_use]
extern crate afl;
extern crate nmea_fix;

use nmea_fix::{
    AcquireError, AcquirerConfig, AcquisitionOutcome, ChecksumResult, Delay, ReplayTransport,
    SentenceAcquirer,
};

struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

fn acquire<const N: usize>(data: &[u8]) {
    let mut acquirer: SentenceAcquirer<_, _, N> =
        SentenceAcquirer::new(ReplayTransport::new(data), NoDelay, AcquirerConfig::default())
            .unwrap();

    while !acquirer.transport_mut().is_exhausted() {
        let outcome = acquirer.acquire();
        assert!(acquirer.framed_len() < N);

        match outcome {
            AcquisitionOutcome::Sentence(sentence, fix) => {
                assert!(fix.has_fix());
                assert_eq!(acquirer.checksum(), Some(ChecksumResult::Match));
                assert_eq!(sentence.as_bytes()[0], b'$');
                assert!(sentence.len() < N);
            }
            AcquisitionOutcome::Empty => {
                // Every failure leaves a reason behind
                let err = acquirer.last_error().unwrap();
                if let AcquireError::Checksum(result) = err {
                    assert_eq!(acquirer.checksum(), Some(result));
                }
            }
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        if let Some((selector, rest)) = data.split_first() {
            match selector % 3 {
                0 => acquire::<8>(rest),
                1 => acquire::<32>(rest),
                _ => acquire::<100>(rest),
            }
        }
    });
}
