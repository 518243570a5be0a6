use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use nmea_fix::*;

const VALID_GGA: &[u8] =
    b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";

struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

/// Acquires every sentence in `data`, returns the number accepted
fn acquire_all(data: &[u8]) -> usize {
    let mut acquirer: SentenceAcquirer<_, _> =
        SentenceAcquirer::new(ReplayTransport::new(data), NoDelay, AcquirerConfig::default())
            .unwrap();
    let mut count = 0;
    while !acquirer.transport_mut().is_exhausted() {
        if let AcquisitionOutcome::Sentence(..) = acquirer.acquire() {
            count += 1;
        }
    }
    count
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("validate_checksum", |b| {
        b.iter(|| validate_checksum(black_box(VALID_GGA)))
    });

    c.bench_function("parse_fix", |b| b.iter(|| parse_fix(black_box(VALID_GGA))));

    for noise in &[0usize, 32, 150] {
        let mut data = Vec::new();
        for _ in 0..100 {
            data.extend(std::iter::repeat(b'x').take(*noise));
            data.extend_from_slice(VALID_GGA);
        }
        c.bench_function(&format!("acquire_100_sentences_noise_{}", noise), |b| {
            b.iter(|| {
                assert_eq!(acquire_all(black_box(&data)), 100);
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
