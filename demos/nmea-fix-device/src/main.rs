use anyhow::{Context, Result};
use log::{info, warn};

use nmea_fix::{
    AcquirerConfig, AcquisitionOutcome, Delay, PowerLine, Receiver, ReplayTransport, StdDelay,
    Transport,
};
use nmea_fix_device::{cli, AnyPowerLine, SerialPowerLine, SerialTransport};

/// Replayed logs have no real timing, waits are skipped
struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&mut self, _ms: u32) {}
}

fn run<T: Transport, D: Delay, P: PowerLine>(
    receiver: &mut Receiver<T, D, P>,
    count: Option<u32>,
    power_cycle: bool,
    mut keep_going: impl FnMut(&mut Receiver<T, D, P>) -> bool,
) {
    let mut attempt = 0;
    while count.map_or(true, |n| attempt < n) && keep_going(&mut *receiver) {
        attempt += 1;
        if power_cycle {
            receiver.turn_on();
        }

        match receiver.acquire() {
            AcquisitionOutcome::Sentence(sentence, fix) => {
                println!("[{fix}] {}", sentence.to_string().trim_end());
            },
            AcquisitionOutcome::Empty => {
                let reason = receiver
                    .last_error()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                warn!(
                    "Attempt {attempt}: no sentence ({reason}), checksum {:?}, heard receiver: {}",
                    receiver.checksum(),
                    receiver.sentence_observed()
                );
            },
        }

        if power_cycle {
            receiver.turn_off();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let args = cli::CommandBuilder::new()
        .build()
        .version(clap::crate_version!().to_string())
        .get_matches();

    let config: AcquirerConfig = cli::Command::acquirer_config(&args);
    let count = cli::Command::count(&args);
    let power_cycle = cli::Command::power_cycle(&args);

    if let Some(path) = cli::Command::replay_file(&args) {
        let data = std::fs::read(&path)
            .with_context(|| format!("Failed to read log file {}", path.display()))?;
        info!("Replaying {} bytes from {}", data.len(), path.display());

        let mut receiver: Receiver<_, _, _> =
            Receiver::new(ReplayTransport::new(&data), NoDelay, (), config)?;
        run(&mut receiver, count, power_cycle, |r| {
            !r.acquirer_mut().transport_mut().is_exhausted()
        });
        return Ok(());
    }

    let port = cli::Command::serialport(&args)?;
    let power_line = match cli::Command::power_line(&args) {
        Some(line) => {
            let handle = port
                .try_clone()
                .context("Failed to clone serial port for power control")?;
            AnyPowerLine::Serial(SerialPowerLine::new(handle, line))
        },
        None => AnyPowerLine::Unswitched,
    };

    info!("Serial port opened, waiting for GGA sentences ...");
    let mut receiver: Receiver<_, _, _> =
        Receiver::new(SerialTransport::new(port), StdDelay, power_line, config)?;
    run(&mut receiver, count, power_cycle, |_| true);

    Ok(())
}
