use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgMatches};
use nmea_fix::AcquirerConfig;
use serialport::{FlowControl as SerialFlowControl, SerialPort};

use crate::ControlLine;

pub struct CommandBuilder {
    command: clap::Command,
}

pub struct Command;

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuilder {
    pub fn new() -> Self {
        let command = clap::Command::new("nmea-fix-device")
            .about("Polls an NMEA GPS receiver for GGA sentences with a position fix")
            .arg_required_else_help(true)
            .arg(
                Arg::new("port")
                    .value_name("port")
                    .short('p')
                    .long("port")
                    .required(false)
                    .help("Serial port the receiver is connected to, not needed for replay"),
            )
            .arg(
                Arg::new("baud")
                    .value_name("baud")
                    .short('s')
                    .long("baud")
                    .required(false)
                    .default_value("9600")
                    .value_parser(value_parser!(u32))
                    .help("Baud rate for the selected port"),
            )
            .arg(
                Arg::new("rate")
                    .long("rate")
                    .required(false)
                    .default_value("1")
                    .value_parser(value_parser!(u8))
                    .help("Seconds between two sentences sent by the receiver"),
            )
            .arg(
                Arg::new("count")
                    .value_name("count")
                    .short('n')
                    .long("count")
                    .required(false)
                    .value_parser(value_parser!(u32))
                    .help("Number of acquisitions to run, runs forever if omitted"),
            )
            .arg(
                Arg::new("power-line")
                    .long("power-line")
                    .help("Modem control line switching the receiver supply (active low)")
                    .required(false)
                    .value_parser(["dtr", "rts", "none"])
                    .default_value("none"),
            )
            .arg(
                Arg::new("power-cycle")
                    .long("power-cycle")
                    .action(clap::ArgAction::SetTrue)
                    .help("Power the receiver off between acquisitions"),
            )
            .subcommand(
                clap::Command::new("replay")
                    .about("Run acquisitions against a recorded receiver log instead of a serial port")
                    .arg(
                        Arg::new("file")
                            .required(true)
                            .value_parser(value_parser!(PathBuf))
                            .help("File holding raw receiver output"),
                    ),
            );
        Self { command }
    }

    pub fn build(&self) -> clap::Command {
        self.command.clone()
    }
}

impl Command {
    pub fn acquirer_config(args: &ArgMatches) -> AcquirerConfig {
        let rate = args.get_one::<u8>("rate").cloned().unwrap_or(1);
        AcquirerConfig::default().with_update_rate(rate)
    }

    pub fn count(args: &ArgMatches) -> Option<u32> {
        args.get_one::<u32>("count").cloned()
    }

    pub fn power_cycle(args: &ArgMatches) -> bool {
        args.get_flag("power-cycle")
    }

    pub fn power_line(args: &ArgMatches) -> Option<ControlLine> {
        match args.get_one::<String>("power-line").map(|s| s.as_str()) {
            Some("dtr") => Some(ControlLine::Dtr),
            Some("rts") => Some(ControlLine::Rts),
            _ => None,
        }
    }

    pub fn replay_file(args: &ArgMatches) -> Option<PathBuf> {
        match args.subcommand() {
            Some(("replay", sub)) => sub.get_one::<PathBuf>("file").cloned(),
            _ => None,
        }
    }

    pub fn serialport(args: &ArgMatches) -> Result<Box<dyn SerialPort>> {
        let Some(port) = args.get_one::<String>("port") else {
            bail!("No serial port given");
        };
        let baud = args.get_one::<u32>("baud").cloned().unwrap_or(9600);

        let builder = serialport::new(port, baud)
            .stop_bits(serialport::StopBits::One)
            .data_bits(serialport::DataBits::Eight)
            .timeout(Duration::from_millis(1))
            .parity(serialport::Parity::None)
            .flow_control(SerialFlowControl::None);

        log::debug!("{:?}", &builder);
        builder
            .open()
            .with_context(|| format!("Failed to open port: {}", port))
    }
}
