mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use rxchan_frame::{FrameConfig, DEFAULT_MAX_FRAME_BYTES};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "rxchan",
    version,
    about = "RX channel decoding: verify a CRC-8 frame and emit its bits"
)]
struct Cli {
    /// Output format. Defaults to raw for decode and checksum.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "RXCHAN_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Reject frames longer than N bytes (payload + trailer).
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_FRAME_BYTES,
        env = "RXCHAN_MAX_FRAME_BYTES",
        value_parser = parse_max_frame_bytes,
        global = true
    )]
    max_frame_bytes: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

fn parse_max_frame_bytes(input: &str) -> Result<usize, String> {
    let value: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("invalid byte count: {input}"))?;
    if value == 0 {
        return Err("max frame bytes must be greater than zero".to_string());
    }
    Ok(value)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let config = FrameConfig {
        max_frame_bytes: cli.max_frame_bytes,
    };
    let result = cmd::run(cli.command.unwrap_or_default(), cli.format, config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
