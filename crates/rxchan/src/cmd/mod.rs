use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use rxchan_frame::{read_frame_line, FrameConfig};

use crate::exit::{frame_error, io_error, CliResult};
use crate::output::OutputFormat;

pub mod checksum;
pub mod decode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify one frame and print it as a bit-string (default).
    Decode(DecodeArgs),
    /// Verify one frame and report payload, trailer and checksum.
    Inspect(InspectArgs),
    /// Compute the CRC-8 of hex bytes and the trailers that would seal them.
    Checksum(ChecksumArgs),
    /// Show version information.
    Version(VersionArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Decode(DecodeArgs::default())
    }
}

pub fn run(command: Command, format: Option<OutputFormat>, config: FrameConfig) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format, config),
        Command::Inspect(args) => inspect::run(args, format, config),
        Command::Checksum(args) => checksum::run(args, format, config),
        Command::Version(args) => version::run(args, config),
    }
}

/// Where the frame line comes from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Read the frame line from FILE instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Read one frame line from the selected source.
    pub fn read_line(&self, config: &FrameConfig) -> CliResult<String> {
        match &self.input {
            Some(path) => read_file_line(path, config),
            None => read_frame_line(std::io::stdin().lock(), config)
                .map_err(|err| frame_error("reading stdin failed", err)),
        }
    }
}

fn read_file_line(path: &Path, config: &FrameConfig) -> CliResult<String> {
    let context = format!("reading {} failed", path.display());
    let file = File::open(path).map_err(|err| io_error(&context, err))?;
    read_frame_line(BufReader::new(file), config).map_err(|err| frame_error(&context, err))
}

#[derive(Args, Debug, Default)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Frame as hex text. Read from the input when omitted.
    pub hex: Option<String>,
    #[command(flatten)]
    pub input: InputArgs,
    /// Include the rendered bit-string in the report when verified.
    #[arg(long)]
    pub bits: bool,
}

#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Payload as hex text, possibly empty. Read from the input when omitted.
    pub hex: Option<String>,
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show target and CRC parameters.
    #[arg(long)]
    pub extended: bool,
}

/// Take the frame text from a positional argument, falling back to the input.
fn hex_or_input(hex: Option<String>, input: &InputArgs, config: &FrameConfig) -> CliResult<String> {
    match hex {
        Some(hex) => Ok(hex),
        None => input.read_line(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit::{INPUT_UNAVAILABLE, LIMIT_EXCEEDED};

    fn temp_file(tag: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "rxchan-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        std::fs::write(&path, contents).expect("temp file should be writable");
        path
    }

    #[test]
    fn reads_line_from_file() {
        let path = temp_file("read", b"411d\n");
        let args = InputArgs {
            input: Some(path.clone()),
        };
        let line = args.read_line(&FrameConfig::default()).unwrap();
        assert_eq!(line, "411d\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_input_unavailable() {
        let args = InputArgs {
            input: Some(PathBuf::from("/nonexistent/rxchan/frame.txt")),
        };
        let err = args.read_line(&FrameConfig::default()).unwrap_err();
        assert_eq!(err.code, INPUT_UNAVAILABLE);
    }

    #[test]
    fn empty_file_is_input_unavailable() {
        let path = temp_file("empty", b"");
        let args = InputArgs {
            input: Some(path.clone()),
        };
        let err = args.read_line(&FrameConfig::default()).unwrap_err();
        assert_eq!(err.code, INPUT_UNAVAILABLE);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn oversized_file_line_hits_limit() {
        let path = temp_file("big", b"000000000000\n");
        let args = InputArgs {
            input: Some(path.clone()),
        };
        let err = args
            .read_line(&FrameConfig { max_frame_bytes: 2 })
            .unwrap_err();
        assert_eq!(err.code, LIMIT_EXCEEDED);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn positional_hex_wins_over_input() {
        let input = InputArgs {
            input: Some(PathBuf::from("/nonexistent/rxchan/frame.txt")),
        };
        let text = hex_or_input(Some("00".to_string()), &input, &FrameConfig::default()).unwrap();
        assert_eq!(text, "00");
    }
}
