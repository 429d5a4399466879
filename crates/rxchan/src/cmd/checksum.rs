use rxchan_frame::{
    candidate_trailers, crc8, trim_line_terminator, FrameConfig, FrameDecoder,
};

use crate::cmd::{hex_or_input, ChecksumArgs};
use crate::exit::{frame_error, output_error, CliResult, SUCCESS};
use crate::output::{print_checksum, ChecksumReport, OutputFormat};

/// Treats every input byte as payload. `sealed` is the payload with the first
/// trailer that would pass verification appended, when one exists.
pub fn run(args: ChecksumArgs, format: Option<OutputFormat>, config: FrameConfig) -> CliResult<i32> {
    let text = hex_or_input(args.hex, &args.input, &config)?;
    let payload = parse_payload(&text, config)?;

    let report = checksum_report(&payload);
    print_checksum(
        &mut std::io::stdout().lock(),
        &report,
        format.unwrap_or(OutputFormat::Raw),
    )
    .map_err(output_error)?;
    Ok(SUCCESS)
}

/// Unlike a received frame, a payload may be empty: sealing it yields a
/// single-byte frame.
fn parse_payload(text: &str, config: FrameConfig) -> CliResult<Vec<u8>> {
    if trim_line_terminator(text).is_empty() {
        return Ok(Vec::new());
    }
    FrameDecoder::with_config(config)
        .parse(text)
        .map(|frame| frame.as_bytes().to_vec())
        .map_err(|err| frame_error("checksum failed", err))
}

fn checksum_report(payload: &[u8]) -> ChecksumReport {
    let trailers = candidate_trailers(payload);
    let sealed = trailers.first().map(|&trailer| {
        let mut frame = payload.to_vec();
        frame.push(trailer);
        hex::encode(&frame)
    });

    ChecksumReport {
        byte_count: payload.len(),
        crc8: format!("{:02x}", crc8(payload)),
        candidate_trailers: trailers.iter().map(|t| format!("{t:02x}")).collect(),
        sealed,
    }
}
