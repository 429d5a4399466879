use rxchan_frame::{FrameConfig, FrameDecoder};

use crate::cmd::{hex_or_input, InspectArgs};
use crate::exit::{frame_error, output_error, CliResult, INTEGRITY_FAILED, SUCCESS};
use crate::output::{print_report, FrameReport, OutputFormat};

pub fn run(args: InspectArgs, format: Option<OutputFormat>, config: FrameConfig) -> CliResult<i32> {
    let text = hex_or_input(args.hex, &args.input, &config)?;
    let frame = FrameDecoder::with_config(config)
        .parse(&text)
        .map_err(|err| frame_error("inspect failed", err))?;

    let verified = frame.verify().is_ok();
    if !verified {
        tracing::warn!(
            trailer = frame.trailer(),
            computed = frame.checksum(),
            "frame failed CRC check"
        );
    }

    let report = FrameReport {
        byte_count: frame.len(),
        payload: hex::encode(frame.payload()),
        trailer: format!("{:02x}", frame.trailer()),
        computed: format!("{:02x}", frame.checksum()),
        verified,
        bits: (verified && args.bits).then(|| frame.to_bit_string()),
    };
    print_report(
        &mut std::io::stdout().lock(),
        &report,
        format.unwrap_or_else(OutputFormat::default_for_stdout),
    )
    .map_err(output_error)?;

    Ok(if verified { SUCCESS } else { INTEGRITY_FAILED })
}
