use rxchan_frame::{FrameConfig, FrameDecoder};

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, output_error, CliResult, SUCCESS};
use crate::output::{print_bits, OutputFormat};

/// Pipeline stage entry point: one line in, one bit-string out.
///
/// Nothing reaches stdout unless the frame verified.
pub fn run(args: DecodeArgs, format: Option<OutputFormat>, config: FrameConfig) -> CliResult<i32> {
    let line = args.input.read_line(&config)?;
    let bits = FrameDecoder::with_config(config)
        .decode(&line)
        .map_err(|err| frame_error("decode failed", err))?;

    print_bits(
        &mut std::io::stdout().lock(),
        &bits,
        format.unwrap_or(OutputFormat::Raw),
    )
    .map_err(output_error)?;
    Ok(SUCCESS)
}
