use std::io::{self, Write};

use rxchan_frame::{FrameConfig, POLYNOMIAL};

use crate::cmd::VersionArgs;
use crate::exit::{output_error, CliResult, SUCCESS};

pub fn run(args: VersionArgs, config: FrameConfig) -> CliResult<i32> {
    write_version(&mut io::stdout().lock(), args.extended, &config).map_err(output_error)?;
    Ok(SUCCESS)
}

fn write_version(out: &mut impl Write, extended: bool, config: &FrameConfig) -> io::Result<()> {
    if !extended {
        writeln!(out, "rxchan {}", env!("CARGO_PKG_VERSION"))?;
        return out.flush();
    }

    writeln!(out, "name: rxchan")?;
    writeln!(out, "version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        out,
        "target: {}",
        option_env!("RXCHAN_BUILD_TARGET").unwrap_or("unknown")
    )?;
    writeln!(out, "target_os: {}", std::env::consts::OS)?;
    writeln!(out, "target_arch: {}", std::env::consts::ARCH)?;
    writeln!(
        out,
        "crc: crc-8 poly=0x{POLYNOMIAL:02x} init=0x00 refin=false refout=false xorout=0x00"
    )?;
    writeln!(out, "max_frame_bytes: {}", config.max_frame_bytes)?;
    out.flush()
}
