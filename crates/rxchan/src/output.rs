use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct BitsOutput<'a> {
    byte_count: usize,
    bits: &'a str,
}

/// Write the verified frame for the source-decoding stage.
pub fn print_bits(out: &mut impl Write, bits: &str, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = BitsOutput {
                byte_count: bits.len() / 8,
                bits,
            };
            write_json(out, &value)?;
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            writeln!(out, "bytes={} bits={bits}", bits.len() / 8)?;
        }
        OutputFormat::Raw => writeln!(out, "{bits}")?,
    }
    out.flush()
}

/// Verification report for one frame, verified or not.
#[derive(Debug, Serialize)]
pub struct FrameReport {
    pub byte_count: usize,
    pub payload: String,
    pub trailer: String,
    pub computed: String,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<String>,
}

pub fn print_report(out: &mut impl Write, report: &FrameReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report)?,
        OutputFormat::Table => {
            let mut header = vec!["BYTES", "PAYLOAD", "TRAILER", "COMPUTED", "VERDICT"];
            let mut row = vec![
                report.byte_count.to_string(),
                preview(&report.payload),
                report.trailer.clone(),
                report.computed.clone(),
                verdict(report.verified).to_string(),
            ];
            if let Some(bits) = &report.bits {
                header.push("BITS");
                row.push(bits.clone());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(header)
                .add_row(row);
            writeln!(out, "{table}")?;
        }
        OutputFormat::Pretty => {
            write!(
                out,
                "bytes={} payload={} trailer={} computed={} verdict={}",
                report.byte_count,
                preview(&report.payload),
                report.trailer,
                report.computed,
                verdict(report.verified)
            )?;
            match &report.bits {
                Some(bits) => writeln!(out, " bits={bits}")?,
                None => writeln!(out)?,
            }
        }
        OutputFormat::Raw => {
            writeln!(out, "{}", verdict(report.verified))?;
            if let Some(bits) = &report.bits {
                writeln!(out, "{bits}")?;
            }
        }
    }
    out.flush()
}

#[derive(Debug, Serialize)]
pub struct ChecksumReport {
    pub byte_count: usize,
    pub crc8: String,
    pub candidate_trailers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sealed: Option<String>,
}

pub fn print_checksum(out: &mut impl Write, report: &ChecksumReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report)?,
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["BYTES", "CRC-8", "TRAILERS", "SEALED"])
                .add_row(vec![
                    report.byte_count.to_string(),
                    report.crc8.clone(),
                    trailer_list(&report.candidate_trailers),
                    report.sealed.clone().unwrap_or_else(|| "none".to_string()),
                ]);
            writeln!(out, "{table}")?;
        }
        OutputFormat::Pretty => {
            writeln!(
                out,
                "bytes={} crc8={} trailers={}",
                report.byte_count,
                report.crc8,
                trailer_list(&report.candidate_trailers)
            )?;
        }
        OutputFormat::Raw => writeln!(out, "{}", report.crc8)?,
    }
    out.flush()
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn verdict(verified: bool) -> &'static str {
    if verified {
        "ok"
    } else {
        "crc-mismatch"
    }
}

fn trailer_list(trailers: &[String]) -> String {
    if trailers.is_empty() {
        "none".to_string()
    } else {
        trailers.join(", ")
    }
}

fn preview(payload_hex: &str) -> String {
    const MAX_PREVIEW: usize = 32;
    if payload_hex.is_empty() {
        "<empty>".to_string()
    } else if payload_hex.len() > MAX_PREVIEW {
        format!("{}… ({} bytes)", &payload_hex[..MAX_PREVIEW], payload_hex.len() / 2)
    } else {
        payload_hex.to_string()
    }
}
