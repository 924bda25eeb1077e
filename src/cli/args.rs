//! Command-line argument structures.
//!
//! Argument groups are flattened into the `snmp-decode` binary's parser.

use clap::{Args, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::Oid;
use crate::cli::hints::parse_oid;

/// How the captured packet is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputEncoding {
    /// Raw packet bytes.
    #[default]
    Binary,
    /// Hex digits; whitespace, `:` and a leading `0x` are ignored.
    Hex,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `OID (hint) = TYPE: value` lines.
    #[default]
    Human,
    /// Pretty-printed JSON document.
    Json,
    /// Tab-separated `OID<TAB>value` lines.
    Raw,
}

/// Where the packet comes from and how to read it.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Packet file. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Input encoding.
    #[arg(short = 'i', long = "input", value_enum, default_value = "binary")]
    pub encoding: InputEncoding,

    /// Shorthand for `--input hex`.
    #[arg(long)]
    pub hex: bool,

    /// Report noSuchObject/noSuchInstance per binding instead of failing.
    #[arg(long)]
    pub lenient: bool,

    /// Only show bindings under this OID (dotted or well-known name).
    #[arg(long, value_name = "OID", value_parser = parse_oid)]
    pub prefix: Option<Oid>,
}

impl InputArgs {
    /// The effective input encoding.
    pub fn encoding(&self) -> InputEncoding {
        if self.hex {
            InputEncoding::Hex
        } else {
            self.encoding
        }
    }

    /// Read the packet and undo its input encoding.
    pub fn read_packet(&self) -> io::Result<Vec<u8>> {
        let data = match self.path.as_deref() {
            Some(path) if path.as_os_str() != "-" => std::fs::read(path)?,
            _ => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                buf
            }
        };

        match self.encoding() {
            InputEncoding::Binary => Ok(data),
            InputEncoding::Hex => {
                decode_hex(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            }
        }
    }
}

/// Output and logging options.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format.
    #[arg(short = 'O', long = "output", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Print envelope and per-binding detail to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't annotate OIDs with well-known names.
    #[arg(long)]
    pub no_hints: bool,

    /// Show OCTET STRING values as hex even when printable.
    #[arg(short = 'x', long)]
    pub force_hex: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub debug: bool,
}

impl OutputArgs {
    /// Install a stderr subscriber. `RUST_LOG` wins over `--debug`.
    pub fn init_tracing(&self) {
        let default = if self.debug {
            "snmp_decode=debug"
        } else {
            "snmp_decode=warn"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(self.debug)
            .try_init();
    }
}

/// Decode hex text into bytes, ignoring whitespace, `:` separators and a
/// leading `0x`.
fn decode_hex(text: &[u8]) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.trim_ascii();
    let text = text
        .strip_prefix(b"0x")
        .or_else(|| text.strip_prefix(b"0X"))
        .unwrap_or(text);

    let digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();
    hex::decode(digits)
}
