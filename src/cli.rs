//! Command line interface for the `binaryio` binary.
//!
//! Decodes a file against a textual layout and prints one line per field.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Byte order accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Most significant byte first.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

/// Command line arguments for the `binaryio` binary.
#[derive(Debug, Parser)]
#[command(
    name = "binaryio",
    version,
    about = "Decode fixed-width fields from a binary file"
)]
pub struct Cli {
    /// Byte order used for multi-byte integers.
    #[arg(short, long, value_enum, default_value_t = OrderArg::Big)]
    pub order: OrderArg,

    /// Load the whole file into memory and report the bytes left over.
    #[arg(short, long)]
    pub buffered: bool,

    /// Comma-separated fields, e.g. `u16,u32[2],bytes:4,skip:2`.
    #[arg(short, long)]
    pub layout: String,

    /// File to decode.
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, OrderArg};

    #[test]
    fn parses_layout_and_defaults_to_big_endian() {
        let cli = Cli::parse_from(["binaryio", "--layout", "u16,u8", "data.bin"]);
        assert_eq!(cli.order, OrderArg::Big);
        assert!(!cli.buffered);
        assert_eq!(cli.layout, "u16,u8");
        assert_eq!(cli.file.to_str(), Some("data.bin"));
    }

    #[test]
    fn parses_little_endian_buffered_mode() {
        let cli = Cli::parse_from(["binaryio", "-o", "little", "-b", "-l", "u32", "x"]);
        assert_eq!(cli.order, OrderArg::Little);
        assert!(cli.buffered);
    }

    #[test]
    fn layout_is_required() {
        assert!(Cli::try_parse_from(["binaryio", "data.bin"]).is_err());
    }
}
