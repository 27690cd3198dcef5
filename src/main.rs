//! Binary decoding a file against a field layout.
//!
//! Parses CLI arguments, builds the requested reader and prints each decoded
//! field.

mod cli;

use std::{error::Error, fs::File, process::ExitCode};

use binaryio::{BufferedByteOrderReader, ByteOrder, ByteOrderReader, Layout};
use clap::Parser;
use tracing::info;

impl From<cli::OrderArg> for ByteOrder {
    fn from(arg: cli::OrderArg) -> Self {
        match arg {
            cli::OrderArg::Big => ByteOrder::Big,
            cli::OrderArg::Little => ByteOrder::Little,
        }
    }
}

fn run(cli: cli::Cli) -> Result<(), Box<dyn Error>> {
    let layout: Layout = cli.layout.parse()?;
    let order = ByteOrder::from(cli.order);
    info!(file = %cli.file.display(), %order, buffered = cli.buffered, "decoding");

    let (values, remaining) = if cli.buffered {
        let mut reader = BufferedByteOrderReader::new(std::fs::read(&cli.file)?, order);
        let values = layout.decode(&mut reader)?;
        (values, Some(reader.remaining()))
    } else {
        let mut reader = ByteOrderReader::new(File::open(&cli.file)?, order);
        (layout.decode(&mut reader)?, None)
    };

    for (field, value) in layout.fields().iter().zip(&values) {
        println!("{field} = {value}");
    }
    if let Some(remaining) = remaining {
        println!("remaining = {remaining}");
    }
    Ok(())
}

fn main() -> ExitCode {
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match run(cli::Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("binaryio: {error}");
            ExitCode::FAILURE
        }
    }
}
