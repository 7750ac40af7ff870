//! CLI for inspecting packed bridge calldata.
//!
//! - `decode`: decode packed calldata in a given wire format, print JSON
//! - `encode`: encode a TOML record file, optionally appending a referrer tag
//! - `scan`: report whether calldata carries a trailing referrer tag

use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use codec::PackedFormat;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "inspector")]
#[command(about = "Decode, encode and scan packed bridge calldata")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode packed calldata and print the record as JSON
    Decode {
        /// Wire format of the calldata (e.g. across-erc20, hop-l2-native)
        #[arg(short, long)]
        format: PackedFormat,

        /// Calldata as hex, with or without 0x prefix
        calldata: String,
    },

    /// Encode a record read from a TOML file and print the calldata hex
    Encode {
        /// Wire format to encode
        #[arg(short, long)]
        format: PackedFormat,

        /// Path to the TOML record file
        #[arg(short, long)]
        input: PathBuf,

        /// Referrer address to append as a trailing tag
        #[arg(short, long)]
        referrer: Option<Address>,
    },

    /// Report whether calldata carries a trailing referrer tag
    Scan {
        /// Calldata as hex, with or without 0x prefix
        calldata: String,
    },
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Decode { format, calldata } => {
            let decoded = inspector::decode_calldata(format, &calldata)?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
        Command::Encode {
            format,
            input,
            referrer,
        } => {
            info!("Encoding {} record from {}", format, input.display());
            let calldata = inspector::encode_record(format, &input, referrer)?;
            println!("{calldata}");
        }
        Command::Scan { calldata } => {
            let outcome = inspector::scan_calldata(&calldata)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
