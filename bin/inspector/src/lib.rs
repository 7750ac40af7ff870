//! Inspector operations: decode, encode, and scan packed bridge calldata.
//!
//! Pure functions over hex strings and record files; the binary in
//! `src/bin/main.rs` only does argument parsing and printing, so everything
//! here is testable without a shell.

use alloy_primitives::{hex, Address};
use codec::{PackedFormat, PackedRecord};
use eyre::{Result, WrapErr};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// A decoded record together with the referrer tag found on the calldata,
/// if any.
#[derive(Debug, Serialize)]
pub struct DecodedCalldata {
    pub format: &'static str,
    pub record: PackedRecord,
    pub referrer: Option<Address>,
}

/// Outcome of scanning arbitrary calldata for a trailing referrer tag.
#[derive(Debug, Serialize)]
pub struct ScanOutcome {
    pub calldata_len: usize,
    pub tag_present: bool,
    pub referrer: Option<Address>,
}

/// Decode packed calldata given as hex (`0x` prefix optional).
pub fn decode_calldata(format: PackedFormat, calldata_hex: &str) -> Result<DecodedCalldata> {
    let data = hex::decode(calldata_hex).wrap_err("invalid calldata hex")?;
    let record = format.decode(&data)?;

    Ok(DecodedCalldata {
        format: format.name(),
        referrer: reftag::extract_referrer(&data),
        record,
    })
}

/// Parse a record in the given format from TOML source.
pub fn parse_record(format: PackedFormat, toml_source: &str) -> Result<PackedRecord> {
    let record = match format {
        PackedFormat::AcrossNative => PackedRecord::AcrossNative(toml::from_str(toml_source)?),
        PackedFormat::AcrossErc20 => PackedRecord::AcrossErc20(toml::from_str(toml_source)?),
        PackedFormat::HopL2Native => PackedRecord::HopL2Native(toml::from_str(toml_source)?),
        PackedFormat::HopL2Erc20 => PackedRecord::HopL2Erc20(toml::from_str(toml_source)?),
        PackedFormat::HopL1Native => PackedRecord::HopL1Native(toml::from_str(toml_source)?),
        PackedFormat::HopL1Erc20 => PackedRecord::HopL1Erc20(toml::from_str(toml_source)?),
    };
    Ok(record)
}

/// Encode a record read from a TOML file, optionally appending a referrer
/// tag, and return the calldata as 0x-prefixed hex.
pub fn encode_record(
    format: PackedFormat,
    input: impl AsRef<Path>,
    referrer: Option<Address>,
) -> Result<String> {
    let input = input.as_ref();
    let contents = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("failed to read record file {}", input.display()))?;
    let record = parse_record(format, &contents)?;

    let encoded = record.encode()?;
    debug!(
        format = format.name(),
        encoded_len = encoded.len(),
        referrer = ?referrer,
        "Encoded record"
    );

    let calldata = match referrer {
        Some(referrer) => reftag::append_referrer_tag(&encoded, referrer),
        None => encoded.to_vec(),
    };
    Ok(hex::encode_prefixed(calldata))
}

/// Scan arbitrary calldata hex for a trailing referrer tag.
pub fn scan_calldata(calldata_hex: &str) -> Result<ScanOutcome> {
    let data = hex::decode(calldata_hex).wrap_err("invalid calldata hex")?;

    Ok(ScanOutcome {
        calldata_len: data.len(),
        tag_present: reftag::has_referrer_tag(&data),
        referrer: reftag::extract_referrer(&data),
    })
}
