//! Format selection across the packed wire layouts.
//!
//! Each bridge variant is an independently versioned binary format; nothing
//! but the general layout rules is shared between them. [`PackedFormat`]
//! names the known layouts, [`PackedRecord`] carries a decoded record tagged
//! with its format.

use crate::across::{AcrossErc20Packed, AcrossNativePacked};
use crate::error::CodecError;
use crate::hop::{HopL1Erc20Packed, HopL1NativePacked, HopL2Erc20Packed, HopL2NativePacked};
use crate::{across, hop};
use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The known packed wire layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackedFormat {
    AcrossNative,
    AcrossErc20,
    HopL2Native,
    HopL2Erc20,
    HopL1Native,
    HopL1Erc20,
}

impl PackedFormat {
    /// Every known format, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::AcrossNative,
        Self::AcrossErc20,
        Self::HopL2Native,
        Self::HopL2Erc20,
        Self::HopL1Native,
        Self::HopL1Erc20,
    ];

    /// Kebab-case name, as used on the command line and in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AcrossNative => "across-native",
            Self::AcrossErc20 => "across-erc20",
            Self::HopL2Native => "hop-l2-native",
            Self::HopL2Erc20 => "hop-l2-erc20",
            Self::HopL1Native => "hop-l1-native",
            Self::HopL1Erc20 => "hop-l1-erc20",
        }
    }

    /// Length of the fixed-width prefix. For the Hop formats this is the
    /// whole record; the Across formats append a variable-length message.
    pub const fn fixed_length(&self) -> usize {
        match self {
            Self::AcrossNative => across::NATIVE_FIXED_LENGTH,
            Self::AcrossErc20 => across::ERC20_FIXED_LENGTH,
            Self::HopL2Native => hop::L2_NATIVE_FIXED_LENGTH,
            Self::HopL2Erc20 => hop::L2_ERC20_FIXED_LENGTH,
            Self::HopL1Native => hop::L1_NATIVE_FIXED_LENGTH,
            Self::HopL1Erc20 => hop::L1_ERC20_FIXED_LENGTH,
        }
    }

    /// Decode a buffer in this format.
    pub fn decode(&self, data: &[u8]) -> Result<PackedRecord, CodecError> {
        let record = match self {
            Self::AcrossNative => PackedRecord::AcrossNative(AcrossNativePacked::decode(data)?),
            Self::AcrossErc20 => PackedRecord::AcrossErc20(AcrossErc20Packed::decode(data)?),
            Self::HopL2Native => PackedRecord::HopL2Native(HopL2NativePacked::decode(data)?),
            Self::HopL2Erc20 => PackedRecord::HopL2Erc20(HopL2Erc20Packed::decode(data)?),
            Self::HopL1Native => PackedRecord::HopL1Native(HopL1NativePacked::decode(data)?),
            Self::HopL1Erc20 => PackedRecord::HopL1Erc20(HopL1Erc20Packed::decode(data)?),
        };
        debug!(
            format = self.name(),
            calldata_len = data.len(),
            tagged = reftag::has_referrer_tag(data),
            "Decoded packed calldata"
        );
        Ok(record)
    }
}

impl fmt::Display for PackedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| format!("unknown packed format: {s}"))
    }
}

/// A decoded record, tagged with the format it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PackedRecord {
    AcrossNative(AcrossNativePacked),
    AcrossErc20(AcrossErc20Packed),
    HopL2Native(HopL2NativePacked),
    HopL2Erc20(HopL2Erc20Packed),
    HopL1Native(HopL1NativePacked),
    HopL1Erc20(HopL1Erc20Packed),
}

impl PackedRecord {
    /// The format this record encodes to.
    pub const fn format(&self) -> PackedFormat {
        match self {
            Self::AcrossNative(_) => PackedFormat::AcrossNative,
            Self::AcrossErc20(_) => PackedFormat::AcrossErc20,
            Self::HopL2Native(_) => PackedFormat::HopL2Native,
            Self::HopL2Erc20(_) => PackedFormat::HopL2Erc20,
            Self::HopL1Native(_) => PackedFormat::HopL1Native,
            Self::HopL1Erc20(_) => PackedFormat::HopL1Erc20,
        }
    }

    /// Encode into the packed wire form of the record's format.
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        match self {
            Self::AcrossNative(record) => record.encode(),
            Self::AcrossErc20(record) => record.encode(),
            Self::HopL2Native(record) => record.encode(),
            Self::HopL2Erc20(record) => record.encode(),
            Self::HopL1Native(record) => record.encode(),
            Self::HopL1Erc20(record) => record.encode(),
        }
    }
}
