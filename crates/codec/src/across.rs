//! Packed calldata formats for the Across facet.
//!
//! Two variants, one for the native asset (the amount travels out-of-band as
//! the call's attached value) and one for ERC20 tokens. Both end with a
//! variable-length relayer message whose length is inferred from the total
//! buffer length, so the message is always the last field. An optional
//! referrer tag may trail the message; decoders strip it before inferring
//! the message length.
//!
//! Wire layout (big-endian, no padding, no length prefixes):
//!
//! ```text
//! native: txId[8] receiver[20] chainId[4] relayerFeePct[8] quoteTimestamp[4] message[..]
//! erc20:  txId[8] receiver[20] chainId[4] asset[20] minAmount[16] relayerFeePct[8] quoteTimestamp[4] message[..]
//! ```

use crate::error::CodecError;
use crate::fields::{
    fit_u128, fit_u32, read_address, read_i64, read_tx_id, read_u128, read_u32, shorten_tx_id,
};
use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

// Native-variant offsets, derived once so encoder and decoder cannot drift.
const NATIVE_ID: usize = 0;
const NATIVE_RECEIVER: usize = NATIVE_ID + 8;
const NATIVE_CHAIN_ID: usize = NATIVE_RECEIVER + 20;
const NATIVE_RELAYER_FEE: usize = NATIVE_CHAIN_ID + 4;
const NATIVE_QUOTE_TIMESTAMP: usize = NATIVE_RELAYER_FEE + 8;

/// Fixed prefix length of the native variant; the message starts here.
pub const NATIVE_FIXED_LENGTH: usize = NATIVE_QUOTE_TIMESTAMP + 4;

// ERC20-variant offsets.
const ERC20_ID: usize = 0;
const ERC20_RECEIVER: usize = ERC20_ID + 8;
const ERC20_CHAIN_ID: usize = ERC20_RECEIVER + 20;
const ERC20_ASSET: usize = ERC20_CHAIN_ID + 4;
const ERC20_MIN_AMOUNT: usize = ERC20_ASSET + 20;
const ERC20_RELAYER_FEE: usize = ERC20_MIN_AMOUNT + 16;
const ERC20_QUOTE_TIMESTAMP: usize = ERC20_RELAYER_FEE + 8;

/// Fixed prefix length of the ERC20 variant; the message starts here.
pub const ERC20_FIXED_LENGTH: usize = ERC20_QUOTE_TIMESTAMP + 4;

/// Native-asset bridge call, packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcrossNativePacked {
    /// Wide transaction id; only the leading 8 bytes survive encoding.
    pub transaction_id: B256,
    /// Recipient on the destination chain.
    pub receiver: Address,
    /// Destination chain id (wire: uint32).
    pub destination_chain_id: u64,
    /// Relayer fee, signed fixed-point percentage (wire: int64).
    pub relayer_fee_pct: i64,
    /// Quote timestamp for the relayer fee (wire: uint32).
    pub quote_timestamp: u32,
    /// Arbitrary relayer message, always last on the wire.
    pub message: Bytes,
}

impl AcrossNativePacked {
    /// Encode into the packed wire form.
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        let chain_id = fit_u32("destinationChainId", self.destination_chain_id)?;

        let mut out = Vec::with_capacity(NATIVE_FIXED_LENGTH + self.message.len());
        out.extend_from_slice(shorten_tx_id(self.transaction_id).as_slice());
        out.extend_from_slice(self.receiver.as_slice());
        out.extend_from_slice(&chain_id.to_be_bytes());
        out.extend_from_slice(&self.relayer_fee_pct.to_be_bytes());
        out.extend_from_slice(&self.quote_timestamp.to_be_bytes());
        out.extend_from_slice(&self.message);
        Ok(out.into())
    }

    /// Decode from the packed wire form, stripping a trailing referrer tag
    /// when one is present.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let core = reftag::strip_referrer_tag(data);
        if core.len() < NATIVE_FIXED_LENGTH {
            return Err(CodecError::TruncatedBuffer {
                format: "across-native",
                min_length: NATIVE_FIXED_LENGTH,
                actual: core.len(),
            });
        }

        Ok(Self {
            transaction_id: read_tx_id(core, NATIVE_ID),
            receiver: read_address(core, NATIVE_RECEIVER),
            destination_chain_id: u64::from(read_u32(core, NATIVE_CHAIN_ID)),
            relayer_fee_pct: read_i64(core, NATIVE_RELAYER_FEE),
            quote_timestamp: read_u32(core, NATIVE_QUOTE_TIMESTAMP),
            message: Bytes::copy_from_slice(&core[NATIVE_FIXED_LENGTH..]),
        })
    }
}

/// ERC20 bridge call, packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcrossErc20Packed {
    /// Wide transaction id; only the leading 8 bytes survive encoding.
    pub transaction_id: B256,
    /// Recipient on the destination chain.
    pub receiver: Address,
    /// Destination chain id (wire: uint32).
    pub destination_chain_id: u64,
    /// Token being bridged.
    pub sending_asset_id: Address,
    /// Amount to bridge (wire: uint128).
    pub min_amount: U256,
    /// Relayer fee, signed fixed-point percentage (wire: int64).
    pub relayer_fee_pct: i64,
    /// Quote timestamp for the relayer fee (wire: uint32).
    pub quote_timestamp: u32,
    /// Arbitrary relayer message, always last on the wire.
    pub message: Bytes,
}

impl AcrossErc20Packed {
    /// Encode into the packed wire form.
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        let chain_id = fit_u32("destinationChainId", self.destination_chain_id)?;
        let min_amount = fit_u128("minAmount", self.min_amount)?;

        let mut out = Vec::with_capacity(ERC20_FIXED_LENGTH + self.message.len());
        out.extend_from_slice(shorten_tx_id(self.transaction_id).as_slice());
        out.extend_from_slice(self.receiver.as_slice());
        out.extend_from_slice(&chain_id.to_be_bytes());
        out.extend_from_slice(self.sending_asset_id.as_slice());
        out.extend_from_slice(&min_amount.to_be_bytes());
        out.extend_from_slice(&self.relayer_fee_pct.to_be_bytes());
        out.extend_from_slice(&self.quote_timestamp.to_be_bytes());
        out.extend_from_slice(&self.message);
        Ok(out.into())
    }

    /// Decode from the packed wire form, stripping a trailing referrer tag
    /// when one is present.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let core = reftag::strip_referrer_tag(data);
        if core.len() < ERC20_FIXED_LENGTH {
            return Err(CodecError::TruncatedBuffer {
                format: "across-erc20",
                min_length: ERC20_FIXED_LENGTH,
                actual: core.len(),
            });
        }

        Ok(Self {
            transaction_id: read_tx_id(core, ERC20_ID),
            receiver: read_address(core, ERC20_RECEIVER),
            destination_chain_id: u64::from(read_u32(core, ERC20_CHAIN_ID)),
            sending_asset_id: read_address(core, ERC20_ASSET),
            min_amount: U256::from(read_u128(core, ERC20_MIN_AMOUNT)),
            relayer_fee_pct: read_i64(core, ERC20_RELAYER_FEE),
            quote_timestamp: read_u32(core, ERC20_QUOTE_TIMESTAMP),
            message: Bytes::copy_from_slice(&core[ERC20_FIXED_LENGTH..]),
        })
    }
}
