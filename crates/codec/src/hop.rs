//! Packed calldata formats for the Hop facet.
//!
//! Four independent layouts: L2 and L1 sub-variants, each with a native and
//! an ERC20 shape. None of them carry a message; every field but the last is
//! fixed-width, and the L1 variants end with a full-width `uint256`
//! destination minimum. That final field is the only place a full 32-byte
//! integer is transmitted: it needs no narrowing check precisely because it
//! is last and has no successor whose offset would depend on it.
//!
//! These layouts are versioned independently of the Across formats and are
//! not interchangeable with them.

use crate::error::CodecError;
use crate::fields::{
    fit_u128, fit_u32, read_address, read_tx_id, read_u128, read_u256, read_u32, shorten_tx_id,
};
use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

// L2 native offsets.
const L2_NATIVE_ID: usize = 0;
const L2_NATIVE_RECEIVER: usize = L2_NATIVE_ID + 8;
const L2_NATIVE_CHAIN_ID: usize = L2_NATIVE_RECEIVER + 20;
const L2_NATIVE_BONDER_FEE: usize = L2_NATIVE_CHAIN_ID + 4;
const L2_NATIVE_AMOUNT_OUT_MIN: usize = L2_NATIVE_BONDER_FEE + 16;
const L2_NATIVE_DEADLINE: usize = L2_NATIVE_AMOUNT_OUT_MIN + 16;

/// Fixed length of the L2 native variant.
pub const L2_NATIVE_FIXED_LENGTH: usize = L2_NATIVE_DEADLINE + 4;

// L2 ERC20 offsets.
const L2_ERC20_ID: usize = 0;
const L2_ERC20_RECEIVER: usize = L2_ERC20_ID + 8;
const L2_ERC20_CHAIN_ID: usize = L2_ERC20_RECEIVER + 20;
const L2_ERC20_ASSET: usize = L2_ERC20_CHAIN_ID + 4;
const L2_ERC20_AMOUNT: usize = L2_ERC20_ASSET + 20;
const L2_ERC20_BONDER_FEE: usize = L2_ERC20_AMOUNT + 16;
const L2_ERC20_AMOUNT_OUT_MIN: usize = L2_ERC20_BONDER_FEE + 16;
const L2_ERC20_DEADLINE: usize = L2_ERC20_AMOUNT_OUT_MIN + 16;

/// Fixed length of the L2 ERC20 variant.
pub const L2_ERC20_FIXED_LENGTH: usize = L2_ERC20_DEADLINE + 4;

// L1 native offsets.
const L1_NATIVE_ID: usize = 0;
const L1_NATIVE_RECEIVER: usize = L1_NATIVE_ID + 8;
const L1_NATIVE_CHAIN_ID: usize = L1_NATIVE_RECEIVER + 20;
const L1_NATIVE_RELAYER: usize = L1_NATIVE_CHAIN_ID + 4;
const L1_NATIVE_RELAYER_FEE: usize = L1_NATIVE_RELAYER + 20;
const L1_NATIVE_DEST_AMOUNT_OUT_MIN: usize = L1_NATIVE_RELAYER_FEE + 16;

/// Fixed length of the L1 native variant.
pub const L1_NATIVE_FIXED_LENGTH: usize = L1_NATIVE_DEST_AMOUNT_OUT_MIN + 32;

// L1 ERC20 offsets.
const L1_ERC20_ID: usize = 0;
const L1_ERC20_RECEIVER: usize = L1_ERC20_ID + 8;
const L1_ERC20_CHAIN_ID: usize = L1_ERC20_RECEIVER + 20;
const L1_ERC20_ASSET: usize = L1_ERC20_CHAIN_ID + 4;
const L1_ERC20_AMOUNT: usize = L1_ERC20_ASSET + 20;
const L1_ERC20_RELAYER: usize = L1_ERC20_AMOUNT + 16;
const L1_ERC20_RELAYER_FEE: usize = L1_ERC20_RELAYER + 20;
const L1_ERC20_DEST_AMOUNT_OUT_MIN: usize = L1_ERC20_RELAYER_FEE + 16;

/// Fixed length of the L1 ERC20 variant.
pub const L1_ERC20_FIXED_LENGTH: usize = L1_ERC20_DEST_AMOUNT_OUT_MIN + 32;

/// L2-to-L2 native-asset bridge call, packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopL2NativePacked {
    /// Wide transaction id; only the leading 8 bytes survive encoding.
    pub transaction_id: B256,
    /// Recipient on the destination chain.
    pub receiver: Address,
    /// Destination chain id (wire: uint32).
    pub destination_chain_id: u64,
    /// Fee paid to the bonder (wire: uint128).
    pub bonder_fee: U256,
    /// Minimum AMM output on the source chain (wire: uint128).
    pub amount_out_min: U256,
    /// Swap deadline on the destination chain (wire: uint32).
    pub destination_deadline: u64,
}

impl HopL2NativePacked {
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        let chain_id = fit_u32("destinationChainId", self.destination_chain_id)?;
        let bonder_fee = fit_u128("bonderFee", self.bonder_fee)?;
        let amount_out_min = fit_u128("amountOutMin", self.amount_out_min)?;
        let deadline = fit_u32("destinationDeadline", self.destination_deadline)?;

        let mut out = Vec::with_capacity(L2_NATIVE_FIXED_LENGTH);
        out.extend_from_slice(shorten_tx_id(self.transaction_id).as_slice());
        out.extend_from_slice(self.receiver.as_slice());
        out.extend_from_slice(&chain_id.to_be_bytes());
        out.extend_from_slice(&bonder_fee.to_be_bytes());
        out.extend_from_slice(&amount_out_min.to_be_bytes());
        out.extend_from_slice(&deadline.to_be_bytes());
        Ok(out.into())
    }

    /// Decode from the packed wire form. Bytes past the fixed length (the
    /// optional referrer tag) are ignored.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < L2_NATIVE_FIXED_LENGTH {
            return Err(CodecError::TruncatedBuffer {
                format: "hop-l2-native",
                min_length: L2_NATIVE_FIXED_LENGTH,
                actual: data.len(),
            });
        }

        Ok(Self {
            transaction_id: read_tx_id(data, L2_NATIVE_ID),
            receiver: read_address(data, L2_NATIVE_RECEIVER),
            destination_chain_id: u64::from(read_u32(data, L2_NATIVE_CHAIN_ID)),
            bonder_fee: U256::from(read_u128(data, L2_NATIVE_BONDER_FEE)),
            amount_out_min: U256::from(read_u128(data, L2_NATIVE_AMOUNT_OUT_MIN)),
            destination_deadline: u64::from(read_u32(data, L2_NATIVE_DEADLINE)),
        })
    }
}

/// L2-to-L2 ERC20 bridge call, packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopL2Erc20Packed {
    /// Wide transaction id; only the leading 8 bytes survive encoding.
    pub transaction_id: B256,
    /// Recipient on the destination chain.
    pub receiver: Address,
    /// Destination chain id (wire: uint32).
    pub destination_chain_id: u64,
    /// Token being bridged.
    pub sending_asset_id: Address,
    /// Amount to bridge (wire: uint128).
    pub amount: U256,
    /// Fee paid to the bonder (wire: uint128).
    pub bonder_fee: U256,
    /// Minimum AMM output on the source chain (wire: uint128).
    pub amount_out_min: U256,
    /// Swap deadline on the destination chain (wire: uint32).
    pub destination_deadline: u64,
}

impl HopL2Erc20Packed {
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        let chain_id = fit_u32("destinationChainId", self.destination_chain_id)?;
        let amount = fit_u128("amount", self.amount)?;
        let bonder_fee = fit_u128("bonderFee", self.bonder_fee)?;
        let amount_out_min = fit_u128("amountOutMin", self.amount_out_min)?;
        let deadline = fit_u32("destinationDeadline", self.destination_deadline)?;

        let mut out = Vec::with_capacity(L2_ERC20_FIXED_LENGTH);
        out.extend_from_slice(shorten_tx_id(self.transaction_id).as_slice());
        out.extend_from_slice(self.receiver.as_slice());
        out.extend_from_slice(&chain_id.to_be_bytes());
        out.extend_from_slice(self.sending_asset_id.as_slice());
        out.extend_from_slice(&amount.to_be_bytes());
        out.extend_from_slice(&bonder_fee.to_be_bytes());
        out.extend_from_slice(&amount_out_min.to_be_bytes());
        out.extend_from_slice(&deadline.to_be_bytes());
        Ok(out.into())
    }

    /// Decode from the packed wire form. Bytes past the fixed length (the
    /// optional referrer tag) are ignored.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < L2_ERC20_FIXED_LENGTH {
            return Err(CodecError::TruncatedBuffer {
                format: "hop-l2-erc20",
                min_length: L2_ERC20_FIXED_LENGTH,
                actual: data.len(),
            });
        }

        Ok(Self {
            transaction_id: read_tx_id(data, L2_ERC20_ID),
            receiver: read_address(data, L2_ERC20_RECEIVER),
            destination_chain_id: u64::from(read_u32(data, L2_ERC20_CHAIN_ID)),
            sending_asset_id: read_address(data, L2_ERC20_ASSET),
            amount: U256::from(read_u128(data, L2_ERC20_AMOUNT)),
            bonder_fee: U256::from(read_u128(data, L2_ERC20_BONDER_FEE)),
            amount_out_min: U256::from(read_u128(data, L2_ERC20_AMOUNT_OUT_MIN)),
            destination_deadline: u64::from(read_u32(data, L2_ERC20_DEADLINE)),
        })
    }
}

/// L1-to-L2 native-asset bridge call, packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopL1NativePacked {
    /// Wide transaction id; only the leading 8 bytes survive encoding.
    pub transaction_id: B256,
    /// Recipient on the destination chain.
    pub receiver: Address,
    /// Destination chain id (wire: uint32).
    pub destination_chain_id: u64,
    /// Relayer paid to execute the destination leg.
    pub relayer: Address,
    /// Relayer fee (wire: uint128).
    pub relayer_fee: U256,
    /// Minimum AMM output on the destination chain. Final field, transmitted
    /// full-width (uint256), so no narrowing check applies.
    pub destination_amount_out_min: U256,
}

impl HopL1NativePacked {
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        let chain_id = fit_u32("destinationChainId", self.destination_chain_id)?;
        let relayer_fee = fit_u128("relayerFee", self.relayer_fee)?;

        let mut out = Vec::with_capacity(L1_NATIVE_FIXED_LENGTH);
        out.extend_from_slice(shorten_tx_id(self.transaction_id).as_slice());
        out.extend_from_slice(self.receiver.as_slice());
        out.extend_from_slice(&chain_id.to_be_bytes());
        out.extend_from_slice(self.relayer.as_slice());
        out.extend_from_slice(&relayer_fee.to_be_bytes());
        out.extend_from_slice(&self.destination_amount_out_min.to_be_bytes::<32>());
        Ok(out.into())
    }

    /// Decode from the packed wire form. Bytes past the fixed length (the
    /// optional referrer tag) are ignored.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < L1_NATIVE_FIXED_LENGTH {
            return Err(CodecError::TruncatedBuffer {
                format: "hop-l1-native",
                min_length: L1_NATIVE_FIXED_LENGTH,
                actual: data.len(),
            });
        }

        Ok(Self {
            transaction_id: read_tx_id(data, L1_NATIVE_ID),
            receiver: read_address(data, L1_NATIVE_RECEIVER),
            destination_chain_id: u64::from(read_u32(data, L1_NATIVE_CHAIN_ID)),
            relayer: read_address(data, L1_NATIVE_RELAYER),
            relayer_fee: U256::from(read_u128(data, L1_NATIVE_RELAYER_FEE)),
            destination_amount_out_min: read_u256(data, L1_NATIVE_DEST_AMOUNT_OUT_MIN),
        })
    }
}

/// L1-to-L2 ERC20 bridge call, packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopL1Erc20Packed {
    /// Wide transaction id; only the leading 8 bytes survive encoding.
    pub transaction_id: B256,
    /// Recipient on the destination chain.
    pub receiver: Address,
    /// Destination chain id (wire: uint32).
    pub destination_chain_id: u64,
    /// Token being bridged.
    pub sending_asset_id: Address,
    /// Amount to bridge (wire: uint128).
    pub amount: U256,
    /// Relayer paid to execute the destination leg.
    pub relayer: Address,
    /// Relayer fee (wire: uint128).
    pub relayer_fee: U256,
    /// Minimum AMM output on the destination chain. Final field, transmitted
    /// full-width (uint256), so no narrowing check applies.
    pub destination_amount_out_min: U256,
}

impl HopL1Erc20Packed {
    pub fn encode(&self) -> Result<Bytes, CodecError> {
        let chain_id = fit_u32("destinationChainId", self.destination_chain_id)?;
        let amount = fit_u128("amount", self.amount)?;
        let relayer_fee = fit_u128("relayerFee", self.relayer_fee)?;

        let mut out = Vec::with_capacity(L1_ERC20_FIXED_LENGTH);
        out.extend_from_slice(shorten_tx_id(self.transaction_id).as_slice());
        out.extend_from_slice(self.receiver.as_slice());
        out.extend_from_slice(&chain_id.to_be_bytes());
        out.extend_from_slice(self.sending_asset_id.as_slice());
        out.extend_from_slice(&amount.to_be_bytes());
        out.extend_from_slice(self.relayer.as_slice());
        out.extend_from_slice(&relayer_fee.to_be_bytes());
        out.extend_from_slice(&self.destination_amount_out_min.to_be_bytes::<32>());
        Ok(out.into())
    }

    /// Decode from the packed wire form. Bytes past the fixed length (the
    /// optional referrer tag) are ignored.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < L1_ERC20_FIXED_LENGTH {
            return Err(CodecError::TruncatedBuffer {
                format: "hop-l1-erc20",
                min_length: L1_ERC20_FIXED_LENGTH,
                actual: data.len(),
            });
        }

        Ok(Self {
            transaction_id: read_tx_id(data, L1_ERC20_ID),
            receiver: read_address(data, L1_ERC20_RECEIVER),
            destination_chain_id: u64::from(read_u32(data, L1_ERC20_CHAIN_ID)),
            sending_asset_id: read_address(data, L1_ERC20_ASSET),
            amount: U256::from(read_u128(data, L1_ERC20_AMOUNT)),
            relayer: read_address(data, L1_ERC20_RELAYER),
            relayer_fee: U256::from(read_u128(data, L1_ERC20_RELAYER_FEE)),
            destination_amount_out_min: read_u256(data, L1_ERC20_DEST_AMOUNT_OUT_MIN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::widen_tx_id;
    use alloy_primitives::address;

    fn l2_native() -> HopL2NativePacked {
        HopL2NativePacked {
            transaction_id: B256::repeat_byte(0x33),
            receiver: address!("552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0"),
            destination_chain_id: 10,
            bonder_fee: U256::from(250_000_000_000_000u64),
            amount_out_min: U256::from(990_000_000_000_000u64),
            destination_deadline: 1_700_003_600,
        }
    }

    fn l1_erc20() -> HopL1Erc20Packed {
        HopL1Erc20Packed {
            transaction_id: B256::repeat_byte(0x44),
            receiver: address!("552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0"),
            destination_chain_id: 137,
            sending_asset_id: address!("2791bca1f2de4661ed88a30c99a7a9449aa84174"),
            amount: U256::from(100_000000u64),
            relayer: address!("c0ffee254729296a45a3885639ac7e10f9d54979"),
            relayer_fee: U256::ZERO,
            destination_amount_out_min: U256::MAX,
        }
    }

    #[test]
    fn test_l2_native_round_trip() {
        let record = l2_native();
        let encoded = record.encode().unwrap();
        assert_eq!(encoded.len(), L2_NATIVE_FIXED_LENGTH);

        let mut expected = record.clone();
        expected.transaction_id = widen_tx_id(shorten_tx_id(record.transaction_id));
        assert_eq!(HopL2NativePacked::decode(&encoded).unwrap(), expected);
    }

    #[test]
    fn test_l2_erc20_round_trip() {
        let record = HopL2Erc20Packed {
            transaction_id: B256::repeat_byte(0x55),
            receiver: address!("552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0"),
            destination_chain_id: 42161,
            sending_asset_id: address!("2791bca1f2de4661ed88a30c99a7a9449aa84174"),
            amount: U256::from(5_000_000u64),
            bonder_fee: U256::from(12_000u64),
            amount_out_min: U256::from(4_900_000u64),
            destination_deadline: 1_700_000_000,
        };
        let encoded = record.encode().unwrap();
        assert_eq!(encoded.len(), L2_ERC20_FIXED_LENGTH);

        let decoded = HopL2Erc20Packed::decode(&encoded).unwrap();
        assert_eq!(decoded.sending_asset_id, record.sending_asset_id);
        assert_eq!(decoded.amount, record.amount);
        assert_eq!(decoded.bonder_fee, record.bonder_fee);
        assert_eq!(decoded.amount_out_min, record.amount_out_min);
        assert_eq!(decoded.destination_deadline, record.destination_deadline);
    }

    #[test]
    fn test_l1_variants_carry_full_width_final_field() {
        // The final uint256 needs no narrowing and must round-trip U256::MAX.
        let record = l1_erc20();
        let encoded = record.encode().unwrap();
        assert_eq!(encoded.len(), L1_ERC20_FIXED_LENGTH);
        assert_eq!(&encoded[L1_ERC20_FIXED_LENGTH - 32..], &[0xff; 32]);

        let decoded = HopL1Erc20Packed::decode(&encoded).unwrap();
        assert_eq!(decoded.destination_amount_out_min, U256::MAX);
        assert_eq!(decoded.amount, record.amount);
        assert_eq!(decoded.relayer, record.relayer);

        let native = HopL1NativePacked {
            transaction_id: B256::repeat_byte(0x66),
            receiver: record.receiver,
            destination_chain_id: 8453,
            relayer: record.relayer,
            relayer_fee: U256::from(1u64),
            destination_amount_out_min: U256::MAX - U256::from(1),
        };
        let encoded = native.encode().unwrap();
        assert_eq!(encoded.len(), L1_NATIVE_FIXED_LENGTH);
        assert_eq!(
            HopL1NativePacked::decode(&encoded)
                .unwrap()
                .destination_amount_out_min,
            U256::MAX - U256::from(1)
        );
    }

    #[test]
    fn test_bonder_fee_width_boundary() {
        let mut record = l2_native();
        record.bonder_fee = U256::from(u128::MAX);
        assert!(record.encode().is_ok());

        record.bonder_fee = U256::from(u128::MAX) + U256::from(1);
        assert_eq!(
            record.encode(),
            Err(CodecError::FieldTooWide {
                field: "bonderFee",
                max_bits: 128,
            })
        );
    }

    #[test]
    fn test_deadline_width_boundary() {
        let mut record = l2_native();
        record.destination_deadline = u64::from(u32::MAX);
        assert!(record.encode().is_ok());

        record.destination_deadline = u64::from(u32::MAX) + 1;
        assert_eq!(
            record.encode(),
            Err(CodecError::FieldTooWide {
                field: "destinationDeadline",
                max_bits: 32,
            })
        );
    }

    #[test]
    fn test_width_check_precedes_writes() {
        // An oversized amount fails even though every other field is valid,
        // and no buffer is produced.
        let mut record = l1_erc20();
        record.amount = U256::from(u128::MAX) + U256::from(1);
        assert_eq!(
            record.encode(),
            Err(CodecError::FieldTooWide {
                field: "amount",
                max_bits: 128,
            })
        );
    }

    #[test]
    fn test_truncated_buffers_rejected() {
        assert!(matches!(
            HopL2NativePacked::decode(&[0u8; L2_NATIVE_FIXED_LENGTH - 1]),
            Err(CodecError::TruncatedBuffer { .. })
        ));
        assert!(matches!(
            HopL2Erc20Packed::decode(&[]),
            Err(CodecError::TruncatedBuffer { .. })
        ));
        assert!(matches!(
            HopL1NativePacked::decode(&[0u8; L1_NATIVE_FIXED_LENGTH - 1]),
            Err(CodecError::TruncatedBuffer { .. })
        ));
        assert!(matches!(
            HopL1Erc20Packed::decode(&[0u8; L1_ERC20_FIXED_LENGTH - 1]),
            Err(CodecError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn test_trailing_tag_ignored_by_fixed_length_decode() {
        let record = l2_native();
        let encoded = record.encode().unwrap();
        let tagged = reftag::append_referrer_tag(&encoded, Address::from([0x99; 20]));

        let decoded = HopL2NativePacked::decode(&tagged).unwrap();
        assert_eq!(decoded.receiver, record.receiver);
        assert_eq!(decoded.bonder_fee, record.bonder_fee);
    }
}
