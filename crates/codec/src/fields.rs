//! Field-level narrowing checks and fixed-offset reads.
//!
//! Encoders accept values in the widest convenient native type and narrow
//! them to the wire width here; every narrowing is either checked (returns
//! [`CodecError::FieldTooWide`] naming the field) or documented as an
//! intentional, deterministic truncation (the transaction id).
//!
//! The read helpers assume the caller has already verified the buffer length
//! against the format's fixed prefix.

use crate::error::CodecError;
use alloy_primitives::{Address, FixedBytes, B256, U256};

/// Narrow a `u64` to a 32-bit wire field.
pub fn fit_u32(field: &'static str, value: u64) -> Result<u32, CodecError> {
    u32::try_from(value).map_err(|_| CodecError::FieldTooWide {
        field,
        max_bits: 32,
    })
}

/// Narrow a `U256` to a 128-bit wire field.
pub fn fit_u128(field: &'static str, value: U256) -> Result<u128, CodecError> {
    u128::try_from(value).map_err(|_| CodecError::FieldTooWide {
        field,
        max_bits: 128,
    })
}

/// Shorten a 32-byte transaction id to its canonical 8-byte wire form.
///
/// Takes the leading 8 bytes. This is a lossy, intentional narrowing: the
/// packed formats trade the tail of the id for calldata size, and the
/// off-chain indexer matches on the 8-byte prefix.
pub fn shorten_tx_id(id: B256) -> FixedBytes<8> {
    FixedBytes::<8>::from_slice(&id[..8])
}

/// Widen an 8-byte wire transaction id back to the canonical 32-byte form:
/// left-aligned, zero-filled. This is what decoders recover; the original
/// tail is gone.
pub fn widen_tx_id(short: FixedBytes<8>) -> B256 {
    let mut id = B256::ZERO;
    id[..8].copy_from_slice(short.as_slice());
    id
}

pub(crate) fn read_tx_id(data: &[u8], offset: usize) -> B256 {
    widen_tx_id(FixedBytes::<8>::from_slice(&data[offset..offset + 8]))
}

pub(crate) fn read_address(data: &[u8], offset: usize) -> Address {
    Address::from_slice(&data[offset..offset + 20])
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    u32::from_be_bytes(buf)
}

pub(crate) fn read_i64(data: &[u8], offset: usize) -> i64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    i64::from_be_bytes(buf)
}

pub(crate) fn read_u128(data: &[u8], offset: usize) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&data[offset..offset + 16]);
    u128::from_be_bytes(buf)
}

pub(crate) fn read_u256(data: &[u8], offset: usize) -> U256 {
    U256::from_be_slice(&data[offset..offset + 32])
}
