//! Trailing referrer-tag scanner.
//!
//! An integrator may append a 28-byte tag to any bridge calldata: an 8-byte
//! magic delimiter followed by a 20-byte referrer address. The tag rides
//! after the core packed (or ABI-encoded) parameters, so it attributes the
//! transaction without changing the call signature.
//!
//! Detection is anchored: the delimiter is checked only at offset
//! `len - 28`, never searched for. That keeps detection O(1) and means
//! delimiter-like byte sequences earlier in legitimate payload data can
//! never produce a false positive. The flip side is accepted: a payload that
//! coincidentally ends with delimiter + 20 bytes is indistinguishable from a
//! tagged one.

use alloy_primitives::{hex, Address};

/// Magic delimiter preceding the referrer address. Interop constant; any
/// change breaks compatibility with already-encoded calldata.
pub const REFERRER_DELIMITER: [u8; 8] = hex!("d00dfeeddeadbeef");

/// Length of the referrer payload (one address).
pub const REFERRER_LENGTH: usize = 20;

/// Total length of an appended tag: delimiter + referrer.
pub const TAG_LENGTH: usize = REFERRER_DELIMITER.len() + REFERRER_LENGTH;

/// Whether `data` carries a trailing referrer tag.
///
/// Buffers shorter than 28 bytes, and buffers whose 8 bytes at `len - 28`
/// differ from the delimiter in any bit, are tag-absent. Never an error.
pub fn has_referrer_tag(data: &[u8]) -> bool {
    match data.len().checked_sub(TAG_LENGTH) {
        Some(start) => data[start..start + REFERRER_DELIMITER.len()] == REFERRER_DELIMITER,
        None => false,
    }
}

/// The trailing referrer address, when the tag is present.
pub fn extract_referrer(data: &[u8]) -> Option<Address> {
    has_referrer_tag(data).then(|| Address::from_slice(&data[data.len() - REFERRER_LENGTH..]))
}

/// `data` without its trailing tag; `data` unchanged when no tag is present.
pub fn strip_referrer_tag(data: &[u8]) -> &[u8] {
    if has_referrer_tag(data) {
        &data[..data.len() - TAG_LENGTH]
    } else {
        data
    }
}

/// Append a referrer tag to a core calldata buffer.
pub fn append_referrer_tag(data: &[u8], referrer: Address) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + TAG_LENGTH);
    out.extend_from_slice(data);
    out.extend_from_slice(&REFERRER_DELIMITER);
    out.extend_from_slice(referrer.as_slice());
    out
}
