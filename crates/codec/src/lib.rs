//! Packed calldata codecs for bridge facet calls.
//!
//! The packed facets trade ABI self-description for calldata size: every
//! fixed-width field sits at a position-determined offset with no tags,
//! padding, or length prefixes, and at most one variable-width field may
//! appear, only as the last field. Encoders narrow caller-supplied values to
//! the wire width and fail with a per-field diagnostic when a value does not
//! fit; decoders are exact structural inverses over the fixed prefix.
//!
//! The codec is pure data transformation. It assumes the calling facet has
//! already validated business semantics (non-zero receiver, non-zero amount)
//! and performs the actual transfer and bridge call itself; here only
//! representability is enforced.

pub mod across;
pub mod error;
pub mod fields;
pub mod format;
pub mod hop;

pub use across::{AcrossErc20Packed, AcrossNativePacked};
pub use error::CodecError;
pub use format::{PackedFormat, PackedRecord};
pub use hop::{HopL1Erc20Packed, HopL1NativePacked, HopL2Erc20Packed, HopL2NativePacked};
