use thiserror::Error;

/// Errors raised while encoding or decoding packed calldata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A value supplied to an encoder does not fit the field's wire width.
    ///
    /// Detected before any byte is written; an encode call never produces a
    /// partial buffer.
    #[error("{field} value passed too big to fit in uint{max_bits}")]
    FieldTooWide {
        /// Name of the offending field, as it appears in the facet signature.
        field: &'static str,
        /// Bit width of the wire field.
        max_bits: u32,
    },

    /// The buffer handed to a decoder is shorter than the format's fixed
    /// prefix.
    #[error("{format} calldata too short: need at least {min_length} bytes, got {actual}")]
    TruncatedBuffer {
        format: &'static str,
        min_length: usize,
        actual: usize,
    },
}
