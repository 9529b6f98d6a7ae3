use thiserror::Error;

/// Errors raised by the framing calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// Both data and overhead bits are zero.
    #[error("cannot compute efficiency of a zero-bit transmission")]
    ZeroTotalBits,

    /// A zero-byte payload was passed to an accounting function.
    #[error("payload must be at least one byte")]
    EmptyPayload,

    /// Bit count does not fit in a `u64`.
    #[error("bit count overflows for a {0}-byte payload")]
    Overflow(u64),

    /// Sweep range contains no byte counts.
    #[error("sweep range {start}..={end} is empty")]
    EmptyRange {
        /// First byte count requested
        start: u64,
        /// Last byte count requested
        end: u64,
    },
}

/// Result alias over [`FramingError`].
pub type Result<T> = std::result::Result<T, FramingError>;
