/// Bits carried by one payload byte
pub static BITS_PER_BYTE: u64 = 8;

/// Start bits framing each asynchronous byte
pub static START_BITS: u64 = 1;

/// Stop bits framing each asynchronous byte
pub static STOP_BITS: u64 = 1;

/// Per-byte overhead of asynchronous framing
pub static ASYNC_OVERHEAD_PER_BYTE: u64 = START_BITS + STOP_BITS;

/// Synchronization pattern sent once per synchronous transmission
pub static SYNC_PATTERN_BITS: u64 = 16;
