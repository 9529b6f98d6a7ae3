//! Asynchronous vs synchronous transmission framing calculator

#![forbid(unsafe_code, unused_must_use)]
#![warn(clippy::all, missing_docs)]

/// Framing constants.
pub mod common;

/// Calculator errors.
pub mod error;

/// Overhead and efficiency accounting.
pub mod framing;

/// Real-world protocol catalog.
pub mod protocols;

/// Payload size sweeps.
pub mod sweep;

pub use error::{FramingError, Result};
pub use framing::{
    FrameAccounting, ModelComparison, TransmissionModel, account, account_asynchronous,
    account_synchronous, compare_models, compute_efficiency, crossover_bytes,
};
