//! Framing overhead and efficiency accounting.
//!
//! Asynchronous framing wraps every byte in a start and a stop bit, so its
//! overhead grows with the payload. Synchronous framing sends one fixed
//! synchronization pattern per transmission. Both are dispatched through
//! [`account`].

use std::fmt;

use clap::ValueEnum;
use tracing::{instrument, trace};

use crate::{
    common::*,
    error::{FramingError, Result},
};

/// Framing model used to carry a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum TransmissionModel {
    /// Start and stop bit around every byte.
    #[value(name = "async", alias = "asynchronous")]
    Asynchronous,
    /// One synchronization pattern for the whole transmission.
    #[value(name = "sync", alias = "synchronous")]
    Synchronous,
}

impl TransmissionModel {
    /// Both models, asynchronous first.
    pub const ALL: [TransmissionModel; 2] = [Self::Asynchronous, Self::Synchronous];

    fn overhead_label(self) -> &'static str {
        match self {
            Self::Asynchronous => "start + stop bits",
            Self::Synchronous => "sync pattern",
        }
    }
}

impl fmt::Display for TransmissionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asynchronous => f.write_str("Asynchronous"),
            Self::Synchronous => f.write_str("Synchronous"),
        }
    }
}

/// Bit accounting of one payload under one framing model.
///
/// Always built through [`account`], so `total_bits` is the sum of data and
/// overhead bits and the efficiency is derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameAccounting {
    model: TransmissionModel,
    data_bits: u64,
    overhead_bits: u64,
    total_bits: u64,
    efficiency_percent: f64,
}

impl FrameAccounting {
    fn new(
        model: TransmissionModel,
        num_bytes: u64,
        data_bits: u64,
        overhead_bits: u64,
    ) -> Result<Self> {
        let total_bits = data_bits
            .checked_add(overhead_bits)
            .ok_or(FramingError::Overflow(num_bytes))?;
        let efficiency_percent = compute_efficiency(data_bits, overhead_bits)?;

        trace!(%model, data_bits, overhead_bits, efficiency_percent, "Accounted frame");

        Ok(Self {
            model,
            data_bits,
            overhead_bits,
            total_bits,
            efficiency_percent,
        })
    }

    /// Framing model this accounting was computed for.
    pub fn model(&self) -> TransmissionModel {
        self.model
    }

    /// Payload bits.
    pub fn data_bits(&self) -> u64 {
        self.data_bits
    }

    /// Framing or synchronization bits.
    pub fn overhead_bits(&self) -> u64 {
        self.overhead_bits
    }

    /// Data plus overhead bits.
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Share of transmitted bits that carry payload, in percent.
    pub fn efficiency_percent(&self) -> f64 {
        self.efficiency_percent
    }

    /// Share of transmitted bits spent on framing, in percent.
    pub fn overhead_percent(&self) -> f64 {
        100.0 * self.overhead_bits as f64 / self.total_bits as f64
    }
}

impl fmt::Display for FrameAccounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.model)?;
        writeln!(f, "  Data bits:     {}", self.data_bits)?;
        writeln!(
            f,
            "  Overhead bits: {} ({})",
            self.overhead_bits,
            self.model.overhead_label()
        )?;
        writeln!(f, "  Total bits:    {}", self.total_bits)?;
        write!(f, "  Efficiency:    {:.1}%", self.efficiency_percent)
    }
}

/// Both models applied to the same payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelComparison {
    /// Payload size in bytes
    pub num_bytes: u64,
    /// Asynchronous accounting
    pub asynchronous: FrameAccounting,
    /// Synchronous accounting
    pub synchronous: FrameAccounting,
    /// Synchronous minus asynchronous efficiency, in percentage points
    pub efficiency_delta_percent: f64,
}

impl ModelComparison {
    /// Model with the higher efficiency, `None` when both are equal.
    pub fn more_efficient(&self) -> Option<TransmissionModel> {
        if self.efficiency_delta_percent > 0.0 {
            Some(TransmissionModel::Synchronous)
        } else if self.efficiency_delta_percent < 0.0 {
            Some(TransmissionModel::Asynchronous)
        } else {
            None
        }
    }
}

impl fmt::Display for ModelComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transmitting {} bytes:", self.num_bytes)?;
        writeln!(f)?;
        writeln!(f, "{}", self.asynchronous)?;
        writeln!(f)?;
        writeln!(f, "{}", self.synchronous)?;
        writeln!(f)?;

        match self.more_efficient() {
            Some(model) => write!(
                f,
                "Difference: {model} is {:.1}% more efficient",
                self.efficiency_delta_percent.abs()
            ),
            None => write!(f, "Difference: none, both models are equally efficient"),
        }
    }
}

/// Percentage of `data_bits` in the whole transmission.
///
/// Fails with [`FramingError::ZeroTotalBits`] when nothing is transmitted.
pub fn compute_efficiency(data_bits: u64, overhead_bits: u64) -> Result<f64> {
    if data_bits == 0 && overhead_bits == 0 {
        return Err(FramingError::ZeroTotalBits);
    }

    let total = data_bits as f64 + overhead_bits as f64;
    Ok(100.0 * data_bits as f64 / total)
}

/// Accounts `num_bytes` of payload under `model`.
///
/// Zero-byte payloads are rejected with [`FramingError::EmptyPayload`] for
/// both models.
#[instrument(level = "trace")]
pub fn account(model: TransmissionModel, num_bytes: u64) -> Result<FrameAccounting> {
    if num_bytes == 0 {
        return Err(FramingError::EmptyPayload);
    }

    let overflow = || FramingError::Overflow(num_bytes);
    let data_bits = num_bytes.checked_mul(BITS_PER_BYTE).ok_or_else(overflow)?;

    let overhead_bits = match model {
        TransmissionModel::Asynchronous => num_bytes
            .checked_mul(ASYNC_OVERHEAD_PER_BYTE)
            .ok_or_else(overflow)?,
        TransmissionModel::Synchronous => SYNC_PATTERN_BITS,
    };

    FrameAccounting::new(model, num_bytes, data_bits, overhead_bits)
}

/// Start/stop-bit framing: 2 overhead bits per byte.
pub fn account_asynchronous(num_bytes: u64) -> Result<FrameAccounting> {
    account(TransmissionModel::Asynchronous, num_bytes)
}

/// Synchronous framing: one 16-bit sync pattern regardless of size.
pub fn account_synchronous(num_bytes: u64) -> Result<FrameAccounting> {
    account(TransmissionModel::Synchronous, num_bytes)
}

/// Accounts `num_bytes` under both models.
pub fn compare_models(num_bytes: u64) -> Result<ModelComparison> {
    let asynchronous = account_asynchronous(num_bytes)?;
    let synchronous = account_synchronous(num_bytes)?;

    Ok(ModelComparison {
        num_bytes,
        asynchronous,
        synchronous,
        efficiency_delta_percent: synchronous.efficiency_percent - asynchronous.efficiency_percent,
    })
}

/// Payload size at which the sync pattern costs as much as per-byte framing.
pub fn crossover_bytes() -> u64 {
    SYNC_PATTERN_BITS.div_ceil(ASYNC_OVERHEAD_PER_BYTE)
}
