//! Parallel comparison over a range of payload sizes.

use std::ops::RangeInclusive;

use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::{FramingError, Result},
    framing::{ModelComparison, compare_models},
};

/// Model comparisons ordered by payload size.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    comparisons: Vec<ModelComparison>,
}

impl Sweep {
    /// All comparisons, smallest payload first.
    pub fn comparisons(&self) -> &[ModelComparison] {
        &self.comparisons
    }

    /// First swept payload where synchronous framing is at least as
    /// efficient as asynchronous framing.
    pub fn crossover(&self) -> Option<u64> {
        self.comparisons
            .iter()
            .find(|c| c.efficiency_delta_percent >= 0.0)
            .map(|c| c.num_bytes)
    }
}

/// Compares both models for every payload size in `range`.
///
/// `progress` is ticked once per payload size; pass
/// [`ProgressBar::hidden`] to run silently.
pub fn sweep(range: RangeInclusive<u64>, progress: &ProgressBar) -> Result<Sweep> {
    let (start, end) = (*range.start(), *range.end());

    if range.is_empty() {
        return Err(FramingError::EmptyRange { start, end });
    }
    if start == 0 {
        return Err(FramingError::EmptyPayload);
    }

    progress.set_length(end - start + 1);

    let comparisons = range
        .into_par_iter()
        .map(|num_bytes| {
            let comparison = compare_models(num_bytes);
            progress.inc(1);
            comparison
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish_and_clear();
    debug!(start, end, "Sweep finished");

    Ok(Sweep { comparisons })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::{TransmissionModel, crossover_bytes};

    #[test_log::test]
    fn test_sweep_ordered_with_crossover() {
        let result = sweep(1..=64, &ProgressBar::hidden()).unwrap();

        let sizes: Vec<_> = result.comparisons().iter().map(|c| c.num_bytes).collect();
        assert_eq!(sizes, (1..=64).collect::<Vec<_>>());
        assert_eq!(result.crossover(), Some(crossover_bytes()));

        for comparison in result.comparisons() {
            assert_eq!(*comparison, compare_models(comparison.num_bytes).unwrap());
        }
    }

    #[test_log::test]
    fn test_sweep_below_crossover() {
        let result = sweep(1..=7, &ProgressBar::hidden()).unwrap();

        assert_eq!(result.crossover(), None);
        assert!(
            result
                .comparisons()
                .iter()
                .all(|c| c.more_efficient() == Some(TransmissionModel::Asynchronous))
        );
    }

    #[test_log::test]
    fn test_sweep_progress_length() {
        let progress = ProgressBar::hidden();
        sweep(10..=19, &progress).unwrap();

        assert_eq!(progress.length(), Some(10));
        assert_eq!(progress.position(), 10);
    }

    #[test_log::test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_sweep_invalid_ranges() {
        assert_eq!(
            sweep(5..=4, &ProgressBar::hidden()),
            Err(FramingError::EmptyRange { start: 5, end: 4 })
        );
        assert_eq!(
            sweep(0..=10, &ProgressBar::hidden()),
            Err(FramingError::EmptyPayload)
        );
    }
}
