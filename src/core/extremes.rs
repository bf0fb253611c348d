use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::Row;
use crate::error::{ChartError, ChartResult};

/// Resolved horizontal domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    pub min: f64,
    pub max: f64,
}

/// Caller-supplied bounds folded together with the data bounds.
///
/// Overrides can only widen the domain: the fold takes the min/max across
/// data and overrides alike.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtremesOverride {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ExtremesOverride {
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Merges new values in; `None` leaves the previous value untouched.
    pub fn merge(&mut self, min: Option<f64>, max: Option<f64>) -> ChartResult<()> {
        for value in [min, max].into_iter().flatten() {
            if !value.is_finite() {
                return Err(ChartError::InvalidInput(
                    "extremes override must be finite".to_owned(),
                ));
            }
        }
        if min.is_some() {
            self.min = min;
        }
        if max.is_some() {
            self.max = max;
        }
        Ok(())
    }

    fn values(self) -> impl Iterator<Item = f64> {
        self.min.into_iter().chain(self.max)
    }
}

/// Rounds up to the next multiple of 100 (`100 * ceil(value / 100)`).
#[must_use]
pub fn round_up_to_hundred(value: f64) -> f64 {
    (value / 100.0).ceil() * 100.0
}

/// Folds every interval bound and override into `(min, max)`, then rounds
/// `max` up to a multiple of 100. `min` is left as found.
pub fn resolve_extremes<M>(rows: &[Row<M>], overrides: ExtremesOverride) -> ChartResult<Extremes> {
    if rows.is_empty() {
        return Err(ChartError::InvalidInput(
            "cannot derive extremes from an empty row sequence".to_owned(),
        ));
    }

    let (min, max) = rows
        .iter()
        .enumerate()
        .try_fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (index, row)| {
            row.interval.validate().map_err(|err| {
                ChartError::InvalidInput(format!("row {index}: {err}"))
            })?;
            Ok::<_, ChartError>(
                row.interval
                    .bounds()
                    .into_iter()
                    .fold((min, max), |(lo, hi), value| (lo.min(value), hi.max(value))),
            )
        })?;
    let (min, max) = overrides
        .values()
        .fold((min, max), |(lo, hi), value| (lo.min(value), hi.max(value)));

    let extremes = Extremes {
        min,
        max: round_up_to_hundred(max),
    };
    debug!(
        rows = rows.len(),
        min = extremes.min,
        raw_max = max,
        max = extremes.max,
        "resolved extremes"
    );
    Ok(extremes)
}
