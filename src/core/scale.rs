use tracing::debug;

use crate::core::extremes::Extremes;
use crate::core::types::PlotBox;
use crate::error::{ChartError, ChartResult};

/// Pair of independent linear factors used by every drawing routine.
///
/// Horizontal positions encode time from a shared origin (time 0), vertical
/// positions encode a discrete row index, so any pixel coordinate is
/// `value * factor + offset`.
///
/// A scale is only valid for the plot box and extremes it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GanttScale {
    time_to_x: f64,
    row_to_y: f64,
}

impl GanttScale {
    pub fn from_plot_box(plot: PlotBox, extremes: Extremes, row_count: usize) -> ChartResult<Self> {
        if !plot.width.is_finite() || !plot.height.is_finite() {
            return Err(ChartError::InvalidInput(
                "plot box dimensions must be finite".to_owned(),
            ));
        }
        if !extremes.max.is_finite() {
            return Err(ChartError::InvalidInput(
                "resolved max must be finite".to_owned(),
            ));
        }
        if extremes.max <= 0.0 {
            return Err(ChartError::DegenerateScale(format!(
                "resolved max must be > 0 for a time axis starting at 0, got {}",
                extremes.max
            )));
        }
        if row_count == 0 {
            return Err(ChartError::DegenerateScale(
                "row count is zero; row axis has no extent".to_owned(),
            ));
        }

        let scale = Self {
            time_to_x: plot.width / extremes.max,
            row_to_y: plot.height / row_count as f64,
        };
        debug!(
            plot_width = plot.width,
            plot_height = plot.height,
            time_to_x = scale.time_to_x,
            row_to_y = scale.row_to_y,
            "computed scale"
        );
        Ok(scale)
    }

    /// Pixels per time unit.
    #[must_use]
    pub fn time_to_x(self) -> f64 {
        self.time_to_x
    }

    /// Pixels per row.
    #[must_use]
    pub fn row_to_y(self) -> f64 {
        self.row_to_y
    }

    #[must_use]
    pub fn time_to_px(self, time: f64) -> f64 {
        time * self.time_to_x
    }

    /// Accepts fractional rows so callers can address band centers and padding.
    #[must_use]
    pub fn row_to_px(self, row: f64) -> f64 {
        row * self.row_to_y
    }
}
