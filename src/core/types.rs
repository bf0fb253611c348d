use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Three-point time range backing one chart row.
///
/// `queue_start..active_start` is the queued phase and
/// `active_start..end` the active phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub queue_start: f64,
    pub active_start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(queue_start: f64, active_start: f64, end: f64) -> ChartResult<Self> {
        let interval = Self {
            queue_start,
            active_start,
            end,
        };
        interval.validate()?;
        Ok(interval)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.queue_start.is_finite() || !self.active_start.is_finite() || !self.end.is_finite()
        {
            return Err(ChartError::InvalidInput(
                "interval bounds must be finite".to_owned(),
            ));
        }
        if self.queue_start > self.active_start || self.active_start > self.end {
            return Err(ChartError::InvalidInput(format!(
                "interval bounds must be ordered: queue_start={} <= active_start={} <= end={}",
                self.queue_start, self.active_start, self.end
            )));
        }
        Ok(())
    }

    /// Length of the active phase.
    #[must_use]
    pub fn duration(self) -> f64 {
        self.end - self.active_start
    }

    #[must_use]
    pub fn bounds(self) -> [f64; 3] {
        [self.queue_start, self.active_start, self.end]
    }
}

/// Capability required from the caller-owned payload of each row.
pub trait RowMetadata {
    /// Duration printed next to the bar, in the chart's time unit.
    fn duration(&self) -> f64;

    /// Human-readable name usable as label text.
    fn name(&self) -> &str;
}

/// One chart row: an interval plus caller metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<M> {
    pub interval: Interval,
    pub metadata: M,
}

impl<M> Row<M> {
    #[must_use]
    pub fn new(interval: Interval, metadata: M) -> Self {
        Self { interval, metadata }
    }
}

/// Total drawing canvas; also used as the SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Reserved space on each side of the canvas, in CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidInput(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Drawable region left after subtracting margins from the chart box.
///
/// Only produced by `LayoutEngine`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
