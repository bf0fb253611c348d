//! Text measurement used for margin growth and duration-label placement.
//!
//! Measurements must be taken with the exact `TextStyle` the drawn label
//! carries, so primitives and measurements share one style value.

mod estimate;
mod session;

pub use estimate::EstimatedTextMeasurer;
pub use session::{MeasureCacheStats, MeasureSession};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Font styling shared by a drawn label and its measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size_px: f64,
}

impl TextStyle {
    #[must_use]
    pub fn new(font_family: impl Into<String>, font_size_px: f64) -> Self {
        Self {
            font_family: font_family.into(),
            font_size_px,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self.font_family.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Measures rendered label extents without drawing anything visible.
///
/// `acquire` and `release` bracket any helper resource the measurer needs.
/// `MeasureSession` calls `acquire` lazily before the first measurement and
/// `release` exactly once afterwards.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> TextMetrics;

    fn acquire(&mut self) {}

    fn release(&mut self) {}
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&mut self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }

    fn acquire(&mut self) {
        (**self).acquire();
    }

    fn release(&mut self) {
        (**self).release();
    }
}
