use tracing::debug;

use crate::core::types::{ChartBox, Margin, PlotBox};
use crate::error::{ChartError, ChartResult};

/// Owns the chart box and margin; the plot box is always derived from them.
///
/// `update_plot_box` must run after any size or margin change before the
/// plot box is read again.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    chart_box: Option<ChartBox>,
    margin: Margin,
    plot_box: Option<PlotBox>,
}

impl LayoutEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_size(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        let chart_box = ChartBox::new(x, y, width, height);
        if !chart_box.is_valid() {
            return Err(ChartError::InvalidInput(format!(
                "drawing box must be finite with positive size: width={width}, height={height}"
            )));
        }
        self.chart_box = Some(chart_box);
        Ok(())
    }

    pub fn set_margin(&mut self, top: f64, right: f64, bottom: f64, left: f64) -> ChartResult<()> {
        let margin = Margin::new(top, right, bottom, left);
        margin.validate()?;
        self.margin = margin;
        Ok(())
    }

    /// Widens the left margin; negative or non-finite growth is rejected so
    /// the margin never shrinks.
    pub fn grow_left_margin(&mut self, amount: f64) -> ChartResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "left margin growth must be finite and >= 0, got {amount}"
            )));
        }
        let previous = self.margin.left;
        self.margin.left += amount;
        debug!(previous, left = self.margin.left, "grew left margin");
        Ok(())
    }

    pub fn update_plot_box(&mut self) -> ChartResult<PlotBox> {
        let chart_box = self.chart_box()?;
        let margin = self.margin;
        let plot = PlotBox {
            x: margin.left,
            y: margin.top,
            width: chart_box.width - (margin.left + margin.right),
            height: chart_box.height - (margin.top + margin.bottom),
        };
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "margins leave no room to plot: plot width={}, height={}",
                plot.width, plot.height
            )));
        }
        self.plot_box = Some(plot);
        Ok(plot)
    }

    pub fn chart_box(&self) -> ChartResult<ChartBox> {
        self.chart_box.ok_or_else(|| {
            ChartError::InvalidInput("drawing size must be set before layout".to_owned())
        })
    }

    #[must_use]
    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// Last plot box computed by `update_plot_box`.
    #[must_use]
    pub fn plot_box(&self) -> Option<PlotBox> {
        self.plot_box
    }
}
