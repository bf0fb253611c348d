use tracing::{debug, warn};

use crate::core::{
    ChartBox, Extremes, ExtremesOverride, GanttScale, LayoutEngine, Margin, PlotBox, Row,
    RowMetadata, resolve_extremes,
};
use crate::error::ChartResult;
use crate::render::RenderFrame;
use crate::text::{EstimatedTextMeasurer, MeasureCacheStats, MeasureSession, TextMeasurer};

use super::GanttChartConfig;
use super::validation::validate_chart_config;

/// Entry point of the chart-building protocol.
///
/// Building a chart is a linear sequence of typed stages:
///
/// 1. `GanttChart`: size, margins and extreme overrides.
/// 2. `LabelStage` (after `set_data`): header and label columns. Label
///    columns grow the left margin, which invalidates the scale.
/// 3. `PlotStage` (after `update_scale`): bars, marks and stripes drawn with
///    a scale recomputed from the final margins.
///
/// Bars and marks are only reachable through `update_scale`, so drawing with
/// a scale computed before the last margin change cannot be expressed.
#[derive(Debug)]
pub struct GanttChart<T: TextMeasurer = EstimatedTextMeasurer> {
    config: GanttChartConfig,
    layout: LayoutEngine,
    overrides: ExtremesOverride,
    measure: MeasureSession<T>,
}

impl GanttChart<EstimatedTextMeasurer> {
    pub fn new(config: GanttChartConfig) -> ChartResult<Self> {
        Self::with_measurer(config, EstimatedTextMeasurer::new())
    }
}

impl<T: TextMeasurer> GanttChart<T> {
    pub fn with_measurer(config: GanttChartConfig, measurer: T) -> ChartResult<Self> {
        validate_chart_config(&config)?;
        Ok(Self {
            config,
            layout: LayoutEngine::new(),
            overrides: ExtremesOverride::default(),
            measure: MeasureSession::new(measurer),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GanttChartConfig {
        &self.config
    }

    /// Sets the drawing box; the SVG `viewBox` uses the same values.
    pub fn set_size(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        self.layout.set_size(x, y, width, height)
    }

    /// Sets margins in CSS order: top, right, bottom, left.
    pub fn set_margin(&mut self, top: f64, right: f64, bottom: f64, left: f64) -> ChartResult<()> {
        self.layout.set_margin(top, right, bottom, left)
    }

    /// Extends the resolved domain; `None` keeps the previous override.
    pub fn set_extremes(&mut self, min: Option<f64>, max: Option<f64>) -> ChartResult<()> {
        self.overrides.merge(min, max)
    }

    /// Stores rows in caller order, resolves extremes and computes the
    /// initial scale from the margins known so far.
    pub fn set_data<M: RowMetadata>(self, rows: Vec<Row<M>>) -> ChartResult<LabelStage<M, T>> {
        let Self {
            config,
            mut layout,
            overrides,
            measure,
        } = self;

        let extremes = resolve_extremes(&rows, overrides)?;
        let chart_box = layout.chart_box()?;
        let plot_box = layout.update_plot_box()?;
        let scale = GanttScale::from_plot_box(plot_box, extremes, rows.len())?;
        debug!(rows = rows.len(), "set chart data");

        Ok(LabelStage {
            state: ChartState {
                config,
                layout,
                measure,
                rows,
                extremes,
                plot_box,
                scale,
                frame: RenderFrame::new(chart_box),
                mark_offset_px: 0.0,
            },
        })
    }
}

/// Mutable chart state shared by the data-bearing stages.
#[derive(Debug)]
pub(super) struct ChartState<M, T: TextMeasurer> {
    pub(super) config: GanttChartConfig,
    pub(super) layout: LayoutEngine,
    pub(super) measure: MeasureSession<T>,
    pub(super) rows: Vec<Row<M>>,
    pub(super) extremes: Extremes,
    pub(super) plot_box: PlotBox,
    pub(super) scale: GanttScale,
    pub(super) frame: RenderFrame,
    /// Vertical offset of the next mark label; grows per mark on this chart.
    pub(super) mark_offset_px: f64,
}

impl<M, T: TextMeasurer> ChartState<M, T> {
    pub(super) fn margin(&self) -> Margin {
        self.layout.margin()
    }

    pub(super) fn warn_on_row_mismatch(&self, what: &str, count: usize) {
        if count != self.rows.len() {
            warn!(
                what,
                count,
                rows = self.rows.len(),
                "column length differs from row count"
            );
        }
    }
}

/// Data is set; header and label columns may be drawn.
#[derive(Debug)]
pub struct LabelStage<M, T: TextMeasurer = EstimatedTextMeasurer> {
    pub(super) state: ChartState<M, T>,
}

/// Scale is final; bars, marks and stripes may be drawn.
#[derive(Debug)]
pub struct PlotStage<M, T: TextMeasurer = EstimatedTextMeasurer> {
    pub(super) state: ChartState<M, T>,
}

macro_rules! stage_accessors {
    ($stage:ident) => {
        impl<M, T: TextMeasurer> $stage<M, T> {
            #[must_use]
            pub fn config(&self) -> &GanttChartConfig {
                &self.state.config
            }

            #[must_use]
            pub fn rows(&self) -> &[Row<M>] {
                &self.state.rows
            }

            #[must_use]
            pub fn chart_box(&self) -> ChartBox {
                self.state.frame.chart_box
            }

            #[must_use]
            pub fn margin(&self) -> Margin {
                self.state.margin()
            }

            /// Plot box the current scale was computed from.
            #[must_use]
            pub fn plot_box(&self) -> PlotBox {
                self.state.plot_box
            }

            #[must_use]
            pub fn extremes(&self) -> Extremes {
                self.state.extremes
            }

            #[must_use]
            pub fn scale(&self) -> GanttScale {
                self.state.scale
            }

            #[must_use]
            pub fn frame(&self) -> &RenderFrame {
                &self.state.frame
            }

            #[must_use]
            pub fn measure_stats(&self) -> MeasureCacheStats {
                self.state.measure.stats()
            }
        }
    };
}

stage_accessors!(LabelStage);
stage_accessors!(PlotStage);
