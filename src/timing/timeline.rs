use tracing::{debug, info};

use crate::api::{GanttChart, GanttChartConfig};
use crate::core::{Row, RowMetadata};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, SvgDocument, SvgRenderer};

use super::{ResourceEntry, TimingCapture};

pub const NOT_SUPPORTED_MESSAGE: &str = "This browser doesn't support Resource Timing API :(";

/// Result of turning a capture into a timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineOutput {
    Chart(SvgDocument),
    /// The capture carried no resource entries; show this message instead.
    NotSupported(&'static str),
}

/// Builds the resources loading timeline for `capture`.
///
/// Rows keep capture order. The domain always starts at 0 and reaches at
/// least the end of the load event. Two label columns are drawn (short
/// resource names, then initiator types), followed by bars, the navigation
/// start / DOM complete / loaded marks and row stripes.
pub fn build_resources_timeline(
    capture: &TimingCapture,
    config: &GanttChartConfig,
) -> ChartResult<TimelineOutput> {
    let resources = match capture.resources.as_deref() {
        Some(resources) if !resources.is_empty() => resources,
        _ => {
            info!("no resource timing entries; rendering not-supported notice");
            return Ok(TimelineOutput::NotSupported(NOT_SUPPORTED_MESSAGE));
        }
    };

    let rows = resources
        .iter()
        .map(|timing| Ok(Row::new(timing.interval()?, ResourceEntry::new(timing.clone()))))
        .collect::<ChartResult<Vec<_>>>()?;
    let names: Vec<String> = rows
        .iter()
        .map(|row| row.metadata.name().to_owned())
        .collect();
    let initiators: Vec<String> = rows
        .iter()
        .map(|row| row.metadata.initiator.clone())
        .collect();

    let page = capture.timing;
    let dom_complete = page.dom_complete_offset();
    let loaded = page.loaded_offset();

    let mut chart = GanttChart::new(config.clone())?;
    chart.set_extremes(Some(0.0), Some(page.load_end_offset()))?;
    chart.set_size(
        0.0,
        0.0,
        config.canvas_width_px,
        config.canvas_height_for_rows(rows.len()),
    )?;
    let margin = config.margin;
    chart.set_margin(margin.top, margin.right, margin.bottom, margin.left)?;

    let mut labels = chart.set_data(rows)?;
    labels.render_header();
    labels.render_labels(&names)?;
    labels.render_labels(&initiators)?;

    let mut plot = labels.update_scale()?;
    plot.render_bars();
    plot.render_mark(0.0, "Navigation start: 0ms", Color::rgba8(0, 255, 0, 0.7))?;
    plot.render_mark(
        dom_complete,
        &format!("DOM Complete: {}ms", format_js_number(dom_complete)),
        Color::rgba8(0, 0, 255, 0.7),
    )?;
    plot.render_mark(
        loaded,
        &format!("Loaded: {}ms", format_js_number(loaded)),
        Color::rgba8(255, 0, 0, 0.7),
    )?;
    plot.render_stripes();

    let mut renderer = SvgRenderer::new();
    plot.render_into(&mut renderer)?;
    let document = renderer.take_document().ok_or_else(|| {
        ChartError::InvalidData("svg renderer produced no document".to_owned())
    })?;
    debug!(bytes = document.as_str().len(), "built resources timeline");
    Ok(TimelineOutput::Chart(document))
}

fn format_js_number(value: f64) -> String {
    let mut buffer = ryu_js::Buffer::new();
    buffer.format(value).to_owned()
}
