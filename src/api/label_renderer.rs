use tracing::debug;

use crate::core::GanttScale;
use crate::error::ChartResult;
use crate::render::{GanttLayerKind, PrimitiveGroup, TextPrimitive};
use crate::text::{MeasureSession, TextMeasurer};

use super::{LabelStage, PlotStage};

impl<M, T: TextMeasurer> LabelStage<M, T> {
    /// Draws the fixed chart title. Not scale dependent.
    pub fn render_header(&mut self) {
        let style = &self.state.config.style;
        let header = TextPrimitive::new(
            style.header_text.clone(),
            style.header_x_px,
            style.header_y_px,
            style.header_font.clone(),
            style.header_color,
        );
        self.state
            .frame
            .push_group(GanttLayerKind::Header, PrimitiveGroup::new().with_text(header));
    }

    /// Draws one row-aligned label column at the current left margin, then
    /// grows the left margin by the column's measured width plus the
    /// configured gap. Growth is cumulative across calls.
    ///
    /// Returns the new left margin. The scale computed so far becomes stale;
    /// `update_scale` recomputes it.
    pub fn render_labels<S: AsRef<str>>(&mut self, labels: &[S]) -> ChartResult<f64> {
        let state = &mut self.state;
        state.warn_on_row_mismatch("labels", labels.len());

        let margin = state.margin();
        let style = &state.config.style;
        let mut group = PrimitiveGroup::new();
        for (row, label) in labels.iter().enumerate() {
            let text = truncate_chars(label.as_ref(), state.config.label_max_chars);
            let y = state.scale.row_to_px(row as f64 + 0.5) + margin.top;
            group.texts.push(
                TextPrimitive::new(
                    text,
                    margin.left,
                    y,
                    style.label_font.clone(),
                    style.label_color,
                )
                .with_dy_ex(style.label_dy_ex),
            );
        }

        let column_width = measure_group_width(&mut state.measure, &group);
        state.frame.push_group(GanttLayerKind::Labels, group);
        state
            .layout
            .grow_left_margin(column_width + state.config.label_gap_px)?;

        let left = state.margin().left;
        debug!(labels = labels.len(), column_width, left, "rendered label column");
        Ok(left)
    }

    /// Recomputes the plot box and scale from the current margins and moves
    /// on to plotting.
    pub fn update_scale(self) -> ChartResult<PlotStage<M, T>> {
        let mut state = self.state;
        state.plot_box = state.layout.update_plot_box()?;
        state.scale = GanttScale::from_plot_box(state.plot_box, state.extremes, state.rows.len())?;
        Ok(PlotStage { state })
    }
}

/// Keeps at most `max_chars` Unicode scalar values.
pub(super) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Width of the bounding box enclosing every text in `group`.
pub(super) fn measure_group_width<T: TextMeasurer>(
    measure: &mut MeasureSession<T>,
    group: &PrimitiveGroup,
) -> f64 {
    let mut left = f64::INFINITY;
    let mut right = f64::NEG_INFINITY;
    for text in &group.texts {
        let width = measure.measure(&text.text, &text.style).width;
        let start = text.x - text.h_align.left_offset(width);
        left = left.min(start);
        right = right.max(start + width);
    }
    if left.is_finite() && right.is_finite() {
        (right - left).max(0.0)
    } else {
        0.0
    }
}
