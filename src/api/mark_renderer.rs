use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, GanttLayerKind, LinePrimitive, PrimitiveGroup, TextHAlign, TextPrimitive};
use crate::text::TextMeasurer;

use super::PlotStage;

impl<M, T: TextMeasurer> PlotStage<M, T> {
    /// Draws a vertical reference line at `instant` with a right-aligned
    /// label below the plot. Each mark on this chart places its label one
    /// spacing step lower than the previous one.
    pub fn render_mark(&mut self, instant: f64, label: &str, color: Color) -> ChartResult<()> {
        if !instant.is_finite() {
            return Err(ChartError::InvalidInput(
                "mark instant must be finite".to_owned(),
            ));
        }
        color.validate()?;

        let state = &mut self.state;
        if instant < state.extremes.min || instant > state.extremes.max {
            warn!(
                instant,
                min = state.extremes.min,
                max = state.extremes.max,
                "mark lies outside the resolved extremes"
            );
        }

        let margin = state.margin();
        let config = &state.config;
        let style = &config.style;
        let offset = state.mark_offset_px;
        let x = margin.left + state.scale.time_to_px(instant);
        let base = margin.top + state.plot_box.height;

        let line = LinePrimitive::vertical(
            x,
            margin.top,
            base + offset + config.mark_line_overhang_px,
            style.mark_stroke_width_px,
            color,
        );
        let text = TextPrimitive::new(
            label,
            x - config.mark_label_inset_px,
            base + 2.0 + offset,
            style.mark_label_font.clone(),
            style.label_color,
        )
        .with_h_align(TextHAlign::Right)
        .with_dy_ex(style.mark_label_dy_ex);

        state
            .frame
            .push_group(GanttLayerKind::MarkLines, PrimitiveGroup::new().with_line(line));
        state
            .frame
            .push_group(GanttLayerKind::MarkLabels, PrimitiveGroup::new().with_text(text));
        state.mark_offset_px += config.mark_spacing_step_px;
        trace!(instant, x, offset, label, "rendered mark");
        Ok(())
    }

    /// Vertical offset the next mark label will receive.
    #[must_use]
    pub fn next_mark_offset(&self) -> f64 {
        self.state.mark_offset_px
    }
}
