use crate::render::{GanttLayerKind, PrimitiveGroup, RectPrimitive};
use crate::text::TextMeasurer;

use super::PlotStage;

impl<M, T: TextMeasurer> PlotStage<M, T> {
    /// Draws a full-width band behind every even row (0, 2, 4, ...),
    /// beneath everything drawn so far.
    pub fn render_stripes(&mut self) {
        let state = &mut self.state;
        let width = state.frame.chart_box.width;
        let top = state.margin().top;
        let band = state.scale.row_to_y();
        let color = state.config.style.stripe_color;

        let mut group = PrimitiveGroup::new();
        for row in (0..state.rows.len()).step_by(2) {
            group.rects.push(RectPrimitive::new(
                0.0,
                top + state.scale.row_to_px(row as f64),
                width,
                band,
                color,
            ));
        }
        state.frame.push_group_behind(GanttLayerKind::Stripes, group);
    }
}
