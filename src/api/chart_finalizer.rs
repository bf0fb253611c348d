use tracing::debug;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};
use crate::text::TextMeasurer;

use super::PlotStage;

impl<M, T: TextMeasurer> PlotStage<M, T> {
    /// Releases the measurement helper and hands out the finished frame.
    ///
    /// Dropping a stage without calling `finish` also releases the helper.
    pub fn finish(self) -> ChartResult<RenderFrame> {
        let mut state = self.state;
        state.measure.release();
        state.frame.validate()?;
        debug!(
            rects = state.frame.rect_count(),
            lines = state.frame.line_count(),
            texts = state.frame.text_count(),
            "finished chart frame"
        );
        Ok(state.frame)
    }

    /// Finishes the chart and draws it with `renderer`.
    pub fn render_into<R: Renderer>(self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.finish()?;
        renderer.render(&frame)
    }
}
