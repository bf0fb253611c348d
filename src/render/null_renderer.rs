use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart builds.
///
/// It still validates frame content so invalid geometry surfaces without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rect_count();
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        Ok(())
    }
}
