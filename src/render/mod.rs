mod export;
mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use export::{DEFAULT_EXPORT_FILE_NAME, SvgDocument};
pub use frame::{PrimitiveGroup, RenderFrame};
pub use layer_stack::GanttLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from scale and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
