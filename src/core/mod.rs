pub mod extremes;
pub mod layout;
pub mod scale;
pub mod types;

pub use extremes::{Extremes, ExtremesOverride, resolve_extremes, round_up_to_hundred};
pub use layout::LayoutEngine;
pub use scale::GanttScale;
pub use types::{ChartBox, Interval, Margin, PlotBox, Row, RowMetadata};
