mod bar_renderer;
mod chart;
mod chart_config;
mod chart_finalizer;
mod label_renderer;
mod mark_renderer;
mod stripe_renderer;
mod validation;

pub use bar_renderer::{DurationLabelPlacement, place_duration_label};
pub use chart::{GanttChart, LabelStage, PlotStage};
pub use chart_config::{GanttChartConfig, GanttStyle};
