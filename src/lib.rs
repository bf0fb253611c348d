//! gantt-rs: SVG gantt chart engine for resource loading timelines.
//!
//! The engine turns ordered `(interval, metadata)` rows into a scaled,
//! auto-sized vector drawing. Label columns grow the left margin as they are
//! measured, so charts are built through a staged API (`api::GanttChart` →
//! `api::LabelStage` → `api::PlotStage`) that recomputes the scale before
//! anything scale dependent is drawn.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod text;
pub mod timing;

pub use api::{GanttChart, GanttChartConfig};
pub use error::{ChartError, ChartResult};
