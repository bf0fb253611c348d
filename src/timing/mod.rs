//! Adapter from browser performance-timing captures to chart rows.
//!
//! Captures use the JSON shape of the Resource Timing and Navigation Timing
//! APIs (camelCase fields, milliseconds relative to the page time origin).

mod resource_name;
mod timeline;

pub use resource_name::short_resource_name;
pub use timeline::{NOT_SUPPORTED_MESSAGE, TimelineOutput, build_resources_timeline};

use serde::{Deserialize, Serialize};

use crate::core::{Interval, RowMetadata};
use crate::error::{ChartError, ChartResult};

/// One `PerformanceResourceTiming` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTiming {
    pub name: String,
    #[serde(default)]
    pub initiator_type: String,
    pub start_time: f64,
    /// Zero when the browser withholds it (cross-origin without
    /// `Timing-Allow-Origin`).
    #[serde(default)]
    pub response_start: f64,
    pub response_end: f64,
}

impl ResourceTiming {
    /// Queued phase runs from request start to first byte, active phase from
    /// first byte to response end. A withheld first byte collapses the queued
    /// phase onto the start.
    pub fn interval(&self) -> ChartResult<Interval> {
        if !self.start_time.is_finite()
            || !self.response_start.is_finite()
            || !self.response_end.is_finite()
        {
            return Err(ChartError::InvalidInput(format!(
                "resource `{}` has non-finite timing",
                self.name
            )));
        }
        let end = self.response_end.max(self.start_time);
        let active_start = if self.response_start > 0.0 {
            self.response_start.clamp(self.start_time, end)
        } else {
            self.start_time
        };
        Interval::new(self.start_time, active_start, end)
    }
}

/// Page-level instants from `PerformanceTiming`, as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTiming {
    pub navigation_start: f64,
    pub dom_interactive: f64,
    pub load_event_start: f64,
    pub load_event_end: f64,
}

impl PageTiming {
    #[must_use]
    pub fn dom_complete_offset(self) -> f64 {
        self.dom_interactive - self.navigation_start
    }

    #[must_use]
    pub fn loaded_offset(self) -> f64 {
        self.load_event_start - self.navigation_start
    }

    #[must_use]
    pub fn load_end_offset(self) -> f64 {
        self.load_event_end - self.navigation_start
    }
}

/// Everything the timeline needs from the host.
///
/// `resources` is `None` when the host does not support resource timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingCapture {
    #[serde(default)]
    pub resources: Option<Vec<ResourceTiming>>,
    pub timing: PageTiming,
}

impl TimingCapture {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse timing capture: {e}")))
    }
}

/// Row payload built from one resource entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceEntry {
    pub timing: ResourceTiming,
    pub short_name: String,
    pub initiator: String,
}

impl ResourceEntry {
    #[must_use]
    pub fn new(timing: ResourceTiming) -> Self {
        let short_name = short_resource_name(&timing.name);
        let initiator = short_resource_name(&timing.initiator_type);
        Self {
            timing,
            short_name,
            initiator,
        }
    }
}

impl RowMetadata for ResourceEntry {
    fn duration(&self) -> f64 {
        self.timing.response_end - self.timing.start_time
    }

    fn name(&self) -> &str {
        &self.short_name
    }
}
