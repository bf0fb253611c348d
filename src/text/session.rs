use std::collections::HashMap;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use super::{TextMeasurer, TextMetrics, TextStyle};

/// Runtime metrics exposed by a measurement session's cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasureCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    font_family: String,
    font_size_px: OrderedFloat<f64>,
}

/// Scoped owner of a `TextMeasurer`.
///
/// The measurer is acquired on first use and released exactly once, either
/// through `release` or when the session is dropped on an early exit.
#[derive(Debug)]
pub struct MeasureSession<T: TextMeasurer> {
    measurer: T,
    acquired: bool,
    released: bool,
    entries: HashMap<MeasureKey, TextMetrics>,
    hits: u64,
    misses: u64,
}

impl<T: TextMeasurer> MeasureSession<T> {
    const MAX_ENTRIES: usize = 4096;

    #[must_use]
    pub fn new(measurer: T) -> Self {
        Self {
            measurer,
            acquired: false,
            released: false,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn measure(&mut self, text: &str, style: &TextStyle) -> TextMetrics {
        let key = MeasureKey {
            text: text.to_owned(),
            font_family: style.font_family.clone(),
            font_size_px: OrderedFloat(style.font_size_px),
        };
        if let Some(metrics) = self.entries.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return *metrics;
        }

        if !self.is_acquired() {
            trace!("acquiring text measurement helper");
            self.measurer.acquire();
            self.acquired = true;
            self.released = false;
        }

        let metrics = self.measurer.measure(text, style);
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, metrics);
        metrics
    }

    /// Releases the measurer if it was acquired. Later calls are no-ops.
    pub fn release(&mut self) {
        if !self.acquired || self.released {
            return;
        }
        self.measurer.release();
        self.released = true;
        debug!(
            hits = self.hits,
            misses = self.misses,
            "released text measurement helper"
        );
        self.entries.clear();
    }

    #[must_use]
    pub fn is_acquired(&self) -> bool {
        self.acquired && !self.released
    }

    #[must_use]
    pub fn stats(&self) -> MeasureCacheStats {
        MeasureCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

impl<T: TextMeasurer> Drop for MeasureSession<T> {
    fn drop(&mut self) {
        self.release();
    }
}
