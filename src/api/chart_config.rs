use serde::{Deserialize, Serialize};

use crate::core::Margin;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;
use crate::text::TextStyle;

/// Visual styling of every element the chart draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanttStyle {
    pub bar_color: Color,
    pub queued_bar_color: Color,
    pub bar_corner_radius_px: f64,
    pub label_font: TextStyle,
    pub label_color: Color,
    pub label_dy_ex: f64,
    pub mark_label_font: TextStyle,
    pub mark_label_dy_ex: f64,
    pub mark_stroke_width_px: f64,
    pub stripe_color: Color,
    pub header_text: String,
    pub header_font: TextStyle,
    pub header_x_px: f64,
    pub header_y_px: f64,
    pub header_color: Color,
    /// Time-unit suffix appended to duration labels.
    pub duration_suffix: String,
}

impl Default for GanttStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgba8(0xB8, 0x91, 0xDB, 1.0),
            queued_bar_color: Color::rgba8(0xE0, 0xCE, 0xF0, 1.0),
            bar_corner_radius_px: 8.0,
            label_font: TextStyle::new("Helvetica", 14.0),
            label_color: Color::rgb(0.0, 0.0, 0.0),
            label_dy_ex: 0.5,
            mark_label_font: TextStyle::new("Helvetica", 12.0),
            mark_label_dy_ex: 1.5,
            mark_stroke_width_px: 2.0,
            stripe_color: Color::rgba8(0xEE, 0xEE, 0xEE, 1.0),
            header_text: "Resources loading timeline".to_owned(),
            header_font: TextStyle::new("Helvetica", 20.0),
            header_x_px: 10.0,
            header_y_px: 25.0,
            header_color: Color::rgb(0.0, 0.0, 0.0),
            duration_suffix: "ms".to_owned(),
        }
    }
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file; every field
/// falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanttChartConfig {
    pub style: GanttStyle,
    /// Fraction of a row band left empty above and below each bar.
    pub bar_padding: f64,
    pub label_max_chars: usize,
    pub label_gap_px: f64,
    pub mark_spacing_step_px: f64,
    pub mark_line_overhang_px: f64,
    pub mark_label_inset_px: f64,
    pub duration_label_gap_px: f64,
    pub canvas_width_px: f64,
    pub row_height_px: f64,
    pub chrome_height_px: f64,
    pub margin: Margin,
}

impl Default for GanttChartConfig {
    fn default() -> Self {
        Self {
            style: GanttStyle::default(),
            bar_padding: 0.1,
            label_max_chars: 20,
            label_gap_px: 10.0,
            mark_spacing_step_px: 15.0,
            mark_line_overhang_px: 15.0,
            mark_label_inset_px: 5.0,
            duration_label_gap_px: 5.0,
            canvas_width_px: 800.0,
            row_height_px: 22.0,
            chrome_height_px: 80.0,
            margin: Margin::new(35.0, 10.0, 50.0, 10.0),
        }
    }
}

impl GanttChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: GanttStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_bar_padding(mut self, padding: f64) -> Self {
        self.bar_padding = padding;
        self
    }

    #[must_use]
    pub fn with_label_max_chars(mut self, max_chars: usize) -> Self {
        self.label_max_chars = max_chars;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Canvas height fitting `row_count` rows plus header and mark chrome.
    #[must_use]
    pub fn canvas_height_for_rows(&self, row_count: usize) -> f64 {
        row_count as f64 * self.row_height_px + self.chrome_height_px
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        super::validation::validate_chart_config(&config)?;
        Ok(config)
    }
}
