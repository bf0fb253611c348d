use tracing::{debug, trace};

use crate::core::RowMetadata;
use crate::render::{GanttLayerKind, PrimitiveGroup, RectPrimitive, TextHAlign, TextPrimitive};
use crate::text::TextMeasurer;

use super::PlotStage;

/// Horizontal placement of a duration label next to its bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationLabelPlacement {
    pub x: f64,
    pub h_align: TextHAlign,
    pub flipped: bool,
}

/// Places a label `gap` past `bar_right`; when the label would cross
/// `plot_width` it is right-aligned ending `gap` before `bar_right`.
/// A label ending exactly at `plot_width` still fits.
#[must_use]
pub fn place_duration_label(
    bar_right: f64,
    label_width: f64,
    plot_width: f64,
    gap: f64,
) -> DurationLabelPlacement {
    let x = bar_right + gap;
    if x + label_width > plot_width {
        DurationLabelPlacement {
            x: x - 2.0 * gap,
            h_align: TextHAlign::Right,
            flipped: true,
        }
    } else {
        DurationLabelPlacement {
            x,
            h_align: TextHAlign::Left,
            flipped: false,
        }
    }
}

/// Two-decimal fixed notation where exact ties round away from zero.
///
/// A value lies exactly halfway between two hundredths only when it is an
/// odd multiple of 1/8; `{:.2}` would round those to even.
pub(super) fn format_fixed_two(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{value:.2}")
    }
}

impl<M: RowMetadata, T: TextMeasurer> PlotStage<M, T> {
    /// Draws one queued and one active rectangle per row, plus a duration
    /// label for the active segment. Coordinates are relative to the plot
    /// box origin.
    pub fn render_bars(&mut self) {
        let state = &mut self.state;
        let plot = state.plot_box;
        let scale = state.scale;
        let config = &state.config;
        let style = &config.style;
        let band_height = scale.row_to_px(1.0 - 2.0 * config.bar_padding);

        let mut bars = Vec::with_capacity(state.rows.len());
        let mut labels = PrimitiveGroup::translated(plot.x, plot.y);
        let mut flipped = 0usize;
        for (index, row) in state.rows.iter().enumerate() {
            let n = index as f64;
            let interval = row.interval;
            let top = scale.row_to_px(n + config.bar_padding);

            let queued = RectPrimitive::new(
                scale.time_to_px(interval.queue_start),
                top,
                scale.time_to_px(interval.active_start - interval.queue_start),
                band_height,
                style.queued_bar_color,
            )
            .with_corner_radius(style.bar_corner_radius_px);
            let active = RectPrimitive::new(
                scale.time_to_px(interval.active_start),
                top,
                scale.time_to_px(interval.end - interval.active_start),
                band_height,
                style.bar_color,
            )
            .with_corner_radius(style.bar_corner_radius_px);
            bars.push(
                PrimitiveGroup::translated(plot.x, plot.y)
                    .with_rect(queued)
                    .with_rect(active),
            );

            let text = format!(
                "{}{}",
                format_fixed_two(row.metadata.duration()),
                style.duration_suffix
            );
            let width = state.measure.measure(&text, &style.label_font).width;
            let placement =
                place_duration_label(active.right(), width, plot.width, config.duration_label_gap_px);
            if placement.flipped {
                flipped += 1;
                trace!(row = index, width, "flipped duration label");
            }
            labels.texts.push(
                TextPrimitive::new(
                    text,
                    placement.x,
                    scale.row_to_px(n + 0.5),
                    style.label_font.clone(),
                    style.label_color,
                )
                .with_h_align(placement.h_align)
                .with_dy_ex(style.label_dy_ex),
            );
        }

        debug!(rows = bars.len(), flipped, "rendered bars");
        for group in bars {
            state.frame.push_group(GanttLayerKind::Bars, group);
        }
        state.frame.push_group(GanttLayerKind::DurationLabels, labels);
    }
}
