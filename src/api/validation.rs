use crate::error::{ChartError, ChartResult};

use super::{GanttChartConfig, GanttStyle};

pub(super) fn validate_chart_config(config: &GanttChartConfig) -> ChartResult<()> {
    if !config.bar_padding.is_finite() || !(0.0..0.5).contains(&config.bar_padding) {
        return Err(ChartError::InvalidData(
            "bar padding must be finite and in [0, 0.5)".to_owned(),
        ));
    }
    if config.label_max_chars == 0 {
        return Err(ChartError::InvalidData(
            "label max chars must be > 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("label gap", config.label_gap_px),
        ("mark spacing step", config.mark_spacing_step_px),
        ("mark line overhang", config.mark_line_overhang_px),
        ("mark label inset", config.mark_label_inset_px),
        ("duration label gap", config.duration_label_gap_px),
        ("row height", config.row_height_px),
        ("chrome height", config.chrome_height_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    if !config.canvas_width_px.is_finite() || config.canvas_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "canvas width must be finite and > 0".to_owned(),
        ));
    }
    config.margin.validate()?;
    validate_style(&config.style)
}

fn validate_style(style: &GanttStyle) -> ChartResult<()> {
    for color in [
        style.bar_color,
        style.queued_bar_color,
        style.label_color,
        style.stripe_color,
        style.header_color,
    ] {
        color.validate()?;
    }
    for font in [&style.label_font, &style.mark_label_font, &style.header_font] {
        font.validate()?;
    }
    if !style.bar_corner_radius_px.is_finite() || style.bar_corner_radius_px < 0.0 {
        return Err(ChartError::InvalidData(
            "bar corner radius must be finite and >= 0".to_owned(),
        ));
    }
    if !style.mark_stroke_width_px.is_finite() || style.mark_stroke_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "mark stroke width must be finite and > 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("label dy", style.label_dy_ex),
        ("mark label dy", style.mark_label_dy_ex),
        ("header x", style.header_x_px),
        ("header y", style.header_y_px),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!("{name} must be finite")));
        }
    }
    Ok(())
}
