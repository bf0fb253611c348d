use approx::assert_relative_eq;
use gantt_rs::api::{GanttChart, GanttChartConfig, PlotStage, place_duration_label};
use gantt_rs::core::{Interval, Row, RowMetadata};
use gantt_rs::render::{Color, GanttLayerKind, TextHAlign};
use gantt_rs::text::{TextMeasurer, TextMetrics, TextStyle};

#[derive(Debug, Clone)]
struct Entry {
    duration: f64,
}

impl RowMetadata for Entry {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn name(&self) -> &str {
        "entry"
    }
}

#[derive(Debug, Clone, Copy)]
struct FixedWidthMeasurer;

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f64 * 7.0,
            height: style.font_size_px,
        }
    }
}

fn plot_stage(intervals: &[(f64, f64, f64)]) -> PlotStage<Entry, FixedWidthMeasurer> {
    let mut chart = GanttChart::with_measurer(GanttChartConfig::default(), FixedWidthMeasurer)
        .expect("chart init");
    chart
        .set_size(0.0, 0.0, 800.0, 17.0 * intervals.len() as f64 + 85.0)
        .expect("size");
    chart.set_margin(35.0, 10.0, 50.0, 10.0).expect("margin");
    let rows = intervals
        .iter()
        .map(|&(queue_start, active_start, end)| {
            Row::new(
                Interval::new(queue_start, active_start, end).expect("interval"),
                Entry {
                    duration: end - active_start,
                },
            )
        })
        .collect();
    chart
        .set_data(rows)
        .expect("set data")
        .update_scale()
        .expect("final scale")
}

#[test]
fn each_row_gets_a_queued_and_an_active_rect_in_its_band() {
    let mut plot = plot_stage(&[(0.0, 10.0, 50.0), (20.0, 25.0, 60.0)]);
    plot.render_bars();

    let bars = plot.frame().layer(GanttLayerKind::Bars);
    assert_eq!(bars.len(), 2);

    let second = &bars[1];
    let [queued, active] = [second.rects[0], second.rects[1]];
    assert_relative_eq!(queued.x, 20.0 * 7.8, epsilon = 1e-9);
    assert_relative_eq!(queued.width, 5.0 * 7.8, epsilon = 1e-9);
    assert_relative_eq!(queued.right(), active.x, epsilon = 1e-9);
    assert_relative_eq!(active.width, 35.0 * 7.8, epsilon = 1e-9);
    assert_relative_eq!(active.y, 17.0 * 1.1, epsilon = 1e-9);
    assert_eq!(queued.y, active.y);
    assert_eq!(queued.height, active.height);
    assert_eq!(active.corner_radius, 8.0);
    assert_eq!(active.fill_color, Color::from_hex("#B891DB").expect("hex"));
    assert_eq!(queued.fill_color, Color::from_hex("#E0CEF0").expect("hex"));
}

#[test]
fn duration_label_sits_right_of_the_bar_with_two_decimals() {
    let mut plot = plot_stage(&[(0.0, 10.0, 50.0)]);
    plot.render_bars();

    let labels = plot.frame().layer(GanttLayerKind::DurationLabels);
    assert_eq!(labels.len(), 1);
    assert_eq!((labels[0].offset_x, labels[0].offset_y), (10.0, 35.0));
    let label = &labels[0].texts[0];
    assert_eq!(label.text, "40.00ms");
    assert_eq!(label.h_align, TextHAlign::Left);
    assert_relative_eq!(label.x, 50.0 * 7.8 + 5.0, epsilon = 1e-9);
    assert_relative_eq!(label.y, 8.5, epsilon = 1e-9);
}

#[test]
fn duration_labels_round_exact_halves_up() {
    let mut plot = plot_stage(&[(0.0, 10.0, 10.125), (0.0, 20.0, 20.375)]);
    plot.render_bars();

    let texts: Vec<&str> = plot.frame().layer(GanttLayerKind::DurationLabels)[0]
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(texts, vec!["0.13ms", "0.38ms"]);
}

#[test]
fn overflowing_duration_label_flips_left_of_the_bar_edge() {
    let mut plot = plot_stage(&[(0.0, 10.0, 99.0)]);
    plot.render_bars();

    let label = &plot.frame().layer(GanttLayerKind::DurationLabels)[0].texts[0];
    assert_eq!(label.text, "89.00ms");
    assert_eq!(label.h_align, TextHAlign::Right);
    assert_relative_eq!(label.x, 99.0 * 7.8 - 5.0, epsilon = 1e-9);
}

#[test]
fn label_ending_exactly_at_the_plot_edge_fits() {
    let fits = place_duration_label(700.0, 75.0, 780.0, 5.0);
    assert!(!fits.flipped);
    assert_eq!(fits.x, 705.0);
    assert_eq!(fits.h_align, TextHAlign::Left);

    let overflows = place_duration_label(700.0, 75.5, 780.0, 5.0);
    assert!(overflows.flipped);
    assert_eq!(overflows.x, 695.0);
    assert_eq!(overflows.h_align, TextHAlign::Right);
}

#[test]
fn rows_keep_caller_order() {
    let mut plot = plot_stage(&[(40.0, 45.0, 90.0), (0.0, 1.0, 2.0), (20.0, 21.0, 30.0)]);
    plot.render_bars();

    let xs: Vec<f64> = plot
        .frame()
        .layer(GanttLayerKind::Bars)
        .iter()
        .map(|group| group.rects[0].x)
        .collect();
    assert_relative_eq!(xs[0], 40.0 * 7.8, epsilon = 1e-9);
    assert_relative_eq!(xs[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(xs[2], 20.0 * 7.8, epsilon = 1e-9);
}
