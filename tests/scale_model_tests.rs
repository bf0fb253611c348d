use approx::assert_relative_eq;
use gantt_rs::api::{GanttChart, GanttChartConfig};
use gantt_rs::core::{Extremes, GanttScale, Interval, PlotBox, Row, RowMetadata};
use gantt_rs::render::GanttLayerKind;
use gantt_rs::ChartError;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    duration: f64,
}

impl RowMetadata for Entry {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn entry_row(queue_start: f64, active_start: f64, end: f64) -> Row<Entry> {
    Row::new(
        Interval::new(queue_start, active_start, end).expect("valid interval"),
        Entry {
            name: "app.js".to_owned(),
            duration: end - active_start,
        },
    )
}

#[test]
fn reference_layout_produces_expected_factors_and_bar_geometry() {
    let mut chart = GanttChart::new(GanttChartConfig::default()).expect("chart init");
    chart.set_size(0.0, 0.0, 800.0, 102.0).expect("size");
    chart.set_margin(35.0, 10.0, 50.0, 10.0).expect("margin");

    let labels = chart
        .set_data(vec![entry_row(0.0, 10.0, 50.0)])
        .expect("set data");
    assert_eq!(labels.extremes(), Extremes { min: 0.0, max: 100.0 });

    let mut plot = labels.update_scale().expect("final scale");
    assert_relative_eq!(plot.scale().time_to_x(), 7.8, epsilon = 1e-12);
    assert_relative_eq!(plot.scale().row_to_y(), 17.0, epsilon = 1e-12);

    plot.render_bars();
    let bars = plot.frame().layer(GanttLayerKind::Bars);
    assert_eq!(bars.len(), 1);
    assert_eq!((bars[0].offset_x, bars[0].offset_y), (10.0, 35.0));

    let active = bars[0].rects[1];
    assert_relative_eq!(active.x, 78.0, epsilon = 1e-9);
    assert_relative_eq!(active.width, 312.0, epsilon = 1e-9);
    assert_relative_eq!(active.y, 1.7, epsilon = 1e-9);
    assert_relative_eq!(active.height, 13.6, epsilon = 1e-9);
}

#[test]
fn zero_resolved_max_is_degenerate() {
    let mut chart = GanttChart::new(GanttChartConfig::default()).expect("chart init");
    chart.set_size(0.0, 0.0, 800.0, 200.0).expect("size");
    let result = chart.set_data(vec![entry_row(0.0, 0.0, 0.0)]);
    assert!(matches!(result, Err(ChartError::DegenerateScale(_))));
}

#[test]
fn all_negative_rows_fail_when_data_is_set() {
    let mut chart = GanttChart::new(GanttChartConfig::default()).expect("chart init");
    chart.set_size(0.0, 0.0, 800.0, 102.0).expect("size");
    chart.set_margin(35.0, 10.0, 50.0, 10.0).expect("margin");
    let result = chart.set_data(vec![entry_row(-300.0, -250.0, -150.0)]);
    assert!(matches!(result, Err(ChartError::DegenerateScale(_))));
}

#[test]
fn negative_resolved_max_is_degenerate() {
    let plot = PlotBox {
        x: 10.0,
        y: 35.0,
        width: 780.0,
        height: 17.0,
    };
    let extremes = Extremes {
        min: -300.0,
        max: -100.0,
    };
    let result = GanttScale::from_plot_box(plot, extremes, 1);
    assert!(matches!(result, Err(ChartError::DegenerateScale(_))));
}

#[test]
fn zero_row_count_is_degenerate() {
    let plot = PlotBox {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 300.0,
    };
    let extremes = Extremes {
        min: 0.0,
        max: 100.0,
    };
    let result = GanttScale::from_plot_box(plot, extremes, 0);
    assert!(matches!(result, Err(ChartError::DegenerateScale(_))));
}

#[test]
fn set_data_requires_a_size() {
    let chart = GanttChart::new(GanttChartConfig::default()).expect("chart init");
    let result = chart.set_data(vec![entry_row(0.0, 1.0, 2.0)]);
    assert!(matches!(result, Err(ChartError::InvalidInput(_))));
}

#[test]
fn pixel_helpers_are_plain_linear_products() {
    let plot = PlotBox {
        x: 10.0,
        y: 35.0,
        width: 600.0,
        height: 90.0,
    };
    let extremes = Extremes {
        min: 0.0,
        max: 300.0,
    };
    let scale = GanttScale::from_plot_box(plot, extremes, 3).expect("scale");
    assert_eq!(scale.time_to_x(), 2.0);
    assert_eq!(scale.row_to_y(), 30.0);
    assert_eq!(scale.time_to_px(150.0), 300.0);
    assert_eq!(scale.row_to_px(1.5), 45.0);
}
