use std::cell::Cell;
use std::rc::Rc;

use gantt_rs::api::{GanttChart, GanttChartConfig};
use gantt_rs::core::{Interval, Row, RowMetadata};
use gantt_rs::render::{GanttLayerKind, NullRenderer};
use gantt_rs::text::{MeasureSession, TextMeasurer, TextMetrics, TextStyle};

#[derive(Debug, Default)]
struct Counters {
    acquired: Cell<usize>,
    released: Cell<usize>,
    measured: Cell<usize>,
}

#[derive(Debug, Clone)]
struct CountingMeasurer {
    counters: Rc<Counters>,
}

impl TextMeasurer for CountingMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle) -> TextMetrics {
        self.counters.measured.set(self.counters.measured.get() + 1);
        TextMetrics {
            width: text.len() as f64 * 6.0,
            height: style.font_size_px,
        }
    }

    fn acquire(&mut self) {
        self.counters.acquired.set(self.counters.acquired.get() + 1);
    }

    fn release(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
    }
}

#[derive(Debug, Clone)]
struct Entry;

impl RowMetadata for Entry {
    fn duration(&self) -> f64 {
        12.0
    }

    fn name(&self) -> &str {
        "entry"
    }
}

fn counting_chart(counters: &Rc<Counters>) -> GanttChart<CountingMeasurer> {
    let mut chart = GanttChart::with_measurer(
        GanttChartConfig::default(),
        CountingMeasurer {
            counters: Rc::clone(counters),
        },
    )
    .expect("chart init");
    chart.set_size(0.0, 0.0, 800.0, 124.0).expect("size");
    chart.set_margin(35.0, 10.0, 50.0, 10.0).expect("margin");
    chart
}

fn rows() -> Vec<Row<Entry>> {
    vec![
        Row::new(Interval::new(0.0, 5.0, 17.0).expect("interval"), Entry),
        Row::new(Interval::new(3.0, 9.0, 21.0).expect("interval"), Entry),
    ]
}

#[test]
fn helper_is_acquired_lazily_and_released_once_on_finish() {
    let counters = Rc::new(Counters::default());
    let chart = counting_chart(&counters);
    let mut labels = chart.set_data(rows()).expect("set data");
    assert_eq!(counters.acquired.get(), 0);

    labels.render_header();
    assert_eq!(counters.acquired.get(), 0);

    labels.render_labels(&["a.js", "b.js"]).expect("labels");
    assert_eq!(counters.acquired.get(), 1);

    let mut plot = labels.update_scale().expect("final scale");
    plot.render_bars();
    plot.render_stripes();

    let mut renderer = NullRenderer::default();
    plot.render_into(&mut renderer).expect("render");
    assert_eq!(counters.acquired.get(), 1);
    assert_eq!(counters.released.get(), 1);
    assert_eq!(renderer.last_rect_count, 4 + 1);
}

#[test]
fn helper_is_released_when_a_chart_is_abandoned() {
    let counters = Rc::new(Counters::default());
    let chart = counting_chart(&counters);
    let mut labels = chart.set_data(rows()).expect("set data");
    labels.render_labels(&["a.js", "b.js"]).expect("labels");
    drop(labels);

    assert_eq!(counters.acquired.get(), 1);
    assert_eq!(counters.released.get(), 1);
}

#[test]
fn unused_helper_is_never_acquired_or_released() {
    let counters = Rc::new(Counters::default());
    let chart = counting_chart(&counters);
    let mut plot = chart
        .set_data(rows())
        .expect("set data")
        .update_scale()
        .expect("final scale");
    plot.render_stripes();
    let frame = plot.finish().expect("finish");

    assert!(!frame.layer(GanttLayerKind::Stripes).is_empty());
    assert_eq!(counters.acquired.get(), 0);
    assert_eq!(counters.released.get(), 0);
}

#[test]
fn identical_measurements_hit_the_session_cache() {
    let counters = Rc::new(Counters::default());
    let mut session = MeasureSession::new(CountingMeasurer {
        counters: Rc::clone(&counters),
    });
    let style = TextStyle::new("Helvetica", 14.0);

    let first = session.measure("12.00ms", &style);
    let second = session.measure("12.00ms", &style);
    let other_size = session.measure("12.00ms", &TextStyle::new("Helvetica", 12.0));

    assert_eq!(first, second);
    assert_eq!(other_size.height, 12.0);
    assert_eq!(counters.measured.get(), 2);
    let stats = session.stats();
    assert_eq!((stats.hits, stats.misses, stats.size), (1, 2, 2));

    session.release();
    session.release();
    drop(session);
    assert_eq!(counters.released.get(), 1);
}

#[test]
fn duration_labels_reuse_cached_measurements() {
    let counters = Rc::new(Counters::default());
    let chart = counting_chart(&counters);
    let mut plot = chart
        .set_data(rows())
        .expect("set data")
        .update_scale()
        .expect("final scale");
    plot.render_bars();

    // Both rows print "12.00ms".
    assert_eq!(counters.measured.get(), 1);
    assert_eq!(plot.measure_stats().hits, 1);
}
