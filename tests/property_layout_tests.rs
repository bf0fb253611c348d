use gantt_rs::api::{GanttChart, GanttChartConfig};
use gantt_rs::core::{Interval, LayoutEngine, Row, RowMetadata};
use gantt_rs::render::GanttLayerKind;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Entry;

impl RowMetadata for Entry {
    fn duration(&self) -> f64 {
        1.0
    }

    fn name(&self) -> &str {
        "entry"
    }
}

proptest! {
    #[test]
    fn left_margin_growth_is_monotonic_and_shrinks_the_plot(
        growths in prop::collection::vec(0.0f64..40.0, 1..10)
    ) {
        let mut layout = LayoutEngine::new();
        layout.set_size(0.0, 0.0, 800.0, 400.0).expect("size");
        layout.set_margin(35.0, 10.0, 50.0, 10.0).expect("margin");
        let mut previous_plot = layout.update_plot_box().expect("plot");
        let mut previous_left = layout.margin().left;

        for growth in growths {
            layout.grow_left_margin(growth).expect("grow");
            let plot = layout.update_plot_box().expect("plot");
            let margin = layout.margin();

            prop_assert!(margin.left >= previous_left);
            prop_assert!(plot.width <= previous_plot.width);
            prop_assert_eq!(plot.x, margin.left);
            prop_assert!((plot.width + margin.left + margin.right - 800.0).abs() <= 1e-9);
            prop_assert_eq!(plot.height, previous_plot.height);
            previous_left = margin.left;
            previous_plot = plot;
        }
    }

    #[test]
    fn every_label_column_widens_the_left_margin(
        labels in prop::collection::vec("[a-z./]{0,30}", 1..6),
        columns in 1usize..4
    ) {
        let mut chart = GanttChart::new(GanttChartConfig::default()).expect("chart init");
        chart
            .set_size(0.0, 0.0, 2_000.0, 22.0 * labels.len() as f64 + 80.0)
            .expect("size");
        chart.set_margin(35.0, 10.0, 50.0, 10.0).expect("margin");
        let rows = labels
            .iter()
            .map(|_| Row::new(Interval::new(0.0, 1.0, 2.0).expect("interval"), Entry))
            .collect();
        let mut stage = chart.set_data(rows).expect("set data");

        let mut previous_left = stage.margin().left;
        for _ in 0..columns {
            let left = stage.render_labels(&labels).expect("labels");
            prop_assert!(left >= previous_left + 10.0);
            prop_assert_eq!(left, stage.margin().left);
            previous_left = left;
        }
        let plot = stage.update_scale().expect("final scale").plot_box();
        prop_assert_eq!(plot.x, previous_left);
    }

    #[test]
    fn stripes_cover_exactly_the_even_rows(row_count in 1usize..60) {
        let mut chart = GanttChart::new(GanttChartConfig::default()).expect("chart init");
        chart
            .set_size(0.0, 0.0, 800.0, 22.0 * row_count as f64 + 80.0)
            .expect("size");
        chart.set_margin(35.0, 10.0, 50.0, 10.0).expect("margin");
        let rows = (0..row_count)
            .map(|_| Row::new(Interval::new(0.0, 1.0, 2.0).expect("interval"), Entry))
            .collect();
        let mut plot = chart
            .set_data(rows)
            .expect("set data")
            .update_scale()
            .expect("final scale");
        plot.render_stripes();

        let row_height = plot.scale().row_to_y();
        let top = plot.plot_box().y;
        let stripes = &plot.frame().layer(GanttLayerKind::Stripes)[0].rects;
        prop_assert_eq!(stripes.len(), row_count.div_ceil(2));
        for rect in stripes {
            let row = ((rect.y - top) / row_height).round() as usize;
            prop_assert_eq!(row % 2, 0);
            prop_assert!((rect.height - row_height).abs() <= 1e-9);
        }
    }
}
