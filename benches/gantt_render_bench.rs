use criterion::{Criterion, criterion_group, criterion_main};
use gantt_rs::api::GanttChartConfig;
use gantt_rs::core::{ExtremesOverride, Interval, Row, resolve_extremes};
use gantt_rs::timing::{PageTiming, ResourceTiming, TimingCapture, build_resources_timeline};
use std::hint::black_box;

fn generated_resources(count: usize) -> Vec<ResourceTiming> {
    (0..count)
        .map(|i| {
            let start = i as f64 * 3.5;
            ResourceTiming {
                name: format!("https://cdn.example.com/assets/chunk-{i}.js"),
                initiator_type: if i % 3 == 0 { "link" } else { "script" }.to_owned(),
                start_time: start,
                response_start: start + 4.0 + (i % 7) as f64,
                response_end: start + 20.0 + (i % 11) as f64 * 2.5,
            }
        })
        .collect()
}

fn bench_resolve_extremes_10k(c: &mut Criterion) {
    let rows: Vec<Row<()>> = (0..10_000)
        .map(|i| {
            let start = i as f64;
            Row::new(
                Interval::new(start, start + 2.0, start + 9.0).expect("valid generated interval"),
                (),
            )
        })
        .collect();

    c.bench_function("resolve_extremes_10k", |b| {
        b.iter(|| {
            let _ = resolve_extremes(black_box(&rows), ExtremesOverride::new(Some(0.0), None))
                .expect("extremes should resolve");
        })
    });
}

fn bench_resources_timeline_svg_200(c: &mut Criterion) {
    let capture = TimingCapture {
        resources: Some(generated_resources(200)),
        timing: PageTiming {
            navigation_start: 0.0,
            dom_interactive: 450.0,
            load_event_start: 700.0,
            load_event_end: 720.0,
        },
    };
    let config = GanttChartConfig::default();

    c.bench_function("resources_timeline_svg_200", |b| {
        b.iter(|| {
            let _ = build_resources_timeline(black_box(&capture), black_box(&config))
                .expect("timeline should build");
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_extremes_10k,
    bench_resources_timeline_svg_200
);
criterion_main!(benches);
