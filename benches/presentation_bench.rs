// Criterion builder calls return `&mut` handles meant to be chained or ignored.
#![allow(missing_docs, unused_results)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use vitrine::animation::EasingFunction;
use vitrine::engine::{PageCommand, PresentationEngine, SurfaceId, SurfaceSpec};
use vitrine::env::{SyntheticSignals, VirtualClock};
use vitrine::layout::{orbit_ring, LayoutBin, LayoutTable};
use vitrine::options::Options;
use vitrine::tilt::{compute_tilt, SurfaceRect, TiltConfig};
use vitrine::typewriter::{Typewriter, TypewriterTiming};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::SNAPPY;
    c.bench_function("snappy_bezier_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn tilt_benchmark(c: &mut Criterion) {
    let rect = SurfaceRect::new(0.0, 0.0, 320.0, 200.0);
    let config = TiltConfig::default();
    c.bench_function("compute_tilt", |b| {
        b.iter(|| {
            black_box(compute_tilt(
                black_box(Vec2::new(40.0, 150.0)),
                rect,
                config,
            ))
        })
    });
}

fn typewriter_benchmark(c: &mut Criterion) {
    let phrases = vec![
        "Software Engineer".to_owned(),
        "Systems Programmer".to_owned(),
    ];
    c.bench_function("typewriter_full_cycle", |b| {
        b.iter(|| {
            let Ok(mut typewriter) =
                Typewriter::new(phrases.clone(), TypewriterTiming::default())
            else {
                return;
            };
            for _ in 0..80 {
                let _ = black_box(typewriter.tick());
            }
        })
    });
}

fn orbit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit_ring");
    let table = LayoutTable::default();
    for count in [8, 13, 32] {
        let params = table.params(LayoutBin::Large);
        group.bench_function(format!("{count}_bubbles"), |b| {
            b.iter(|| black_box(orbit_ring(count, params)))
        });
    }
    group.finish();
}

fn engine_advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_advance");
    for surfaces in [1_u64, 10, 50] {
        let mut engine = PresentationEngine::new(
            VirtualClock::new(),
            SyntheticSignals::new(),
            Options::default(),
        );
        for id in 0..surfaces {
            let _ = engine.execute(PageCommand::Mount {
                surface: SurfaceId(id),
                spec: SurfaceSpec::Typewriter {
                    phrases: vec!["Software Engineer".to_owned()],
                },
            });
        }
        group.bench_function(format!("{surfaces}_typewriters"), |b| {
            b.iter(|| black_box(engine.advance(Duration::from_millis(100))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    tilt_benchmark,
    typewriter_benchmark,
    orbit_benchmark,
    engine_advance_benchmark
);
criterion_main!(benches);
