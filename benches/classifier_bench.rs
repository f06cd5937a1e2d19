#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use orrery::camera::FrameInput;
use orrery::gesture::landmarks::{Finger, LANDMARK_COUNT};
use orrery::options::{CameraOptions, GestureOptions};
use orrery::{
    BodyCatalog, BodyId, CameraController, ControlMode, GestureClassifier,
    GestureEvent,
};

fn hand(wrist: Vec2, extended: [bool; 4]) -> Vec<Vec2> {
    let mut points = vec![wrist; LANDMARK_COUNT];
    for (column, (finger, up)) in Finger::ALL.into_iter().zip(extended).enumerate() {
        let base = wrist + Vec2::new(0.02 * column as f32, 0.0);
        points[finger.pip()] = base + Vec2::new(0.0, -0.15);
        points[finger.tip()] = base + Vec2::new(0.0, if up { -0.22 } else { -0.11 });
    }
    points
}

fn classify_benchmark(c: &mut Criterion) {
    let peace: Vec<Vec<Vec<Vec2>>> = (0..64)
        .map(|i| vec![hand(Vec2::new(0.3 + 0.005 * i as f32, 0.6), [true, true, false, false])])
        .collect();
    let two_hands: Vec<Vec<Vec<Vec2>>> = (0..64)
        .map(|i| {
            let spread = 0.1 + 0.004 * i as f32;
            vec![
                hand(Vec2::new(0.5 - spread, 0.6), [false; 4]),
                hand(Vec2::new(0.5 + spread, 0.6), [false; 4]),
            ]
        })
        .collect();

    let mut group = c.benchmark_group("classify");
    let _ = group.bench_function("peace_sweep", |b| {
        let mut classifier = GestureClassifier::new(GestureOptions::default());
        let mut t = 0.0;
        b.iter(|| {
            for sample in &peace {
                t += 33.0;
                let _ = black_box(classifier.classify(black_box(sample), t));
            }
        });
    });
    let _ = group.bench_function("two_hand_zoom", |b| {
        let mut classifier = GestureClassifier::new(GestureOptions::default());
        let mut t = 0.0;
        b.iter(|| {
            for sample in &two_hands {
                t += 33.0;
                let _ = black_box(classifier.classify(black_box(sample), t));
            }
        });
    });
    group.finish();
}

fn controller_benchmark(c: &mut Criterion) {
    let catalog = BodyCatalog::solar_system();
    let mut group = c.benchmark_group("camera_update");

    for (name, mode, focus, gesture) in [
        ("focus_tracking", ControlMode::Pointer, Some(BodyId::Saturn), None),
        ("autopilot", ControlMode::Autopilot, None, None),
        (
            "hand_rotate",
            ControlMode::Hand,
            None,
            Some(GestureEvent::Rotate { dx: 0.01, dy: 0.0 }),
        ),
    ] {
        let _ = group.bench_function(name, |b| {
            let mut controller = CameraController::new(CameraOptions::default());
            let mut elapsed = 0.0;
            b.iter(|| {
                elapsed += 1.0 / 60.0;
                controller.update(black_box(&FrameInput {
                    elapsed,
                    dt: 1.0 / 60.0,
                    mode,
                    focus,
                    gesture,
                    keys: &[],
                    simulation_speed: 1.0,
                    catalog: &catalog,
                }));
                black_box(controller.pose())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, classify_benchmark, controller_benchmark);
criterion_main!(benches);
