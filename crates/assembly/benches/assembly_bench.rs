//! Criterion benchmarks for the assembly core.
//!
//! Benchmarks:
//!   - part_pose for a single part mid-descent
//!   - full controller pass over a 10K-part layout
//!   - scroll_progress mapping
//!   - full scroll frame through the headless `TestScene`
//!
//! Run with: cargo bench -p assembly --features bench --bench assembly_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use assembly::config::AssemblyConfig;
use assembly::controller::part_pose;
use assembly::layout::generate_layout;
use assembly::parts::AssemblyPart;
use assembly::scene_rng::SceneRng;
use assembly::scroll::scroll_progress;
use assembly::test_harness::TestScene;

// ---------------------------------------------------------------------------
// Benchmark: pure controller
// ---------------------------------------------------------------------------

fn bench_part_pose(c: &mut Criterion) {
    let config = AssemblyConfig::default();
    let part = AssemblyPart {
        start_height: 60.0,
        target_height: 1.5,
        activation_delay: 0.2,
        rotation_speed: 2.0,
    };

    c.bench_function("part_pose_mid_descent", |b| {
        b.iter(|| black_box(part_pose(black_box(0.5), &part, &config)))
    });
}

fn bench_controller_pass(c: &mut Criterion) {
    let config = AssemblyConfig::default();
    let mut rng = SceneRng::from_seed_u64(7);
    let parts: Vec<AssemblyPart> = (0..250)
        .flat_map(|_| generate_layout(&mut rng.0))
        .map(|spec| spec.part)
        .collect();

    let mut group = c.benchmark_group("controller_pass");
    group.bench_function(format!("{}_parts", parts.len()), |b| {
        b.iter(|| {
            let mut sum = 0.0_f32;
            for part in &parts {
                sum += part_pose(black_box(0.47), part, &config).y;
            }
            black_box(sum)
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: scroll mapping
// ---------------------------------------------------------------------------

fn bench_scroll_progress(c: &mut Criterion) {
    c.bench_function("scroll_progress", |b| {
        b.iter(|| {
            black_box(scroll_progress(
                black_box(1234.0),
                black_box(4000.0),
                black_box(0.85),
            ))
        })
    });
}

// ---------------------------------------------------------------------------
// Benchmark: one scroll frame through the ECS
// ---------------------------------------------------------------------------

fn bench_scroll_frame(c: &mut Criterion) {
    let mut scene = TestScene::new();
    let mut offset = 0.0_f32;

    c.bench_function("scroll_frame_default_scene", |b| {
        b.iter(|| {
            offset = (offset + 17.0) % 1000.0;
            scene.scroll_to(offset, 1000.0);
        })
    });
}

criterion_group!(
    benches,
    bench_part_pose,
    bench_controller_pass,
    bench_scroll_progress,
    bench_scroll_frame
);
criterion_main!(benches);
