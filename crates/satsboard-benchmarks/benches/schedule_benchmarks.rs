//! Supply schedule benchmarks
//!
//! Run with: `cargo bench --package satsboard-benchmarks --bench schedule_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use satsboard_benchmarks::{heights_per_epoch, SAMPLE_HEIGHTS};
use satsboard_core::SupplySchedule;
use satsboard_economics::{DashboardSnapshot, SpotPrice, DEFAULT_WORLD_POPULATION};

fn schedule_benchmarks(c: &mut Criterion) {
    let schedule = SupplySchedule::bitcoin();
    let mut group = c.benchmark_group("schedule");

    for height in SAMPLE_HEIGHTS {
        group.bench_with_input(
            BenchmarkId::new("mined_supply", height),
            &height,
            |b, &height| b.iter(|| schedule.mined_supply_at_height(black_box(height))),
        );
        group.bench_with_input(
            BenchmarkId::new("block_reward", height),
            &height,
            |b, &height| b.iter(|| schedule.block_reward_at_height(black_box(height))),
        );
    }

    let epochs = heights_per_epoch(&schedule);
    group.bench_function("mined_supply_every_epoch", |b| {
        b.iter(|| {
            epochs
                .iter()
                .map(|&height| schedule.mined_supply_at_height(black_box(height)).to_sat())
                .sum::<i64>()
        })
    });

    group.bench_function("max_supply", |b| b.iter(|| black_box(schedule).max_supply()));

    group.finish();
}

fn snapshot_benchmarks(c: &mut Criterion) {
    let schedule = SupplySchedule::bitcoin();
    let price = SpotPrice::new(60_000.0).ok();
    let mut group = c.benchmark_group("snapshot");

    group.bench_function("compute", |b| {
        b.iter(|| {
            DashboardSnapshot::compute(
                &schedule,
                black_box(840_000),
                price,
                DEFAULT_WORLD_POPULATION,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, schedule_benchmarks, snapshot_benchmarks);
criterion_main!(benches);
