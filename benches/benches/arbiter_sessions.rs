// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_nested_scroll::arbiter::GestureArbiter;
use understory_nested_scroll::config::{ArbiterConfig, DecisionPolicy};
use understory_nested_scroll::types::{Axis, PointerSample, ScrollDirections};

// DOWN, `moves` MOVEs along a shallow diagonal, then UP.
fn gen_session(moves: usize, step_x: f64, step_y: f64) -> Vec<PointerSample> {
    let mut out = Vec::with_capacity(moves + 2);
    out.push(PointerSample::down(0.0, 0.0));
    for i in 1..=moves {
        let t = i as f64;
        out.push(PointerSample::moved(t * step_x, t * step_y));
    }
    let t = moves as f64;
    out.push(PointerSample::up(t * step_x, t * step_y));
    out
}

fn bench_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbiter_sessions");
    for &moves in &[16usize, 256] {
        let parallel = gen_session(moves, 3.0, 0.5);
        let perpendicular = gen_session(moves, 0.5, 3.0);
        group.throughput(Throughput::Elements((moves + 2) as u64));

        for (policy, name) in [
            (DecisionPolicy::Reevaluate, "reevaluate"),
            (DecisionPolicy::LockFirst, "lock_first"),
        ] {
            let config = ArbiterConfig::default().with_policy(policy);
            for (samples, dir) in [(&parallel, "parallel"), (&perpendicular, "perpendicular")] {
                group.bench_function(format!("{name}_{dir}_n{moves}"), |b| {
                    b.iter_batched(
                        || GestureArbiter::with_config(Some(Axis::Horizontal), config),
                        |mut arbiter| {
                            let mut allowed = 0_usize;
                            for &s in samples.iter() {
                                arbiter.on_event(
                                    s,
                                    &ScrollDirections::HORIZONTAL,
                                    &mut |a: bool| allowed += a as usize,
                                );
                            }
                            black_box(allowed);
                        },
                        BatchSize::SmallInput,
                    );
                });
            }
        }
    }
    group.finish();
}

fn bench_disengaged(c: &mut Criterion) {
    let samples = gen_session(256, 3.0, 0.5);
    c.bench_function("arbiter_disengaged_n256", |b| {
        let mut arbiter: GestureArbiter = GestureArbiter::new(None);
        b.iter(|| {
            let mut calls = 0_usize;
            for &s in &samples {
                arbiter.on_event(s, &ScrollDirections::all(), &mut |_: bool| calls += 1);
            }
            black_box(calls);
        });
    });
}

criterion_group!(benches, bench_sessions, bench_disengaged);
criterion_main!(benches);
