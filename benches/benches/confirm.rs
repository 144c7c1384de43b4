// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `mollyguard_style` + `mollyguard_control`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use mollyguard_control::{ConfirmConfigBuilder, ConfirmControl};
use mollyguard_state::Phase;
use mollyguard_style::{Appearance, AppearanceTable, InlineStyle, resolve};

fn bench_confirm(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Phase={} Transition={} Presentation={} ConfirmControl={}",
            core::mem::size_of::<Phase>(),
            core::mem::size_of::<mollyguard_state::Transition>(),
            core::mem::size_of::<mollyguard_style::Presentation>(),
            core::mem::size_of::<ConfirmControl>(),
        );
    });

    let mut group = c.benchmark_group("presentation/resolve");

    group.bench_function("defaults", |b| {
        let table = AppearanceTable::new();
        b.iter(|| black_box(resolve(black_box(Phase::Confirming), &table)))
    });

    group.bench_function("overridden", |b| {
        let table = AppearanceTable {
            active: Appearance::new()
                .with_label("Delete")
                .with_class_name("btn btn-outline-danger")
                .with_style(InlineStyle::new().set("font-weight", "bold")),
            confirming: Appearance::new().with_label("Really?"),
            disabled: Appearance::new(),
        };
        b.iter(|| black_box(resolve(black_box(Phase::Active), &table)))
    });

    group.finish();

    let mut group = c.benchmark_group("control/activation");

    group.bench_function("loop_round_trip", |b| {
        let config = ConfirmConfigBuilder::new()
            .on_click(|| {})
            .on_confirm(|| {})
            .build()
            .unwrap();
        let mut control = ConfirmControl::new(config);
        b.iter(|| {
            control.handle_activation();
            control.handle_activation();
            black_box(control.phase())
        })
    });

    group.bench_function("one_shot_to_disabled", |b| {
        b.iter_batched(
            || {
                let config = ConfirmConfigBuilder::new()
                    .disable_after_confirmed(true)
                    .build()
                    .unwrap();
                ConfirmControl::new(config)
            },
            |mut control| {
                control.handle_activation();
                control.handle_activation();
                black_box(control.is_disabled());
                black_box(control);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("element_spec", |b| {
        let config = ConfirmConfigBuilder::new()
            .active_label("Delete")
            .children("Careful:")
            .build()
            .unwrap();
        let control = ConfirmControl::new(config);
        b.iter(|| black_box(control.element().text()))
    });

    group.finish();
}

criterion_group!(benches, bench_confirm);
criterion_main!(benches);
