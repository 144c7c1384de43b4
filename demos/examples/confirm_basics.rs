// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-confirm basics.
//!
//! Drive a one-shot confirm control through its whole life and print what an
//! embedder would observe.
//!
//! Run:
//! - `cargo run -p mollyguard_demos --example confirm_basics`

use std::cell::Cell;
use std::rc::Rc;

use mollyguard_control::{ActivationLog, ConfirmConfigBuilder, ConfirmControl};
use mollyguard_style::Appearance;

fn main() {
    let confirmed = Rc::new(Cell::new(false));
    let config = ConfirmConfigBuilder::new()
        .active_label("Shut down")
        .confirming(Appearance::new().with_label("Really shut down?"))
        .disable_after_confirmed(true)
        .on_click(|| println!("  callback: armed"))
        .on_confirm({
            let confirmed = confirmed.clone();
            move || {
                confirmed.set(true);
                println!("  callback: shutting down");
            }
        })
        .on_disable(|| println!("  callback: switched off"))
        .build()
        .expect("configuration is well-formed");

    let mut control = ConfirmControl::new(config);
    let mut log = ActivationLog::new();

    for step in 1..=3 {
        println!("activation {step}:");
        control.handle_activation_with_trace(&mut log);
        let presentation = control.presentation();
        println!(
            "  shows {:?} with class {:?} (disabled: {})",
            presentation.label.as_deref().unwrap_or(""),
            presentation.class_name,
            presentation.disabled
        );
    }

    println!("\nconfirmed: {}", confirmed.get());
    println!("trace:");
    for event in log.events() {
        println!("  {event:?}");
    }
}
