// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mollyguard Control: the assembled click-to-confirm control.
//!
//! A molly-guard is the cover over a switch that must not be flipped by
//! accident: you lift it first, then you flip. This crate models that
//! interaction for UI controls. The first activation arms the control, the
//! second confirms the guarded action, and a control can optionally switch
//! off for good once confirmed:
//!
//! - `Active` → `Confirming`, firing the click callback (arming).
//! - `Confirming` → `Active`, firing the confirm callback (looping controls).
//! - `Confirming` → `Disabled`, firing confirm then disable (one-shot
//!   controls).
//! - `Disabled` absorbs further activations without firing anything.
//!
//! ## Design
//!
//! - **Validated up front**: [`ConfirmConfigBuilder::build`] rejects blank
//!   overrides and malformed attribute bundles once, at construction.
//!   Activations can never fail on configuration.
//! - **Callbacks, then commit**: every callback of an activation runs before
//!   the phase changes. A panicking callback leaves the control in its
//!   pre-activation phase; no partial transition is observable.
//! - **Explicit context**: callbacks are plain closures. Whatever state they
//!   need is captured, never reached through an implicit control handle.
//! - **Framework-agnostic**: the control resolves values, not markup.
//!   [`ElementSpec`] is an optional convenience for hosts that want a
//!   ready-made element description.
//!
//! ## Usage
//!
//! A one-shot "dangerous" button, rendered twice along the way:
//!
//! ```rust
//! use mollyguard_control::{ConfirmConfigBuilder, ConfirmControl, ElementKind};
//!
//! let config = ConfirmConfigBuilder::new()
//!     .active_label("Shut down")
//!     .disable_after_confirmed(true)
//!     .build()
//!     .unwrap();
//! let mut control = ConfirmControl::new(config);
//!
//! let element = control.element();
//! assert_eq!(element.kind, ElementKind::Button);
//! assert_eq!(element.class_name, "confirm-button btn btn-danger");
//! assert_eq!(element.text(), "Shut down");
//!
//! control.handle_activation();
//! assert_eq!(control.element().text(), "Confirm?");
//!
//! control.handle_activation();
//! assert!(control.element().disabled);
//! ```
//!
//! To see what an activation did, hand a trace sink to
//! [`ConfirmControl::handle_activation_with_trace`]:
//!
//! ```rust
//! use mollyguard_control::{ActivationLog, ConfirmConfigBuilder, ConfirmControl};
//!
//! let mut control =
//!     ConfirmControl::new(ConfirmConfigBuilder::new().build().unwrap());
//! let mut log = ActivationLog::new();
//! control.handle_activation_with_trace(&mut log);
//! assert_eq!(log.events().len(), 2); // the Click effect and the commit
//! ```
//!
//! ## Integration with Mollyguard
//!
//! The transition policy lives in `mollyguard_state` and the presentation
//! rules in `mollyguard_style`; both are usable on their own. This crate
//! composes them and adds what a real embedding needs: configuration,
//! callback dispatch, tracing, and the host bridge.
//!
//! ## Features
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod control;
mod host;
mod trace;

pub use config::{AppearanceField, AttrSet, ConfigError, ConfirmConfig, ConfirmConfigBuilder};
pub use control::ConfirmControl;
pub use host::{ElementKind, ElementSpec, MARKER_CLASS};
pub use trace::{ActivationLog, ActivationTrace, TraceEvent};
