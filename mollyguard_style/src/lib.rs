// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mollyguard Style: appearance configuration and presentation resolution for
//! click-to-confirm controls.
//!
//! A click-to-confirm control looks different in each
//! [`Phase`](mollyguard_state::Phase): resting, it
//! shows the embedder's own label in a "danger" visual; armed, it asks
//! "Confirm?" in a "warning" visual; switched off, it shows "Loading..." in a
//! muted visual. This crate owns that derivation. It knows nothing about
//! markup, widget trees, or rendering backends; it turns
//! `(Phase, AppearanceTable)` into a [`Presentation`] value that a host
//! renderer consumes however it likes.
//!
//! ## Resolution rules
//!
//! [`resolve`] is a pure function, evaluated per phase:
//!
//! - `Active`: label and inline style come from the `active` bundle as-is
//!   (there is no default active label; a control may show only its static
//!   children); the class falls back to [`DEFAULT_ACTIVE_CLASS`].
//! - `Confirming`: label falls back to [`DEFAULT_CONFIRMING_LABEL`], class to
//!   [`DEFAULT_CONFIRMING_CLASS`], style to empty.
//! - `Disabled`: label falls back to [`DEFAULT_DISABLED_LABEL`], class to
//!   [`DEFAULT_DISABLED_CLASS`], style to empty; `disabled` is `true`.
//!
//! Fallback is **field-by-field**: a bundle that overrides only one field
//! keeps that phase's defaults for the others. It never falls back wholesale
//! to the `Active` values. An entirely-unset bundle therefore behaves exactly
//! like an absent one, which is why [`AppearanceTable`] stores plain bundles.
//!
//! ## Minimal example
//!
//! ```rust
//! use mollyguard_state::Phase;
//! use mollyguard_style::{
//!     Appearance, AppearanceTable, DEFAULT_CONFIRMING_LABEL, resolve,
//! };
//!
//! let table = AppearanceTable {
//!     active: Appearance::new().with_label("Delete"),
//!     confirming: Appearance::new().with_class_name("btn btn-danger pulse"),
//!     disabled: Appearance::new(),
//! };
//!
//! let armed = resolve(Phase::Confirming, &table);
//! // The overridden field is used...
//! assert_eq!(armed.class_name, "btn btn-danger pulse");
//! // ...and the untouched field keeps the Confirming default.
//! assert_eq!(armed.label.as_deref(), Some(DEFAULT_CONFIRMING_LABEL));
//! assert!(!armed.disabled);
//! ```
//!
//! Resolution is total: every field of every phase has a defined fallback, so
//! there is no error path here. Validating embedder-supplied bundles (for
//! example, rejecting blank override strings) happens in `mollyguard_control`
//! before a table ever reaches this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod appearance;
mod presentation;

pub use appearance::{Appearance, AppearanceTable, InlineStyle};
pub use presentation::{
    DEFAULT_ACTIVE_CLASS, DEFAULT_CONFIRMING_CLASS, DEFAULT_CONFIRMING_LABEL,
    DEFAULT_DISABLED_CLASS, DEFAULT_DISABLED_LABEL, Presentation, resolve,
};
