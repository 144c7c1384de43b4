// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure presentation resolution.
//!
//! [`resolve`] derives a [`Presentation`] from `(Phase, AppearanceTable)`.
//! It is the only place default labels and classes live, and it is pure: no
//! descriptor is ever stored or mutated, callers recompute after every phase
//! change.

use alloc::borrow::Cow;

use mollyguard_state::Phase;

use crate::appearance::{Appearance, AppearanceTable, InlineStyle};

/// Default style class while `Active`.
pub const DEFAULT_ACTIVE_CLASS: &str = "btn btn-danger";

/// Default style class while `Confirming`.
pub const DEFAULT_CONFIRMING_CLASS: &str = "btn btn-warning";

/// Default style class while `Disabled`.
pub const DEFAULT_DISABLED_CLASS: &str = "btn btn-secondary";

/// Default label while `Confirming`.
pub const DEFAULT_CONFIRMING_LABEL: &str = "Confirm?";

/// Default label while `Disabled`.
pub const DEFAULT_DISABLED_LABEL: &str = "Loading...";

/// What a host should currently display for a control.
///
/// A `Presentation` is computed, never stored: it is derived purely from the
/// phase and the appearance table, so recomputing it without an intervening
/// activation always yields an identical value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Label text, if any. Only the `Active` phase can resolve to `None`
    /// (a control may show nothing but its static children while resting).
    pub label: Option<Cow<'static, str>>,
    /// The resolved style class; always present thanks to per-phase defaults.
    pub class_name: Cow<'static, str>,
    /// The resolved inline style; empty when nothing was overridden.
    pub style: InlineStyle,
    /// `true` exactly in the `Disabled` phase. Hosts should render a
    /// non-interactive element while this is set.
    pub disabled: bool,
}

/// Resolves what a control in `phase` should display.
///
/// Fallback is field-by-field within the phase's own defaults; see the crate
/// docs for the full rules. Resolution cannot fail.
///
/// # Example
///
/// ```rust
/// use mollyguard_state::Phase;
/// use mollyguard_style::{AppearanceTable, DEFAULT_DISABLED_LABEL, resolve};
///
/// let gone = resolve(Phase::Disabled, &AppearanceTable::new());
/// assert_eq!(gone.label.as_deref(), Some(DEFAULT_DISABLED_LABEL));
/// assert!(gone.disabled);
/// ```
#[must_use]
pub fn resolve(phase: Phase, table: &AppearanceTable) -> Presentation {
    match phase {
        Phase::Active => Presentation {
            label: table.active.label.clone(),
            class_name: class_or(&table.active, DEFAULT_ACTIVE_CLASS),
            style: style_or_empty(&table.active),
            disabled: false,
        },
        Phase::Confirming => Presentation {
            label: Some(label_or(&table.confirming, DEFAULT_CONFIRMING_LABEL)),
            class_name: class_or(&table.confirming, DEFAULT_CONFIRMING_CLASS),
            style: style_or_empty(&table.confirming),
            disabled: false,
        },
        Phase::Disabled => Presentation {
            label: Some(label_or(&table.disabled, DEFAULT_DISABLED_LABEL)),
            class_name: class_or(&table.disabled, DEFAULT_DISABLED_CLASS),
            style: style_or_empty(&table.disabled),
            disabled: true,
        },
    }
}

fn label_or(bundle: &Appearance, default: &'static str) -> Cow<'static, str> {
    bundle.label.clone().unwrap_or(Cow::Borrowed(default))
}

fn class_or(bundle: &Appearance, default: &'static str) -> Cow<'static, str> {
    bundle.class_name.clone().unwrap_or(Cow::Borrowed(default))
}

fn style_or_empty(bundle: &Appearance) -> InlineStyle {
    bundle.style.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Appearance;

    #[test]
    fn active_defaults() {
        let p = resolve(Phase::Active, &AppearanceTable::new());
        assert_eq!(p.label, None);
        assert_eq!(p.class_name, DEFAULT_ACTIVE_CLASS);
        assert!(p.style.is_empty());
        assert!(!p.disabled);
    }

    #[test]
    fn confirming_defaults() {
        let p = resolve(Phase::Confirming, &AppearanceTable::new());
        assert_eq!(p.label.as_deref(), Some(DEFAULT_CONFIRMING_LABEL));
        assert_eq!(p.class_name, DEFAULT_CONFIRMING_CLASS);
        assert!(p.style.is_empty());
        assert!(!p.disabled);
    }

    #[test]
    fn disabled_defaults() {
        let p = resolve(Phase::Disabled, &AppearanceTable::new());
        assert_eq!(p.label.as_deref(), Some(DEFAULT_DISABLED_LABEL));
        assert_eq!(p.class_name, DEFAULT_DISABLED_CLASS);
        assert!(p.style.is_empty());
        assert!(p.disabled);
    }

    #[test]
    fn active_uses_configured_values() {
        let table = AppearanceTable {
            active: Appearance::new()
                .with_label("Delete")
                .with_class_name("btn btn-outline-danger")
                .with_style(InlineStyle::new().set("font-weight", "bold")),
            ..AppearanceTable::new()
        };

        let p = resolve(Phase::Active, &table);
        assert_eq!(p.label.as_deref(), Some("Delete"));
        assert_eq!(p.class_name, "btn btn-outline-danger");
        assert_eq!(p.style.get("font-weight"), Some("bold"));
    }

    // A partially-filled bundle keeps that phase's defaults for the rest,
    // never the Active values.
    #[test]
    fn partial_confirming_bundle_falls_back_field_by_field() {
        let table = AppearanceTable {
            active: Appearance::new()
                .with_label("Delete")
                .with_class_name("active-class"),
            confirming: Appearance::new().with_class_name("x"),
            ..AppearanceTable::new()
        };

        let p = resolve(Phase::Confirming, &table);
        assert_eq!(p.class_name, "x");
        assert_eq!(p.label.as_deref(), Some(DEFAULT_CONFIRMING_LABEL));
        assert!(p.style.is_empty());
    }

    #[test]
    fn partial_disabled_bundle_falls_back_field_by_field() {
        let table = AppearanceTable {
            disabled: Appearance::new().with_label("Done"),
            ..AppearanceTable::new()
        };

        let p = resolve(Phase::Disabled, &table);
        assert_eq!(p.label.as_deref(), Some("Done"));
        assert_eq!(p.class_name, DEFAULT_DISABLED_CLASS);
        assert!(p.disabled);
    }

    #[test]
    fn unset_bundle_behaves_like_absent_bundle() {
        // `confirming` untouched vs. explicitly empty must resolve the same.
        let untouched = AppearanceTable::new();
        let explicit = AppearanceTable {
            confirming: Appearance::new(),
            ..AppearanceTable::new()
        };
        assert_eq!(
            resolve(Phase::Confirming, &untouched),
            resolve(Phase::Confirming, &explicit)
        );
    }

    #[test]
    fn resolution_is_pure() {
        let table = AppearanceTable {
            confirming: Appearance::new().with_label("Sure?"),
            ..AppearanceTable::new()
        };
        for phase in [Phase::Active, Phase::Confirming, Phase::Disabled] {
            assert_eq!(resolve(phase, &table), resolve(phase, &table));
        }
    }

    #[test]
    fn disabled_flag_tracks_phase_only() {
        // Overrides cannot change the disabled flag.
        let table = AppearanceTable {
            disabled: Appearance::new()
                .with_label("Off")
                .with_class_name("quiet"),
            ..AppearanceTable::new()
        };
        assert!(!resolve(Phase::Active, &table).disabled);
        assert!(!resolve(Phase::Confirming, &table).disabled);
        assert!(resolve(Phase::Disabled, &table).disabled);
    }
}
