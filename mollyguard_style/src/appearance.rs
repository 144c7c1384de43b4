// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-phase appearance bundles and opaque inline styles.
//!
//! This module provides the configuration side of presentation: [`Appearance`]
//! (what an embedder may override for one phase) and [`AppearanceTable`] (the
//! three per-phase bundles a control carries). Resolution lives in
//! [`crate::resolve`].

use alloc::borrow::Cow;
use smallvec::SmallVec;

/// Inline capacity for style declarations; most controls set zero to two.
const INLINE_DECLARATIONS: usize = 2;

/// An ordered set of opaque `(property, value)` inline style declarations.
///
/// The control core never interprets declarations; they travel to the host
/// renderer untouched and in insertion order. Setting a property that is
/// already present replaces its value in place.
///
/// Declarations are stored inline for small counts, following the same
/// small-set storage approach as property stores elsewhere in this family of
/// crates.
///
/// # Example
///
/// ```rust
/// use mollyguard_style::InlineStyle;
///
/// let style = InlineStyle::new()
///     .set("margin-left", "4px")
///     .set("opacity", "0.9")
///     .set("margin-left", "8px");
///
/// assert_eq!(style.len(), 2);
/// assert_eq!(style.get("margin-left"), Some("8px"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: SmallVec<[(Cow<'static, str>, Cow<'static, str>); INLINE_DECLARATIONS]>,
}

impl InlineStyle {
    /// Creates an empty inline style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no declarations are set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Returns the number of declarations.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Sets a declaration, replacing the value if the property is present.
    #[must_use]
    pub fn set(
        mut self,
        property: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Returns the value for `property`, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns an iterator over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(p, v)| (p.as_ref(), v.as_ref()))
    }
}

/// One phase's appearance overrides.
///
/// Every field is optional; unset fields fall back to the phase's defaults
/// during resolution, field by field. `None` is the only way to say "not
/// overridden": controls reject blank override strings at construction so
/// that an empty label can never shadow a default by accident.
///
/// Bundles are plain data with public fields, so both struct literals and the
/// chainable `with_*` helpers work:
///
/// ```rust
/// use mollyguard_style::{Appearance, InlineStyle};
///
/// let a = Appearance {
///     label: Some("Yes, delete it".into()),
///     class_name: None,
///     style: None,
/// };
/// let b = Appearance::new().with_label("Yes, delete it");
/// assert_eq!(a, b);
///
/// let styled = Appearance::new().with_style(InlineStyle::new().set("opacity", "0.5"));
/// assert!(styled.style.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Appearance {
    /// Label text shown for this phase, if overridden.
    pub label: Option<Cow<'static, str>>,
    /// Style class (an opaque host-level class string), if overridden.
    pub class_name: Option<Cow<'static, str>>,
    /// Inline style declarations, if overridden.
    pub style: Option<InlineStyle>,
}

impl Appearance {
    /// Creates a bundle with nothing overridden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            label: None,
            class_name: None,
            style: None,
        }
    }

    /// Returns `true` if no field is overridden.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.label.is_none() && self.class_name.is_none() && self.style.is_none()
    }

    /// Sets the label override.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the style-class override.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<Cow<'static, str>>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the inline-style override.
    #[must_use]
    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// The three per-phase appearance bundles a control carries.
///
/// Field-by-field fallback makes an absent bundle and an all-unset bundle
/// observationally identical, so the table stores plain [`Appearance`] values
/// rather than `Option`s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppearanceTable {
    /// Appearance while resting (`Phase::Active`).
    pub active: Appearance,
    /// Appearance while armed (`Phase::Confirming`).
    pub confirming: Appearance,
    /// Appearance once switched off (`Phase::Disabled`).
    pub disabled: Appearance,
}

impl AppearanceTable {
    /// Creates a table with nothing overridden anywhere.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Appearance::new(),
            confirming: Appearance::new(),
            disabled: Appearance::new(),
        }
    }
}
