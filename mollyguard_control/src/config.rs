// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration: policy, callbacks, appearance, and validation.
//!
//! [`ConfirmConfigBuilder`] collects everything an embedder may supply and
//! validates it once, up front, in [`build`](ConfirmConfigBuilder::build).
//! The resulting [`ConfirmConfig`] is immutable: a control never re-reads or
//! re-validates configuration mid-flight, so a malformed setup can only fail
//! construction, never an activation.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashSet;
use smallvec::SmallVec;

use mollyguard_state::Phase;
use mollyguard_style::{Appearance, AppearanceTable, InlineStyle};

/// A stored activation callback.
pub(crate) type Callback = Box<dyn FnMut()>;

/// Inline capacity for attribute entries; most controls carry one or two.
const INLINE_ATTRIBUTES: usize = 2;

/// An ordered bundle of host attributes passed through to the rendered
/// element.
///
/// Attributes are opaque to the control: it never branches on them, it only
/// hands them to the host untouched and in insertion order. [`with`] appends
/// rather than replaces; two entries sharing a name are a construction error,
/// caught by [`ConfirmConfigBuilder::build`] instead of being silently
/// resolved here. [`get`] returns the first match.
///
/// When an embedder supplies no bundle at all, a control falls back to
/// [`AttrSet::role_button`].
///
/// # Example
///
/// ```rust
/// use mollyguard_control::AttrSet;
///
/// let attrs = AttrSet::new()
///     .with("data-testid", "delete")
///     .with("title", "Delete the record");
///
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs.get("title"), Some("Delete the record"));
/// ```
///
/// [`with`]: AttrSet::with
/// [`get`]: AttrSet::get
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttrSet {
    entries: SmallVec<[(Cow<'static, str>, Cow<'static, str>); INLINE_ATTRIBUTES]>,
}

impl AttrSet {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundle a control uses when the embedder supplies none: a single
    /// `role="button"` attribute, marking the element as an interactive
    /// control for hosts that distinguish roles.
    ///
    /// An explicit bundle replaces this default wholesale; the two are never
    /// merged.
    #[must_use]
    pub fn role_button() -> Self {
        Self::new().with("role", "button")
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attribute entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends an attribute entry.
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Returns the value of the first entry named `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns an iterator over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), v.as_ref()))
    }
}

/// Which appearance override was blank.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AppearanceField {
    /// The label override.
    Label,
    /// The style-class override.
    ClassName,
}

/// Error returned when a configuration fails validation.
///
/// Construction is the only place configuration can fail; see
/// [`ConfirmConfigBuilder::build`]. Checks run in a fixed order (bundles in
/// phase order, then attributes) and the first problem found is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A label or class override was present but blank (empty or
    /// whitespace-only). Unset is expressed by omitting the override, never
    /// by an empty string.
    BlankOverride {
        /// The phase whose bundle holds the blank override.
        phase: Phase,
        /// Which override was blank.
        field: AppearanceField,
    },
    /// An inline-style declaration had a blank property name.
    BlankStyleProperty {
        /// The phase whose bundle holds the blank declaration.
        phase: Phase,
    },
    /// A pass-through attribute had a blank name.
    BlankAttributeName,
    /// Two pass-through attributes share a name.
    DuplicateAttribute {
        /// The name that appeared more than once.
        name: Cow<'static, str>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankOverride { phase, field } => {
                let field = match field {
                    AppearanceField::Label => "label",
                    AppearanceField::ClassName => "class",
                };
                write!(
                    f,
                    "blank {field} override for the {phase:?} phase; omit the override instead"
                )
            }
            Self::BlankStyleProperty { phase } => {
                write!(f, "blank style property name in the {phase:?} phase bundle")
            }
            Self::BlankAttributeName => write!(f, "blank attribute name"),
            Self::DuplicateAttribute { name } => {
                write!(f, "duplicate attribute {name:?}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// A validated, immutable control configuration.
///
/// Built by [`ConfirmConfigBuilder`] and consumed by
/// [`ConfirmControl::new`](crate::ConfirmControl::new). Once built, nothing
/// can invalidate it: the stored overrides are known to be non-blank and the
/// attribute bundle free of duplicates.
pub struct ConfirmConfig {
    pub(crate) disable_after_confirmed: bool,
    pub(crate) on_click: Option<Callback>,
    pub(crate) on_confirm: Option<Callback>,
    pub(crate) on_disable: Option<Callback>,
    pub(crate) appearance: AppearanceTable,
    pub(crate) children: Option<Cow<'static, str>>,
    pub(crate) render_as_link: bool,
    pub(crate) attributes: AttrSet,
}

impl ConfirmConfig {
    /// Whether the control switches off for good after a confirmation.
    #[must_use]
    #[inline]
    pub fn disable_after_confirmed(&self) -> bool {
        self.disable_after_confirmed
    }

    /// The per-phase appearance overrides.
    #[must_use]
    #[inline]
    pub fn appearance(&self) -> &AppearanceTable {
        &self.appearance
    }

    /// Static content shown in every phase, ahead of the phase label.
    #[must_use]
    #[inline]
    pub fn children(&self) -> Option<&str> {
        self.children.as_deref()
    }

    /// Whether the host should render a link rather than a button.
    #[must_use]
    #[inline]
    pub fn render_as_link(&self) -> bool {
        self.render_as_link
    }

    /// The pass-through attribute bundle for the host element.
    #[must_use]
    #[inline]
    pub fn attributes(&self) -> &AttrSet {
        &self.attributes
    }
}

impl fmt::Debug for ConfirmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Callbacks are not Debug; elide them.
        f.debug_struct("ConfirmConfig")
            .field("disable_after_confirmed", &self.disable_after_confirmed)
            .field("appearance", &self.appearance)
            .field("children", &self.children)
            .field("render_as_link", &self.render_as_link)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl Default for ConfirmConfig {
    /// Equivalent to `ConfirmConfigBuilder::new().build()`: a looping control
    /// with default visuals, no callbacks, and the `role="button"` bundle.
    fn default() -> Self {
        Self {
            disable_after_confirmed: false,
            on_click: None,
            on_confirm: None,
            on_disable: None,
            appearance: AppearanceTable::new(),
            children: None,
            render_as_link: false,
            attributes: AttrSet::role_button(),
        }
    }
}

/// Builder for [`ConfirmConfig`].
///
/// All setters are chainable and optional; an empty builder produces a valid
/// configuration (a looping control with default visuals, no callbacks, and
/// the `role="button"` attribute bundle).
///
/// # Minimal example
///
/// ```rust
/// use mollyguard_control::{AttrSet, ConfirmConfigBuilder};
/// use mollyguard_style::Appearance;
///
/// let config = ConfirmConfigBuilder::new()
///     .active_label("Delete")
///     .confirming(Appearance::new().with_label("Really delete?"))
///     .disable_after_confirmed(true)
///     .attributes(AttrSet::new().with("data-testid", "delete"))
///     .build()
///     .unwrap();
///
/// assert!(config.disable_after_confirmed());
/// assert_eq!(config.attributes().get("data-testid"), Some("delete"));
/// ```
#[derive(Default)]
pub struct ConfirmConfigBuilder {
    disable_after_confirmed: bool,
    on_click: Option<Callback>,
    on_confirm: Option<Callback>,
    on_disable: Option<Callback>,
    confirming_on_click: Option<Callback>,
    appearance: AppearanceTable,
    children: Option<Cow<'static, str>>,
    render_as_link: bool,
    attributes: Option<AttrSet>,
}

impl ConfirmConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the control off for good after a confirmation, instead of
    /// looping back to `Active`.
    #[must_use]
    pub fn disable_after_confirmed(mut self, disable: bool) -> Self {
        self.disable_after_confirmed = disable;
        self
    }

    /// Installs the callback run when an activation arms the control
    /// (`Active` to `Confirming`), before the confirmation.
    #[must_use]
    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Installs the callback run on confirmation, when the second activation
    /// leaves `Confirming`.
    #[must_use]
    pub fn on_confirm(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    /// Installs the callback run when the control disables, after the
    /// confirmation callback.
    ///
    /// Only ever runs when [`disable_after_confirmed`] is set.
    ///
    /// [`disable_after_confirmed`]: ConfirmConfigBuilder::disable_after_confirmed
    #[must_use]
    pub fn on_disable(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_disable = Some(Box::new(callback));
        self
    }

    /// Convenience alias for [`on_confirm`]: a click handler attached to the
    /// confirming phase.
    ///
    /// If both are supplied, the dedicated [`on_confirm`] callback wins and
    /// this one is dropped at [`build`].
    ///
    /// [`on_confirm`]: ConfirmConfigBuilder::on_confirm
    /// [`build`]: ConfirmConfigBuilder::build
    #[must_use]
    pub fn confirming_on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.confirming_on_click = Some(Box::new(callback));
        self
    }

    /// Sets the label shown while `Active`.
    ///
    /// There is no built-in active label; a control without one shows only
    /// its static children.
    #[must_use]
    pub fn active_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.appearance.active.label = Some(label.into());
        self
    }

    /// Sets the style class used while `Active`.
    #[must_use]
    pub fn active_class_name(mut self, class_name: impl Into<Cow<'static, str>>) -> Self {
        self.appearance.active.class_name = Some(class_name.into());
        self
    }

    /// Sets the inline style used while `Active`.
    #[must_use]
    pub fn active_style(mut self, style: InlineStyle) -> Self {
        self.appearance.active.style = Some(style);
        self
    }

    /// Sets the appearance overrides for the `Confirming` phase.
    #[must_use]
    pub fn confirming(mut self, bundle: Appearance) -> Self {
        self.appearance.confirming = bundle;
        self
    }

    /// Sets the appearance overrides for the `Disabled` phase.
    #[must_use]
    pub fn disabled(mut self, bundle: Appearance) -> Self {
        self.appearance.disabled = bundle;
        self
    }

    /// Sets static content shown in every phase, ahead of the phase label.
    #[must_use]
    pub fn children(mut self, children: impl Into<Cow<'static, str>>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Asks the host to render a link rather than a button.
    #[must_use]
    pub fn render_as_link(mut self, as_link: bool) -> Self {
        self.render_as_link = as_link;
        self
    }

    /// Sets the pass-through attribute bundle, replacing the `role="button"`
    /// default wholesale.
    #[must_use]
    pub fn attributes(mut self, attributes: AttrSet) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: blank overrides per phase
    /// bundle, then blank or duplicate names in the effective attribute
    /// bundle.
    pub fn build(self) -> Result<ConfirmConfig, ConfigError> {
        let Self {
            disable_after_confirmed,
            on_click,
            on_confirm,
            on_disable,
            confirming_on_click,
            appearance,
            children,
            render_as_link,
            attributes,
        } = self;

        for (phase, bundle) in [
            (Phase::Active, &appearance.active),
            (Phase::Confirming, &appearance.confirming),
            (Phase::Disabled, &appearance.disabled),
        ] {
            check_bundle(phase, bundle)?;
        }

        let attributes = attributes.unwrap_or_else(AttrSet::role_button);
        check_attributes(&attributes)?;

        Ok(ConfirmConfig {
            disable_after_confirmed,
            on_click,
            // The dedicated callback wins over the confirming-bundle alias.
            on_confirm: on_confirm.or(confirming_on_click),
            on_disable,
            appearance,
            children,
            render_as_link,
            attributes,
        })
    }
}

impl fmt::Debug for ConfirmConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmConfigBuilder")
            .field("disable_after_confirmed", &self.disable_after_confirmed)
            .field("appearance", &self.appearance)
            .field("children", &self.children)
            .field("render_as_link", &self.render_as_link)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn check_bundle(phase: Phase, bundle: &Appearance) -> Result<(), ConfigError> {
    if bundle.label.as_deref().is_some_and(is_blank) {
        return Err(ConfigError::BlankOverride {
            phase,
            field: AppearanceField::Label,
        });
    }
    if bundle.class_name.as_deref().is_some_and(is_blank) {
        return Err(ConfigError::BlankOverride {
            phase,
            field: AppearanceField::ClassName,
        });
    }
    if let Some(style) = &bundle.style {
        for (property, _) in style.iter() {
            if is_blank(property) {
                return Err(ConfigError::BlankStyleProperty { phase });
            }
        }
    }
    Ok(())
}

fn check_attributes(attributes: &AttrSet) -> Result<(), ConfigError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (name, _) in &attributes.entries {
        if is_blank(name) {
            return Err(ConfigError::BlankAttributeName);
        }
        if !seen.insert(name.as_ref()) {
            return Err(ConfigError::DuplicateAttribute { name: name.clone() });
        }
    }
    Ok(())
}
