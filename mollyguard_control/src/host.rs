// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host element bridge.
//!
//! The control core is markup-agnostic: it resolves presentation values and
//! leaves element creation to the embedder. For hosts that do want a
//! ready-made answer, [`ElementSpec`] describes the one element a control
//! renders as, with the marker class joined in and the element kind already
//! selected. Hosts with their own element model can ignore this module and
//! read [`ConfirmControl::presentation`] plus the configuration directly.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use mollyguard_style::InlineStyle;

use crate::config::AttrSet;
use crate::control::ConfirmControl;

/// Style class present on every rendered control element, ahead of the
/// phase-resolved class.
pub const MARKER_CLASS: &str = "confirm-button";

/// Which element a host should create for a control.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    /// A button element.
    Button,
    /// A link (anchor) element.
    Link,
}

/// A render-ready description of a control's single host element.
///
/// Built per phase; hosts rebuild it after every activation, exactly like
/// [`Presentation`](mollyguard_style::Presentation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementSpec<'a> {
    /// Which element to create; [`ElementKind::Link`] when the configuration
    /// asked for link rendering.
    pub kind: ElementKind,
    /// The full style class: [`MARKER_CLASS`], a space, then the resolved
    /// class.
    pub class_name: String,
    /// The phase-resolved label, shown after `children`.
    pub label: Option<Cow<'static, str>>,
    /// The phase-resolved inline style.
    pub style: InlineStyle,
    /// Static content shown in every phase, ahead of the label.
    pub children: Option<&'a str>,
    /// Whether the element should be rendered non-interactive.
    pub disabled: bool,
    /// The embedder's pass-through attributes. The control never interprets
    /// these; hosts apply them after the fields above and decide their
    /// precedence.
    pub attributes: &'a AttrSet,
}

impl<'a> ElementSpec<'a> {
    /// Builds the element description for `control`'s current phase.
    ///
    /// Usually reached through [`ConfirmControl::element`].
    #[must_use]
    pub fn new(control: &'a ConfirmControl) -> Self {
        let presentation = control.presentation();
        Self {
            kind: if control.render_as_link() {
                ElementKind::Link
            } else {
                ElementKind::Button
            },
            class_name: format!("{MARKER_CLASS} {}", presentation.class_name),
            label: presentation.label,
            style: presentation.style,
            children: control.config().children(),
            disabled: presentation.disabled,
            attributes: control.attributes(),
        }
    }

    /// The element's display text: `children`, then the label, space
    /// separated when both are present.
    #[must_use]
    pub fn text(&self) -> String {
        match (self.children, self.label.as_deref()) {
            (Some(children), Some(label)) => format!("{children} {label}"),
            (Some(children), None) => String::from(children),
            (None, Some(label)) => String::from(label),
            (None, None) => String::new(),
        }
    }
}
