// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assembled click-to-confirm control.

use mollyguard_state::{Effect, Phase, Transition};
use mollyguard_style::{Presentation, resolve};

use crate::config::{AttrSet, ConfirmConfig};
use crate::host::ElementSpec;
use crate::trace::ActivationTrace;

/// A click-to-confirm control instance.
///
/// The control owns exactly one [`Phase`] and mutates it only inside
/// [`handle_activation`](ConfirmControl::handle_activation). Everything else
/// is a read: [`presentation`](ConfirmControl::presentation) derives what to
/// display, [`element`](ConfirmControl::element) wraps that in a host-ready
/// element description.
///
/// Every activation runs synchronously to completion on the caller's thread;
/// hosts deliver activations one at a time. Phase never outlives or crosses
/// instances: two controls never share state.
///
/// # Minimal example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use mollyguard_control::{ConfirmConfigBuilder, ConfirmControl};
///
/// let confirmed = Rc::new(Cell::new(false));
/// let config = ConfirmConfigBuilder::new()
///     .active_label("Delete")
///     .on_confirm({
///         let confirmed = confirmed.clone();
///         move || confirmed.set(true)
///     })
///     .build()
///     .unwrap();
///
/// let mut control = ConfirmControl::new(config);
///
/// // First activation arms the control.
/// control.handle_activation();
/// assert!(control.is_confirming());
/// assert!(!confirmed.get());
///
/// // Second activation confirms and loops back.
/// control.handle_activation();
/// assert!(control.is_active());
/// assert!(confirmed.get());
/// ```
#[derive(Debug)]
pub struct ConfirmControl {
    phase: Phase,
    config: ConfirmConfig,
}

impl ConfirmControl {
    /// Creates a control in the `Active` phase.
    #[must_use]
    pub fn new(config: ConfirmConfig) -> Self {
        Self {
            phase: Phase::Active,
            config,
        }
    }

    /// The phase the control is currently in.
    #[must_use]
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while resting, before any arming activation.
    #[must_use]
    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Returns `true` while armed, awaiting the confirming activation.
    #[must_use]
    #[inline]
    pub fn is_confirming(&self) -> bool {
        self.phase.is_confirming()
    }

    /// Returns `true` once the control has switched off for good.
    ///
    /// Hosts should stop delivering activations and render a non-interactive
    /// element when this is set, but correctness does not depend on it:
    /// a `Disabled` control absorbs activations on its own.
    #[must_use]
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.phase.is_disabled()
    }

    /// The validated configuration this control was built from.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &ConfirmConfig {
        &self.config
    }

    /// Whether the host should render a link rather than a button.
    #[must_use]
    #[inline]
    pub fn render_as_link(&self) -> bool {
        self.config.render_as_link
    }

    /// The pass-through attribute bundle for the host element.
    #[must_use]
    #[inline]
    pub fn attributes(&self) -> &AttrSet {
        &self.config.attributes
    }

    /// Resolves what the control should display right now.
    ///
    /// Pure with respect to the phase: calling this any number of times
    /// between activations yields identical values.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        resolve(self.phase, &self.config.appearance)
    }

    /// Describes the single host element for the current phase.
    #[must_use]
    pub fn element(&self) -> ElementSpec<'_> {
        ElementSpec::new(self)
    }

    /// Delivers one activation to the control.
    ///
    /// Computes the transition for the current phase, runs the callbacks
    /// mapped to its effects in order, and only then commits the new phase.
    /// If a callback panics, nothing commits: the control stays in its
    /// pre-activation phase and the unwind propagates to the caller.
    ///
    /// Returns the applied transition, or `None` when the control is
    /// `Disabled`. The terminal phase absorbs activations without running
    /// any callback, whether or not the host kept delivering them.
    pub fn handle_activation(&mut self) -> Option<Transition> {
        self.handle_activation_with_trace(&mut NoTrace)
    }

    /// Delivers one activation, reporting each step to `trace`.
    ///
    /// Behaves exactly like
    /// [`handle_activation`](ConfirmControl::handle_activation); the sink
    /// only observes.
    pub fn handle_activation_with_trace(
        &mut self,
        trace: &mut impl ActivationTrace,
    ) -> Option<Transition> {
        let Some(transition) = self
            .phase
            .on_activation(self.config.disable_after_confirmed)
        else {
            trace.ignored(self.phase);
            return None;
        };

        for &effect in transition.effects {
            let slot = match effect {
                Effect::Click => &mut self.config.on_click,
                Effect::Confirm => &mut self.config.on_confirm,
                Effect::Disable => &mut self.config.on_disable,
            };
            trace.effect(effect, slot.is_some());
            if let Some(callback) = slot.as_mut() {
                callback();
            }
        }

        trace.transition(self.phase, transition.next);
        self.phase = transition.next;
        Some(transition)
    }
}

/// Sink used by the untraced entry point.
struct NoTrace;

impl ActivationTrace for NoTrace {
    fn ignored(&mut self, _phase: Phase) {}

    fn effect(&mut self, _effect: Effect, _handled: bool) {}

    fn transition(&mut self, _from: Phase, _to: Phase) {}
}
