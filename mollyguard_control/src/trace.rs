// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability helpers for activation handling.
//!
//! The control intentionally keeps no history: it stores a phase, not how it
//! got there. For many embedders it is useful to answer questions like "why
//! did nothing happen when I clicked?" or "did the confirm callback actually
//! run?".
//!
//! This module provides a minimal, additive hook for that:
//! [`ConfirmControl::handle_activation_with_trace`](crate::ConfirmControl::handle_activation_with_trace),
//! plus a small recorder, [`ActivationLog`], which stores the observed event
//! sequence for tests, demos, and debugging.

use alloc::vec::Vec;

use mollyguard_state::{Effect, Phase};

/// A callback sink for activation tracing.
///
/// See [`ConfirmControl::handle_activation_with_trace`](crate::ConfirmControl::handle_activation_with_trace).
pub trait ActivationTrace {
    /// Called when an activation arrives while the control is `Disabled` and
    /// is absorbed without any other observable work.
    fn ignored(&mut self, phase: Phase);

    /// Called immediately before the callback slot for `effect` runs.
    ///
    /// `handled` indicates whether a callback is installed for the slot; the
    /// slot is reported either way.
    fn effect(&mut self, effect: Effect, handled: bool);

    /// Called for the phase commit that ends a non-ignored activation, after
    /// every callback has returned.
    fn transition(&mut self, from: Phase, to: Phase);
}

/// One recorded activation event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TraceEvent {
    /// An activation was absorbed in the terminal phase.
    Ignored {
        /// The phase the control was in (always `Disabled`).
        phase: Phase,
    },
    /// A callback slot was about to run.
    Effect {
        /// The slot that fired.
        effect: Effect,
        /// Whether a callback was installed for it.
        handled: bool,
    },
    /// The phase commit that ended an activation.
    Transition {
        /// The pre-activation phase.
        from: Phase,
        /// The committed phase.
        to: Phase,
    },
}

/// Records the full event sequence of traced activations.
///
/// Events accumulate across calls until [`clear`](ActivationLog::clear); one
/// log can therefore capture a whole interaction, not just one activation.
#[derive(Clone, Debug, Default)]
pub struct ActivationLog {
    events: Vec<TraceEvent>,
}

impl ActivationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }
}

impl ActivationTrace for ActivationLog {
    fn ignored(&mut self, phase: Phase) {
        self.events.push(TraceEvent::Ignored { phase });
    }

    fn effect(&mut self, effect: Effect, handled: bool) {
        self.events.push(TraceEvent::Effect { effect, handled });
    }

    fn transition(&mut self, from: Phase, to: Phase) {
        self.events.push(TraceEvent::Transition { from, to });
    }
}
