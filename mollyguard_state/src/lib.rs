// Copyright 2025 the Mollyguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mollyguard State: phase vocabulary and transition policy for
//! click-to-confirm controls.
//!
//! A click-to-confirm control guards a consequential action behind two
//! activations: the first arms the control, the second confirms. Optionally a
//! confirmed control disables itself so a one-shot action cannot be triggered
//! again. This crate provides the pure core of that interaction: the
//! [`Phase`] a control can be in, the [`Effect`]s (callback slots) an
//! activation fires, and the policy that maps one activation to a
//! [`Transition`].
//!
//! Everything here is pure data and `const` computation. Owning a phase,
//! storing user callbacks, and deciding when activations are delivered are the
//! job of a stateful control layer (see `mollyguard_control`); resolving what
//! the control should look like per phase is the job of `mollyguard_style`.
//!
//! ## Policy
//!
//! - `Active` + activation → `Confirming`, firing [`Effect::Click`].
//! - `Confirming` + activation → `Active`, firing [`Effect::Confirm`], when
//!   `disable_after_confirmed` is off: the control loops and can be used again.
//! - `Confirming` + activation → `Disabled`, firing [`Effect::Confirm`] then
//!   [`Effect::Disable`], when `disable_after_confirmed` is on.
//! - `Disabled` + activation → no transition at all. The phase is terminal and
//!   the policy answers `None`, so a control built on it stays inert even if a
//!   host keeps delivering activations.
//!
//! Effect order within one activation is part of the contract: `Confirm`
//! always precedes `Disable`, so disable-side work may assume the confirmed
//! action has already run.
//!
//! ## Minimal example
//!
//! ```rust
//! use mollyguard_state::{Effect, Phase};
//!
//! // One-shot policy: disable after the confirming activation.
//! let armed = Phase::Active.on_activation(true).unwrap();
//! assert_eq!(armed.next, Phase::Confirming);
//! assert_eq!(armed.effects, &[Effect::Click]);
//!
//! let confirmed = armed.next.on_activation(true).unwrap();
//! assert_eq!(confirmed.next, Phase::Disabled);
//! assert_eq!(confirmed.effects, &[Effect::Confirm, Effect::Disable]);
//!
//! // Terminal: further activations do nothing.
//! assert!(confirmed.next.on_activation(true).is_none());
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

/// The interaction phase of a click-to-confirm control.
///
/// Exactly one phase exists per control instance. Phases only change in
/// response to an activation, via [`Phase::on_activation`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The resting phase; the guarded action has not been requested.
    #[default]
    Active,
    /// Armed: one more activation confirms the guarded action.
    Confirming,
    /// Terminal: the action was confirmed and the control switched itself off.
    Disabled,
}

/// A callback slot fired while applying a [`Transition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// The arming activation (`Active` → `Confirming`) was accepted.
    Click,
    /// The guarded action is confirmed (any transition out of `Confirming`).
    Confirm,
    /// The control is about to become `Disabled`; always after `Confirm`.
    Disable,
}

/// The outcome of one accepted activation.
///
/// `effects` lists the callback slots to fire, in order, before `next` becomes
/// the control's phase. The slices are static: the whole transition table is
/// known at compile time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The phase the control moves to once the effects have run.
    pub next: Phase,
    /// Callback slots to fire for this activation, in order.
    pub effects: &'static [Effect],
}

impl Phase {
    /// Returns `true` while in the resting [`Phase::Active`] phase.
    #[must_use]
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns `true` while armed and awaiting the confirming activation.
    #[must_use]
    #[inline]
    pub const fn is_confirming(self) -> bool {
        matches!(self, Self::Confirming)
    }

    /// Returns `true` once the control has switched itself off.
    #[must_use]
    #[inline]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Computes the transition for one activation in this phase.
    ///
    /// `disable_after_confirmed` selects the policy for leaving
    /// [`Phase::Confirming`]: loop back to `Active` (off) or move to the
    /// terminal `Disabled` phase (on). It has no influence on the other
    /// phases.
    ///
    /// Returns `None` in [`Phase::Disabled`]: the activation is rejected
    /// outright, with no effects to fire. Callers that want to stop receiving
    /// activations earlier should additionally render a non-interactive
    /// element, but correctness does not depend on that.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mollyguard_state::{Effect, Phase};
    ///
    /// let t = Phase::Confirming.on_activation(false).unwrap();
    /// assert_eq!(t.next, Phase::Active);
    /// assert_eq!(t.effects, &[Effect::Confirm]);
    /// ```
    #[must_use]
    pub const fn on_activation(self, disable_after_confirmed: bool) -> Option<Transition> {
        match (self, disable_after_confirmed) {
            (Self::Active, _) => Some(Transition {
                next: Self::Confirming,
                effects: &[Effect::Click],
            }),
            (Self::Confirming, false) => Some(Transition {
                next: Self::Active,
                effects: &[Effect::Confirm],
            }),
            (Self::Confirming, true) => Some(Transition {
                next: Self::Disabled,
                effects: &[Effect::Confirm, Effect::Disable],
            }),
            (Self::Disabled, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASES: [Phase; 3] = [Phase::Active, Phase::Confirming, Phase::Disabled];

    #[test]
    fn default_phase_is_active() {
        assert_eq!(Phase::default(), Phase::Active);
        assert!(Phase::default().is_active());
    }

    #[test]
    fn predicates_match_exactly_one_phase() {
        for phase in PHASES {
            let truths = [
                phase.is_active(),
                phase.is_confirming(),
                phase.is_disabled(),
            ];
            assert_eq!(
                truths.iter().filter(|&&t| t).count(),
                1,
                "exactly one predicate should hold for {phase:?}"
            );
        }
    }

    #[test]
    fn active_arms_regardless_of_policy() {
        for flag in [false, true] {
            let t = Phase::Active.on_activation(flag).unwrap();
            assert_eq!(t.next, Phase::Confirming);
            assert_eq!(t.effects, &[Effect::Click]);
        }
    }

    #[test]
    fn confirming_loops_back_when_policy_is_off() {
        let t = Phase::Confirming.on_activation(false).unwrap();
        assert_eq!(t.next, Phase::Active);
        assert_eq!(t.effects, &[Effect::Confirm]);
    }

    #[test]
    fn confirming_disables_when_policy_is_on() {
        let t = Phase::Confirming.on_activation(true).unwrap();
        assert_eq!(t.next, Phase::Disabled);
        assert_eq!(t.effects, &[Effect::Confirm, Effect::Disable]);
    }

    #[test]
    fn disabled_is_terminal() {
        assert_eq!(Phase::Disabled.on_activation(false), None);
        assert_eq!(Phase::Disabled.on_activation(true), None);
    }

    #[test]
    fn click_fires_only_on_the_arming_edge() {
        for phase in PHASES {
            for flag in [false, true] {
                let Some(t) = phase.on_activation(flag) else {
                    continue;
                };
                let has_click = t.effects.contains(&Effect::Click);
                assert_eq!(has_click, phase == Phase::Active);
            }
        }
    }

    #[test]
    fn confirm_fires_exactly_on_leaving_confirming() {
        for phase in PHASES {
            for flag in [false, true] {
                let Some(t) = phase.on_activation(flag) else {
                    continue;
                };
                let confirms = t.effects.iter().filter(|&&e| e == Effect::Confirm).count();
                assert_eq!(confirms, usize::from(phase == Phase::Confirming));
            }
        }
    }

    #[test]
    fn disable_fires_iff_entering_disabled_and_after_confirm() {
        for phase in PHASES {
            for flag in [false, true] {
                let Some(t) = phase.on_activation(flag) else {
                    continue;
                };
                let disable_at = t.effects.iter().position(|&e| e == Effect::Disable);
                if t.next == Phase::Disabled {
                    let confirm_at = t
                        .effects
                        .iter()
                        .position(|&e| e == Effect::Confirm)
                        .expect("entering Disabled must confirm first");
                    assert!(confirm_at < disable_at.expect("entering Disabled must fire Disable"));
                } else {
                    assert_eq!(disable_at, None);
                }
            }
        }
    }

    // Looping policy: arbitrarily many activations cycle between Active and
    // Confirming and never reach Disabled.
    #[test]
    fn looping_policy_never_disables() {
        let mut phase = Phase::default();
        for step in 0..64 {
            let t = phase.on_activation(false).unwrap();
            phase = t.next;
            let expected = if step % 2 == 0 {
                Phase::Confirming
            } else {
                Phase::Active
            };
            assert_eq!(phase, expected);
        }
    }

    // One-shot policy: two activations reach Disabled, after which the policy
    // rejects every further activation.
    #[test]
    fn one_shot_policy_absorbs_in_disabled() {
        let mut phase = Phase::default();
        phase = phase.on_activation(true).unwrap().next;
        assert_eq!(phase, Phase::Confirming);
        phase = phase.on_activation(true).unwrap().next;
        assert_eq!(phase, Phase::Disabled);

        for _ in 0..16 {
            assert_eq!(phase.on_activation(true), None);
            assert_eq!(phase.on_activation(false), None);
        }
    }
}
