//! Combatant snapshot seam
//!
//! The simulation owns combatants; the selector asks for a fresh snapshot on
//! every selection and keeps nothing between calls.

use crate::models::Combatant;
use std::borrow::Cow;

pub trait CombatantProvider {
    fn snapshot(&self) -> Cow<'_, [Combatant]>;
}

impl CombatantProvider for [Combatant] {
    fn snapshot(&self) -> Cow<'_, [Combatant]> {
        Cow::Borrowed(self)
    }
}

impl CombatantProvider for Vec<Combatant> {
    fn snapshot(&self) -> Cow<'_, [Combatant]> {
        Cow::Borrowed(self.as_slice())
    }
}

/// Provider backed by a closure, for sources that build a snapshot on demand.
pub struct SnapshotFn<F>(pub F);

impl<F> CombatantProvider for SnapshotFn<F>
where
    F: Fn() -> Vec<Combatant>,
{
    fn snapshot(&self) -> Cow<'_, [Combatant]> {
        Cow::Owned((self.0)())
    }
}
