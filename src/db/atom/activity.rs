//! Methods for inspecting and mutating the activity of atoms, for VSIDS.
//!
//! Bumps grow over time rather than activities decaying, and so a decay is applied to every atom at once by increasing the bump.
//! When an activity passes the configured maximum every activity (and the bump) is rescaled.

use crate::{config::Activity, db::atom::AtomDB, misc::log::targets, structures::atom::Atom};

impl AtomDB {
    /// The activity of an atom, regardless of whether it is on the activity heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }

    /// Bumps the activity of an atom, and updates it's position on the activity heap if the atom is on the activity heap.
    pub fn bump_activity(&mut self, atom: Atom) {
        if self.activity_of(atom) + self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
        let bump = self.config.bump.value;
        self.activity_heap
            .apply_to_index(atom as usize, |activity| activity + bump);
    }

    /// Increase the activity bump applied to atoms by a factor.
    pub fn decay_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
        if self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
    }

    /// Sets the activity of `atom` to zero.
    pub fn reset_activity(&mut self, atom: Atom) {
        self.activity_heap.revalue(atom as usize, 0.0);
    }

    /// Scales the activity of all atoms and the activity bump by the inverse of the maximum bump.
    pub fn rescore_activity(&mut self) {
        log::trace!(target: targets::DECISION, "Rescoring atom activity");
        let factor = 1.0 / self.config.bump.max;
        self.activity_heap.apply_to_all(|activity| activity * factor);
        self.config.bump.value *= factor;
    }
}
