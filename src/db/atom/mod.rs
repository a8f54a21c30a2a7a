/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- The current (partial) [valuation](Valuation), and the previous value of each atom for use in [decisions](crate::procedures::decision).
- An [IndexHeap] recording the activity of atoms, where decidable atoms without a value are 'active' on the heap.
- The level, trail position, and reason of each valued atom.
- [Flags](AtomFlags), [channel info](ChannelInfo), and the usage count of each atom.
- The pool of released lazy atoms, see [lazy](crate::procedures::lazy).

Watch lists are kept apart, in [Watches](crate::db::watches::Watches), as propagation mutates the lists and the valuation together.
*/

pub mod activity;

use crate::{
    channel::ChannelInfo,
    config::{dbs::AtomDBConfig, Activity, Config},
    db::{trail::TrailPosition, LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets,
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
        reason::Reason,
        valuation::{vValuation, Valuation},
    },
    types::err::AtomDBError,
};

/// Flags on an atom, read by the caller during analysis and search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtomFlags {
    /// The atom may be chosen for a decision.
    pub decidable: bool,

    /// The atom may be a unique implication point of a learnt clause.
    pub uipable: bool,

    /// The atom may appear in a learnt clause.
    pub learnable: bool,
}

impl Default for AtomFlags {
    fn default() -> Self {
        AtomFlags {
            decidable: true,
            uipable: true,
            learnable: true,
        }
    }
}

/// The atom database.
pub struct AtomDB {
    /// The current (often partial) valuation.
    valuation: vValuation,

    /// The value of each atom the last time the value was saved.
    previous_valuation: Vec<bool>,

    /// Activity of each atom, where any decidable atom without a value is active on the heap.
    activity_heap: IndexHeap<Activity>,

    /// The level on which each atom was valued, meaningful only while the atom is valued.
    levels: Vec<LevelIndex>,

    /// The trail position of each atom, meaningful only while the atom is valued.
    positions: Vec<Option<TrailPosition>>,

    /// The reason for the value of each atom, meaningful only while the atom is valued.
    reasons: Vec<Reason>,

    flags: Vec<AtomFlags>,

    channel_info: Vec<ChannelInfo>,

    /// A count of learnt clauses containing each atom.
    usage: Vec<u32>,

    /// Whether each atom was obtained lazily.
    lazy: Vec<bool>,

    /// Whether each atom was valued at the root when the root was last cleared.
    seen: Vec<bool>,

    /// Released lazy atoms, available for reuse.
    pub(crate) lazy_pool: Vec<Atom>,

    /// A local configuration, derived from the configuration of a context.
    pub config: AtomDBConfig,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        AtomDB {
            valuation: Vec::default(),
            previous_valuation: Vec::default(),
            activity_heap: IndexHeap::default(),
            levels: Vec::default(),
            positions: Vec::default(),
            reasons: Vec::default(),
            flags: Vec::default(),
            channel_info: Vec::default(),
            usage: Vec::default(),
            lazy: Vec::default(),
            seen: Vec::default(),
            lazy_pool: Vec::default(),

            config: config.atom_db.clone(),
        }
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The value of `atom`, if the atom has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// Whether `literal` is true, false, or has no value.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.valuation.literal_value(literal)
    }

    /// A fresh atom, without a value and with a default activity of zero.
    ///
    /// The atom is not placed on the activity heap.
    pub fn fresh_atom(&mut self, info: ChannelInfo) -> Result<Atom, AtomDBError> {
        let atom = match self.valuation.len().try_into() {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::VALUATION, "Atoms exhausted");
                return Err(AtomDBError::AtomsExhausted);
            }
        };

        self.activity_heap.add(atom as usize, 0.0);
        self.valuation.push(None);
        self.previous_valuation.push(false);
        self.levels.push(0);
        self.positions.push(None);
        self.reasons.push(Reason::Decision);
        self.flags.push(AtomFlags::default());
        self.channel_info.push(info);
        self.usage.push(0);
        self.lazy.push(false);
        self.seen.push(false);

        Ok(atom)
    }

    /// Values the atom of `literal` with the polarity of `literal`, noting `level`, `position`, and `reason`.
    ///
    /// Panics in debug builds if the atom already has a value.
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        position: TrailPosition,
        reason: Reason,
    ) {
        let atom = literal.atom() as usize;
        debug_assert!(
            self.valuation[atom].is_none(),
            "Atom {atom} valued twice"
        );
        log::trace!(target: targets::VALUATION, "Set {literal} at {level} due to {reason}");

        self.valuation[atom] = Some(literal.polarity());
        self.levels[atom] = level;
        self.positions[atom] = Some(position);
        self.reasons[atom] = reason;
    }

    /// Clears the value of `atom`, saving the value as the previous value of `atom` if `save` is true.
    pub fn clear_value(&mut self, atom: Atom, save: bool) {
        let atom = atom as usize;
        if save {
            if let Some(value) = self.valuation[atom] {
                self.previous_valuation[atom] = value;
            }
        }
        self.valuation[atom] = None;
        self.reasons[atom] = Reason::Decision;
        self.positions[atom] = None;
    }

    /// The level of `atom`, meaningful only while the atom has a value.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.levels[atom as usize]
    }

    /// The trail position of `atom`, if the atom has a value and is on the trail.
    pub fn position_of(&self, atom: Atom) -> Option<TrailPosition> {
        self.positions[atom as usize]
    }

    /// The reason for the value of `atom`.
    pub fn reason_of(&self, atom: Atom) -> &Reason {
        &self.reasons[atom as usize]
    }

    /// The value of `atom` when the value was last saved.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation[atom as usize]
    }

    pub fn set_previous_value(&mut self, atom: Atom, value: bool) {
        self.previous_valuation[atom as usize] = value;
    }

    pub fn flags_of(&self, atom: Atom) -> &AtomFlags {
        &self.flags[atom as usize]
    }

    /// The flags of `atom`, for mutation.
    ///
    /// If `atom` is no longer decidable, `atom` is left on the heap until found by [finished](crate::context::GenericContext::finished).
    pub fn flags_mut(&mut self, atom: Atom) -> &mut AtomFlags {
        &mut self.flags[atom as usize]
    }

    pub fn channel_info_of(&self, atom: Atom) -> &ChannelInfo {
        &self.channel_info[atom as usize]
    }

    pub fn set_channel_info(&mut self, atom: Atom, info: ChannelInfo) {
        self.channel_info[atom as usize] = info;
    }

    /// A count of learnt clauses containing `atom`.
    pub fn usage_of(&self, atom: Atom) -> u32 {
        self.usage[atom as usize]
    }

    pub fn increment_usage(&mut self, atom: Atom) {
        self.usage[atom as usize] += 1;
    }

    pub fn decrement_usage(&mut self, atom: Atom) {
        let usage = &mut self.usage[atom as usize];
        debug_assert!(*usage > 0, "Usage of {atom} below zero");
        *usage = usage.saturating_sub(1);
    }

    /// True if `atom` was obtained lazily.
    pub fn is_lazy(&self, atom: Atom) -> bool {
        self.lazy[atom as usize]
    }

    pub fn set_lazy(&mut self, atom: Atom, lazy: bool) {
        self.lazy[atom as usize] = lazy;
    }

    /// True if `atom` was valued at the root when the root was last cleared.
    pub fn seen_at_root(&self, atom: Atom) -> bool {
        self.seen[atom as usize]
    }

    /// Notes `atom` was valued at the root when the root was cleared.
    pub fn forget_position(&mut self, atom: Atom) {
        self.seen[atom as usize] = true;
        self.positions[atom as usize] = None;
    }

    /// Places `atom` on the activity heap, if decidable and not already on the heap.
    pub fn heap_activate(&mut self, atom: Atom) {
        if self.flags[atom as usize].decidable {
            self.activity_heap.activate(atom as usize);
        }
    }

    /// Removes `atom` from the activity heap, if present.
    pub fn heap_remove(&mut self, atom: Atom) {
        self.activity_heap.remove(atom as usize);
    }

    /// True if `atom` is on the activity heap.
    pub fn heap_contains(&self, atom: Atom) -> bool {
        self.activity_heap.contains(atom as usize)
    }

    /// The most active atom on the heap.
    pub fn heap_peek_most_active(&self) -> Option<Atom> {
        self.activity_heap.peek_max().map(|index| index as Atom)
    }

    /// Pops the most active atom from the activity heap.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }
}
