/*!
Atoms for facts about finite-domain variables.

# Dense atoms

[new_atoms](GenericContext::new_atoms) creates a block of atoms for consecutive values of some variable, with the value of the channel info incremented for each atom.

# Lazy atoms

An atom may also be created when first needed, with [get_lazy_var](GenericContext::get_lazy_var).
A lazy atom is released with [remove_lazy_var](GenericContext::remove_lazy_var), and the owner of the atom is told through [free_lazy_var](crate::channel::DomainVariable::free_lazy_var).

The reuse of released lazy atoms is controlled by [lazy_reuse](crate::config::Config::lazy_reuse), off by default.
While off, releasing an atom does nothing, and each request is met with a fresh atom.

While on, an atom is only released if:
- The atom was obtained lazily.
- No learnt clause uses the atom.
- The atom has no value.
- No watch list of a literal of the atom is non-empty.

A released atom is not decidable while in the pool, and on reuse the activity, saved value, flags, and channel info of the atom are reset.
*/

use crate::{
    channel::ChannelInfo,
    context::GenericContext,
    misc::log::targets,
    structures::atom::Atom,
    types::err::{self, AtomDBError},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates `count` fresh atoms for consecutive values from `info`, and returns the first atom.
    ///
    /// The atoms are consecutive.
    pub fn new_atoms(&mut self, count: usize, info: ChannelInfo) -> Result<Atom, AtomDBError> {
        let first = self.atom_db.count() as Atom;
        for offset in 0..count {
            self.fresh_atom(info.offset(offset as i32))?;
        }
        Ok(first)
    }

    /// An atom for the fact of `info`, reused from the pool if possible.
    ///
    /// A pooled atom is reused only while the atom could be released again.
    /// Otherwise a fresh atom is made.
    pub fn get_lazy_var(&mut self, info: ChannelInfo) -> Result<Atom, AtomDBError> {
        if self.config.lazy_reuse.value {
            // Pooled atoms picked up by some clause since release stay pooled until free again.
            let reusable = self.atom_db.lazy_pool.iter().rposition(|&atom| {
                self.atom_db.value_of(atom).is_none()
                    && self.watches.is_unwatched(atom)
                    && self.atom_db.usage_of(atom) == 0
            });

            if let Some(index) = reusable {
                let atom = self.atom_db.lazy_pool.remove(index);
                log::trace!(target: targets::LAZY, "Reuse {atom}");
                self.atom_db.set_channel_info(atom, info);
                self.atom_db.reset_activity(atom);
                self.atom_db.set_previous_value(atom, false);
                *self.atom_db.flags_mut(atom) = Default::default();
                self.insert_var_order(atom);
                return Ok(atom);
            }
        }

        let atom = self.fresh_atom(info)?;
        self.atom_db.set_lazy(atom, true);
        log::trace!(target: targets::LAZY, "Fresh lazy {atom}");
        Ok(atom)
    }

    /// Releases the lazy atom `atom` to the pool, if [lazy_reuse](crate::config::Config::lazy_reuse) is set.
    pub fn remove_lazy_var(&mut self, atom: Atom) -> Result<(), err::AtomDBError> {
        if !self.config.lazy_reuse.value {
            return Ok(());
        }

        if !self.atom_db.is_lazy(atom) {
            return Err(AtomDBError::NotLazy);
        }
        if self.atom_db.usage_of(atom) != 0 {
            return Err(AtomDBError::LazyAtomInUse);
        }
        if self.atom_db.value_of(atom).is_some() {
            return Err(AtomDBError::LazyAtomAssigned);
        }
        if !self.watches.is_unwatched(atom) {
            return Err(AtomDBError::LazyAtomWatched);
        }
        if self.atom_db.lazy_pool.contains(&atom) {
            return Ok(());
        }

        log::trace!(target: targets::LAZY, "Free {atom}");
        self.atom_db.flags_mut(atom).decidable = false;
        self.atom_db.heap_remove(atom);
        self.atom_db.lazy_pool.push(atom);

        let info = *self.atom_db.channel_info_of(atom);
        self.channels.free_lazy_var(&info);
        Ok(())
    }
}
