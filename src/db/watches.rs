/*!
Watch lists, one per literal.

The list of a literal *p* is visited during [propagation](crate::procedures::bcp) when *p* becomes true, and holds three kinds of [Watch]:

- [Binary](Watch::Binary), an absorbed binary clause. \
  The clause *q* ∨ *r* is absorbed by watching *r* on the list of -*q* and *q* on the list of -*r*, without storing the clause.
- [Propagator](Watch::Propagator), a token forwarded to some propagator.
- [Long](Watch::Long), a stored clause. \
  A stored clause is watched on the lists of the negations of the literals at index 0 and index 1 of the clause.

Lists are indexed by the [code](crate::structures::literal::CLiteral::code) of a literal.
*/

use crate::{
    channel::PropagatorId,
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err,
};

/// A watch on some literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    /// The other literal of an absorbed binary clause.
    Binary(CLiteral),

    /// A token for the propagator `id`, carrying `data`.
    Propagator { id: PropagatorId, data: u32 },

    /// A stored clause.
    Long(ClauseKey),
}

/// Watch lists, indexed by literal code.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<Watch>>,
}

impl Watches {
    /// Ensures lists exist for both literals of each atom below `atom_count`.
    pub fn grow(&mut self, atom_count: usize) {
        if self.lists.len() < 2 * atom_count {
            self.lists.resize_with(2 * atom_count, Vec::default);
        }
    }

    /// Adds `watch` to the list of `literal`.
    pub fn watch(&mut self, literal: CLiteral, watch: Watch) {
        self.lists[literal.code()].push(watch);
    }

    /// Removes the watch of the clause `key` from the list of `literal`.
    ///
    /// The relative order of the remaining watches is preserved.
    pub fn unwatch_long(&mut self, literal: CLiteral, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        let list = &mut self.lists[literal.code()];
        match list.iter().position(|watch| *watch == Watch::Long(key)) {
            Some(index) => {
                list.remove(index);
                Ok(())
            }
            None => Err(err::ClauseDBError::CorruptList),
        }
    }

    /// The list of `literal`.
    pub fn list(&self, literal: CLiteral) -> &[Watch] {
        &self.lists[literal.code()]
    }

    /// Takes the list of `literal`, leaving an empty list in place.
    ///
    /// The counterpart of [restore](Watches::restore).
    pub fn take(&mut self, literal: CLiteral) -> Vec<Watch> {
        std::mem::take(&mut self.lists[literal.code()])
    }

    /// Places `list` as the list of `literal`.
    ///
    /// Any watches added to the list of `literal` since the list was [taken](Watches::take) are kept, after those of `list`.
    pub fn restore(&mut self, literal: CLiteral, mut list: Vec<Watch>) {
        let added = std::mem::take(&mut self.lists[literal.code()]);
        list.extend(added);
        self.lists[literal.code()] = list;
    }

    /// True if the lists of both literals of `atom` are empty.
    pub fn is_unwatched(&self, atom: Atom) -> bool {
        self.lists[CLiteral::new(atom, true).code()].is_empty()
            && self.lists[CLiteral::new(atom, false).code()].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_keeps_additions() {
        let mut watches = Watches::default();
        watches.grow(4);

        let p = CLiteral::new(2, true);
        watches.watch(p, Watch::Long(ClauseKey::Original(0)));
        watches.watch(p, Watch::Long(ClauseKey::Original(1)));

        let mut list = watches.take(p);
        assert!(watches.list(p).is_empty());

        list.truncate(1);
        watches.watch(p, Watch::Binary(CLiteral::new(3, false)));
        watches.restore(p, list);

        assert_eq!(
            watches.list(p),
            &[
                Watch::Long(ClauseKey::Original(0)),
                Watch::Binary(CLiteral::new(3, false))
            ]
        );
    }

    #[test]
    fn unwatch_preserves_order() {
        let mut watches = Watches::default();
        watches.grow(3);

        let p = CLiteral::new(2, false);
        for index in 0..4 {
            watches.watch(p, Watch::Long(ClauseKey::Addition(index, 0)));
        }

        assert!(watches.unwatch_long(p, ClauseKey::Addition(1, 0)).is_ok());
        assert_eq!(
            watches.unwatch_long(p, ClauseKey::Addition(1, 0)),
            Err(err::ClauseDBError::CorruptList)
        );
        assert_eq!(
            watches.list(p),
            &[
                Watch::Long(ClauseKey::Addition(0, 0)),
                Watch::Long(ClauseKey::Addition(2, 0)),
                Watch::Long(ClauseKey::Addition(3, 0))
            ]
        );
        assert!(!watches.is_unwatched(2));
        assert!(watches.is_unwatched(1));
    }
}
