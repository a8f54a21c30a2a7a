/*!
Choosing a literal to value, and valuing the literal on a fresh level.

# Overview

Decidable atoms without a value are kept on an activity heap.
The heap is updated lazily:
an atom is placed on the heap when the atom loses its value (see [backjump](crate::procedures::backjump)), though an atom is not removed from the heap when valued.
So, [finished](GenericContext::finished) discards stale atoms from the top of the heap, and [branch](GenericContext::branch) skips any stale atom.

The polarity of a decision on an atom is the saved value of the atom, which is false for an atom never valued.

With some probability (the [random decision bias](crate::config::Config::random_decision_bias)) a decision is made on a random decidable atom without a value, in place of the most active atom.

# Activity

Atom activity follows VSIDS:
the caller bumps the activity of atoms involved in a conflict with [bump_atom](GenericContext::bump_atom), and after each conflict calls [decay_atom_activity](GenericContext::decay_atom_activity).

# Example

```rust
# use otter_lcg::context::Context;
# use otter_lcg::config::Config;
# use otter_lcg::structures::literal::{CLiteral, Literal};
let mut ctx = Context::from_config(Config::default());
let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
    panic!("Insufficient literals");
};

ctx.bump_atom(q.atom());

assert!(!ctx.finished());
let choice = ctx.branch().unwrap();
assert_eq!(choice, -q);

ctx.decide(choice);
ctx.decide(-p);
assert!(ctx.finished());
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        reason::Reason,
    },
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Places `atom` on the activity heap, if `atom` is decidable and not already on the heap.
    pub fn insert_var_order(&mut self, atom: Atom) {
        self.atom_db.heap_activate(atom);
    }

    /// True if every decidable atom has a value, and false otherwise.
    ///
    /// Stale atoms are discarded from the top of the activity heap, and so on false the most active atom on the heap is eligible for a decision.
    pub fn finished(&mut self) -> bool {
        while let Some(atom) = self.atom_db.heap_peek_most_active() {
            if self.atom_db.value_of(atom).is_none() && self.atom_db.flags_of(atom).decidable {
                return false;
            }
            self.atom_db.heap_remove(atom);
        }
        true
    }

    /// A literal to decide on, if [vsids](crate::config::Config::vsids) is enabled and some decidable atom has no value.
    pub fn branch(&mut self) -> Option<CLiteral> {
        if !self.config.vsids.value {
            return None;
        }

        let bias = self.config.random_decision_bias.value;
        if bias > 0.0 && self.rng.random_bool(bias) {
            if let Some(atom) = self.random_decidable_atom() {
                log::trace!(target: targets::DECISION, "Random choice of {atom}");
                self.atom_db.heap_remove(atom);
                return Some(self.polarised(atom));
            }
        }

        while let Some(atom) = self.atom_db.heap_pop_most_active() {
            if self.atom_db.value_of(atom).is_none() && self.atom_db.flags_of(atom).decidable {
                return Some(self.polarised(atom));
            }
        }
        None
    }

    /// Opens a fresh level and values `literal` on the level as a decision.
    pub fn decide(&mut self, literal: CLiteral) {
        log::trace!(target: targets::DECISION, "Decision {literal}");
        self.counters.decisions += 1;
        self.trail.push_level();
        self.enqueue(literal, Reason::Decision);
    }

    /// Bumps the activity of `atom`.
    pub fn bump_atom(&mut self, atom: Atom) {
        self.atom_db.bump_activity(atom);
    }

    /// Decays the activity of every atom, by growing the bump.
    pub fn decay_atom_activity(&mut self) {
        self.atom_db.decay_activity();
    }

    /// The literal of `atom` with the saved value of `atom` as polarity.
    fn polarised(&self, atom: Atom) -> CLiteral {
        CLiteral::new(atom, self.atom_db.previous_value_of(atom))
    }

    /// Some decidable atom without a value, chosen at random.
    fn random_decidable_atom(&mut self) -> Option<Atom> {
        let candidates = (0..self.atom_db.count() as Atom)
            .filter(|atom| {
                self.atom_db.value_of(*atom).is_none() && self.atom_db.flags_of(*atom).decidable
            })
            .collect::<Vec<_>>();

        match candidates.len() {
            0 => None,
            count => Some(candidates[self.rng.random_range(0..count)]),
        }
    }
}
