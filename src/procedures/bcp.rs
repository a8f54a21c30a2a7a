/*!
Boolean constraint propagation.

# Overview

Propagation drains the current level of the trail, from the queue head of the level, until each literal on the level has been propagated or a conflict is found.

For each literal *p* taken from the trail, each [watch](crate::db::watches::Watch) on the list of *p* is visited in order:

- A binary watch *q*, from the absorbed clause *q* ∨ -*p*.
  + If *q* has no value, *q* is valued with reason [Literal](Reason::Literal)(-*p*).
  + If *q* is false, the conflict is the clause *q* ∨ -*p*.
  + If *q* is true, there is nothing to do.
- A propagator token, which is forwarded to the propagator.
- A stored clause, watched on the negation of the literals at index 0 and index 1 of the clause, and so one of these literals is -*p*.
  + If either watched literal is true, the clause is satisfied and the watch is kept.
  + Otherwise, -*p* is moved to index 1 and some non-false literal is searched for at index 2 or later.
  + If found, the literal is swapped to index 1 and the clause is watched on the list of the negation of the literal in place of the list of *p*.
  + If not found, the literal at index 0 is either false, and the clause is the conflict, or has no value, and is valued with the clause as the reason.

On a conflict the queue head of the level is moved to the end of the level, and the remaining watches of the list are kept without being visited.

# Watch lists

The list of *p* is [taken](crate::db::watches::Watches::take) from the watch database for the duration of the visit, and compacted in place:
a watch which is kept is copied to the front of the list, and a watch which moves to some other list is dropped.
As the literal newly watched by a clause is not false, the list of the negation of the literal is never the list of *p*, and so no watch is visited twice.

# Example

```rust
# use otter_lcg::context::Context;
# use otter_lcg::config::Config;
# use otter_lcg::structures::literal::{CLiteral, Literal};
# use otter_lcg::structures::reason::Reason;
let mut ctx = Context::from_config(Config::default());
let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
    panic!("Insufficient literals");
};

assert!(ctx.add_clause(vec![-p, q, r]).is_ok());

ctx.decide(p);
assert!(ctx.propagate().is_ok());
assert_eq!(ctx.value_of(r), None);

ctx.decide(-q);
assert!(ctx.propagate().is_ok());
assert_eq!(ctx.value_of(r), Some(true));

assert!(matches!(ctx.atom_db.reason_of(r.atom()), Reason::Clause(_)));
```
*/

use crate::{
    context::GenericContext,
    db::watches::Watch,
    misc::log::targets,
    structures::{conflict::Conflict, reason::Reason, valuation::Valuation},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates the current level, stopping at the first conflict.
    ///
    /// For documentation, see [procedures::bcp](crate::procedures::bcp).
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        let mut processed = 0;
        let mut found: Option<Conflict> = None;

        while let Some(p) = self.trail.next_to_propagate() {
            processed += 1;

            let mut list = self.watches.take(p);
            let end = list.len();
            let mut i = 0;
            let mut j = 0;

            while i < end {
                let watch = list[i];
                i += 1;

                match watch {
                    Watch::Binary(q) => {
                        list[j] = watch;
                        j += 1;

                        match self.atom_db.literal_value(q) {
                            None => self.enqueue(q, Reason::Literal(-p)),

                            Some(false) => {
                                found = Some(Conflict::Binary([q, -p]));
                                break;
                            }

                            Some(true) => {}
                        }
                    }

                    Watch::Propagator { id, data } => {
                        list[j] = watch;
                        j += 1;
                        self.channels.wakeup(id, data, 0);
                    }

                    Watch::Long(key) => {
                        let Ok(clause) = self.clause_db.get_mut(&key) else {
                            log::error!(target: targets::PROPAGATION, "Watch on missing clause {key}");
                            continue;
                        };
                        let literals = clause.literals_mut();
                        let valuation = self.atom_db.valuation();

                        if valuation.literal_value(literals[0]) == Some(true)
                            || valuation.literal_value(literals[1]) == Some(true)
                        {
                            list[j] = watch;
                            j += 1;
                            continue;
                        }

                        if literals[0] == -p {
                            literals.swap(0, 1);
                        }

                        let candidate = (2..literals.len())
                            .find(|&k| valuation.literal_value(literals[k]) != Some(false));

                        match candidate {
                            Some(k) => {
                                literals.swap(1, k);
                                let watched = literals[1];
                                self.watches.watch(-watched, watch);
                            }

                            None => {
                                list[j] = watch;
                                j += 1;

                                let first = literals[0];
                                match valuation.literal_value(first) {
                                    Some(false) => {
                                        found = Some(Conflict::Clause(key));
                                        break;
                                    }
                                    _ => self.enqueue(first, Reason::Clause(key)),
                                }
                            }
                        }
                    }
                }
            }

            if found.is_some() {
                while i < end {
                    list[j] = list[i];
                    j += 1;
                    i += 1;
                }
            }

            list.truncate(j);
            self.watches.restore(p, list);

            if found.is_some() {
                self.trail.exhaust_queue();
                break;
            }
        }

        self.counters.propagations += processed;

        match found {
            None => Ok(()),

            Some(conflict) => {
                log::trace!(target: targets::PROPAGATION, "Conflict: {conflict}");
                self.conflict = Some(conflict.clone());
                Err(err::BCPError::Conflict(conflict))
            }
        }
    }
}
