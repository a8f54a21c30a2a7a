/*!
Tools for building a context.

# Atoms

Atoms are created densely, with [fresh_atom](GenericContext::fresh_atom) (or [fresh_literals](GenericContext::fresh_literals) for the positive literals of fresh atoms).
For atoms standing for facts about a finite-domain variable, see [new_atoms](GenericContext::new_atoms) and [lazy atoms](crate::procedures::lazy).

# Clauses

Clauses are added as either original clauses or as learnt clauses.

Original clauses are added through [add_clause](GenericContext::add_clause) or [add_binary_clause](GenericContext::add_binary_clause), and are simplified against the root valuation before being stored:
- Duplicate literals are dropped.
- A clause containing some literal and its negation, or containing a true literal, is not stored.
- False literals are dropped, and a clause with no remaining literals is [unsatisfiable](crate::types::err::ErrorKind::Unsatisfiable).

Learnt clauses are built by the caller, and are stored unmodified through [add_learnt_clause](GenericContext::add_learnt_clause).
By convention, the literal at index 0 of a learnt clause is the asserted literal and the literal at index 1 is the false literal of highest level.
So, the watches of the clause are correct immediately after a backjump to the level of the literal at index 1.

In either case:
- A unit clause is never stored, and instead the literal is valued at the root.
- A clause of two literals may be absorbed into the watch lists, see [Watch::Binary].
  Learnt clauses of two literals are absorbed only if [binary_learnts](crate::config::Config::binary_learnts) is set.
- Any other clause is stored in the [clause database](crate::db::clause), and watched on the negations of the literals at index 0 and index 1.

# Example

```rust
# use otter_lcg::builder::ClauseOk;
# use otter_lcg::context::Context;
# use otter_lcg::config::Config;
# use otter_lcg::types::err::ErrorKind;
let mut ctx = Context::from_config(Config::default());
let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
    panic!("Insufficient literals");
};

assert_eq!(ctx.add_clause(vec![p, -p, q]), Ok(ClauseOk::Satisfied));
assert_eq!(ctx.add_clause(vec![p, q, q]), Ok(ClauseOk::Absorbed));
assert!(matches!(ctx.add_clause(vec![p, q, r]), Ok(ClauseOk::Stored(_))));

assert_eq!(ctx.add_clause(vec![-r]), Ok(ClauseOk::Valued));
assert_eq!(ctx.add_clause(vec![r]), Err(ErrorKind::Unsatisfiable));
```
*/

use std::collections::HashSet;

use crate::{
    channel::ChannelInfo,
    context::GenericContext,
    db::{clause::record::LearntRecord, watches::Watch, ClauseKey},
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
        reason::Reason,
    },
    types::err::{self, ErrorKind},
};

/// Ok results when adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored in the clause database, with the given key.
    Stored(ClauseKey),

    /// The clause was absorbed into the watch lists.
    Absorbed,

    /// The clause was a unit, and the literal has been valued.
    Valued,

    /// The clause was satisfied, and so was not added.
    Satisfied,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A fresh atom, with channel info `info`.
    ///
    /// The atom is decidable, and is placed on the activity heap.
    pub fn fresh_atom(&mut self, info: ChannelInfo) -> Result<Atom, err::AtomDBError> {
        let atom = self.atom_db.fresh_atom(info)?;
        self.watches.grow(self.atom_db.count());
        self.insert_var_order(atom);
        Ok(atom)
    }

    /// The positive literals of `count` fresh atoms.
    pub fn fresh_literals(&mut self, count: usize) -> Result<Vec<CLiteral>, err::AtomDBError> {
        let mut literals = Vec::with_capacity(count);
        for _ in 0..count {
            let atom = self.fresh_atom(ChannelInfo::default())?;
            literals.push(CLiteral::new(atom, true));
        }
        Ok(literals)
    }

    /// Adds the original clause `p` ∨ `q`.
    ///
    /// If either literal is true, nothing happens.
    /// If exactly one literal is false, the other literal is valued, which requires no decision to have been made.
    pub fn add_binary_clause(&mut self, p: CLiteral, q: CLiteral) -> Result<ClauseOk, ErrorKind> {
        match (self.atom_db.literal_value(p), self.atom_db.literal_value(q)) {
            (Some(true), _) | (_, Some(true)) => Ok(ClauseOk::Satisfied),

            (Some(false), Some(false)) => {
                log::info!(target: targets::CLAUSE_DB, "Binary clause {p} {q} false at the root");
                Err(ErrorKind::Unsatisfiable)
            }

            (Some(false), None) => self.value_unit(q),

            (None, Some(false)) => self.value_unit(p),

            (None, None) => {
                self.clause_db.stats.binary += 1;
                self.watches.watch(-p, Watch::Binary(q));
                self.watches.watch(-q, Watch::Binary(p));
                Ok(ClauseOk::Absorbed)
            }
        }
    }

    /// Adds an original clause, simplified against the current valuation.
    ///
    /// For documentation, see [builder](crate::builder).
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<ClauseOk, ErrorKind> {
        let clause: CClause = clause.into();

        let mut present = HashSet::with_capacity(clause.len());
        let mut simplified = CClause::with_capacity(clause.len());

        for literal in clause {
            if present.contains(&-literal) {
                log::trace!(target: targets::CLAUSE_DB, "Tautology on {literal}");
                return Ok(ClauseOk::Satisfied);
            }
            if !present.insert(literal) {
                continue;
            }

            match self.atom_db.literal_value(literal) {
                Some(true) => return Ok(ClauseOk::Satisfied),
                Some(false) => {}
                None => simplified.push(literal),
            }
        }

        if simplified.is_empty() {
            log::info!(target: targets::CLAUSE_DB, "Original clause false at the root");
            return Err(ErrorKind::Unsatisfiable);
        }

        self.store_clause(simplified, false)
    }

    /// Adds a learnt clause, unmodified, and returns the reason with which the literal at index 0 of the clause may be valued.
    ///
    /// A learnt unit is valued at the root, with no reason.
    pub fn add_learnt_clause(&mut self, clause: impl Into<CClause>) -> Result<Reason, ErrorKind> {
        let clause: CClause = clause.into();
        let other = clause.get(1).copied();

        match self.store_clause(clause, true)? {
            ClauseOk::Stored(key) => Ok(Reason::Clause(key)),

            ClauseOk::Absorbed => match other {
                Some(other) => Ok(Reason::Literal(other)),
                None => Err(err::ClauseDBError::Missing.into()),
            },

            ClauseOk::Valued | ClauseOk::Satisfied => Ok(Reason::Decision),
        }
    }

    /// Adds a learnt clause, and values the literal at index 0 of the clause if the literal has no value.
    pub fn assert_learnt_clause(&mut self, clause: impl Into<CClause>) -> Result<Reason, ErrorKind> {
        let clause: CClause = clause.into();
        let Some(asserted) = clause.first().copied() else {
            return Err(ErrorKind::Unsatisfiable);
        };

        let reason = self.add_learnt_clause(clause)?;
        if self.atom_db.literal_value(asserted).is_none() {
            self.enqueue(asserted, reason);
        }
        Ok(reason)
    }

    /// Values the literal of a unit clause at the root.
    fn value_unit(&mut self, literal: CLiteral) -> Result<ClauseOk, ErrorKind> {
        if self.trail.level() != 0 {
            log::error!(target: targets::CLAUSE_DB, "Unit {literal} added above the root");
            return Err(err::ClauseDBError::DecisionMade.into());
        }

        match self.atom_db.literal_value(literal) {
            Some(true) => Ok(ClauseOk::Satisfied),

            Some(false) => Err(ErrorKind::Unsatisfiable),

            None => {
                self.enqueue(literal, Reason::Decision);
                Ok(ClauseOk::Valued)
            }
        }
    }

    /// Stores `clause`, absorbing or valuing the clause where possible.
    fn store_clause(&mut self, clause: CClause, learnt: bool) -> Result<ClauseOk, ErrorKind> {
        match clause.len() {
            0 => return Err(ErrorKind::Unsatisfiable),
            1 => return self.value_unit(clause[0]),
            _ => {}
        }

        if learnt {
            for literal in &clause {
                self.atom_db.increment_usage(literal.atom());
            }
        } else {
            let stats = &mut self.clause_db.stats;
            match clause.len() {
                2 => stats.binary += 1,
                3 => stats.ternary += 1,
                _ => stats.long += 1,
            }
        }

        let (first, second) = (clause[0], clause[1]);

        if clause.len() == 2 && (!learnt || self.config.binary_learnts.value) {
            self.watches.watch(-first, Watch::Binary(second));
            self.watches.watch(-second, Watch::Binary(first));
            return Ok(ClauseOk::Absorbed);
        }

        let record = match learnt && self.clause_db.config.learnt_stats.value {
            true => Some(self.learnt_record(&clause)),
            false => None,
        };
        let size = clause.len();

        let key = self.clause_db.store(clause, learnt)?;
        self.watches.watch(-first, Watch::Long(key));
        self.watches.watch(-second, Watch::Long(key));

        match learnt {
            true => self.clause_db.stats.learnt_literals += size,
            false => self.clause_db.stats.clause_literals += size,
        }

        if let Some(record) = record {
            self.clause_db.note_record(key, record);
        }

        Ok(ClauseOk::Stored(key))
    }

    /// A partial record of a learnt clause, for diagnostics.
    ///
    /// Literals without a value are counted together as one level.
    fn learnt_record(&self, clause: &[CLiteral]) -> LearntRecord {
        let levels = clause
            .iter()
            .map(|literal| {
                let atom = literal.atom();
                self.atom_db.value_of(atom).map(|_| self.atom_db.level_of(atom))
            })
            .collect::<HashSet<_>>();

        let literals = match self.clause_db.config.learnt_stats_literals.value {
            true => Some(
                clause
                    .iter()
                    .map(|literal| self.literal_string(*literal))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            false => None,
        };

        LearntRecord {
            id: self.clause_db.next_id(),
            size: clause.len(),
            levels: levels.len(),
            literals,
            activity: 0,
        }
    }
}
