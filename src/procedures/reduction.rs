/*!
Removal of stored clauses, and maintenance of the learnt clauses.

# Removal

[remove_clause](GenericContext::remove_clause) unwatches a stored clause, updates the counts of stored literals, and frees the slot of the clause.
For a learnt clause the usage of each atom of the clause is decremented, and the record of the clause (if any) is completed and passed to the callback.

# Reduction

[reduce_db](GenericContext::reduce_db) sorts the learnt clauses by activity (lowest first, with ties broken by key) and removes each clause among the first half which is not *locked*.

A clause is locked when it is the reason for the value of the literal at index 0 of the clause.
Removing a locked clause would leave the literal without a reason, and so locked clauses are always kept.

# Simplification

At the root, [simplify_db](GenericContext::simplify_db) removes learnt clauses satisfied by the root valuation, and drops false literals from the remaining learnt clauses.
Only literals after index 1 are dropped, so the watches of each clause are untouched.

Simplification is scheduled by a count of propagations, and made as part of [top_level_cleanup](GenericContext::top_level_cleanup) when due.
After each simplification the next is scheduled after the count of propagations made so far plus the count of stored literals.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets,
    structures::{literal::Literal, reason::Reason, valuation::Valuation},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Removes the stored clause `key`.
    pub fn remove_clause(&mut self, key: ClauseKey) -> Result<(), ErrorKind> {
        let clause = self.clause_db.get(&key)?;
        debug_assert!(clause.len() > 1, "Stored unit {key}");
        let (first, second) = (clause[0], clause[1]);

        self.watches.unwatch_long(-first, key)?;
        self.watches.unwatch_long(-second, key)?;

        let clause = self.clause_db.take(&key)?;
        match clause.is_learnt() {
            true => {
                self.clause_db.stats.learnt_literals -= clause.len();
                for literal in clause.iter() {
                    self.atom_db.decrement_usage(literal.atom());
                }
                self.clause_db
                    .make_callback_learnt_record(&key, clause.raw_activity());
            }

            false => self.clause_db.stats.clause_literals -= clause.len(),
        }

        log::trace!(target: targets::CLAUSE_DB, "Removed {key}: {clause}");
        Ok(())
    }

    /// True if the clause `key` is the reason for the value of the literal at index 0 of the clause.
    pub fn locked(&self, key: &ClauseKey) -> Result<bool, err::ClauseDBError> {
        let first = self.clause_db.get(key)?[0];
        Ok(self.atom_db.literal_value(first) == Some(true)
            && *self.atom_db.reason_of(first.atom()) == Reason::Clause(*key))
    }

    /// Removes each unlocked learnt clause among the least active half of the learnt clauses.
    ///
    /// Returns the count of removed clauses.
    pub fn reduce_db(&mut self) -> Result<usize, ErrorKind> {
        let mut keys = Vec::with_capacity(self.clause_db.addition_count());
        for key in self.clause_db.addition_keys() {
            keys.push((self.clause_db.activity_of(&key)?, key));
        }
        keys.sort_by(|(a, a_key), (b, b_key)| a.total_cmp(b).then(a_key.cmp(b_key)));

        let mut removed = 0;
        for (_, key) in keys.iter().take(keys.len() / 2) {
            if !self.locked(key)? {
                self.remove_clause(*key)?;
                removed += 1;
            }
        }

        self.counters.reductions += 1;
        log::info!(target: targets::REDUCTION, "Pruned {removed} learnt clauses");
        Ok(removed)
    }

    /// Removes learnt clauses satisfied at the root, and drops false literals after index 1 of each remaining learnt clause.
    ///
    /// Requires no decision to have been made.
    pub fn simplify_db(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() != 0 {
            return Err(err::ClauseDBError::DecisionMade.into());
        }

        for key in self.clause_db.addition_keys() {
            let clause = self.clause_db.get_mut(&key)?;
            let valuation = self.atom_db.valuation();

            if clause
                .iter()
                .any(|literal| valuation.literal_value(*literal) == Some(true))
            {
                self.remove_clause(key)?;
                continue;
            }

            let literals = clause.literals_mut();
            let mut dropped = Vec::default();
            let mut kept = 2;
            for index in 2..literals.len() {
                let literal = literals[index];
                match valuation.literal_value(literal) {
                    Some(false) => dropped.push(literal),
                    _ => {
                        literals[kept] = literal;
                        kept += 1;
                    }
                }
            }
            literals.truncate(kept);

            self.clause_db.stats.learnt_literals -= dropped.len();
            for literal in dropped {
                self.atom_db.decrement_usage(literal.atom());
            }
        }

        self.next_simplify = self.counters.propagations
            + self.clause_db.stats.clause_literals
            + self.clause_db.stats.learnt_literals;
        self.counters.simplifications += 1;

        log::debug!(target: targets::REDUCTION, "Simplified, next at {}", self.next_simplify);
        Ok(())
    }

    /// Clears the root level of the trail, simplifying the learnt clauses if due.
    ///
    /// Values at the root are kept, though the root literals are no longer on the trail.
    /// Requires no decision to have been made.
    pub fn top_level_cleanup(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() != 0 {
            return Err(err::ClauseDBError::DecisionMade.into());
        }

        if self.config.simplify.value && self.counters.propagations >= self.next_simplify {
            self.simplify_db()?;
        }

        for literal in self.trail.clear_root() {
            self.atom_db.forget_position(literal.atom());
        }
        Ok(())
    }
}
