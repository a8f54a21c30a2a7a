use crate::{config::Activity, db::ClauseKey, misc::log::targets, types::err};

use super::ClauseDB;

/// Methods for the activity of learnt clauses.
///
/// As with atoms, the bump grows each conflict in place of a decay to every clause.
impl ClauseDB {
    /// Bumps the activity of the clause `key`.
    ///
    /// If the activity of the clause passes the configured maximum, the activity of every addition is rescaled.
    pub fn bump_clause(&mut self, key: &ClauseKey) -> Result<(), err::ClauseDBError> {
        let (bump, max) = (self.config.bump.value, self.config.bump.max);
        let clause = self.get_mut(key)?;
        clause.bump(bump);

        if clause.activity() > max {
            self.rescale_activity();
        }
        Ok(())
    }

    /// Increases the bump applied to clauses by a factor.
    pub fn decay_clause_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
    }

    /// The activity of the clause `key`.
    pub fn activity_of(&self, key: &ClauseKey) -> Result<Activity, err::ClauseDBError> {
        Ok(self.get(key)?.activity())
    }

    /// Scales the activity of each addition, and the bump, by the inverse of the maximum activity.
    fn rescale_activity(&mut self) {
        log::trace!(target: targets::CLAUSE_DB, "Rescaling clause activity");
        let factor = 1.0 / self.config.bump.max;
        for clause in self.addition.iter_mut().flatten() {
            clause.scale_activity(factor);
        }
        self.config.bump.value *= factor;
    }
}
