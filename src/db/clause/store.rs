use crate::{
    db::{clause::db_clause::dbClause, ClauseKey, FormulaIndex},
    misc::log::targets,
    structures::clause::CClause,
    types::err,
};

use super::ClauseDB;

/// Methods for placing clauses in, and taking clauses from, the slabs.
///
/// Watches and statistics are not updated, see the [builder](crate::builder).
impl ClauseDB {
    /// Stores `clause` as an original clause, or as an addition if `learnt`, and returns the key of the clause.
    pub fn store(&mut self, clause: CClause, learnt: bool) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause);
        }

        let id = self.next_id;
        self.next_id += 1;

        let key = match learnt {
            false => {
                let index = FormulaIndex::try_from(self.original.len())
                    .map_err(|_| err::ClauseDBError::StorageExhausted)?;
                let key = ClauseKey::Original(index);
                self.original.push(Some(dbClause::new(key, clause, id)));
                key
            }

            true => {
                let key = match self.empty_keys.pop() {
                    Some(key) => {
                        let key = key.retoken()?;
                        self.addition[key.index()] = Some(dbClause::new(key, clause, id));
                        key
                    }

                    None => {
                        let index = FormulaIndex::try_from(self.addition.len())
                            .map_err(|_| err::ClauseDBError::StorageExhausted)?;
                        let key = ClauseKey::Addition(index, 0);
                        self.addition.push(Some(dbClause::new(key, clause, id)));
                        key
                    }
                };
                self.addition_count += 1;
                key
            }
        };

        log::trace!(target: targets::CLAUSE_DB, "Stored {key}");
        Ok(key)
    }

    /// Takes the clause indexed by `key` from the slabs.
    ///
    /// The slot of an addition is made available for reuse.
    pub fn take(&mut self, key: &ClauseKey) -> Result<dbClause, err::ClauseDBError> {
        self.get(key)?;

        let taken = match key {
            ClauseKey::Original(index) => self.original[*index as usize].take(),

            ClauseKey::Addition(index, _) => {
                self.addition_count -= 1;
                self.empty_keys.push(*key);
                self.addition[*index as usize].take()
            }
        };

        log::trace!(target: targets::CLAUSE_DB, "Took {key}");
        taken.ok_or(err::ClauseDBError::Missing)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        structures::literal::{CLiteral, Literal},
    };

    use super::*;

    fn clause(atoms: &[u32]) -> CClause {
        atoms.iter().map(|atom| CLiteral::new(*atom, true)).collect()
    }

    #[test]
    fn slots_are_retokened() {
        let mut db = ClauseDB::new(&Config::default());

        let a = db.store(clause(&[2, 3, 4]), true).unwrap();
        let b = db.store(clause(&[3, 4, 5]), true).unwrap();
        assert_eq!(a, ClauseKey::Addition(0, 0));
        assert_eq!(b, ClauseKey::Addition(1, 0));

        assert!(db.take(&a).is_ok());
        assert_eq!(db.take(&a).err(), Some(err::ClauseDBError::Missing));

        let c = db.store(clause(&[4, 5, 6]), true).unwrap();
        assert_eq!(c, ClauseKey::Addition(0, 1));
        assert!(db.get(&a).is_err());
        assert_eq!(db.get(&c).unwrap().clause(), &clause(&[4, 5, 6]));
        assert_eq!(db.addition_count(), 2);
        assert_eq!(db.addition_keys(), vec![c, b]);
    }

    #[test]
    fn originals_and_additions_apart() {
        let mut db = ClauseDB::new(&Config::default());

        let a = db.store(clause(&[2, 3, 4]), false).unwrap();
        let b = db.store(clause(&[2, 3, 4]), true).unwrap();

        assert_eq!(a, ClauseKey::Original(0));
        assert_eq!(b, ClauseKey::Addition(0, 0));
        assert!(!db.get(&a).unwrap().is_learnt());
        assert!(db.get(&b).unwrap().is_learnt());
        assert_ne!(db.get(&a).unwrap().id(), db.get(&b).unwrap().id());
        assert_eq!(db.store(CClause::default(), true), Err(err::ClauseDBError::EmptyClause));
    }
}
