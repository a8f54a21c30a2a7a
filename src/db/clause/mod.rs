/*!
A database of clause related things.

Clauses of two or more literals may be *stored*, with the exception of clauses [absorbed](crate::db::watches::Watch::Binary) into the watch lists.
Stored clauses live in one of two slabs:
- Original clauses, indexed by [ClauseKey::Original].
- Additions (learnt clauses), indexed by [ClauseKey::Addition].

The slot of a removed addition is reused, with a fresh token on the key.
So, a key held after the removal of a clause will not access some other clause.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
For storing and removing clauses together with the relevant watches, see the [builder](crate::builder).
*/

pub mod db_clause;
pub mod record;
mod activity;
mod store;

use std::collections::HashMap;

use db_clause::dbClause;
use record::LearntRecord;

use crate::{
    config::{dbs::ClauseDBConfig, Config},
    context::callbacks::CallbackOnLearntRecord,
    db::keys::ClauseKey,
    misc::log::targets,
    types::err,
};

/// Counts of stored clauses and literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClauseStats {
    /// Original clauses of two literals, whether absorbed or stored.
    pub binary: usize,

    /// Original clauses of three literals.
    pub ternary: usize,

    /// Original clauses of more than three literals.
    pub long: usize,

    /// Literals of stored original clauses.
    pub clause_literals: usize,

    /// Literals of stored learnt clauses.
    pub learnt_literals: usize,
}

/// A database of clause related things.
pub struct ClauseDB {
    /// Clause database specific configuration parameters.
    pub config: ClauseDBConfig,

    original: Vec<Option<dbClause>>,

    addition: Vec<Option<dbClause>>,

    /// A stack of keys for learnt clauses whose indices are empty.
    empty_keys: Vec<ClauseKey>,

    /// A count of stored additions.
    // This can't be inferred from the addition vec, as indices may be reused.
    addition_count: usize,

    /// The id of the next clause stored.
    next_id: u64,

    pub stats: ClauseStats,

    /// Partial records of stored learnt clauses.
    records: HashMap<ClauseKey, LearntRecord>,

    /// Complete records of removed learnt clauses are passed in.
    callback_learnt_record: Option<Box<CallbackOnLearntRecord>>,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            config: config.clause_db.clone(),

            original: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),
            addition_count: 0,
            next_id: 0,

            stats: ClauseStats::default(),

            records: HashMap::default(),
            callback_learnt_record: None,
        }
    }

    /// The clause indexed by `key`.
    pub fn get(&self, key: &ClauseKey) -> Result<&dbClause, err::ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(index) => self.original.get(*index as usize),
            ClauseKey::Addition(index, _) => self.addition.get(*index as usize),
        };
        match slot {
            Some(Some(clause)) if clause.key() == *key => Ok(clause),
            _ => Err(err::ClauseDBError::Missing),
        }
    }

    /// The clause indexed by `key`, for mutation.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut dbClause, err::ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(index) => self.original.get_mut(*index as usize),
            ClauseKey::Addition(index, _) => self.addition.get_mut(*index as usize),
        };
        match slot {
            Some(Some(clause)) if clause.key() == *key => Ok(clause),
            _ => Err(err::ClauseDBError::Missing),
        }
    }

    /// A count of stored additions.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// The keys of all stored additions, in order of index.
    pub fn addition_keys(&self) -> Vec<ClauseKey> {
        self.addition
            .iter()
            .flatten()
            .map(|clause| clause.key())
            .collect()
    }

    /// An iterator over all stored clauses, originals first.
    pub fn all_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.original.iter().chain(self.addition.iter()).flatten()
    }

    /// The id the next stored clause will have.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl ClauseDB {
    /// Set a callback to be made with the record of each learnt clause, when the clause is removed.
    pub fn set_callback_learnt_record(&mut self, callback: Box<CallbackOnLearntRecord>) {
        self.callback_learnt_record = Some(callback);
    }

    /// Notes the partial record of the learnt clause `key`.
    pub fn note_record(&mut self, key: ClauseKey, record: LearntRecord) {
        self.records.insert(key, record);
    }

    /// Completes the record of the learnt clause `key` with `activity`, and makes the callback with the record.
    pub(crate) fn make_callback_learnt_record(&mut self, key: &ClauseKey, activity: u32) {
        if let Some(mut record) = self.records.remove(key) {
            record.activity = activity;
            log::debug!(target: targets::CLAUSE_DB, "Record: {record}");
            if let Some(callback) = &mut self.callback_learnt_record {
                callback(&record);
            }
        }
    }
}
