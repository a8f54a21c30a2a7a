//! A struct holding a [clause](Clause) and associated metadata.
//!
//! A [dbClause] contains:
//! - A [clause](Clause) (represented as a [CClause]).
//! - A [key](ClauseKey) used to access the [dbClause].
//! - An activity, for [reduction](crate::procedures::reduction), and a raw count of bumps.
//! - An id, unique within a context, for diagnostics.
//!
//! # Watched literals
//!
//! The literals at index 0 and index 1 of a stored clause are watched.
//! So, [propagation](crate::procedures::bcp) reorders the literals of a clause through [literals_mut](dbClause::literals_mut) to keep some pair of non-false literals at the front, where possible.

use std::ops::Deref;

use crate::{
    config::Activity,
    db::keys::ClauseKey,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// A clause together with some metadata.
#[allow(non_camel_case_types)]
pub struct dbClause {
    key: ClauseKey,

    clause: CClause,

    activity: Activity,

    raw_activity: u32,

    id: u64,
}

impl dbClause {
    /// Bundles a [ClauseKey] and [CClause] into a [dbClause].
    ///
    /// Note: This does not store the [dbClause] in the [clause database](crate::db::clause::ClauseDB).
    pub fn new(key: ClauseKey, clause: CClause, id: u64) -> Self {
        dbClause {
            key,
            clause,
            activity: 0.0,
            raw_activity: 0,
            id,
        }
    }

    /// The key used to access the [dbClause].
    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    /// Whether the clause was learnt, rather than original.
    pub fn is_learnt(&self) -> bool {
        self.key.is_addition()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// A count of bumps to the clause.
    pub fn raw_activity(&self) -> u32 {
        self.raw_activity
    }

    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The literals of the clause, for reordering or shrinking.
    ///
    /// The literals at index 0 and index 1 are watched, and so any change to those literals must be matched by a change to the relevant watch lists.
    pub fn literals_mut(&mut self) -> &mut CClause {
        &mut self.clause
    }

    pub(super) fn bump(&mut self, bump: Activity) {
        self.activity += bump;
        self.raw_activity = self.raw_activity.saturating_add(1);
    }

    pub(super) fn scale_activity(&mut self, factor: Activity) {
        self.activity *= factor;
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_string())
    }
}

impl Deref for dbClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}
