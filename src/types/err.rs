//! Error types used in the library.
//!
//! - Most of these indicate a caller has broken some contract, and are unlikely to occur during use.
//! - Some are expected --- e.g. a [BCP conflict](BCPError::Conflict) is used to control the flow of a search.
//! - [Unsatisfiable](ErrorKind::Unsatisfiable) is fatal to the current solve, as some clause is false without any decision having been made.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::conflict::Conflict;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),

    /// Some clause is false at the root level, and so the formula is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "Atom database: {e:?}"),
            Self::BCP(e) => write!(f, "Propagation: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database: {e:?}"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// A lazy atom was released while some clause still uses it.
    LazyAtomInUse,

    /// A lazy atom was released while valued.
    LazyAtomAssigned,

    /// A lazy atom was released while some watch list is non-empty.
    LazyAtomWatched,

    /// An atom which was not obtained lazily was released.
    NotLazy,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(Conflict),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause is missing.
    Missing,

    /// An invalid key token.
    InvalidKeyToken,

    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// All possible keys have been used for some clause type.
    StorageExhausted,

    /// A unit clause was added after some decision has been made.
    DecisionMade,

    /// A watch expected on some list was not found.
    CorruptList,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}
