//! Databases for holding the state of a context.
//!
//! - [The atom database](crate::db::atom)
//!   + The value, level, reason, and heuristic details of each atom.
//! - [The clause database](crate::db::clause)
//!   + Stored clauses, in two slabs:
//!     * Original clauses, added to the context from some external source.
//!     * Additions, learnt by the caller through analysis of conflicts.
//! - [The trail](crate::db::trail)
//!   + Valued literals, partitioned by level.
//! - [Watch lists](crate::db::watches)
//!   + For each literal, what to do when the literal becomes true.
//!
//! The databases are fields of a [context](crate::context), and most procedures borrow a few of the databases at once.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

/// The index of a level on the [trail](crate::db::trail).
pub type LevelIndex = u32;
