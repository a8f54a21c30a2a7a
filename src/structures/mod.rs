//! Abstract elements of propagation, and their representation.
//!
//! - [Atoms](atom) and [literals](literal).
//! - [Clauses](clause), as collections of literals.
//! - [Valuations](valuation), from atoms to truth values.
//! - [Reasons](reason) for the value of an atom.
//! - [Conflicts](conflict), witnesses of a clause which is false.

pub mod atom;
pub mod clause;
pub mod conflict;
pub mod literal;
pub mod reason;
pub mod valuation;
