//! Witnesses of a conflict.
//!
//! A conflict is found when every literal of some clause is false.
//! The witness is either a stored clause, or a (synthetic) clause built at the time of the conflict.
//!
//! A context holds at most one witness, from the moment a conflict is found until a backtrack.

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// A clause whose every literal is false on the current valuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// A stored clause.
    Clause(ClauseKey),

    /// An absorbed binary clause.
    Binary([CLiteral; 2]),

    /// A clause built from the explanation of some literal, with that literal first.
    Explanation(Vec<CLiteral>),
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conflict::Clause(key) => write!(f, "{key}"),
            Conflict::Binary([a, b]) => write!(f, "Binary({a}, {b})"),
            Conflict::Explanation(literals) => {
                write!(f, "Explanation(")?;
                for (index, literal) in literals.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{literal}")?;
                }
                write!(f, ")")
            }
        }
    }
}
