//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, [CClause].
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).
//!
//! Unit clauses are never stored, see [the clause database](crate::db::clause).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals of the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// An iterator over the atoms of the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// Some string representation of the clause.
    fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for (index, literal) in self.literals().enumerate() {
            if index > 0 {
                the_string.push_str(" ∨ ");
            }
            the_string.push_str(&literal.to_string());
        }
        the_string.push(')');
        the_string
    }

    /// The literal asserted by the clause on a given valuation, if one such literal exists.
    ///
    /// That is, Some(*l*) if *l* has no value and every other literal is false, and None otherwise.
    fn asserts(&self, valuation: &(impl Valuation + ?Sized)) -> Option<CLiteral> {
        let mut asserted = None;
        for literal in self.literals() {
            match valuation.literal_value(*literal) {
                Some(false) => {}
                Some(true) => return None,
                None if asserted.is_some() => return None,
                None => asserted = Some(*literal),
            }
        }
        asserted
    }
}

impl Clause for [CLiteral] {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }
}
