/*!
Why a literal holds.

Every literal on the [trail](crate::db::trail) has a reason.
A reason is one of four tagged forms:

- [Decision](Reason::Decision), no reason at all.
- [Clause](Reason::Clause), a clause stored in the [clause database](crate::db::clause), in which the literal is at index 0.
- [Literal](Reason::Literal), a single antecedent from an absorbed binary clause.
- [Literals](Reason::Literals), two antecedents from some absorbed ternary shortcut.

Antecedent literals are stored in *clause form*.
That is, the explanation of literal *l* with reason `Literal(a)` is the clause *l* ∨ *a*, and so *a* is false whenever the reason is consulted.
The (true) antecedents are the negations of the stored literals, see [antecedents](Reason::antecedents).

For the explanation as a clause, see [explanation](crate::context::GenericContext::explanation).
*/

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

/// The reason an atom has its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reason {
    /// A decision, or a fact with no recorded reason.
    #[default]
    Decision,

    /// The key to a clause whose literal at index 0 is the explained literal.
    Clause(ClauseKey),

    /// The other literal of an absorbed binary clause.
    Literal(CLiteral),

    /// The other literals of an absorbed clause with three literals.
    Literals([CLiteral; 2]),
}

impl Reason {
    /// True if the reason is a decision.
    pub fn is_decision(&self) -> bool {
        matches!(self, Reason::Decision)
    }

    /// The literals stored directly in the reason, in clause form.
    ///
    /// Empty for decisions and clause reasons.
    pub fn stored_literals(&self) -> &[CLiteral] {
        match self {
            Reason::Decision | Reason::Clause(_) => &[],
            Reason::Literal(literal) => std::slice::from_ref(literal),
            Reason::Literals(literals) => literals,
        }
    }

    /// The (true) antecedents stored directly in the reason.
    pub fn antecedents(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.stored_literals().iter().map(|literal| literal.negate())
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::Decision => write!(f, "Decision"),
            Reason::Clause(key) => write!(f, "Clause({key})"),
            Reason::Literal(literal) => write!(f, "Literal({literal})"),
            Reason::Literals([a, b]) => write!(f, "Literals({a}, {b})"),
        }
    }
}
