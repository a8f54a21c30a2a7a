/*!
Explanations of valued literals, for analysis by the caller.

The explanation of a literal *l* is a clause containing *l* whose other literals are all false, and so which asserts *l* on the valuation at the time *l* was valued.
The literal *l* is always at index 0 of the explanation.

| Reason                     | Explanation              |
|----------------------------|--------------------------|
| [Decision](Reason::Decision) | *l*                    |
| [Clause](Reason::Clause)   | *l* and the other literals of the clause |
| [Literal](Reason::Literal)(*a*) | *l* ∨ *a*           |
| [Literals](Reason::Literals)(*a*, *b*) | *l* ∨ *a* ∨ *b* |

Literals may be given names, which are used when describing reasons and in [records](crate::db::clause::record) of learnt clauses.
*/

use crate::{
    context::GenericContext,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
        reason::Reason,
    },
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The explanation of the value of `literal`, with `literal` first.
    ///
    /// For documentation, see [procedures::explain](crate::procedures::explain).
    pub fn explanation(&self, literal: CLiteral) -> Result<CClause, err::ClauseDBError> {
        let reason = *self.atom_db.reason_of(literal.atom());
        self.reason_explanation(literal, &reason)
    }

    /// The explanation of `literal` from `reason`, with `literal` first.
    pub fn reason_explanation(
        &self,
        literal: CLiteral,
        reason: &Reason,
    ) -> Result<CClause, err::ClauseDBError> {
        let mut explanation = vec![literal];
        match reason {
            Reason::Clause(key) => {
                let clause = self.clause_db.get(key)?;
                explanation.extend(
                    clause
                        .iter()
                        .filter(|other| other.atom() != literal.atom()),
                );
            }

            _ => explanation.extend_from_slice(reason.stored_literals()),
        }
        Ok(explanation)
    }

    /// A description of `reason`, listing the antecedents of the reason.
    pub fn describe_reason(&self, reason: &Reason) -> String {
        match reason {
            Reason::Decision => "no reason".to_string(),

            Reason::Clause(key) => match self.clause_db.get(key) {
                Ok(clause) => {
                    let mut description = String::from("clause");
                    for literal in clause.iter() {
                        description.push(' ');
                        description.push_str(&self.literal_string(-*literal));
                    }
                    description
                }
                Err(_) => format!("missing clause {key}"),
            },

            Reason::Literal(a) => format!("single literal {}", self.literal_string(-*a)),

            Reason::Literals([a, b]) => format!(
                "two literals {} & {}",
                self.literal_string(-*a),
                self.literal_string(-*b)
            ),
        }
    }

    /// Names `literal`.
    ///
    /// The negation of a named literal without a name of its own is displayed as the name prefixed with '-'.
    pub fn set_literal_name(&mut self, literal: CLiteral, name: impl Into<String>) {
        self.literal_names.insert(literal, name.into());
    }

    /// A string representation of `literal`, by name if possible.
    pub fn literal_string(&self, literal: CLiteral) -> String {
        if let Some(name) = self.literal_names.get(&literal) {
            return name.clone();
        }
        match self.literal_names.get(&-literal) {
            Some(name) => format!("-{name}"),
            None => literal.to_string(),
        }
    }
}
