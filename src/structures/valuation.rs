/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a slice of optional booleans, indexed by atom:
- *v*\[a\] = Some(true) *if and only if* a is true.
- *v*\[a\] = Some(false) *if and only if* a is false.
- *v*\[a\] = None *if and only if* a has no value.

```rust
# use otter_lcg::structures::valuation::Valuation;
# use otter_lcg::structures::literal::{CLiteral, Literal};
let valuation = vec![Some(true), Some(false), None, Some(true)];

assert_eq!(valuation.value_of(2), None);
assert_eq!(valuation.literal_value(CLiteral::new(3, false)), Some(false));
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![2]);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
#[allow(non_camel_case_types)]
pub type vValuation = Vec<Option<bool>>;

/// Methods for inspecting a valuation.
pub trait Valuation {
    /// The value of `atom`, if the atom has some value.
    ///
    /// Panics if `atom` is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// Whether the literal is true, false, or has no value.
    fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// A count of atoms in the valuation.
    fn atom_count(&self) -> usize;

    /// An iterator through all atoms without a value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self[atom as usize]
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }
}
