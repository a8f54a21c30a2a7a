/*!
(The internal representation of) an atom, aka. a 'variable'.

Atoms are dense: the atoms of a context are exactly `0..n` for some `n`, and so an atom may be used directly as the index of any per-atom structure.

Two atoms are reserved when a context is created:
- [TOP_ATOM] is valued true at the root level, and never unvalued.
- [BOTTOM_ATOM] is valued false at the root level, and never unvalued.

These allow a caller to refer to a fixed truth value through an ordinary literal, e.g. a finite-domain variable may map an impossible value to the literal [BOTTOM](crate::structures::literal::BOTTOM).
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom fixed with value true.
pub const TOP_ATOM: Atom = 0;

/// The atom fixed with value false.
pub const BOTTOM_ATOM: Atom = 1;

/// The maximum instance of an atom, limited by the encoding of literals.
pub const ATOM_MAX: Atom = Atom::MAX >> 1;
