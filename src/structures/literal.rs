/*!
Literals are atoms paired with a (boolean) polarity.

The canonical literal, [CLiteral], packs the pair into a single integer code `2 * atom + polarity`.
So, negation flips the low bit, and the code of a literal may be used directly as the index of a structure with one entry per literal (e.g. [watch lists](crate::db::watches)).

```rust
# use otter_lcg::structures::literal::{CLiteral, Literal};
let literal = CLiteral::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.atom(), 79);
assert!(!literal.negate().polarity());
assert_eq!(-literal, literal.negate());
assert_eq!(literal.code(), 159);
```

Literals are ordered by atom and then polarity, with false (strictly) less than true.
*/

use crate::structures::atom::{Atom, BOTTOM_ATOM, TOP_ATOM};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical literal, an atom and polarity packed as `2 * atom + polarity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    code: u32,
}

/// A literal which is true from the creation of a context.
pub const TOP: CLiteral = CLiteral {
    code: (TOP_ATOM << 1) | 1,
};

/// A literal which is false from the creation of a context.
pub const BOTTOM: CLiteral = CLiteral {
    code: (BOTTOM_ATOM << 1) | 1,
};

impl CLiteral {
    /// The code of the literal, suitable for indexing per-literal structures.
    pub const fn code(&self) -> usize {
        self.code as usize
    }

    /// The literal with the given code.
    pub const fn from_code(code: u32) -> Self {
        CLiteral { code }
    }
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral {
            code: (atom << 1) | polarity as u32,
        }
    }

    fn negate(&self) -> Self {
        CLiteral {
            code: self.code ^ 1,
        }
    }

    fn atom(&self) -> Atom {
        self.code >> 1
    }

    fn polarity(&self) -> bool {
        self.code & 1 == 1
    }

    fn as_int(&self) -> isize {
        match self.polarity() {
            true => self.atom() as isize,
            false => -(self.atom() as isize),
        }
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity() {
            true => write!(f, "{}", self.atom()),
            false => write!(f, "-{}", self.atom()),
        }
    }
}
