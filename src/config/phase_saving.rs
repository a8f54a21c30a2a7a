/*!
When the value of an atom is saved for use in the next decision on the atom.

On backtracking, each atom which loses its value may have that value saved as its 'previous' value.
A [decision](crate::procedures::decision) on the atom then reuses the previous value.
*/

use crate::db::LevelIndex;

/// Supported phase saving scopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PhaseSaving {
    /// Values are never saved.
    None,

    /// Values are saved when unwinding levels at or above the configured floor.
    Search,

    /// Values are always saved.
    Always,
}

impl PhaseSaving {
    pub const MIN: PhaseSaving = PhaseSaving::None;
    pub const MAX: PhaseSaving = PhaseSaving::Always;

    /// Whether values unwound from `level` are saved, given `floor`.
    pub fn applies(&self, level: LevelIndex, floor: LevelIndex) -> bool {
        match self {
            PhaseSaving::None => false,
            PhaseSaving::Search => level >= floor,
            PhaseSaving::Always => true,
        }
    }
}

impl std::fmt::Display for PhaseSaving {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Search => write!(f, "Search"),
            Self::Always => write!(f, "Always"),
        }
    }
}
