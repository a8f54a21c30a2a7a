/// Counts of things which happen in a context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Literals taken from the trail and propagated.
    pub propagations: usize,

    /// Decisions made.
    pub decisions: usize,

    /// Backjumps across at least one level.
    pub back_jumps: usize,

    /// Reductions of the learnt clauses.
    pub reductions: usize,

    /// Simplifications of the learnt clauses.
    pub simplifications: usize,
}
