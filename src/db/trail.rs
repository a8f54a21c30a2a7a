/*!
The trail of valued literals, partitioned by level.

Level 0 holds the root facts, and each later level is opened by a [decision](crate::procedures::decision).
Each level records:
- The literals valued on the level, in order of valuation.
- A queue head, the count of literals on the level which have been [propagated](crate::procedures::bcp).
  The queue head never exceeds the count of literals on the level.
- A rollback log of temporary explanation clauses, owned by the level and dropped with the level.

A literal may be *backdated* to some earlier level (see [enqueue_at_level](crate::context::GenericContext::enqueue_at_level)), and so literals on a level need not be valued in the order of levels.
Still, within a level the order of literals is the order of valuation.
*/

use crate::structures::{clause::CClause, literal::CLiteral};

use super::LevelIndex;

/// A position on the trail.
///
/// Positions are ordered by level and then index, and so a position earlier on the trail is less than a later position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrailPosition {
    pub level: LevelIndex,
    pub index: u32,
}

/// The trail.
pub struct Trail {
    levels: Vec<Vec<CLiteral>>,
    q_heads: Vec<usize>,
    rollback: Vec<Vec<CClause>>,
}

impl Default for Trail {
    fn default() -> Self {
        Trail {
            levels: vec![Vec::default()],
            q_heads: vec![0],
            rollback: vec![Vec::default()],
        }
    }
}

impl Trail {
    /// The current level.
    pub fn level(&self) -> LevelIndex {
        (self.levels.len() - 1) as LevelIndex
    }

    /// Opens a fresh level.
    pub fn push_level(&mut self) {
        self.levels.push(Vec::default());
        self.q_heads.push(0);
        self.rollback.push(Vec::default());
    }

    /// Places `literal` at the end of the current level, and returns the position of the literal.
    pub fn push(&mut self, literal: CLiteral) -> TrailPosition {
        self.push_at(literal, self.level())
    }

    /// Places `literal` at the end of `level`, and returns the position of the literal.
    pub fn push_at(&mut self, literal: CLiteral, level: LevelIndex) -> TrailPosition {
        let literals = &mut self.levels[level as usize];
        let index = literals.len() as u32;
        literals.push(literal);
        TrailPosition { level, index }
    }

    /// The literals of `level`, in order of valuation.
    pub fn level_literals(&self, level: LevelIndex) -> &[CLiteral] {
        &self.levels[level as usize]
    }

    /// The literals of the current level, in order of valuation.
    pub fn top_literals(&self) -> &[CLiteral] {
        self.level_literals(self.level())
    }

    /// The count of literals on the trail.
    pub fn literal_count(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    /// The queue head of the current level.
    pub fn q_head(&self) -> usize {
        self.q_heads[self.level() as usize]
    }

    /// The next literal of the current level to propagate, advancing the queue head past the literal.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let level = self.levels.len() - 1;
        let literal = self.levels[level].get(self.q_heads[level]).copied()?;
        self.q_heads[level] += 1;
        Some(literal)
    }

    /// Marks every literal on the current level as propagated.
    pub fn exhaust_queue(&mut self) {
        let level = self.levels.len() - 1;
        self.q_heads[level] = self.levels[level].len();
    }

    /// True if every literal on the current level has been propagated.
    pub fn queue_is_empty(&self) -> bool {
        self.q_head() == self.top_literals().len()
    }

    /// Stores a temporary explanation clause with the current level.
    pub fn log_explanation(&mut self, clause: CClause) {
        let level = self.levels.len() - 1;
        self.rollback[level].push(clause);
    }

    /// The temporary explanation clauses of `level`.
    pub fn logged_explanations(&self, level: LevelIndex) -> &[CClause] {
        &self.rollback[level as usize]
    }

    /// Removes the current level, and returns the literals of the level.
    ///
    /// The root level is never removed, and None is returned at the root.
    pub fn pop_level(&mut self) -> Option<Vec<CLiteral>> {
        if self.levels.len() == 1 {
            return None;
        }
        self.q_heads.pop();
        self.rollback.pop();
        self.levels.pop()
    }

    /// Removes the literals at or after `index` on the current level, and returns those literals in order of valuation.
    ///
    /// The queue head is clamped to the remaining literals.
    pub fn truncate_top(&mut self, index: usize) -> Vec<CLiteral> {
        let level = self.levels.len() - 1;
        let index = std::cmp::min(index, self.levels[level].len());
        let removed = self.levels[level].split_off(index);
        self.q_heads[level] = std::cmp::min(self.q_heads[level], index);
        removed
    }

    /// Clears the root level, including the rollback log, and returns the literals which were on the root level.
    ///
    /// Panics if some level is open above the root.
    pub fn clear_root(&mut self) -> Vec<CLiteral> {
        assert_eq!(self.levels.len(), 1, "Root cleared above the root");
        self.q_heads[0] = 0;
        self.rollback[0].clear();
        std::mem::take(&mut self.levels[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn positions_increase() {
        let mut trail = Trail::default();
        let a = trail.push(CLiteral::new(2, true));
        trail.push_level();
        let b = trail.push(CLiteral::new(3, true));
        let c = trail.push(CLiteral::new(4, false));
        let d = trail.push_at(CLiteral::new(5, true), 0);

        assert!(a < b && b < c);
        assert!(d < b);
        assert_eq!(d, TrailPosition { level: 0, index: 1 });
    }

    #[test]
    fn queue_heads() {
        let mut trail = Trail::default();
        trail.push_level();
        trail.push(CLiteral::new(2, true));
        trail.push(CLiteral::new(3, true));

        assert_eq!(trail.next_to_propagate(), Some(CLiteral::new(2, true)));
        assert_eq!(trail.next_to_propagate(), Some(CLiteral::new(3, true)));
        assert_eq!(trail.next_to_propagate(), None);
        assert!(trail.queue_is_empty());

        let removed = trail.truncate_top(1);
        assert_eq!(removed, vec![CLiteral::new(3, true)]);
        assert_eq!(trail.q_head(), 1);
    }

    #[test]
    fn root_is_kept() {
        let mut trail = Trail::default();
        trail.log_explanation(vec![CLiteral::new(2, true)]);
        trail.push_level();
        trail.log_explanation(vec![CLiteral::new(3, true)]);

        assert_eq!(trail.logged_explanations(1).len(), 1);
        assert!(trail.pop_level().is_some());
        assert!(trail.pop_level().is_none());
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.logged_explanations(0).len(), 1);
    }
}
