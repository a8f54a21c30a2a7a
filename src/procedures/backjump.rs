//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) level to some previous (lower) level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//!
//! Literals are undone in reverse order of valuation, level by level.
//! Each undone atom:
//! - Loses its value (and reason).
//! - Has the value saved for the next decision on the atom, if [phase saving](crate::config::PhaseSaving) applies.
//! - Is placed back on the activity heap, if decidable.
//!
//! Temporary explanations logged with an undone level are dropped with the level.
//!
//! # Methods
//!
//! # [backtrack_to_level](GenericContext::backtrack_to_level) --- Backjump to a target level
//!
//! For sound application the target level must be equal to or lower than the current level.
//! Still, passing a target level greater than the current level is safe --- only the conflict witness is cleared.
//!
//! Each registered collaborator is told of the backjump, see [Channels](crate::channel::Channels::backtrack_to_level).
//!
//! # [backtrack_within_level](GenericContext::backtrack_within_level) --- Backjump to a position on the current level
//!
//! Undoes a suffix of the current level, and tells the engine of the matching position of the engine.
//!
//! # [backjump_level](GenericContext::backjump_level) --- The backjump level of a learnt clause
//!
//! The level of the literal at index 1 of a learnt clause, which is the false literal of highest level by convention.
//!
//! # Example
//!
//! ```rust
//! # use otter_lcg::context::Context;
//! # use otter_lcg::config::Config;
//! let mut ctx = Context::from_config(Config::default());
//! let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
//!     panic!("Insufficient literals");
//! };
//!
//! ctx.decide(p);
//! ctx.decide(q);
//! assert_eq!(ctx.current_level(), 2);
//!
//! ctx.backtrack_to_level(0);
//! assert_eq!(ctx.current_level(), 0);
//! assert_eq!(ctx.value_of(p), None);
//! ```

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets,
    structures::literal::{CLiteral, Literal},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backtrack_to_level(&mut self, target: LevelIndex) {
        self.conflict = None;

        let from = self.trail.level();
        if from <= target {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {from} to {target}");

        let save = self
            .config
            .phase_saving
            .value
            .applies(from, self.config.phase_floor.value);

        while self.trail.level() > target {
            if let Some(literals) = self.trail.pop_level() {
                self.undo(&literals, save);
            }
        }

        self.counters.back_jumps += 1;

        self.channels.backtrack_to_level(target);
    }

    /// Backjumps to `trail_index` on the current level, and tells the engine to backjump to `engine_position`.
    ///
    /// Literals at or after `trail_index` on the current level are undone, and the queue head of the level is clamped.
    pub fn backtrack_within_level(&mut self, trail_index: usize, engine_position: usize) {
        log::trace!(target: targets::BACKJUMP, "Backjump within {} to {trail_index}", self.trail.level());

        let save = self
            .config
            .phase_saving
            .value
            .applies(self.trail.level(), self.config.phase_floor.value);

        let literals = self.trail.truncate_top(trail_index);
        self.undo(&literals, save);
        self.conflict = None;

        self.channels.backtrack_to_position(engine_position);
    }

    /// The level to backjump to in order for `clause` to assert its literal at index 0.
    ///
    /// That is, the level of the literal at index 1, or 0 if the clause is a unit.
    pub fn backjump_level(&self, clause: &[CLiteral]) -> LevelIndex {
        match clause.get(1) {
            Some(literal) => self.atom_db.level_of(literal.atom()),
            None => 0,
        }
    }

    /// Undoes `literals` in reverse order.
    fn undo(&mut self, literals: &[CLiteral], save: bool) {
        for literal in literals.iter().rev() {
            let atom = literal.atom();
            self.atom_db.clear_value(atom, save);
            self.insert_var_order(atom);
        }
    }
}
