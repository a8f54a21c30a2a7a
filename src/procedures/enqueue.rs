/*!
Valuing literals.

Each valued literal is placed on the trail together with a [reason](crate::structures::reason).
There are three ways to value a literal:

- [enqueue](GenericContext::enqueue), on the current level.
  If the atom of the literal is owned by a finite-domain variable, the variable is told through the [channels](crate::channel).
- [enqueue_from_domain](GenericContext::enqueue_from_domain), on the current level, for a literal forced by a finite-domain variable.
  The variable already knows, and so is not told.
  If the literal is already false the enqueue records a conflict in place of valuing the literal.
- [enqueue_at_level](GenericContext::enqueue_at_level), on some earlier level.
  This allows a caller to backdate a literal, e.g. when a learnt clause asserts a literal below the current level without a backjump.

Each requires the atom of the literal to have no value, checked in debug builds.
*/

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets,
    structures::{
        conflict::Conflict,
        literal::{CLiteral, Literal, BOTTOM},
        reason::Reason,
    },
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Values `literal` on the current level due to `reason`, and tells the owner of the atom of `literal`.
    pub fn enqueue(&mut self, literal: CLiteral, reason: Reason) {
        let level = self.trail.level();
        let position = self.trail.push(literal);
        self.atom_db.set_value(literal, level, position, reason);

        let info = *self.atom_db.channel_info_of(literal.atom());
        self.channels.channel(&info, literal.polarity());
    }

    /// Values `literal` on the current level due to `reason`, as forced by a finite-domain variable.
    ///
    /// If `literal` is false the literal is not valued, and instead a conflict is recorded and returned:
    /// - If [lazy](crate::config::Config::lazy) and `reason` is not a decision, the explanation of `literal` from `reason`.
    ///   The explanation is also kept in the rollback log of the current level, until the level is undone.
    /// - Otherwise, the false clause [BOTTOM] ∨ [BOTTOM].
    pub fn enqueue_from_domain(
        &mut self,
        literal: CLiteral,
        reason: Reason,
    ) -> Result<(), err::BCPError> {
        match self.atom_db.literal_value(literal) {
            None => {
                let level = self.trail.level();
                let position = self.trail.push(literal);
                self.atom_db.set_value(literal, level, position, reason);
                Ok(())
            }

            Some(true) => {
                debug_assert!(false, "Domain enqueue of true literal {literal}");
                Ok(())
            }

            Some(false) => {
                let conflict = match (self.config.lazy.value, reason) {
                    (true, Reason::Decision) => {
                        debug_assert_eq!(self.trail.level(), 0);
                        Conflict::Binary([BOTTOM, BOTTOM])
                    }

                    (true, reason) => match self.reason_explanation(literal, &reason) {
                        Ok(explanation) => {
                            self.trail.log_explanation(explanation.clone());
                            Conflict::Explanation(explanation)
                        }
                        Err(e) => {
                            log::error!(target: targets::PROPAGATION, "No explanation of {literal}: {e:?}");
                            Conflict::Binary([BOTTOM, BOTTOM])
                        }
                    },

                    (false, _) => Conflict::Binary([BOTTOM, BOTTOM]),
                };

                log::trace!(target: targets::PROPAGATION, "Domain conflict on {literal}: {conflict}");
                self.conflict = Some(conflict.clone());
                Err(err::BCPError::Conflict(conflict))
            }
        }
    }

    /// Values `literal` on `level` due to `reason`.
    ///
    /// The literal is placed at the end of `level`, and so is not propagated unless `level` is the current level.
    pub fn enqueue_at_level(&mut self, literal: CLiteral, reason: Reason, level: LevelIndex) {
        debug_assert!(level <= self.trail.level());
        log::trace!(target: targets::VALUATION, "Backdated {literal} to {level}");

        let position = self.trail.push_at(literal, level);
        self.atom_db.set_value(literal, level, position, reason);
    }
}
