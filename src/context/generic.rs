use std::collections::HashMap;

use crate::{
    channel::{ChannelInfo, Channels},
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches, LevelIndex},
    misc::log::targets,
    structures::{
        atom::Atom,
        conflict::Conflict,
        literal::{CLiteral, Literal, BOTTOM, TOP},
        reason::Reason,
    },
};

use super::Counters;

/// A context, generic over a source of randomness.
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context.
    pub counters: Counters,

    /// The atom database.
    pub atom_db: AtomDB,

    /// Watch lists, indexed by literal.
    pub watches: Watches,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// Valued literals, partitioned by level.
    pub trail: Trail,

    /// Collaborators notified of valuations and backjumps.
    pub channels: Channels,

    /// The witness of a conflict, from discovery until the next backjump.
    pub conflict: Option<Conflict>,

    /// The source of rng.
    pub rng: R,

    /// Names of literals, for display.
    pub(crate) literal_names: HashMap<CLiteral, String>,

    /// The count of propagations at which the learnt clauses are next simplified.
    pub(crate) next_simplify: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from `config` with `rng` as the source of randomness.
    ///
    /// The atoms of [TOP] and [BOTTOM] are created and valued at the root.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        let mut ctx = GenericContext {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            next_simplify: config.simplify_initial.value,

            config,

            counters: Counters::default(),
            watches: Watches::default(),
            trail: Trail::default(),
            channels: Channels::default(),
            conflict: None,
            rng,
            literal_names: HashMap::default(),
        };

        for sentinel in [TOP, -BOTTOM] {
            match ctx.fresh_atom(ChannelInfo::default()) {
                Ok(atom) if atom == sentinel.atom() => {
                    ctx.atom_db.flags_mut(atom).decidable = false;
                    ctx.atom_db.heap_remove(atom);
                    ctx.enqueue(sentinel, Reason::Decision);
                }
                _ => panic!("! Sentinel atom"),
            }
        }
        log::trace!(target: targets::VALUATION, "Sentinels valued");

        ctx
    }

    /// The current level.
    pub fn current_level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// A count of atoms in the context, including the sentinel atoms.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// The value of `literal`, if the atom of `literal` has a value.
    pub fn value_of(&self, literal: CLiteral) -> Option<bool> {
        self.atom_db.literal_value(literal)
    }

    /// True if `atom` was valued before any decision.
    pub fn is_fixed(&self, atom: Atom) -> bool {
        self.atom_db.value_of(atom).is_some() && self.atom_db.level_of(atom) == 0
    }
}
