/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
The databases clone their part of the configuration ([AtomDBConfig], [ClauseDBConfig]) when created, and so changes to those parts should be made before a context is built.

```rust
# use otter_lcg::config::{Config, PhaseSaving};
# use otter_lcg::context::Context;
let mut config = Config::default();
config.phase_saving.value = PhaseSaving::None;
config.binary_learnts.value = false;

let ctx = Context::from_config(config);
assert!(!ctx.config.binary_learnts.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{AtomDBConfig, ClauseDBConfig};

mod phase_saving;
pub use phase_saving::PhaseSaving;

use crate::db::LevelIndex;

/// The representation of activity, for atoms and clauses.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Store learnt clauses of two literals as absorbed binary clauses, rather than in the clause database.
    pub binary_learnts: ConfigOption<bool>,

    /// When the value of an atom is saved on backtracking.
    pub phase_saving: ConfigOption<PhaseSaving>,

    /// The lowest level whose values are saved, for [PhaseSaving::Search].
    pub phase_floor: ConfigOption<LevelIndex>,

    /// Simplify the learnt clauses at the root level, when scheduled.
    pub simplify: ConfigOption<bool>,

    /// The count of propagations before the first simplification.
    pub simplify_initial: ConfigOption<usize>,

    /// Branch on the most active atom.
    pub vsids: ConfigOption<bool>,

    /// Conflicts on literals forced by a finite-domain variable are explained through the given reason.
    pub lazy: ConfigOption<bool>,

    /// Return released lazy atoms to a pool for reuse.
    pub lazy_reuse: ConfigOption<bool>,

    /// The probability of branching on a random atom rather than the most active atom.
    pub random_decision_bias: ConfigOption<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            binary_learnts: ConfigOption {
                name: "binary_learnts",
                min: false,
                max: true,
                value: true,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: PhaseSaving::MIN,
                max: PhaseSaving::MAX,
                value: PhaseSaving::Always,
            },

            phase_floor: ConfigOption {
                name: "phase_floor",
                min: 0,
                max: LevelIndex::MAX,
                value: 0,
            },

            simplify: ConfigOption {
                name: "simplify",
                min: false,
                max: true,
                value: true,
            },

            simplify_initial: ConfigOption {
                name: "simplify_initial",
                min: 0,
                max: usize::MAX,
                value: 100_000,
            },

            vsids: ConfigOption {
                name: "vsids",
                min: false,
                max: true,
                value: true,
            },

            lazy: ConfigOption {
                name: "lazy",
                min: false,
                max: true,
                value: true,
            },

            lazy_reuse: ConfigOption {
                name: "lazy_reuse",
                min: false,
                max: true,
                value: false,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },
        }
    }
}
