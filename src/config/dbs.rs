//! Configuration of databases, typically derived from the configuration of a context.

use super::{Activity, ConfigOption};

/// Configuration for the atom database.
#[derive(Clone)]
pub struct AtomDBConfig {
    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a atom each conflict.
    pub decay: ConfigOption<Activity>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN,
                max: 1e100,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 1.0,
                value: 0.05,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone)]
pub struct ClauseDBConfig {
    /// The activity with which the next clause bumped will be bumped by, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a clause each conflict.
    pub decay: ConfigOption<Activity>,

    /// Record details of each learnt clause, for dispatch on removal.
    pub learnt_stats: ConfigOption<bool>,

    /// Include the literals of a learnt clause in the record.
    pub learnt_stats_literals: ConfigOption<bool>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN,
                max: 1e20,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 1.0,
                value: 1e-3,
            },

            learnt_stats: ConfigOption {
                name: "learnt_stats",
                min: false,
                max: true,
                value: false,
            },

            learnt_stats_literals: ConfigOption {
                name: "learnt_stats_literals",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
