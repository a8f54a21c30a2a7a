/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to clause deletion, see [reduction](crate::procedures::reduction)
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [lazy atoms](crate::procedures::lazy)
    pub const LAZY: &str = "lazy";

    /// Logs related to [channels](crate::channel)
    pub const CHANNEL: &str = "channel";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";
}
