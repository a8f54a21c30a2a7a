/*!
Callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use crate::db::clause::record::LearntRecord;

/// A callback made with the record of a learnt clause, on removal of the clause.
pub type CallbackOnLearntRecord = dyn FnMut(&LearntRecord);
