//! Generic structures, not tied to boolean propagation.

pub mod index_heap;
pub mod random;
