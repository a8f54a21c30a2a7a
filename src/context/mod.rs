/*!
The context, within which literals are valued and propagated, clauses are stored, and levels are opened and closed.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

A context does not search on its own.
Rather, a caller (the engine of some constraint solver) drives the context:
decisions are made, consequences are [propagated](crate::procedures::bcp), and on a conflict the caller analyses the conflict, [backjumps](crate::procedures::backjump), and adds the learnt clause.

# Example
```rust
# use otter_lcg::context::Context;
# use otter_lcg::config::Config;
# use otter_lcg::structures::literal::{CLiteral, Literal};
let mut ctx = Context::from_config(Config::default());

let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
    panic!("Insufficient literals");
};

assert!(ctx.add_clause(vec![-p, q]).is_ok());

ctx.decide(p);
assert!(ctx.propagate().is_ok());

assert_eq!(ctx.atom_db.literal_value(q), Some(true));
assert_eq!(ctx.current_level(), 1);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
