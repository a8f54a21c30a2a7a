//! The propagation core of a lazy clause generation solver.
//!
//! otter_lcg is the boolean layer of a constraint solver: a conflict-driven clause-learning engine which values literals, propagates clauses through two watched literals, and keeps a trail of levels for backjumping.
//! Finite-domain variables and propagators built over the engine are told of valuations through [channels](crate::channel), and may force literals in turn.
//!
//! The library does not search, analyse conflicts, or restart.
//! These are left to the caller, which drives a [context] through a small loop:
//!
//! ```text
//! decide -> propagate -> (conflict?) -> analyse -> backtrack -> add learnt clause -> propagate -> ...
//! ```
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Internally, a context is a handful of databases:
//! - A [trail](crate::db::trail) of valued literals, partitioned by level.
//! - An [atom database](crate::db::atom), with the valuation, reasons, activity, and so on.
//! - [Watch lists](crate::db::watches), one per literal.
//! - A [clause database](crate::db::clause), for original and learnt clauses.
//!
//! Useful starting points, then, may be:
//! - [Propagation](crate::procedures::bcp), the heart of the library.
//! - The [builder], to see how clauses are added.
//! - [Backjumping](crate::procedures::backjump) and [decisions](crate::procedures::decision).
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Example
//!
//! A conflict, analysed by hand.
//!
//! ```rust
//! # use otter_lcg::config::Config;
//! # use otter_lcg::context::Context;
//! # use otter_lcg::structures::conflict::Conflict;
//! # use otter_lcg::structures::literal::{CLiteral, Literal};
//! # use otter_lcg::types::err::BCPError;
//! let mut ctx = Context::from_config(Config::default());
//! let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
//!     panic!("Insufficient literals");
//! };
//!
//! assert!(ctx.add_clause(vec![-p, q]).is_ok());
//! assert!(ctx.add_clause(vec![-p, r]).is_ok());
//! assert!(ctx.add_clause(vec![-q, -r]).is_ok());
//!
//! ctx.decide(p);
//! let result = ctx.propagate();
//! assert!(matches!(result, Err(BCPError::Conflict(Conflict::Binary(_)))));
//!
//! // Each of q and r follows from p, and so -p follows.
//! ctx.backtrack_to_level(0);
//! assert!(ctx.conflict.is_none());
//!
//! assert!(ctx.assert_learnt_clause(vec![-p]).is_ok());
//! assert!(ctx.propagate().is_ok());
//! assert_eq!(ctx.value_of(p), Some(false));
//! ```
//!
//! # Logs
//!
//! Calls to [log] are made throughout the library, with targets listed in [misc::log::targets].
//! No logger is installed by the library.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod channel;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
