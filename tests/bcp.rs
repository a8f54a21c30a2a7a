use otter_lcg::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    db::watches::Watch,
    structures::{
        clause::Clause,
        conflict::Conflict,
        literal::{CLiteral, Literal},
        reason::Reason,
    },
    types::err::{BCPError, ErrorKind},
};

fn sorted(mut literals: Vec<CLiteral>) -> Vec<CLiteral> {
    literals.sort();
    literals
}

mod unit_resolution {
    use super::*;

    #[test]
    fn chain_with_reasons() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ctx = Context::from_config(Config::default());

        let [a, b, c, d] = *ctx.fresh_literals(4).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(vec![-a, b]), Ok(ClauseOk::Absorbed));
        let Ok(ClauseOk::Stored(key)) = ctx.add_clause(vec![-a, -b, c]) else {
            panic!("Clause not stored");
        };

        ctx.decide(a);
        assert!(ctx.propagate().is_ok());

        assert_eq!(ctx.value_of(b), Some(true));
        assert_eq!(ctx.value_of(c), Some(true));
        assert_eq!(ctx.value_of(d), None);

        assert_eq!(*ctx.atom_db.reason_of(b.atom()), Reason::Literal(-a));
        assert_eq!(*ctx.atom_db.reason_of(c.atom()), Reason::Clause(key));

        assert_eq!(ctx.explanation(b), Ok(vec![b, -a]));

        let explanation = ctx.explanation(c).unwrap();
        assert_eq!(explanation[0], c);
        assert_eq!(sorted(explanation), sorted(vec![-a, -b, c]));

        assert_eq!(ctx.atom_db.level_of(c.atom()), 1);
        assert!(ctx.trail.queue_is_empty());
    }

    #[test]
    fn binary_chain_at_root() {
        let mut ctx = Context::from_config(Config::default());

        let [a, b, c] = *ctx.fresh_literals(3).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(vec![-a, b]), Ok(ClauseOk::Absorbed));
        assert_eq!(ctx.add_clause(vec![-b, c]), Ok(ClauseOk::Absorbed));

        ctx.enqueue(a, Reason::Decision);
        assert!(ctx.propagate().is_ok());

        assert_eq!(ctx.value_of(b), Some(true));
        assert_eq!(ctx.value_of(c), Some(true));
        assert_eq!(*ctx.atom_db.reason_of(b.atom()), Reason::Literal(-a));
        assert_eq!(*ctx.atom_db.reason_of(c.atom()), Reason::Literal(-b));
        assert_eq!(ctx.atom_db.level_of(c.atom()), 0);
        assert!(ctx.trail.queue_is_empty());
    }

    #[test]
    fn root_units() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q, r]).is_ok());
        assert_eq!(ctx.add_clause(vec![p]), Ok(ClauseOk::Valued));
        assert_eq!(ctx.add_clause(vec![-q]), Ok(ClauseOk::Valued));

        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.value_of(r), Some(true));
        assert!(ctx.is_fixed(r.atom()));
    }

    #[test]
    fn counts_propagations() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        // The sentinels are on the root level.
        assert!(ctx.propagate().is_ok());
        let before = ctx.counters.propagations;

        ctx.decide(p);
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.counters.propagations, before + 2);
    }
}

mod conflicts {
    use super::*;

    #[test]
    fn binary_witness() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ctx = Context::from_config(Config::default());

        let [a, b] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![a, b]).is_ok());
        assert!(ctx.add_clause(vec![a, -b]).is_ok());

        ctx.decide(-a);
        let witness = Conflict::Binary([-b, a]);
        assert_eq!(
            ctx.propagate(),
            Err(BCPError::Conflict(witness.clone()))
        );
        assert_eq!(ctx.conflict, Some(witness));
        assert!(ctx.trail.queue_is_empty());
    }

    #[test]
    fn clause_witness() {
        let mut ctx = Context::from_config(Config::default());

        let [a, b, c] = *ctx.fresh_literals(3).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-a, b, c]).is_ok());
        let Ok(ClauseOk::Stored(key)) = ctx.add_clause(vec![-a, b, -c]) else {
            panic!("Clause not stored");
        };

        ctx.decide(a);
        assert!(ctx.propagate().is_ok());
        ctx.decide(-b);

        assert_eq!(
            ctx.propagate(),
            Err(BCPError::Conflict(Conflict::Clause(key)))
        );

        let witness = ctx.clause_db.get(&key).unwrap();
        assert!(witness
            .iter()
            .all(|literal| ctx.value_of(*literal) == Some(false)));
    }

    #[test]
    fn cleared_by_backtrack() {
        let mut ctx = Context::from_config(Config::default());

        let [a, b] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![a, b]).is_ok());
        assert!(ctx.add_clause(vec![a, -b]).is_ok());

        ctx.decide(-a);
        assert!(ctx.propagate().is_err());
        assert!(ctx.conflict.is_some());

        ctx.backtrack_to_level(0);
        assert!(ctx.conflict.is_none());
        assert_eq!(ctx.value_of(b), None);
    }

    #[test]
    fn root_conflict_cleared() {
        let mut ctx = Context::from_config(Config::default());

        let [a, b] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![a, b]).is_ok());
        assert!(ctx.add_clause(vec![a, -b]).is_ok());

        ctx.enqueue(-a, Reason::Decision);
        assert!(ctx.propagate().is_err());
        assert!(ctx.conflict.is_some());

        ctx.backtrack_to_level(0);
        assert!(ctx.conflict.is_none());
        assert_eq!(ctx.current_level(), 0);
    }

    #[test]
    fn false_at_root() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(vec![-p]), Ok(ClauseOk::Valued));
        assert_eq!(ctx.add_clause(vec![-q]), Ok(ClauseOk::Valued));
        assert_eq!(ctx.add_clause(vec![p, q]), Err(ErrorKind::Unsatisfiable));
        assert_eq!(ctx.add_clause(Vec::<CLiteral>::new()), Err(ErrorKind::Unsatisfiable));
    }
}

mod watches {
    use super::*;

    /// Checks each stored clause is watched on the negations of the literals at index 0 and index 1, exactly once each.
    fn watches_agree(ctx: &Context) -> bool {
        ctx.clause_db.all_clauses().all(|clause| {
            let key = clause.key();
            [clause[0], clause[1]].iter().all(|literal| {
                ctx.watches
                    .list(-*literal)
                    .iter()
                    .filter(|watch| **watch == Watch::Long(key))
                    .count()
                    == 1
            })
        })
    }

    /// Checks each stored clause is satisfied, or has literals at index 0 and index 1 which are not false.
    ///
    /// Also checks no stored clause asserts a literal which has no value.
    fn two_watches_hold(ctx: &Context) -> bool {
        let valuation = ctx.atom_db.valuation();
        ctx.clause_db.all_clauses().all(|clause| {
            let satisfied = clause.iter().any(|literal| ctx.value_of(*literal) == Some(true));
            let watchable = [clause[0], clause[1]]
                .iter()
                .all(|literal| ctx.value_of(*literal) != Some(false));
            (satisfied || watchable) && clause.asserts(valuation).is_none()
        })
    }

    #[test]
    fn two_watches_kept() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ctx = Context::from_config(Config::default());

        let literals = ctx.fresh_literals(6).unwrap();
        let [a, b, c, d, e, f] = *literals.as_slice() else {
            panic!("Insufficient literals");
        };

        for clause in [
            vec![-a, b, c, d],
            vec![-a, -b, e, f],
            vec![a, -c, -e],
            vec![-d, -f, b, c],
        ] {
            assert!(ctx.add_clause(clause).is_ok());
        }
        assert!(watches_agree(&ctx));
        assert!(two_watches_hold(&ctx));

        for decision in [a, -b, -c] {
            ctx.decide(decision);
            assert!(ctx.propagate().is_ok());
            assert!(watches_agree(&ctx));
            assert!(two_watches_hold(&ctx));
        }
        assert_eq!(ctx.value_of(d), Some(true));

        ctx.backtrack_to_level(0);
        assert!(watches_agree(&ctx));
    }

    #[test]
    fn learnt_clause_watches() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s] = *ctx.fresh_literals(4).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![q, -r]).is_ok());

        ctx.decide(-q);
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.value_of(r), Some(false));

        ctx.decide(s);
        assert!(ctx.propagate().is_ok());

        ctx.backtrack_to_level(1);
        assert_eq!(ctx.backjump_level(&[p, q, r]), 1);

        let reason = ctx.assert_learnt_clause(vec![p, q, r]).unwrap();
        assert!(matches!(reason, Reason::Clause(_)));
        assert_eq!(ctx.value_of(p), Some(true));
        assert_eq!(ctx.atom_db.level_of(p.atom()), 1);

        assert!(watches_agree(&ctx));
        assert!(ctx.propagate().is_ok());
        assert!(two_watches_hold(&ctx));
    }
}
