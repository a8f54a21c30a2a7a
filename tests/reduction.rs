use std::{cell::RefCell, rc::Rc};

use otter_lcg::{
    config::Config,
    context::Context,
    db::{watches::Watch, ClauseKey},
    structures::{
        literal::{CLiteral, Literal, TOP},
        reason::Reason,
    },
    types::err::{ClauseDBError, ErrorKind},
};

fn stored_key(reason: Reason) -> ClauseKey {
    match reason {
        Reason::Clause(key) => key,
        _ => panic!("Learnt clause not stored"),
    }
}

fn is_watched(ctx: &Context, literal: CLiteral, key: ClauseKey) -> bool {
    ctx.watches.list(literal).contains(&Watch::Long(key))
}

mod reduce {
    use super::*;

    #[test]
    fn least_active_half() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s, t, u] = *ctx.fresh_literals(6).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        let keys = [
            vec![p, q, r],
            vec![q, r, s],
            vec![r, s, t],
            vec![s, t, u],
        ]
        .into_iter()
        .map(|clause| stored_key(ctx.add_learnt_clause(clause).unwrap()))
        .collect::<Vec<_>>();

        assert_eq!(ctx.clause_db.addition_count(), 4);
        assert_eq!(ctx.clause_db.stats.learnt_literals, 12);

        assert!(ctx.clause_db.bump_clause(&keys[2]).is_ok());
        assert!(ctx.clause_db.bump_clause(&keys[3]).is_ok());

        assert_eq!(ctx.reduce_db(), Ok(2));
        assert_eq!(ctx.counters.reductions, 1);
        assert_eq!(ctx.clause_db.addition_count(), 2);
        assert_eq!(ctx.clause_db.stats.learnt_literals, 6);

        assert!(ctx.clause_db.get(&keys[0]).is_err());
        assert!(ctx.clause_db.get(&keys[1]).is_err());
        assert!(ctx.clause_db.get(&keys[2]).is_ok());
        assert!(ctx.clause_db.get(&keys[3]).is_ok());

        assert!(!is_watched(&ctx, -p, keys[0]));
        assert!(!is_watched(&ctx, -q, keys[1]));
        assert!(is_watched(&ctx, -r, keys[2]));

        assert_eq!(ctx.atom_db.usage_of(p.atom()), 0);
        assert_eq!(ctx.atom_db.usage_of(s.atom()), 2);
    }

    #[test]
    fn locked_clauses_kept() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s, t, u] = *ctx.fresh_literals(6).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        ctx.decide(-q);
        assert!(ctx.propagate().is_ok());
        ctx.decide(-r);
        assert!(ctx.propagate().is_ok());

        let locked = stored_key(ctx.assert_learnt_clause(vec![p, r, q]).unwrap());
        assert_eq!(ctx.value_of(p), Some(true));
        assert_eq!(ctx.locked(&locked), Ok(true));

        let free = stored_key(ctx.add_learnt_clause(vec![s, t, u]).unwrap());
        assert!(ctx.clause_db.bump_clause(&free).is_ok());
        assert_eq!(ctx.locked(&free), Ok(false));

        assert_eq!(ctx.reduce_db(), Ok(0));
        assert!(ctx.clause_db.get(&locked).is_ok());

        ctx.backtrack_to_level(0);
        assert_eq!(ctx.locked(&locked), Ok(false));
        assert_eq!(ctx.reduce_db(), Ok(1));
        assert!(ctx.clause_db.get(&locked).is_err());
    }

    #[test]
    fn slots_reused() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        let first = stored_key(ctx.add_learnt_clause(vec![p, q, r]).unwrap());
        assert!(ctx.remove_clause(first).is_ok());
        assert_eq!(ctx.clause_db.get(&first).err(), Some(ClauseDBError::Missing));

        let second = stored_key(ctx.add_learnt_clause(vec![-p, -q, -r]).unwrap());
        assert_eq!(first.index(), second.index());
        assert_ne!(first, second);
        assert!(ctx.clause_db.get(&first).is_err());
        assert!(ctx.clause_db.get(&second).is_ok());
    }

    #[test]
    fn original_removal() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        let Ok(otter_lcg::builder::ClauseOk::Stored(key)) = ctx.add_clause(vec![p, q, r]) else {
            panic!("Clause not stored");
        };
        assert_eq!(ctx.clause_db.stats.clause_literals, 3);

        assert!(ctx.remove_clause(key).is_ok());
        assert_eq!(ctx.clause_db.stats.clause_literals, 0);
        assert!(!is_watched(&ctx, -p, key));
        assert!(!is_watched(&ctx, -q, key));

        assert_eq!(
            ctx.remove_clause(key),
            Err(ErrorKind::ClauseDB(ClauseDBError::Missing))
        );
    }
}

mod simplify {
    use super::*;

    #[test]
    fn root_valuation() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s, t] = *ctx.fresh_literals(5).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        let kept = stored_key(ctx.add_learnt_clause(vec![p, q, r, s]).unwrap());
        let satisfied = stored_key(ctx.add_learnt_clause(vec![q, r, t]).unwrap());
        assert_eq!(ctx.clause_db.stats.learnt_literals, 7);

        assert!(ctx.add_clause(vec![-s]).is_ok());
        assert!(ctx.add_clause(vec![t]).is_ok());

        assert!(ctx.simplify_db().is_ok());
        assert_eq!(ctx.counters.simplifications, 1);

        assert!(ctx.clause_db.get(&satisfied).is_err());
        assert_eq!(ctx.clause_db.get(&kept).unwrap().clause(), &vec![p, q, r]);
        assert!(is_watched(&ctx, -p, kept));
        assert!(is_watched(&ctx, -q, kept));

        assert_eq!(ctx.clause_db.stats.learnt_literals, 3);
        assert_eq!(ctx.atom_db.usage_of(s.atom()), 0);
        assert_eq!(ctx.atom_db.usage_of(t.atom()), 0);
        assert_eq!(ctx.atom_db.usage_of(q.atom()), 1);
    }

    #[test]
    fn only_at_root() {
        let mut ctx = Context::from_config(Config::default());

        let [p] = *ctx.fresh_literals(1).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        ctx.decide(p);
        assert_eq!(
            ctx.simplify_db(),
            Err(ErrorKind::ClauseDB(ClauseDBError::DecisionMade))
        );
        assert_eq!(
            ctx.top_level_cleanup(),
            Err(ErrorKind::ClauseDB(ClauseDBError::DecisionMade))
        );
    }

    #[test]
    fn cleanup() {
        let mut config = Config::default();
        config.simplify_initial.value = 0;
        let mut ctx = Context::from_config(config);

        let [p, q] = *ctx.fresh_literals(2).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![p]).is_ok());
        assert!(ctx.propagate().is_ok());

        assert!(ctx.top_level_cleanup().is_ok());
        assert_eq!(ctx.counters.simplifications, 1);

        assert!(ctx.trail.level_literals(0).is_empty());
        assert_eq!(ctx.value_of(TOP), Some(true));
        assert_eq!(ctx.value_of(q), Some(true));
        assert!(ctx.atom_db.seen_at_root(q.atom()));
        assert_eq!(ctx.atom_db.position_of(q.atom()), None);
    }

    #[test]
    fn cleanup_without_simplify() {
        let mut config = Config::default();
        config.simplify.value = false;
        config.simplify_initial.value = 0;
        let mut ctx = Context::from_config(config);

        assert!(ctx.top_level_cleanup().is_ok());
        assert_eq!(ctx.counters.simplifications, 0);
    }
}

mod records {
    use super::*;

    #[test]
    fn on_removal() {
        let mut config = Config::default();
        config.clause_db.learnt_stats.value = true;
        config.clause_db.learnt_stats_literals.value = true;
        let mut ctx = Context::from_config(config);

        let records = Rc::new(RefCell::new(Vec::<String>::default()));
        let sink = records.clone();
        ctx.clause_db
            .set_callback_learnt_record(Box::new(move |record| {
                sink.borrow_mut().push(record.to_string())
            }));

        let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };
        ctx.set_literal_name(p, "p");

        ctx.decide(-q);
        ctx.decide(-r);

        let id = ctx.clause_db.next_id();
        let key = stored_key(ctx.add_learnt_clause(vec![-p, r, q]).unwrap());

        assert!(ctx.clause_db.bump_clause(&key).is_ok());
        assert!(ctx.clause_db.bump_clause(&key).is_ok());
        assert!(records.borrow().is_empty());

        assert!(ctx.remove_clause(key).is_ok());
        assert_eq!(
            records.borrow().as_slice(),
            &[format!("{id},3,3,-p {r} {q},2")]
        );
    }

    #[test]
    fn off_by_default() {
        let mut ctx = Context::from_config(Config::default());

        let records = Rc::new(RefCell::new(0));
        let sink = records.clone();
        ctx.clause_db
            .set_callback_learnt_record(Box::new(move |_| *sink.borrow_mut() += 1));

        let [p, q, r] = *ctx.fresh_literals(3).unwrap().as_slice() else {
            panic!("Insufficient literals");
        };

        let key = stored_key(ctx.add_learnt_clause(vec![p, q, r]).unwrap());
        assert!(ctx.remove_clause(key).is_ok());
        assert_eq!(*records.borrow(), 0);
    }
}
