//! Property-based tests for the counter engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use tally::core::{Action, Counter, HistoryLog, MAX, MIN};
use tally::effects::{ConfirmationDialog, Notification, NotificationSink, Prompt, Session};

#[derive(Clone, Default)]
struct TestEnv {
    notices: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationSink for TestEnv {
    fn notify(&self, notice: &Notification) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

impl ConfirmationDialog for TestEnv {
    async fn confirm(&self, _prompt: &Prompt) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Increment,
    Decrement,
    Reset,
    Clear,
}

prop_compose! {
    fn arbitrary_action()(variant in 0..3u8) -> Action {
        match variant {
            0 => Action::Increment,
            1 => Action::Decrement,
            _ => Action::Reset,
        }
    }
}

prop_compose! {
    fn arbitrary_op()(variant in 0..10u8) -> Op {
        match variant {
            0..=3 => Op::Increment,
            4..=7 => Op::Decrement,
            8 => Op::Reset,
            _ => Op::Clear,
        }
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn value_stays_within_bounds(deltas in prop::collection::vec(any::<i64>(), 1..50)) {
        let mut counter = Counter::new();
        for delta in deltas {
            let _ = counter.propose(delta);
            prop_assert!(MIN <= counter.value() && counter.value() <= MAX);
        }
    }

    #[test]
    fn small_deltas_stay_within_bounds(
        deltas in prop::collection::vec(-600_000i64..600_000, 1..50)
    ) {
        let mut counter = Counter::new();
        for delta in deltas {
            let _ = counter.propose(delta);
            prop_assert!(MIN <= counter.value() && counter.value() <= MAX);
        }
    }

    #[test]
    fn rejected_proposal_leaves_value_unchanged(
        start in MIN..=MAX,
        delta in any::<i64>(),
    ) {
        let mut counter = Counter::new();
        counter.propose(start).unwrap();

        let in_bounds = start
            .checked_add(delta)
            .is_some_and(|candidate| (MIN..=MAX).contains(&candidate));

        match counter.propose(delta) {
            Ok(value) => {
                prop_assert!(in_bounds);
                prop_assert_eq!(value, start + delta);
                prop_assert_eq!(counter.value(), value);
            }
            Err(_) => {
                prop_assert!(!in_bounds);
                prop_assert_eq!(counter.value(), start);
            }
        }
    }

    #[test]
    fn recent_view_is_reversed_suffix(
        values in prop::collection::vec(MIN..=MAX, 0..30),
        n in 0usize..40,
    ) {
        let mut log = HistoryLog::new();
        for value in &values {
            log.append(Action::Increment, *value, Utc::now());
        }

        let recent: Vec<i64> = log.recent_view(n).iter().map(|r| r.resulting_value).collect();
        let expected: Vec<i64> = values.iter().rev().take(n).copied().collect();

        prop_assert_eq!(recent, expected);
        prop_assert_eq!(log.len(), values.len());
    }

    #[test]
    fn append_then_recent_one_is_that_record(
        prior in prop::collection::vec(arbitrary_action(), 0..10),
        action in arbitrary_action(),
        value in MIN..=MAX,
    ) {
        let mut log = HistoryLog::new();
        for previous in prior {
            log.append(previous, 0, Utc::now());
        }
        let timestamp = Utc::now();
        log.append(action, value, timestamp);

        let recent = log.recent_view(1);
        prop_assert_eq!(recent.len(), 1);
        prop_assert_eq!(recent[0].action, action);
        prop_assert_eq!(recent[0].resulting_value, value);
        prop_assert_eq!(recent[0].timestamp, timestamp);
    }

    #[test]
    fn clear_reports_exact_count(actions in prop::collection::vec(arbitrary_action(), 1..25)) {
        let mut log = HistoryLog::new();
        for action in &actions {
            log.append(*action, 1, Utc::now());
        }

        let cleared = log.clear_if_non_empty().unwrap();
        prop_assert_eq!(cleared.count, actions.len());
        prop_assert!(log.is_empty());
        prop_assert!(log.clear_if_non_empty().is_err());
    }

    #[test]
    fn session_records_one_entry_per_accepted_step(
        ops in prop::collection::vec(arbitrary_op(), 1..40)
    ) {
        let env = TestEnv::default();
        let mut session = Session::new();

        block_on(async {
            let mut expected = 0usize;
            for op in ops {
                match op {
                    Op::Increment => {
                        if session.increment(&env).await.is_ok() {
                            expected += 1;
                        }
                    }
                    Op::Decrement => {
                        if session.decrement(&env).await.is_ok() {
                            expected += 1;
                        }
                    }
                    Op::Reset => {
                        let was_zero = session.counter().value() == 0;
                        session.reset(&env).await;
                        if !was_zero {
                            expected += 1;
                        }
                        assert_eq!(session.counter().value(), 0);
                    }
                    Op::Clear => {
                        session.clear_history(&env).await;
                        expected = 0;
                    }
                }
                assert_eq!(session.history().len(), expected);
                if let Some(last) = session.history().last() {
                    assert_eq!(last.resulting_value, session.counter().value());
                }
            }
        });
    }
}
