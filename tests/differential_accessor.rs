// ==============================================
// DIFFERENTIAL ACCESSOR TESTS (integration)
// ==============================================
//
// Behavioral properties of the history bucket seen only through its public
// API, plus a model check against the naive reference in `common`.

mod common;

use common::{Op, Outcome, ReferenceHistory, apply};
use histkit::prelude::*;

const CAPACITY: usize = 7;

fn bucket_with(values: impl IntoIterator<Item = u16>) -> HistoryBucket<u16> {
    HistoryBuilder::new(CAPACITY).build_from(values)
}

fn drain(bucket: &mut HistoryBucket<u16>) -> Vec<u16> {
    let mut out = Vec::new();
    bucket.fetch_into(&mut out);
    out
}

// ==============================================
// Full drain
// ==============================================

mod full_drain {
    use super::*;

    #[test]
    fn yields_every_value_oldest_first_then_nothing() {
        let mut bucket = bucket_with(1..=7);
        assert_eq!(drain(&mut bucket), vec![1, 2, 3, 4, 5, 6, 7]);
        for _ in 0..10 {
            assert_eq!(bucket.fetch(), None);
        }
    }

    #[test]
    fn partial_fill_drains_what_exists() {
        let mut bucket = bucket_with([40, 41]);
        assert_eq!(drain(&mut bucket), vec![40, 41]);
    }
}

// ==============================================
// Bounded loss
// ==============================================

mod bounded_loss {
    use super::*;

    #[test]
    fn only_last_capacity_values_survive() {
        let mut bucket = bucket_with(1..=20);
        assert_eq!(drain(&mut bucket), (14..=20).collect::<Vec<_>>());
    }

    #[test]
    fn concrete_scenario_from_two_drains() {
        let mut bucket = bucket_with(1..=7);
        assert_eq!(drain(&mut bucket), vec![1, 2, 3, 4, 5, 6, 7]);

        for v in 8..=10 {
            bucket.insert(v);
        }
        bucket.init_accessor();
        assert_eq!(drain(&mut bucket), vec![4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn overflow_during_partial_read() {
        let mut bucket = bucket_with(1..=7);
        assert_eq!(bucket.fetch(), Some(1));
        assert_eq!(bucket.fetch(), Some(2));

        // Two slots of already-read history absorb 8 and 9; 10 and 11
        // push out the unread 3 and 4.
        for v in 8..=11 {
            bucket.insert(v);
        }
        assert_eq!(bucket.pending(), CAPACITY);
        assert_eq!(drain(&mut bucket), vec![5, 6, 7, 8, 9, 10, 11]);
    }
}

// ==============================================
// Live read
// ==============================================

mod live_read {
    use super::*;

    #[test]
    fn insert_then_fetch_returns_value() {
        let mut bucket = HistoryBucket::new(CAPACITY);
        bucket.insert(99u16);
        assert_eq!(bucket.fetch(), Some(99));
    }

    #[test]
    fn interleaved_pairs_preserve_order() {
        let mut bucket = HistoryBucket::new(CAPACITY);
        let mut seen = Vec::new();
        for v in 0..100u16 {
            bucket.insert(v);
            seen.extend(bucket.fetch());
        }
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn zero_payload_is_distinguishable_from_none() {
        let mut bucket = HistoryBucket::new(CAPACITY);
        bucket.insert(0u16);
        assert_eq!(bucket.fetch(), Some(0));
        assert_eq!(bucket.fetch(), None);
    }
}

// ==============================================
// Flush and re-initialize
// ==============================================

mod resets {
    use super::*;

    #[test]
    fn flush_hides_unread_values() {
        let mut bucket = bucket_with(1..=5);
        bucket.flush();
        assert_eq!(bucket.fetch(), None);
        assert_eq!(bucket.live_count(), 0);
    }

    #[test]
    fn exhaustion_is_sticky_until_insert_or_init() {
        let mut bucket = bucket_with(1..=3);
        drain(&mut bucket);
        for _ in 0..5 {
            assert_eq!(bucket.fetch(), None);
        }
        bucket.insert(4);
        assert_eq!(bucket.fetch(), Some(4));
        assert_eq!(bucket.fetch(), None);
        bucket.init_accessor();
        assert_eq!(bucket.fetch(), Some(1));
    }

    #[test]
    fn reinit_mid_drain_replays_all_live() {
        let mut bucket = bucket_with(1..=9);
        assert_eq!(bucket.fetch(), Some(3));
        assert_eq!(bucket.fetch(), Some(4));
        bucket.init_accessor();
        assert_eq!(drain(&mut bucket), vec![3, 4, 5, 6, 7, 8, 9]);
    }
}

// ==============================================
// Model check against the reference history
// ==============================================

mod model_check {
    use super::*;
    use histkit::traits::{DifferentialAccess, HistoryStore};
    use proptest::prelude::*;

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            5 => any::<u16>().prop_map(Op::Insert),
            4 => Just(Op::Fetch),
            1 => Just(Op::Init),
            1 => Just(Op::Flush),
        ]
    }

    #[test]
    fn reference_model_agrees_on_concrete_scenario() {
        let mut model = ReferenceHistory::new(CAPACITY);
        for v in 1..=10u16 {
            model.insert(v);
        }
        assert_eq!(model.unread(), vec![4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(model.fetch(), Some(4));
        model.init_accessor();
        assert_eq!(model.pending(), 7);
    }

    proptest! {
        /// Property: every observable result matches the reference model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_bucket_matches_reference(
            ops in prop::collection::vec(op_strategy(), 0..300),
            capacity in 1usize..10
        ) {
            let mut bucket = HistoryBucket::new(capacity);
            let mut model = ReferenceHistory::new(capacity);

            for op in ops {
                let got = apply(&mut bucket, op);
                let want = apply(&mut model, op);
                prop_assert_eq!(got, want, "diverged on {:?}", op);

                prop_assert_eq!(bucket.live_count(), model.live_count());
                prop_assert_eq!(bucket.pending(), model.pending());
                prop_assert_eq!(bucket.to_vec_oldest_first(), model.oldest_first());
                prop_assert!(bucket.check_invariants().is_ok());
            }

            let mut rest = Vec::new();
            bucket.fetch_into(&mut rest);
            prop_assert_eq!(rest, model.unread());
        }

        /// Property: with one fetch per insert nothing is ever lost
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_keeping_up_loses_nothing(
            values in prop::collection::vec(any::<u16>(), 0..100),
            capacity in 1usize..10
        ) {
            let mut bucket = HistoryBucket::new(capacity);
            for (i, &v) in values.iter().enumerate() {
                // Only values already delivered ever fall out of the window
                let evicted = i.checked_sub(capacity).map(|old| values[old]);
                prop_assert_eq!(apply(&mut bucket, Op::Insert(v)), Outcome::Inserted { evicted });
                prop_assert_eq!(apply(&mut bucket, Op::Fetch), Outcome::Fetched(Some(v)));
            }
            prop_assert_eq!(bucket.pending(), 0);
            prop_assert_eq!(bucket.live_count(), values.len().min(capacity));
        }

        /// Property: a drain after re-init is exactly the live window
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_reinit_drains_live_window(
            ops in prop::collection::vec(op_strategy(), 0..100)
        ) {
            let mut bucket = HistoryBucket::new(CAPACITY);
            for op in ops {
                apply(&mut bucket, op);
            }
            let live = bucket.to_vec_oldest_first();
            bucket.init_accessor();
            prop_assert_eq!(drain(&mut bucket), live);
            prop_assert_eq!(HistoryStore::live_count(&bucket), bucket.len());
        }
    }
}
