#![no_main]

use histkit::history::HistoryBucket;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on HistoryBucket
//
// Tests random sequences of insert, fetch, init_accessor, flush, peek and
// drain to find edge cases and invariant violations.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte selects the capacity (1-32)
    let capacity = (data[0] % 32).max(1) as usize;
    let mut bucket = HistoryBucket::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let value = data[idx + 1];

        match op {
            0 => {
                let before = bucket.live_count();
                let evicted = bucket.insert(value);
                assert_eq!(evicted.is_some(), before == capacity);
                assert_eq!(bucket.newest(), Some(value));
            },
            1 => {
                let predicted = bucket.peek_pending();
                let pending = bucket.pending();
                let fetched = bucket.fetch();
                assert_eq!(fetched, predicted);
                if fetched.is_some() {
                    assert_eq!(bucket.pending(), pending - 1);
                } else {
                    assert_eq!(bucket.pending(), pending);
                }
            },
            2 => {
                bucket.init_accessor();
                assert_eq!(bucket.pending(), bucket.live_count());
            },
            3 => {
                bucket.flush();
                assert!(bucket.is_empty());
                assert_eq!(bucket.fetch(), None);
            },
            4 => {
                // Partial drain of up to `value` entries
                let pending = bucket.pending();
                let taken = bucket.drain().take(value as usize).count();
                assert_eq!(taken, pending.min(value as usize));
                assert_eq!(bucket.pending(), pending - taken);
            },
            5 => {
                // Whatever is pending is the newest suffix of the window
                let mut out = Vec::new();
                let pending = bucket.pending();
                let window = bucket.to_vec_oldest_first();
                bucket.fetch_into(&mut out);
                assert_eq!(out.as_slice(), &window[window.len() - pending..]);
            },
            _ => unreachable!(),
        }

        bucket.debug_validate_invariants();
        assert!(bucket.pending() <= bucket.live_count());
        assert!(bucket.live_count() <= capacity);

        idx += 2;
    }
});
