#![no_main]

use histkit::ds::HistoryRing;
use libfuzzer_sys::fuzz_target;

// Stress HistoryRing with long push sequences
//
// Compares every push against a plain Vec window and checks indexed access
// from both ends after each wrap.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = (data[0] as usize % 64).max(1);
    let mut ring = HistoryRing::new(capacity);
    let mut window: Vec<u8> = Vec::new();

    for (i, &byte) in data[1..].iter().enumerate() {
        let evicted = ring.push(byte);
        window.push(byte);
        if window.len() > capacity {
            assert_eq!(evicted, Some(window.remove(0)));
        } else {
            assert_eq!(evicted, None);
        }

        assert_eq!(ring.len(), window.len());
        assert_eq!(ring.newest(), window.last().copied());
        assert_eq!(ring.oldest(), window.first().copied());

        // Full comparison once per wrap keeps long inputs fast
        if i % capacity == 0 {
            assert_eq!(ring.to_vec_oldest_first(), window);
            for (k, &expected) in window.iter().rev().enumerate() {
                assert_eq!(ring.get(k), Some(expected));
            }
            assert_eq!(ring.get(window.len()), None);
            assert!(ring.iter().rev().eq(window.iter().copied()));
        }

        ring.debug_validate_invariants();
    }

    ring.clear();
    assert!(ring.is_empty());
    assert_eq!(ring.newest(), None);
});
