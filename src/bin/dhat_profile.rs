//! DHAT heap profiler for histkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use histkit::builder::HistoryBuilder;
use histkit::history::HistoryBucket;
use histkit::traits::DifferentialAccess;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Writer bursts followed by reader bursts of random length.
fn bursty_transfer<H: DifferentialAccess<u64>>(history: &mut H, rounds: usize, seed: u64) -> usize {
    let mut rng = XorShift64::new(seed);
    let mut out = Vec::new();
    let mut produced = 0u64;

    for _ in 0..rounds {
        let writes = rng.next_u64() % 64;
        for _ in 0..writes {
            history.insert(produced);
            produced += 1;
        }
        let reads = rng.next_u64() % 64;
        for _ in 0..reads {
            match history.fetch() {
                Some(v) => out.push(v),
                None => break,
            }
        }
        if rng.next_u64() % 100 == 0 {
            history.init_accessor();
        }
    }
    out.len()
}

/// Overwrite churn: many more inserts than slots, no reader.
fn overwrite_churn(bucket: &mut HistoryBucket<u64>, operations: usize) {
    for i in 0..operations {
        let _ = bucket.insert(i as u64);
    }
}

fn profile_small_bucket() {
    println!("=== Profiling capacity 7 ===");
    let mut bucket = HistoryBucket::new(7);

    let delivered = bursty_transfer(&mut bucket, 50_000, 42);
    overwrite_churn(&mut bucket, 100_000);

    println!("  Delivered: {}", delivered);
    println!("  Live: {}", bucket.live_count());
}

fn profile_large_bucket() {
    println!("=== Profiling capacity 4096 ===");
    let mut bucket = HistoryBuilder::new(4096).build_from(0..4096u64);

    let delivered = bursty_transfer(&mut bucket, 50_000, 7);
    overwrite_churn(&mut bucket, 100_000);
    bucket.flush();

    println!("  Delivered: {}", delivered);
    println!("  Approx bytes: {}", bucket.approx_bytes());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("histkit DHAT Heap Profiling");
    println!("===========================\n");

    profile_small_bucket();
    profile_large_bucket();

    println!("\n===========================");
    println!("Profile written to dhat-heap.json");
}
