//! Incremental transfer from a recorder to a slow consumer.
//!
//! Run with: cargo run --example transfer

use histkit::builder::HistoryBuilder;
use histkit::traits::DifferentialAccess;

/// Sends everything the reader has not seen yet, returning how many values went out.
fn sync<H: DifferentialAccess<u32>>(history: &mut H, label: &str) -> usize {
    let mut batch = Vec::new();
    let sent = history.fetch_into(&mut batch);
    println!("   {label}: sent {sent} {:?}", batch);
    sent
}

fn main() {
    println!("=== Differential Transfer ===\n");

    // The recorder already holds readings the consumer saw in a previous session
    let mut history = HistoryBuilder::new(7)
        .prefill_as_read(true)
        .build_from(1..=4u32);

    println!("1. Nothing new since the last session");
    sync(&mut history, "sync");
    println!();

    println!("2. A few new readings");
    for reading in 5..=7 {
        history.insert(reading);
    }
    sync(&mut history, "sync");
    println!();

    println!("3. Consumer offline while 10 readings arrive");
    for reading in 8..=17 {
        history.insert(reading);
    }
    let sent = sync(&mut history, "sync");
    println!("   lost: {} (overwritten before transfer)", 10 - sent);
    println!();

    println!("4. Consumer reconnects and asks for everything");
    history.init_accessor();
    sync(&mut history, "full");
    println!();

    println!("5. Recorder flushed; readings before the flush are gone");
    history.insert(18);
    history.flush();
    history.insert(19);
    sync(&mut history, "sync");
}

// Expected output:
// === Differential Transfer ===
//
// 1. Nothing new since the last session
//    sync: sent 0 []
//
// 2. A few new readings
//    sync: sent 3 [5, 6, 7]
//
// 3. Consumer offline while 10 readings arrive
//    sync: sent 7 [11, 12, 13, 14, 15, 16, 17]
//    lost: 3 (overwritten before transfer)
//
// 4. Consumer reconnects and asks for everything
//    full: sent 7 [11, 12, 13, 14, 15, 16, 17]
//
// 5. Recorder flushed; readings before the flush are gone
//    sync: sent 1 [19]
//
// Explanation: capacity=7; the four prefilled readings count as transferred.
// Ten readings while offline overwrite 8, 9 and 10 before they are sent.
