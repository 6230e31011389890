use histkit::history::HistoryBucket;

fn main() {
    let mut bucket: HistoryBucket<u16> = HistoryBucket::new(3);

    bucket.insert(10);
    bucket.insert(20);

    if let Some(value) = bucket.fetch() {
        println!("first fetch: {}", value);
    }

    bucket.insert(30);
    bucket.insert(40);

    let rest: Vec<u16> = bucket.drain().collect();
    println!("remaining: {:?}", rest);
    println!("window: {:?}", bucket.to_vec_oldest_first());
}

// Expected output:
// first fetch: 10
// remaining: [20, 30, 40]
// window: [20, 30, 40]
//
// Explanation: capacity=3; 10 was read before 40 overwrote it, so nothing
// unread was lost. The drain yields the three values the reader has not seen.
