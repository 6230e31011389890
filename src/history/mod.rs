pub mod bucket;
pub mod drain;

pub use bucket::HistoryBucket;
pub use drain::Drain;
