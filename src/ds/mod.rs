pub mod diff_cursor;
pub mod history_ring;

pub use diff_cursor::DiffCursor;
pub use history_ring::HistoryRing;
