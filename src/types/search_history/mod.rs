mod search_history_bucket;
pub use search_history_bucket::*;
