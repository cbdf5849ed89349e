mod favorites_bucket;
pub use favorites_bucket::*;
