mod env;
pub use env::*;

mod ctx;
mod institute_search;
mod proxy;
mod report_export;
mod serde;
