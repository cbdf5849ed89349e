pub mod common;
pub mod ctx;
pub mod institute_search;
pub mod report_export;
