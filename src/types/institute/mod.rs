mod eiin_no;
pub use eiin_no::*;

mod fetch_institutes;
pub use fetch_institutes::*;

mod institute;
pub use institute::*;

mod response;
pub use response::*;
