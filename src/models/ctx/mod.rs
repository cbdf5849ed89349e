mod update_favorites;
use update_favorites::*;

mod update_search_history;
use update_search_history::*;

mod update_settings;
use update_settings::*;

mod error;
pub use error::*;

mod ctx;
pub use ctx::*;
