use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use url::Url;

pub const SCHEMA_VERSION_STORAGE_KEY: &str = "schema_version";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const SEARCH_HISTORY_STORAGE_KEY: &str = "search_history";
pub const FAVORITES_STORAGE_KEY: &str = "favorites";
pub const SEARCH_HISTORY_MAX_ITEMS: usize = 10;
pub const SCHEMA_VERSION: u32 = 1;
pub const REGISTRY_LIST_PATH: &str = "api/v1/institute/list";
pub const EIIN_NO_PARAM: &str = "eiinNo";
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    pub static ref REGISTRY_URL: Url =
        Url::parse("http://202.72.235.218:8082").expect("REGISTRY_URL parse failed");
}
