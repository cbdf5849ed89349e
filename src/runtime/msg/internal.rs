use crate::models::institute_search::SearchError;
use crate::types::institute::{EiinNo, Institute};

//
// Those messages are meant to be dispatched and handled only inside the
// eiin-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Result for fetching an institute from the registry.
    InstituteSearchResult(EiinNo, Box<Result<Institute, SearchError>>),
    /// Dispatched when the settings changed.
    SettingsChanged,
    /// Dispatched when the search history changed.
    SearchHistoryChanged,
    /// Dispatched when the favorites changed.
    FavoritesChanged,
}
