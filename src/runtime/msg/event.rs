use serde::Serialize;

use crate::{
    models::ctx::CtxError,
    types::{institute::EiinNo, profile::Settings},
};

/// Those messages are meant to be dispatched by the `eiin-core` crate and
/// handled by the users of the `eiin-core` crate and by the `eiin-core`
/// crate itself.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    ThemePushedToStorage,
    SearchHistoryPushedToStorage,
    FavoritesPushedToStorage,
    SettingsUpdated {
        settings: Settings,
    },
    FavoriteAdded {
        eiin_no: EiinNo,
    },
    FavoriteRemoved {
        eiin_no: EiinNo,
    },
    SearchHistoryCleared,
    FavoritesCleared,
    Error {
        error: CtxError,
        source: Box<Event>,
    },
}
