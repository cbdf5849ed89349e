use crate::models::ctx::{update_favorites, update_search_history, update_settings};
use crate::runtime::msg::Msg;
use crate::runtime::{Effects, Env, Update};
use crate::types::favorites::FavoritesBucket;
use crate::types::profile::Settings;
use crate::types::search_history::SearchHistoryBucket;
use serde::Serialize;

/// The part of the application state that is persisted across sessions.
///
/// The shell is expected to run [`Env::migrate_storage_schema`] and load the
/// persisted buckets from storage before constructing the [`Ctx`].
#[derive(Default, Clone, Serialize, Debug)]
pub struct Ctx {
    pub settings: Settings,
    pub search_history: SearchHistoryBucket,
    pub favorites: FavoritesBucket,
}

impl Ctx {
    pub fn new(
        settings: Settings,
        search_history: SearchHistoryBucket,
        favorites: FavoritesBucket,
    ) -> Self {
        Self {
            settings,
            search_history,
            favorites,
        }
    }
}

impl<E: Env + 'static> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        let settings_effects = update_settings::<E>(&mut self.settings, msg);
        let search_history_effects = update_search_history::<E>(&mut self.search_history, msg);
        let favorites_effects = update_favorites::<E>(&mut self.favorites, msg);
        settings_effects
            .join(search_history_effects)
            .join(favorites_effects)
    }
}
