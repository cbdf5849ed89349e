mod clear_favorites;
mod clear_search_history;
mod remove_favorite;
mod toggle_favorite;
mod update_search_history;
mod update_settings;
