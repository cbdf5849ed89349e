use futures::FutureExt;

use crate::constants::SEARCH_HISTORY_STORAGE_KEY;
use crate::models::ctx::CtxError;
use crate::runtime::msg::{Action, ActionCtx, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt};
use crate::types::search_history::{HistoryEntry, SearchHistoryBucket};

pub fn update_search_history<E: Env + 'static>(
    search_history: &mut SearchHistoryBucket,
    msg: &Msg,
) -> Effects {
    match msg {
        Msg::Action(Action::Ctx(ActionCtx::ClearSearchHistory)) => {
            search_history.items.clear();
            Effects::msg(Msg::Event(Event::SearchHistoryCleared))
                .join(Effects::one(clear_search_history_in_storage::<E>()).unchanged())
        }
        Msg::Internal(Internal::InstituteSearchResult(_, result)) => match result.as_ref() {
            Ok(institute) => {
                search_history.push(HistoryEntry::new(institute, E::now()));
                Effects::msg(Msg::Internal(Internal::SearchHistoryChanged))
            }
            Err(_) => Effects::none().unchanged(),
        },
        Msg::Internal(Internal::SearchHistoryChanged) => {
            Effects::one(push_search_history_to_storage::<E>(search_history)).unchanged()
        }
        _ => Effects::none().unchanged(),
    }
}

fn push_search_history_to_storage<E: Env + 'static>(
    search_history: &SearchHistoryBucket,
) -> Effect {
    EffectFuture::Sequential(
        E::set_storage(SEARCH_HISTORY_STORAGE_KEY, Some(&search_history))
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::SearchHistoryPushedToStorage),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::SearchHistoryPushedToStorage),
                }),
            })
            .boxed_env(),
    )
    .into()
}

fn clear_search_history_in_storage<E: Env + 'static>() -> Effect {
    EffectFuture::Sequential(
        E::set_storage::<()>(SEARCH_HISTORY_STORAGE_KEY, None)
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::SearchHistoryPushedToStorage),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::SearchHistoryPushedToStorage),
                }),
            })
            .boxed_env(),
    )
    .into()
}
