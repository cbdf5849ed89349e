use futures::FutureExt;

use crate::constants::FAVORITES_STORAGE_KEY;
use crate::models::ctx::{CtxError, OtherError};
use crate::runtime::msg::{Action, ActionCtx, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt};
use crate::types::favorites::FavoritesBucket;

pub fn update_favorites<E: Env + 'static>(favorites: &mut FavoritesBucket, msg: &Msg) -> Effects {
    match msg {
        Msg::Action(Action::Ctx(ActionCtx::ToggleFavorite(institute))) => {
            let event = if favorites.toggle(institute, E::now()) {
                Event::FavoriteAdded {
                    eiin_no: institute.eiin_no.to_owned(),
                }
            } else {
                Event::FavoriteRemoved {
                    eiin_no: institute.eiin_no.to_owned(),
                }
            };
            Effects::msg(Msg::Internal(Internal::FavoritesChanged))
                .join(Effects::msg(Msg::Event(event)).unchanged())
        }
        Msg::Action(Action::Ctx(ActionCtx::RemoveFavorite(eiin_no))) => {
            if favorites.remove(eiin_no) {
                Effects::msg(Msg::Internal(Internal::FavoritesChanged)).join(
                    Effects::msg(Msg::Event(Event::FavoriteRemoved {
                        eiin_no: eiin_no.to_owned(),
                    }))
                    .unchanged(),
                )
            } else {
                Effects::msg(Msg::Event(Event::Error {
                    error: CtxError::from(OtherError::FavoriteNotFound),
                    source: Box::new(Event::FavoriteRemoved {
                        eiin_no: eiin_no.to_owned(),
                    }),
                }))
                .unchanged()
            }
        }
        Msg::Action(Action::Ctx(ActionCtx::ClearFavorites)) => {
            favorites.items.clear();
            Effects::msg(Msg::Event(Event::FavoritesCleared))
                .join(Effects::one(clear_favorites_in_storage::<E>()).unchanged())
        }
        Msg::Internal(Internal::FavoritesChanged) => {
            Effects::one(push_favorites_to_storage::<E>(favorites)).unchanged()
        }
        _ => Effects::none().unchanged(),
    }
}

fn push_favorites_to_storage<E: Env + 'static>(favorites: &FavoritesBucket) -> Effect {
    EffectFuture::Sequential(
        E::set_storage(FAVORITES_STORAGE_KEY, Some(&favorites))
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::FavoritesPushedToStorage),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::FavoritesPushedToStorage),
                }),
            })
            .boxed_env(),
    )
    .into()
}

fn clear_favorites_in_storage<E: Env + 'static>() -> Effect {
    EffectFuture::Sequential(
        E::set_storage::<()>(FAVORITES_STORAGE_KEY, None)
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::FavoritesPushedToStorage),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::FavoritesPushedToStorage),
                }),
            })
            .boxed_env(),
    )
    .into()
}
