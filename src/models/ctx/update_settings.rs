use futures::FutureExt;

use crate::constants::THEME_STORAGE_KEY;
use crate::models::ctx::CtxError;
use crate::runtime::msg::{Action, ActionCtx, Event, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvFutureExt};
use crate::types::profile::Settings;

pub fn update_settings<E: Env + 'static>(settings: &mut Settings, msg: &Msg) -> Effects {
    match msg {
        Msg::Action(Action::Ctx(ActionCtx::UpdateSettings(next_settings))) => {
            if *settings != *next_settings {
                *settings = next_settings.to_owned();
                Effects::msg(Msg::Internal(Internal::SettingsChanged)).join(
                    Effects::msg(Msg::Event(Event::SettingsUpdated {
                        settings: next_settings.to_owned(),
                    }))
                    .unchanged(),
                )
            } else {
                Effects::none().unchanged()
            }
        }
        Msg::Internal(Internal::SettingsChanged) => {
            Effects::one(push_theme_to_storage::<E>(settings)).unchanged()
        }
        _ => Effects::none().unchanged(),
    }
}

fn push_theme_to_storage<E: Env + 'static>(settings: &Settings) -> Effect {
    EffectFuture::Sequential(
        E::set_storage(THEME_STORAGE_KEY, Some(&settings.theme))
            .map(|result| match result {
                Ok(_) => Msg::Event(Event::ThemePushedToStorage),
                Err(error) => Msg::Event(Event::Error {
                    error: CtxError::from(error),
                    source: Box::new(Event::ThemePushedToStorage),
                }),
            })
            .boxed_env(),
    )
    .into()
}
