use crate::models::common::{eq_update, Loadable};
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Internal, Msg};
use crate::runtime::{Effect, EffectFuture, Effects, Env, EnvError, EnvFutureExt, UpdateWithCtx};
use crate::types::institute::{fetch_institutes, EiinNo, Institute};
use enclose::enclose;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum SearchError {
    EmptyQuery,
    NotFound,
    Env(EnvError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            SearchError::EmptyQuery => write!(f, "Please enter an EIIN number"),
            SearchError::NotFound => write!(f, "No institute found with this EIIN number"),
            // no transport detail is surfaced to the user, any network or
            // decode failure reads the same
            SearchError::Env(_) => write!(f, "Failed to fetch institute data"),
        }
    }
}

impl From<EnvError> for SearchError {
    fn from(error: EnvError) -> Self {
        SearchError::Env(error)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    pub eiin_no: EiinNo,
}

#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InstituteSearch {
    pub selected: Option<Selected>,
    pub institute: Option<Loadable<Institute, SearchError>>,
}

impl<E: Env + 'static> UpdateWithCtx<E> for InstituteSearch {
    fn update(&mut self, msg: &Msg, _ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::InstituteSearch(selected))) => {
                let eiin_no = EiinNo::from(selected.eiin_no.as_str().trim());
                if eiin_no.as_str().is_empty() {
                    let selected_effects = eq_update(&mut self.selected, None);
                    let institute_effects = eq_update(
                        &mut self.institute,
                        Some(Loadable::Err(SearchError::EmptyQuery)),
                    );
                    return selected_effects.join(institute_effects);
                };
                let selected_effects = eq_update(
                    &mut self.selected,
                    Some(Selected {
                        eiin_no: eiin_no.to_owned(),
                    }),
                );
                let institute_effects = eq_update(&mut self.institute, Some(Loadable::Loading));
                Effects::one(search_institute::<E>(&eiin_no))
                    .unchanged()
                    .join(selected_effects)
                    .join(institute_effects)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let institute_effects = eq_update(&mut self.institute, None);
                selected_effects.join(institute_effects)
            }
            Msg::Internal(Internal::InstituteSearchResult(eiin_no, result)) => {
                match &self.selected {
                    // a result for a query that is no longer selected is
                    // discarded, the last selection wins
                    Some(selected) if selected.eiin_no == *eiin_no => {
                        let next_institute = match result.as_ref() {
                            Ok(institute) => Loadable::Ready(institute.to_owned()),
                            Err(error) => Loadable::Err(error.to_owned()),
                        };
                        eq_update(&mut self.institute, Some(next_institute))
                    }
                    _ => Effects::none().unchanged(),
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn search_institute<E: Env + 'static>(eiin_no: &EiinNo) -> Effect {
    EffectFuture::Concurrent(
        fetch_institutes::<E>(eiin_no)
            .map(enclose!((eiin_no.to_owned() => eiin_no) move |result| {
                let result = result
                    .map_err(SearchError::from)
                    .and_then(|response| response.into_first().ok_or(SearchError::NotFound));
                Msg::Internal(Internal::InstituteSearchResult(eiin_no, Box::new(result)))
            }))
            .boxed_env(),
    )
    .into()
}
