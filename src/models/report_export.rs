use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionLoad, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::institute::Institute;
use crate::types::report::Report;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Selected {
    pub institute: Institute,
}

#[derive(Default, Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport {
    pub selected: Option<Selected>,
    pub report: Option<Report>,
}

impl<E: Env + 'static> UpdateWithCtx<E> for ReportExport {
    fn update(&mut self, msg: &Msg, _ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::ReportExport(selected))) => {
                let report_effects = eq_update(
                    &mut self.report,
                    Some(Report::new(&selected.institute, E::now())),
                );
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                selected_effects.join(report_effects)
            }
            Msg::Action(Action::Unload) => {
                let selected_effects = eq_update(&mut self.selected, None);
                let report_effects = eq_update(&mut self.report, None);
                selected_effects.join(report_effects)
            }
            _ => Effects::none().unchanged(),
        }
    }
}
