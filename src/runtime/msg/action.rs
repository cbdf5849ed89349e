use serde::Deserialize;

use crate::{
    models::{
        institute_search::Selected as InstituteSearchSelected,
        report_export::Selected as ReportExportSelected,
    },
    types::{
        institute::{EiinNo, InstitutePreview},
        profile::Settings,
    },
};

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    UpdateSettings(Settings),
    /// Adds the institute to the favorites if it is not present,
    /// removes it otherwise.
    ToggleFavorite(InstitutePreview),
    RemoveFavorite(EiinNo),
    ClearSearchHistory,
    ClearFavorites,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "model", content = "args")]
pub enum ActionLoad {
    InstituteSearch(InstituteSearchSelected),
    ReportExport(ReportExportSelected),
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `eiin-core` crate and handled by the `eiin-core` crate.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    Load(ActionLoad),
    Unload,
}
