use crate::types::institute::EiinNo;
use serde::{Deserialize, Serialize};

/// An institute record returned by the registry.
///
/// The fields are passed through verbatim, nothing in here is validated or
/// computed by this crate.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Institute {
    #[serde(default)]
    pub eiin_no: EiinNo,
    #[serde(default)]
    pub institute_name: String,
    #[serde(default)]
    pub institute_name_bn: String,
    #[serde(default)]
    pub institute_type_name: String,
    #[serde(default)]
    pub institute_type_name_bn: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub division_name: String,
    #[serde(default)]
    pub division_name_bn: String,
    #[serde(default)]
    pub district_name: String,
    #[serde(default)]
    pub district_name_bn: String,
    #[serde(default)]
    pub thana_name: String,
    #[serde(default)]
    pub thana_name_bn: String,
    #[serde(default)]
    pub mouza_name: String,
    #[serde(default)]
    pub mouza_name_bn: String,
    #[serde(default, deserialize_with = "crate::types::serde_ext::string_or_number")]
    pub division_code: Option<String>,
    #[serde(default, deserialize_with = "crate::types::serde_ext::string_or_number")]
    pub district_code: Option<String>,
    #[serde(default, deserialize_with = "crate::types::serde_ext::string_or_number")]
    pub thana_code: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub submission_status: String,
    #[serde(default)]
    pub verification: String,
    #[serde(default)]
    pub submission_date: Option<String>,
    #[serde(default)]
    pub circular_expiry_date: Option<String>,
    #[serde(default)]
    pub is_govt: bool,
    #[serde(default)]
    pub is_submission_expired: bool,
    #[serde(default)]
    pub role_name: String,
    #[serde(default, deserialize_with = "crate::types::serde_ext::string_or_number")]
    pub esurvey_id: Option<String>,
}

/// The subset of an [`Institute`] carried by favorite toggle actions and
/// kept in the persisted buckets.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InstitutePreview {
    pub eiin_no: EiinNo,
    pub institute_name: String,
    pub institute_name_bn: String,
}

impl From<&Institute> for InstitutePreview {
    fn from(institute: &Institute) -> Self {
        InstitutePreview {
            eiin_no: institute.eiin_no.to_owned(),
            institute_name: institute.institute_name.to_owned(),
            institute_name_bn: institute.institute_name_bn.to_owned(),
        }
    }
}
