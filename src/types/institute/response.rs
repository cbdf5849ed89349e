use crate::types::institute::Institute;
use serde::{Deserialize, Serialize};

pub const SUCCESS_STATUS: &str = "success";

/// The envelope returned by the registry list endpoint.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct InstituteListResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Vec<Institute>,
}

impl InstituteListResponse {
    /// A response counts as a hit only when the status marker is `success`
    /// and the result array is not empty. Only the first record is used.
    pub fn into_first(self) -> Option<Institute> {
        if self.status == SUCCESS_STATUS {
            self.data.into_iter().next()
        } else {
            None
        }
    }
}
