use crate::types::institute::{EiinNo, InstitutePreview};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub eiin_no: EiinNo,
    pub institute_name: String,
    pub institute_name_bn: String,
    pub added_date: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(institute: &InstitutePreview, added_date: DateTime<Utc>) -> Self {
        FavoriteEntry {
            eiin_no: institute.eiin_no.to_owned(),
            institute_name: institute.institute_name.to_owned(),
            institute_name_bn: institute.institute_name_bn.to_owned(),
            added_date,
        }
    }
}

/// Favorite institutes, prepend ordered and unbounded.
///
/// Persisted as a bare JSON array.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct FavoritesBucket {
    pub items: Vec<FavoriteEntry>,
}

impl FavoritesBucket {
    pub fn contains(&self, eiin_no: &EiinNo) -> bool {
        self.items.iter().any(|item| item.eiin_no == *eiin_no)
    }
    /// Removes the entry when it is present, prepends a new entry otherwise.
    /// Returns `true` when the entry was added.
    pub fn toggle(&mut self, institute: &InstitutePreview, added_date: DateTime<Utc>) -> bool {
        if self.contains(&institute.eiin_no) {
            self.remove(&institute.eiin_no);
            false
        } else {
            self.items
                .insert(0, FavoriteEntry::new(institute, added_date));
            true
        }
    }
    /// Returns `true` when an entry was removed.
    pub fn remove(&mut self, eiin_no: &EiinNo) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| item.eiin_no != *eiin_no);
        self.items.len() != len_before
    }
}
