use crate::constants::SEARCH_HISTORY_MAX_ITEMS;
use crate::types::institute::{EiinNo, Institute};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub eiin_no: EiinNo,
    pub institute_name: String,
    pub institute_name_bn: String,
    pub search_date: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(institute: &Institute, search_date: DateTime<Utc>) -> Self {
        HistoryEntry {
            eiin_no: institute.eiin_no.to_owned(),
            institute_name: institute.institute_name.to_owned(),
            institute_name_bn: institute.institute_name_bn.to_owned(),
            search_date,
        }
    }
}

/// The most recent successful searches, newest first.
///
/// Persisted as a bare JSON array.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct SearchHistoryBucket {
    pub items: Vec<HistoryEntry>,
}

impl SearchHistoryBucket {
    /// Inserts the entry at the front. A repeated search moves the entry to
    /// the front instead of duplicating it and the bucket is truncated to
    /// the most recent [`SEARCH_HISTORY_MAX_ITEMS`] entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.items.retain(|item| item.eiin_no != entry.eiin_no);
        self.items.insert(0, entry);
        self.items.truncate(SEARCH_HISTORY_MAX_ITEMS);
    }
}
