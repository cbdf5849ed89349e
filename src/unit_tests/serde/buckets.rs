use crate::types::favorites::{FavoriteEntry, FavoritesBucket};
use crate::types::profile::{Settings, Theme};
use crate::types::search_history::{HistoryEntry, SearchHistoryBucket};
use chrono::{TimeZone, Utc};

#[test]
fn search_history_bucket_persists_as_a_bare_array() {
    let mut bucket = SearchHistoryBucket::default();
    bucket.push(HistoryEntry {
        eiin_no: "118632".into(),
        institute_name: "Dhaka College".to_owned(),
        institute_name_bn: "ঢাকা কলেজ".to_owned(),
        search_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    });
    assert_eq!(
        serde_json::to_string(&bucket).unwrap(),
        r#"[{"eiinNo":"118632","instituteName":"Dhaka College","instituteNameBn":"ঢাকা কলেজ","searchDate":"2024-01-01T00:00:00Z"}]"#
    );
}

#[test]
fn favorites_bucket_persists_as_a_bare_array() {
    let bucket = FavoritesBucket {
        items: vec![FavoriteEntry {
            eiin_no: "118632".into(),
            institute_name: "Dhaka College".to_owned(),
            institute_name_bn: "ঢাকা কলেজ".to_owned(),
            added_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }],
    };
    let data = serde_json::to_string(&bucket).unwrap();
    assert_eq!(
        serde_json::from_str::<FavoritesBucket>(&data).unwrap(),
        bucket
    );
    assert!(data.starts_with('['), "The bucket should be a bare array");
}

#[test]
fn theme_persists_as_a_bare_string() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
    assert_eq!(
        serde_json::to_string(&Settings { theme: Theme::Dark }).unwrap(),
        r#""dark""#
    );
    assert_eq!(
        serde_json::from_str::<Settings>(r#""light""#).unwrap(),
        Settings {
            theme: Theme::Light
        }
    );
}
