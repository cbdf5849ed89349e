use crate::constants::SEARCH_HISTORY_STORAGE_KEY;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::favorites::FavoritesBucket;
use crate::types::profile::Settings;
use crate::types::search_history::{HistoryEntry, SearchHistoryBucket};
use crate::unit_tests::{TestEnv, STORAGE};
use chrono::{TimeZone, Utc};
use eiin_derive::Model;

#[test]
fn actionctx_clearsearchhistory() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let search_history = SearchHistoryBucket {
        items: vec![HistoryEntry {
            eiin_no: "118632".into(),
            institute_name: "Dhaka College".to_owned(),
            institute_name_bn: "ঢাকা কলেজ".to_owned(),
            search_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }],
    };
    STORAGE.write().unwrap().insert(
        SEARCH_HISTORY_STORAGE_KEY.to_owned(),
        serde_json::to_string(&search_history).unwrap(),
    );
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(Settings::default(), search_history, FavoritesBucket::default()),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::ClearSearchHistory),
        })
    });
    assert!(
        runtime.model().unwrap().ctx.search_history.items.is_empty(),
        "Should clear the search history"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(SEARCH_HISTORY_STORAGE_KEY),
        None,
        "Should remove the persisted search history"
    );
}
