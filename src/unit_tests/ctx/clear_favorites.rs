use crate::constants::FAVORITES_STORAGE_KEY;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::favorites::{FavoriteEntry, FavoritesBucket};
use crate::types::profile::Settings;
use crate::types::search_history::SearchHistoryBucket;
use crate::unit_tests::{TestEnv, STORAGE};
use chrono::{TimeZone, Utc};
use eiin_derive::Model;

#[test]
fn actionctx_clearfavorites() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let favorites = FavoritesBucket {
        items: vec![FavoriteEntry {
            eiin_no: "118632".into(),
            institute_name: "Dhaka College".to_owned(),
            institute_name_bn: "ঢাকা কলেজ".to_owned(),
            added_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }],
    };
    STORAGE.write().unwrap().insert(
        FAVORITES_STORAGE_KEY.to_owned(),
        serde_json::to_string(&favorites).unwrap(),
    );
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(Settings::default(), SearchHistoryBucket::default(), favorites),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::ClearFavorites),
        })
    });
    assert!(
        runtime.model().unwrap().ctx.favorites.items.is_empty(),
        "Should clear the favorites"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(FAVORITES_STORAGE_KEY),
        None,
        "Should remove the persisted favorites"
    );
}
