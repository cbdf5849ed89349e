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
fn actionctx_removefavorite() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let favorite = FavoriteEntry {
        eiin_no: "118632".into(),
        institute_name: "Dhaka College".to_owned(),
        institute_name_bn: "ঢাকা কলেজ".to_owned(),
        added_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    };
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(
                Settings::default(),
                SearchHistoryBucket::default(),
                FavoritesBucket {
                    items: vec![favorite],
                },
            ),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RemoveFavorite("118632".into())),
        })
    });
    assert!(
        runtime.model().unwrap().ctx.favorites.items.is_empty(),
        "Should remove the favorite"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(FAVORITES_STORAGE_KEY),
        Some(&"[]".to_owned()),
        "Should persist the empty favorites"
    );
}

#[test]
fn actionctx_removefavorite_not_found() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::RemoveFavorite("118632".into())),
        })
    });
    assert!(
        runtime.model().unwrap().ctx.favorites.items.is_empty(),
        "Favorites should stay unchanged"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(FAVORITES_STORAGE_KEY),
        None,
        "Nothing should be persisted"
    );
}
