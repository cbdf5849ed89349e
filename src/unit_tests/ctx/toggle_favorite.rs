use crate::constants::FAVORITES_STORAGE_KEY;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx};
use crate::runtime::{Env, Runtime, RuntimeAction};
use crate::types::favorites::FavoriteEntry;
use crate::types::institute::InstitutePreview;
use crate::unit_tests::{TestEnv, NOW, STORAGE};
use chrono::{TimeZone, Utc};
use eiin_derive::Model;

#[test]
fn actionctx_togglefavorite() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let institute = InstitutePreview {
        eiin_no: "118632".into(),
        institute_name: "Dhaka College".to_owned(),
        institute_name_bn: "ঢাকা কলেজ".to_owned(),
    };
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::ToggleFavorite(institute.to_owned())),
        })
    });
    assert_eq!(
        runtime.model().unwrap().ctx.favorites.items,
        vec![FavoriteEntry::new(&institute, TestEnv::now())],
        "Should add the institute to favorites"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(FAVORITES_STORAGE_KEY),
        Some(&serde_json::to_string(&runtime.model().unwrap().ctx.favorites).unwrap()),
        "Should persist the favorites"
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Ctx(ActionCtx::ToggleFavorite(institute.to_owned())),
        })
    });
    assert!(
        runtime.model().unwrap().ctx.favorites.items.is_empty(),
        "Toggling twice should restore the original favorites"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(FAVORITES_STORAGE_KEY),
        Some(&"[]".to_owned()),
        "Should persist the empty favorites"
    );
}

#[test]
fn actionctx_togglefavorite_prepends() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let first = InstitutePreview {
        eiin_no: "111111".into(),
        institute_name: "First".to_owned(),
        institute_name_bn: "First".to_owned(),
    };
    let second = InstitutePreview {
        eiin_no: "118632".into(),
        institute_name: "Second".to_owned(),
        institute_name_bn: "Second".to_owned(),
    };
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    for institute in [&first, &second].iter() {
        let institute = (*institute).to_owned();
        TestEnv::run(|| {
            runtime.dispatch(RuntimeAction {
                field: None,
                action: Action::Ctx(ActionCtx::ToggleFavorite(institute)),
            })
        });
    }
    assert_eq!(
        runtime
            .model()
            .unwrap()
            .ctx
            .favorites
            .items
            .iter()
            .map(|item| item.eiin_no.to_owned())
            .collect::<Vec<_>>(),
        vec!["118632".into(), "111111".into()],
        "The last added favorite should be first"
    );
}
