use crate::constants::THEME_STORAGE_KEY;
use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionCtx};
use crate::runtime::{Runtime, RuntimeAction};
use crate::types::profile::{Settings, Theme};
use crate::unit_tests::{TestEnv, STORAGE};
use eiin_derive::Model;

#[test]
fn actionctx_updatesettings() {
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
            action: Action::Ctx(ActionCtx::UpdateSettings(Settings { theme: Theme::Dark })),
        })
    });
    assert_eq!(
        runtime.model().unwrap().ctx.settings.theme,
        Theme::Dark,
        "Should update the theme"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(THEME_STORAGE_KEY),
        Some(&r#""dark""#.to_owned()),
        "Should persist the theme as a bare string"
    );
}
