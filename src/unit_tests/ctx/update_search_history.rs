use crate::constants::{SEARCH_HISTORY_MAX_ITEMS, SEARCH_HISTORY_STORAGE_KEY};
use crate::models::ctx::Ctx;
use crate::models::institute_search::{InstituteSearch, Selected};
use crate::runtime::msg::{Action, ActionLoad};
use crate::runtime::{Env, EnvFutureExt, Runtime, RuntimeAction, TryEnvFuture};
use crate::types::favorites::FavoritesBucket;
use crate::types::institute::{Institute, InstituteListResponse};
use crate::types::profile::Settings;
use crate::types::search_history::{HistoryEntry, SearchHistoryBucket};
use crate::unit_tests::{default_fetch_handler, Request, TestEnv, FETCH_HANDLER, NOW, STORAGE};
use chrono::{TimeZone, Utc};
use eiin_derive::Model;
use futures::future;
use std::any::Any;

fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
    match request {
        Request { url, method, .. }
            if url == "http://202.72.235.218:8082/api/v1/institute/list?eiinNo=118632"
                && method == "GET" =>
        {
            future::ok(Box::new(InstituteListResponse {
                status: "success".to_owned(),
                data: vec![Institute {
                    eiin_no: "118632".into(),
                    institute_name: "Dhaka College".to_owned(),
                    institute_name_bn: "ঢাকা কলেজ".to_owned(),
                    ..Default::default()
                }],
            }) as Box<dyn Any + Send>)
            .boxed_env()
        }
        _ => default_fetch_handler(request),
    }
}

#[test]
fn search_result_is_pushed_to_history() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        institute_search: InstituteSearch,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::InstituteSearch(Selected {
                eiin_no: "118632".into(),
            })),
        })
    });
    assert_eq!(
        runtime.model().unwrap().ctx.search_history.items,
        vec![HistoryEntry {
            eiin_no: "118632".into(),
            institute_name: "Dhaka College".to_owned(),
            institute_name_bn: "ঢাকা কলেজ".to_owned(),
            search_date: TestEnv::now(),
        }],
        "Should add one history entry"
    );
    assert_eq!(
        STORAGE
            .read()
            .unwrap()
            .get(SEARCH_HISTORY_STORAGE_KEY)
            .map(|data| serde_json::from_str::<SearchHistoryBucket>(data).unwrap()),
        Some(runtime.model().unwrap().ctx.search_history.to_owned()),
        "Should persist the search history"
    );
}

#[test]
fn repeated_search_moves_the_entry_to_front() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        institute_search: InstituteSearch,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    *NOW.write().unwrap() = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let search_history = SearchHistoryBucket {
        items: vec![
            HistoryEntry {
                eiin_no: "111111".into(),
                institute_name: "First".to_owned(),
                institute_name_bn: "First".to_owned(),
                search_date: Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
            },
            HistoryEntry {
                eiin_no: "118632".into(),
                institute_name: "Dhaka College".to_owned(),
                institute_name_bn: "ঢাকা কলেজ".to_owned(),
                search_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
        ],
    };
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(
        TestModel {
            ctx: Ctx::new(Settings::default(), search_history, FavoritesBucket::default()),
            institute_search: InstituteSearch::default(),
        },
        vec![],
        1000,
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::InstituteSearch(Selected {
                eiin_no: "118632".into(),
            })),
        })
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model.ctx.search_history.items.len(),
        2,
        "The entry should not be duplicated"
    );
    assert_eq!(
        model.ctx.search_history.items.first().unwrap().eiin_no,
        "118632".into(),
        "The repeated search should move to the front"
    );
    assert_eq!(
        model.ctx.search_history.items.first().unwrap().search_date,
        TestEnv::now(),
        "The moved entry should carry the new search date"
    );
}

#[test]
fn push_truncates_to_the_most_recent_items() {
    let mut bucket = SearchHistoryBucket::default();
    for index in 0..SEARCH_HISTORY_MAX_ITEMS + 1 {
        bucket.push(HistoryEntry {
            eiin_no: index.to_string().into(),
            institute_name: format!("Institute {index}"),
            institute_name_bn: format!("Institute {index}"),
            search_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        });
    }
    assert_eq!(
        bucket.items.len(),
        SEARCH_HISTORY_MAX_ITEMS,
        "The bucket should stay capped"
    );
    assert_eq!(
        bucket.items.first().unwrap().eiin_no,
        SEARCH_HISTORY_MAX_ITEMS.to_string().into(),
        "The newest entry should be first"
    );
    assert!(
        !bucket.items.iter().any(|item| item.eiin_no == "0".into()),
        "The oldest entry should be dropped"
    );
}
