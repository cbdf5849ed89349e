use crate::constants::SEARCH_HISTORY_STORAGE_KEY;
use crate::models::common::Loadable;
use crate::models::ctx::Ctx;
use crate::models::institute_search::{InstituteSearch, SearchError, Selected};
use crate::runtime::msg::{Action, ActionLoad, Internal, Msg};
use crate::runtime::{
    EnvError, EnvFutureExt, Runtime, RuntimeAction, TryEnvFuture, UpdateWithCtx,
};
use crate::types::institute::{Institute, InstituteListResponse};
use crate::unit_tests::{default_fetch_handler, Request, TestEnv, FETCH_HANDLER, REQUESTS, STORAGE};
use eiin_derive::Model;
use futures::future;
use std::any::Any;

fn institute() -> Institute {
    Institute {
        eiin_no: "118632".into(),
        institute_name: "Dhaka College".to_owned(),
        institute_name_bn: "ঢাকা কলেজ".to_owned(),
        ..Default::default()
    }
}

#[test]
fn actionload_institute_search() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        institute_search: InstituteSearch,
    }
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. }
                if url == "http://202.72.235.218:8082/api/v1/institute/list?eiinNo=118632"
                    && method == "GET" =>
            {
                future::ok(Box::new(InstituteListResponse {
                    status: "success".to_owned(),
                    data: vec![institute()],
                }) as Box<dyn Any + Send>)
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::InstituteSearch(Selected {
                // the raw input is trimmed before it is used
                eiin_no: " 118632 ".into(),
            })),
        })
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model.institute_search.selected,
        Some(Selected {
            eiin_no: "118632".into(),
        }),
        "The trimmed query should be selected"
    );
    assert_eq!(
        model.institute_search.institute,
        Some(Loadable::Ready(institute())),
        "The first record should be displayed"
    );
    assert_eq!(REQUESTS.read().unwrap().len(), 1, "One request is issued");
}

#[test]
fn actionload_institute_search_not_found() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        institute_search: InstituteSearch,
    }
    fn fetch_handler(_request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        future::ok(Box::new(InstituteListResponse {
            status: "success".to_owned(),
            data: vec![],
        }) as Box<dyn Any + Send>)
        .boxed_env()
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::InstituteSearch(Selected {
                eiin_no: "000000".into(),
            })),
        })
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model.institute_search.institute,
        Some(Loadable::Err(SearchError::NotFound)),
        "An empty result array should read as not found"
    );
    assert!(
        model.ctx.search_history.items.is_empty(),
        "No history entry should be added"
    );
    assert_eq!(
        STORAGE.read().unwrap().get(SEARCH_HISTORY_STORAGE_KEY),
        None,
        "Nothing should be persisted"
    );
}

#[test]
fn actionload_institute_search_network_error() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        institute_search: InstituteSearch,
    }
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, .. }
                if url == "http://202.72.235.218:8082/api/v1/institute/list?eiinNo=118632" =>
            {
                future::ok(Box::new(InstituteListResponse {
                    status: "success".to_owned(),
                    data: vec![institute()],
                }) as Box<dyn Any + Send>)
                .boxed_env()
            }
            Request { url, .. }
                if url == "http://202.72.235.218:8082/api/v1/institute/list?eiinNo=999999" =>
            {
                future::err(EnvError::Fetch("connection refused".to_owned())).boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::InstituteSearch(Selected {
                eiin_no: "118632".into(),
            })),
        })
    });
    assert!(
        runtime
            .model()
            .unwrap()
            .institute_search
            .institute
            .as_ref()
            .map_or(false, |institute| institute.is_ready()),
        "The first search should display a record"
    );
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::InstituteSearch(Selected {
                eiin_no: "999999".into(),
            })),
        })
    });
    let model = runtime.model().unwrap();
    let error = match &model.institute_search.institute {
        Some(Loadable::Err(error)) => error.to_owned(),
        institute => panic!("Expected an error, got {:?}", institute),
    };
    assert_eq!(
        error,
        SearchError::Env(EnvError::Fetch("connection refused".to_owned())),
        "The previously displayed record should be replaced by the error"
    );
    assert!(
        !error.to_string().is_empty(),
        "The error message should not be empty"
    );
    assert_eq!(
        runtime.model().unwrap().ctx.search_history.items.len(),
        1,
        "Only the successful search should be in the history"
    );
}

#[test]
fn actionload_institute_search_empty_query() {
    #[derive(Model, Clone, Default)]
    #[model(TestEnv)]
    struct TestModel {
        ctx: Ctx,
        institute_search: InstituteSearch,
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, _rx) = Runtime::<TestEnv, _>::new(TestModel::default(), vec![], 1000);
    TestEnv::run(|| {
        runtime.dispatch(RuntimeAction {
            field: None,
            action: Action::Load(ActionLoad::InstituteSearch(Selected {
                eiin_no: "   ".into(),
            })),
        })
    });
    let model = runtime.model().unwrap();
    assert_eq!(
        model.institute_search.institute,
        Some(Loadable::Err(SearchError::EmptyQuery)),
        "A whitespace only query is a validation error"
    );
    assert_eq!(model.institute_search.selected, None);
    assert!(
        REQUESTS.read().unwrap().is_empty(),
        "No request should be issued"
    );
}

#[test]
fn stale_search_result_is_discarded() {
    let mut institute_search = InstituteSearch {
        selected: Some(Selected {
            eiin_no: "118632".into(),
        }),
        institute: Some(Loadable::Loading),
    };
    let effects = UpdateWithCtx::<TestEnv>::update(
        &mut institute_search,
        &Msg::Internal(Internal::InstituteSearchResult(
            "999999".into(),
            Box::new(Ok(institute())),
        )),
        &Ctx::default(),
    );
    assert!(!effects.has_changed, "The model should stay unchanged");
    assert_eq!(
        institute_search.institute,
        Some(Loadable::Loading),
        "A result for a superseded query should be discarded"
    );
}
