use crate::runtime::{Env, EnvFutureExt, TryEnvFuture};
use chrono::{DateTime, Utc};
use futures::executor::{LocalPool, LocalSpawner};
use futures::task::LocalSpawnExt;
use futures::{future, Future, TryFutureExt};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::any::{type_name, Any};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::ops::Fn;
use std::sync::{LockResult, Mutex, MutexGuard, RwLock};

lazy_static! {
    pub static ref FETCH_HANDLER: RwLock<FetchHandler> =
        RwLock::new(Box::new(default_fetch_handler));
    pub static ref REQUESTS: RwLock<Vec<Request>> = Default::default();
    pub static ref STORAGE: RwLock<BTreeMap<String, String>> = Default::default();
    pub static ref NOW: RwLock<DateTime<Utc>> = RwLock::new(Utc::now());
    static ref ENV_MUTEX: Mutex<()> = Default::default();
}

thread_local! {
    static SPAWNER: RefCell<Option<LocalSpawner>> = RefCell::new(None);
}

pub type FetchHandler =
    Box<dyn Fn(Request) -> TryEnvFuture<Box<dyn Any + Send>> + Send + Sync + 'static>;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl<T: Serialize> From<http::Request<T>> for Request {
    fn from(request: http::Request<T>) -> Self {
        let (head, body) = request.into_parts();
        Request {
            url: head.uri.to_string(),
            method: head.method.as_str().to_owned(),
            headers: head
                .headers
                .iter()
                .map(|(key, value)| (key.as_str().to_owned(), value.to_str().unwrap().to_owned()))
                .collect::<HashMap<_, _>>(),
            body: serde_json::to_string(&body).unwrap(),
        }
    }
}

pub enum TestEnv {}

impl TestEnv {
    pub fn reset() -> LockResult<MutexGuard<'static, ()>> {
        let env_mutex = ENV_MUTEX.lock();
        *FETCH_HANDLER.write().unwrap() = Box::new(default_fetch_handler);
        REQUESTS.write().unwrap().clear();
        STORAGE.write().unwrap().clear();
        *NOW.write().unwrap() = Utc::now();
        env_mutex
    }
    /// Runs the runnable and drains every effect it spawned before
    /// returning, so tests observe the settled model and storage.
    pub fn run<F: FnOnce()>(runnable: F) {
        let mut pool = LocalPool::new();
        SPAWNER.with(|spawner| *spawner.borrow_mut() = Some(pool.spawner()));
        pool.run_until(future::lazy(|_| runnable()));
        pool.run();
        SPAWNER.with(|spawner| *spawner.borrow_mut() = None);
    }
    fn exec<F: Future<Output = ()> + 'static>(future: F) {
        SPAWNER.with(|spawner| {
            spawner
                .borrow()
                .as_ref()
                .expect("TestEnv::run is not active")
                .spawn_local(future)
                .expect("spawn failed")
        });
    }
}

impl Env for TestEnv {
    fn fetch<IN, OUT>(request: http::Request<IN>) -> TryEnvFuture<OUT>
    where
        IN: Serialize + Send + 'static,
        OUT: for<'de> Deserialize<'de> + Send + 'static,
    {
        let request = Request::from(request);
        REQUESTS.write().unwrap().push(request.to_owned());
        FETCH_HANDLER.read().unwrap()(request)
            .map_ok(|resp| {
                *resp
                    .downcast::<OUT>()
                    .unwrap_or_else(|_| panic!("Failed to downcast to {}", type_name::<OUT>()))
            })
            .boxed_env()
    }
    fn get_storage<T: for<'de> Deserialize<'de> + Send + 'static>(
        key: &str,
    ) -> TryEnvFuture<Option<T>> {
        future::ok(
            STORAGE
                .read()
                .unwrap()
                .get(key)
                .map(|data| serde_json::from_str(data).unwrap()),
        )
        .boxed_env()
    }
    fn set_storage<T: Serialize>(key: &str, value: Option<&T>) -> TryEnvFuture<()> {
        let mut storage = STORAGE.write().unwrap();
        match value {
            Some(v) => storage.insert(key.to_owned(), serde_json::to_string(v).unwrap()),
            None => storage.remove(key),
        };
        future::ok(()).boxed_env()
    }
    fn exec_concurrent<F: Future<Output = ()> + Send + 'static>(future: F) {
        TestEnv::exec(future);
    }
    fn exec_sequential<F: Future<Output = ()> + Send + 'static>(future: F) {
        TestEnv::exec(future);
    }
    fn now() -> DateTime<Utc> {
        *NOW.read().unwrap()
    }
    #[cfg(debug_assertions)]
    fn log(message: String) {
        println!("{message}")
    }
}

pub fn default_fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
    panic!("Unhandled fetch request: {:#?}", request)
}
