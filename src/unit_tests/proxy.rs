use crate::constants::REGISTRY_URL;
use crate::proxy::RegistryProxy;
use crate::runtime::{EnvError, EnvFutureExt, TryEnvFuture};
use crate::unit_tests::{default_fetch_handler, Request, TestEnv, FETCH_HANDLER, REQUESTS};
use futures::executor::block_on;
use futures::future;
use http::{header, Method, StatusCode};
use std::any::Any;

fn assert_cors_headers(response: &http::Response<String>) {
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .unwrap(),
        "Content-Type"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap(),
        "GET, POST, OPTIONS"
    );
}

#[test]
fn options_request() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let proxy = RegistryProxy::<TestEnv>::new(REGISTRY_URL.to_owned());
    let request = http::Request::builder()
        .method(Method::OPTIONS)
        .uri("https://eiin.example/institute?whatever=1")
        .body(())
        .unwrap();
    let response = block_on(proxy.handle(&request));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.body(), "", "The preflight body should be empty");
    assert_cors_headers(&response);
    assert!(
        REQUESTS.read().unwrap().is_empty(),
        "No upstream request should be issued"
    );
}

#[test]
fn missing_eiin_no_query_parameter() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let proxy = RegistryProxy::<TestEnv>::new(REGISTRY_URL.to_owned());
    let request = http::Request::builder()
        .method(Method::GET)
        .uri("https://eiin.example/institute?foo=bar")
        .body(())
        .unwrap();
    let response = block_on(proxy.handle(&request));
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body(),
        r#"{"error":"Missing 'eiinNo' query parameter"}"#
    );
    assert_cors_headers(&response);
    assert!(
        REQUESTS.read().unwrap().is_empty(),
        "No upstream request should be issued"
    );
}

#[test]
fn relays_upstream_json() {
    fn fetch_handler(request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        match request {
            Request { url, method, .. }
                if url == "http://202.72.235.218:8082/api/v1/institute/list?eiinNo=118632"
                    && method == "GET" =>
            {
                future::ok(Box::new(serde_json::json!({
                    "status": "success",
                    "data": [{ "eiinNo": "118632", "instituteName": "Dhaka College" }],
                })) as Box<dyn Any + Send>)
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let proxy = RegistryProxy::<TestEnv>::new(REGISTRY_URL.to_owned());
    let request = http::Request::builder()
        .method(Method::GET)
        .uri("https://eiin.example/institute?eiinNo=118632")
        .body(())
        .unwrap();
    let response = block_on(proxy.handle(&request));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.body(),
        &serde_json::json!({
            "status": "success",
            "data": [{ "eiinNo": "118632", "instituteName": "Dhaka College" }],
        })
        .to_string(),
        "The upstream JSON should be relayed"
    );
    assert_cors_headers(&response);
    assert_eq!(
        REQUESTS.read().unwrap().first().map(|request| request.url.to_owned()),
        Some("http://202.72.235.218:8082/api/v1/institute/list?eiinNo=118632".to_owned()),
        "The identifier should be interpolated into the upstream path"
    );
}

#[test]
fn invalid_upstream_json() {
    fn fetch_handler(_request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        future::err(EnvError::Serde(
            "expected value at line 1 column 1".to_owned(),
        ))
        .boxed_env()
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let proxy = RegistryProxy::<TestEnv>::new(REGISTRY_URL.to_owned());
    let request = http::Request::builder()
        .method(Method::GET)
        .uri("https://eiin.example/institute?eiinNo=118632")
        .body(())
        .unwrap();
    let response = block_on(proxy.handle(&request));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body(), r#"{"error":"Invalid JSON from API"}"#);
    assert_cors_headers(&response);
}

#[test]
fn upstream_network_error() {
    fn fetch_handler(_request: Request) -> TryEnvFuture<Box<dyn Any + Send>> {
        future::err(EnvError::Fetch("connection refused".to_owned())).boxed_env()
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    let proxy = RegistryProxy::<TestEnv>::new(REGISTRY_URL.to_owned());
    let request = http::Request::builder()
        .method(Method::GET)
        .uri("https://eiin.example/institute?eiinNo=118632")
        .body(())
        .unwrap();
    let response = block_on(proxy.handle(&request));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body(),
        r#"{"error":"Request failed: connection refused"}"#
    );
    assert_cors_headers(&response);
}
