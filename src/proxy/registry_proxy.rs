use crate::constants::{EIIN_NO_PARAM, REGISTRY_LIST_PATH, URI_COMPONENT_ENCODE_SET};
use crate::runtime::{Env, EnvError, EnvFuture, EnvFutureExt};
use futures::{future, FutureExt};
use http::{header, Method, Request, Response, StatusCode};
use percent_encoding::utf8_percent_encode;
use std::marker::PhantomData;
use url::{form_urlencoded, Url};

/// Relay between browser shells and the institute registry.
///
/// Mirrors the serverless handler contract: one request in, one response
/// out, permissive CORS headers on every response and no state between
/// invocations. Whether the upstream is reached over plain HTTP or HTTPS
/// is a deployment decision, so the base URL is injected.
pub struct RegistryProxy<E: Env> {
    upstream_url: Url,
    env: PhantomData<E>,
}

impl<E: Env + 'static> RegistryProxy<E> {
    pub fn new(upstream_url: Url) -> Self {
        RegistryProxy {
            upstream_url,
            env: PhantomData,
        }
    }
    pub fn handle(&self, request: &Request<()>) -> EnvFuture<'static, Response<String>> {
        // CORS preflight
        if request.method() == Method::OPTIONS {
            return future::ready(cors_response(StatusCode::OK, String::new())).boxed_env();
        };
        let eiin_no = request
            .uri()
            .query()
            .and_then(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .find(|(name, _)| name == EIIN_NO_PARAM)
                    .map(|(_, value)| value.into_owned())
            })
            .filter(|eiin_no| !eiin_no.is_empty());
        let eiin_no = match eiin_no {
            Some(eiin_no) => eiin_no,
            None => {
                let body = error_body(&format!("Missing '{EIIN_NO_PARAM}' query parameter"));
                return future::ready(cors_response(StatusCode::BAD_REQUEST, body)).boxed_env();
            }
        };
        let mut url = self
            .upstream_url
            .join(REGISTRY_LIST_PATH)
            .expect("url builder failed");
        url.set_query(Some(&format!(
            "{}={}",
            EIIN_NO_PARAM,
            utf8_percent_encode(&eiin_no, URI_COMPONENT_ENCODE_SET)
        )));
        let upstream_request = Request::get(url.as_str())
            .body(())
            .expect("request builder failed");
        E::fetch::<_, serde_json::Value>(upstream_request)
            .map(|result| match result {
                Ok(body) => cors_response(StatusCode::OK, body.to_string()),
                Err(EnvError::Serde(_)) => cors_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body("Invalid JSON from API"),
                ),
                Err(EnvError::Fetch(message)) => cors_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body(&format!("Request failed: {message}")),
                ),
                Err(error) => cors_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_body(&format!("Request failed: {}", error.message())),
                ),
            })
            .boxed_env()
    }
}

fn cors_response(status: StatusCode, body: String) -> Response<String> {
    let mut response = Response::builder()
        .status(status)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS");
    if !body.is_empty() {
        response = response.header(header::CONTENT_TYPE, "application/json");
    };
    response.body(body).expect("response builder failed")
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
