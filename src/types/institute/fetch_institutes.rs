use crate::constants::{EIIN_NO_PARAM, REGISTRY_LIST_PATH, REGISTRY_URL};
use crate::runtime::{Env, TryEnvFuture};
use crate::types::institute::{EiinNo, InstituteListResponse};
use http::Request;

pub fn fetch_institutes<E: Env>(eiin_no: &EiinNo) -> TryEnvFuture<InstituteListResponse> {
    let mut url = REGISTRY_URL
        .join(REGISTRY_LIST_PATH)
        .expect("url builder failed");
    url.query_pairs_mut()
        .append_pair(EIIN_NO_PARAM, eiin_no.as_str());
    let request = Request::get(url.as_str())
        .body(())
        .expect("request builder failed");
    E::fetch(request)
}
