#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    betguide_test_support::test_logging::init();
}

/// Read a 200 JSON body, failing with the body text otherwise.
pub async fn ok_json(resp: ServiceResponse<BoxBody>) -> Value {
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert!(
        status.is_success(),
        "expected success, got {status}: {}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).expect("response body should be JSON")
}

/// Values of `field` across a JSON array.
pub fn pluck<'a>(items: &'a Value, field: &str) -> Vec<&'a Value> {
    items
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| &item[field])
        .collect()
}
