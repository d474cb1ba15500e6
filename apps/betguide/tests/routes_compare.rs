mod common;
mod support;

use actix_web::test;
use betguide::config::site::SiteConfig;
use betguide::state::app_state::AppState;
use common::{ok_json, pluck};
use serde_json::Value;
use support::{create_test_app, seeded_state};

async fn get_with(state: AppState, uri: &str) -> Value {
    let app = create_test_app(state).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    ok_json(test::call_service(&app, req).await).await
}

async fn get(uri: &str) -> Value {
    get_with(seeded_state().await, uri).await
}

#[actix_web::test]
async fn casino_comparison_defaults_to_top_two() {
    let body = get("/api/compare/casinos").await;
    assert_eq!(pluck(&body["selected"], "name"), vec!["Bet Royale", "Lucky Star"]);
    assert_eq!(body["options"].as_array().map(Vec::len), Some(4));
    assert!(body.get("message").is_none());
}

#[actix_web::test]
async fn requested_ids_fill_slots_in_order() {
    let body = get("/api/compare/casinos?ids=4,3").await;
    assert_eq!(pluck(&body["selected"], "name"), vec!["Vegas Nova", "Golden Spin"]);

    let body = get("/api/compare/casinos?ids=4").await;
    assert_eq!(pluck(&body["selected"], "name"), vec!["Vegas Nova", "Lucky Star"]);

    let body = get("/api/compare/casinos?ids=99").await;
    assert!(body["selected"][0].is_null());
    assert_eq!(body["selected"][1]["name"], "Lucky Star");
}

#[actix_web::test]
async fn license_comparison_uses_trust_order() {
    let body = get("/api/compare/licenses").await;
    assert_eq!(pluck(&body["selected"], "id"), vec![3, 1]);
    assert_eq!(body["selected"][0]["trustLabel"], "9.8/10");
}

#[actix_web::test]
async fn nothing_to_compare_without_data() {
    let state = AppState::new_without_db(SiteConfig::default());
    let body = get_with(state, "/api/compare/licenses?lang=en").await;
    assert!(body["selected"][0].is_null());
    assert_eq!(body["message"], "At least two entries are needed to compare.");
}

#[actix_web::test]
async fn static_params_list_every_detail_key() {
    let body = get("/api/static-params").await;
    assert_eq!(body["countries"], serde_json::json!(["mx", "es", "us"]));
    assert_eq!(
        body["casinos"],
        serde_json::json!(["bet-royale", "lucky-star", "golden-spin", "vegas-nova"])
    );
}
