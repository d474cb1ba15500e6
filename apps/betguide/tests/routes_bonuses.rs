mod common;
mod support;

use actix_web::test;
use common::{ok_json, pluck};
use serde_json::{json, Value};
use support::{create_test_app, seeded_state};

async fn get(uri: &str) -> Value {
    let app = create_test_app(seeded_state().await).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    ok_json(test::call_service(&app, req).await).await
}

fn ids(body: &Value) -> Vec<i64> {
    pluck(&body["items"], "id")
        .into_iter()
        .filter_map(Value::as_i64)
        .collect()
}

#[actix_web::test]
async fn newest_first_with_casino_summary() {
    let body = get("/api/bonuses?lang=en").await;
    assert_eq!(ids(&body), vec![4, 3, 2, 1]);
    assert_eq!(body["bonusType"], "all");

    let newest = &body["items"][0];
    assert_eq!(newest["casino"]["name"], "Bet Royale");
    assert_eq!(newest["typeLabel"], "Cashback");
    assert_eq!(newest["wagering"], "5x");
    assert_eq!(newest["minDeposit"], "50€");

    let spins = &body["items"][1];
    assert_eq!(spins["minDeposit"], "No minimum");
    assert_eq!(spins["bonusCode"], "CODE3");
    let free_bet = &body["items"][2];
    assert_eq!(free_bet["wagering"], "N/A");
}

#[actix_web::test]
async fn type_tag_narrows_the_fetch() {
    let body = get("/api/bonuses?type=free-bets").await;
    assert_eq!(ids(&body), vec![2]);
    assert_eq!(body["bonusType"], "free-bets");

    let body = get("/api/bonuses?type=lottery&lang=en").await;
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["emptyMessage"], "No bonuses found. Try different filters.");
}

#[actix_web::test]
async fn absent_values_pass_range_filters() {
    // bonus 2 has no wagering requirement, bonus 3 has no minimum deposit
    let body = get("/api/bonuses?wageringMax=40").await;
    assert_eq!(ids(&body), vec![4, 2, 1]);

    let body = get("/api/bonuses?depositMax=15").await;
    assert_eq!(ids(&body), vec![3, 1]);
}

#[actix_web::test]
async fn exclusive_and_casino_selection_combine() {
    let body = get("/api/bonuses?exclusive=true").await;
    assert_eq!(ids(&body), vec![3, 2]);

    let body = get("/api/bonuses?casinos=1,3").await;
    assert_eq!(ids(&body), vec![4, 3, 1]);

    let options = &body["casinoOptions"];
    assert_eq!(pluck(options, "id"), vec![1, 3, 2]);
    assert_eq!(pluck(options, "selected"), vec![true, true, false]);
}

#[actix_web::test]
async fn reset_keeps_the_bonus_type() {
    let body = get("/api/bonuses?type=welcome&exclusive=true&lang=en").await;
    assert_eq!(body["filters"]["resetHref"], "/api/bonuses?type=welcome");
    assert_eq!(
        body["filters"]["chips"][0]["removeHref"],
        "/api/bonuses?lang=en&type=welcome"
    );
}

#[actix_web::test]
async fn limit_and_skip_apply_after_filtering() {
    let body = get("/api/bonuses?exclusive=false&skip=1&limit=2").await;
    assert_eq!(ids(&body), vec![3, 2]);
}
