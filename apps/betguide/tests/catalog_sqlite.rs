//! Catalog accessors against a seeded in-memory database.

mod common;
mod support;

use betguide::entities::licenses;
use betguide::repos::bonuses::BonusType;
use betguide::repos::countries::LegalStatus;
use betguide::services::Catalog;
use sea_orm::{ActiveModelTrait, Set};
use support::db::{fresh_db, seed};
use time::OffsetDateTime;

#[tokio::test]
async fn list_accessors_order_rows() {
    let db = fresh_db().await;
    seed(&db).await.unwrap();
    let catalog = Catalog::new(Some(&db));

    let ids: Vec<i64> = catalog.casinos().await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let ids: Vec<i64> = catalog
        .casinos_by_country("es")
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 4]);

    let countries = catalog.countries().await.unwrap();
    let classes: Vec<LegalStatus> = countries.iter().map(|c| c.legal_class).collect();
    assert_eq!(
        classes,
        vec![LegalStatus::Partial, LegalStatus::Legal, LegalStatus::Restricted]
    );

    let ids: Vec<i64> = catalog
        .licenses()
        .await
        .unwrap()
        .iter()
        .map(|l| l.license.id)
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn bonuses_by_type_tag() {
    let db = fresh_db().await;
    seed(&db).await.unwrap();
    let catalog = Catalog::new(Some(&db));

    let all = catalog.bonuses(None).await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].casino.name, "Bet Royale");

    assert_eq!(catalog.bonuses(Some("all")).await.unwrap().len(), 4);

    let welcome = catalog.bonuses(Some("welcome")).await.unwrap();
    assert_eq!(welcome.len(), 1);
    assert_eq!(welcome[0].bonus.bonus_type, BonusType::Welcome);

    assert!(catalog.bonuses(Some("free-spins")).await.is_none());
    assert!(catalog.bonuses(Some("jackpot")).await.is_none());
}

#[tokio::test]
async fn featured_respects_country_scope() {
    let db = fresh_db().await;
    seed(&db).await.unwrap();
    let catalog = Catalog::new(Some(&db));

    assert_eq!(catalog.featured_casino(None).await.map(|c| c.id), Some(1));
    assert_eq!(catalog.featured_casino(Some("global")).await.map(|c| c.id), Some(1));
    assert_eq!(catalog.featured_casino(Some("mx")).await.map(|c| c.id), Some(1));
    assert!(catalog.featured_casino(Some("us")).await.is_none());
}

#[tokio::test]
async fn single_row_lookups() {
    let db = fresh_db().await;
    seed(&db).await.unwrap();
    let catalog = Catalog::new(Some(&db));

    let detail = catalog.casino_details("bet-royale").await.unwrap();
    assert_eq!(detail.pros, vec!["Fast payouts"]);
    assert_eq!(detail.cons, vec!["Limited support hours"]);
    assert_eq!(detail.licenses[0].license_id, 1);

    let bare = catalog.casino_details("lucky-star").await.unwrap();
    assert!(bare.features.is_empty() && bare.licenses.is_empty());

    assert!(catalog.casino_details("missing").await.is_none());
    assert_eq!(catalog.country_by_code("es").await.unwrap().name, "Spain");
    assert!(catalog.country_by_code("zz").await.is_none());

    let license = catalog.license_by_id(1).await.unwrap();
    assert_eq!(license.children.requirements.len(), 2);
    assert!(catalog.license_by_id(42).await.is_none());
}

#[tokio::test]
async fn empty_tables_and_missing_storage_share_the_sentinel() {
    let db = fresh_db().await;
    assert!(Catalog::new(Some(&db)).casinos().await.is_none());
    assert!(Catalog::new(None).casinos().await.is_none());
    assert!(Catalog::new(None).license_by_id(1).await.is_none());
}

#[tokio::test]
async fn corrupt_rows_fail_the_whole_list() {
    let db = fresh_db().await;
    licenses::ActiveModel {
        id: Set(1),
        name: Set("Nowhere Board".to_string()),
        country: Set("Nowhere".to_string()),
        established_year: Set(2020),
        website_url: Set("https://nowhere.example".to_string()),
        rating: Set("Platinum".to_string()),
        trust_score: Set(5.0),
        description: Set(String::new()),
        application_process: Set(None),
        annual_fees: Set(None),
        created_at: Set(OffsetDateTime::now_utc()),
        updated_at: Set(None),
    }
    .insert(&db)
    .await
    .unwrap();

    let catalog = Catalog::new(Some(&db));
    assert!(catalog.licenses().await.is_none());
    assert!(catalog.license_by_id(1).await.is_none());
}
