//! In-memory SQLite fixture: schema straight from the entities, plus a small
//! directory of casinos, bonuses, countries and licenses with fixed ids.

use betguide::config::db::DbKind;
use betguide::config::site::SiteConfig;
use betguide::entities::{
    bonuses, casino_countries, casino_features, casino_game_providers, casino_licenses,
    casino_payment_methods, casino_security_features, casinos, countries, features,
    game_providers, license_player_protections, license_pros_cons, license_requirements,
    licenses, payment_methods, pros_cons, security_features, support_channels,
    supported_languages,
};
use betguide::infra::db::connect_db;
use betguide::infra::state::build_state;
use betguide::state::app_state::AppState;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema, Set,
};
use time::macros::{date, datetime};
use time::{Duration, OffsetDateTime};

pub const SITE_NAME: &str = "Test Guide";

const T0: OffsetDateTime = datetime!(2026-01-01 12:00 UTC);

/// State over a fresh, seeded database.
pub async fn seeded_state() -> AppState {
    let conn = fresh_db().await;
    seed(&conn).await.expect("seed test data");
    state_with(conn).await
}

/// State over a fresh database with the schema but no rows.
pub async fn unseeded_state() -> AppState {
    state_with(fresh_db().await).await
}

async fn state_with(conn: DatabaseConnection) -> AppState {
    build_state()
        .with_connection(conn)
        .with_site(SiteConfig::new(SITE_NAME))
        .build()
        .await
        .expect("build state")
}

pub async fn fresh_db() -> DatabaseConnection {
    let conn = connect_db(&DbKind::SqliteMemory)
        .await
        .expect("connect in-memory sqlite");
    create_schema(&conn).await.expect("create schema");
    conn
}

async fn create_table<C, E>(conn: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    conn.execute(backend.build(&schema.create_table_from_entity(entity)))
        .await?;
    Ok(())
}

/// Parents before children so foreign keys resolve.
pub async fn create_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    create_table(conn, casinos::Entity).await?;
    create_table(conn, countries::Entity).await?;
    create_table(conn, licenses::Entity).await?;
    create_table(conn, features::Entity).await?;
    create_table(conn, payment_methods::Entity).await?;
    create_table(conn, game_providers::Entity).await?;
    create_table(conn, security_features::Entity).await?;
    create_table(conn, casino_countries::Entity).await?;
    create_table(conn, casino_licenses::Entity).await?;
    create_table(conn, casino_features::Entity).await?;
    create_table(conn, casino_payment_methods::Entity).await?;
    create_table(conn, casino_game_providers::Entity).await?;
    create_table(conn, casino_security_features::Entity).await?;
    create_table(conn, pros_cons::Entity).await?;
    create_table(conn, supported_languages::Entity).await?;
    create_table(conn, support_channels::Entity).await?;
    create_table(conn, license_requirements::Entity).await?;
    create_table(conn, license_player_protections::Entity).await?;
    create_table(conn, license_pros_cons::Entity).await?;
    create_table(conn, bonuses::Entity).await?;
    Ok(())
}

pub struct CasinoSeed {
    pub id: i64,
    pub name: &'static str,
    pub rating: f64,
    pub min_deposit: Option<f64>,
    /// app, streaming, cash out, live betting
    pub flags: [bool; 4],
    pub featured: bool,
}

pub const CASINOS: [CasinoSeed; 4] = [
    CasinoSeed {
        id: 1,
        name: "Bet Royale",
        rating: 4.8,
        min_deposit: Some(10.0),
        flags: [true, true, true, true],
        featured: true,
    },
    CasinoSeed {
        id: 2,
        name: "Lucky Star",
        rating: 4.5,
        min_deposit: Some(20.0),
        flags: [true, false, true, false],
        featured: false,
    },
    CasinoSeed {
        id: 3,
        name: "Golden Spin",
        rating: 4.1,
        min_deposit: None,
        flags: [false, false, false, true],
        featured: true,
    },
    CasinoSeed {
        id: 4,
        name: "Vegas Nova",
        rating: 3.6,
        min_deposit: Some(5.0),
        flags: [true, false, false, false],
        featured: false,
    },
];

pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

async fn insert_casino<C: ConnectionTrait>(conn: &C, seed: &CasinoSeed) -> Result<(), DbErr> {
    casinos::ActiveModel {
        id: Set(seed.id),
        name: Set(seed.name.to_string()),
        slug: Set(slug(seed.name)),
        logo_url: Set(format!("https://img.example/{}.png", slug(seed.name))),
        website_url: Set(format!("https://{}.example", slug(seed.name))),
        description: Set(format!("{} review", seed.name)),
        rating: Set(seed.rating),
        established_year: Set(2010),
        min_deposit: Set(seed.min_deposit),
        withdrawal_time: Set(Some("24h".to_string())),
        has_mobile_app: Set(seed.flags[0]),
        has_live_streaming: Set(seed.flags[1]),
        has_cash_out: Set(seed.flags[2]),
        has_live_betting: Set(seed.flags[3]),
        monthly_visits: Set(None),
        positive_rating_percentage: Set(None),
        user_reviews_count: Set(None),
        featured: Set(seed.featured),
        created_at: Set(T0),
        updated_at: Set(None),
    }
    .insert(conn)
    .await?;
    Ok(())
}

async fn insert_country<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    name: &str,
    code: &str,
    legal_status: &str,
    regulatory_body: Option<&str>,
) -> Result<(), DbErr> {
    countries::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        code: Set(code.to_string()),
        flag_emoji: Set("🏳".to_string()),
        legal_status: Set(legal_status.to_string()),
        regulatory_body: Set(regulatory_body.map(str::to_string)),
        legal_age: Set(regulatory_body.map(|_| "18".to_string())),
        tax_info: Set(None),
        legal_info: Set(regulatory_body.map(|body| format!("<p>Regulated by {body}</p>"))),
        created_at: Set(T0),
        updated_at: Set(None),
    }
    .insert(conn)
    .await?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn insert_license<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    name: &str,
    country: &str,
    tier: &str,
    trust_score: f64,
    annual_fees: Option<&str>,
) -> Result<(), DbErr> {
    licenses::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        country: Set(country.to_string()),
        established_year: Set(2000),
        website_url: Set(format!("https://license-{id}.example")),
        rating: Set(tier.to_string()),
        trust_score: Set(trust_score),
        description: Set(format!("{name} description")),
        application_process: Set(Some("Online application".to_string())),
        annual_fees: Set(annual_fees.map(str::to_string)),
        created_at: Set(T0),
        updated_at: Set(None),
    }
    .insert(conn)
    .await?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn insert_bonus<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    casino_id: i64,
    name: &str,
    bonus_type: &str,
    wagering: Option<f64>,
    min_deposit: Option<f64>,
    is_exclusive: bool,
) -> Result<(), DbErr> {
    bonuses::ActiveModel {
        id: Set(id),
        casino_id: Set(casino_id),
        name: Set(name.to_string()),
        description: Set(format!("{name} details")),
        bonus_code: Set(is_exclusive.then(|| format!("CODE{id}"))),
        wagering_requirement: Set(wagering),
        min_deposit: Set(min_deposit),
        max_amount: Set(Some(100.0)),
        valid_until: Set(Some(date!(2026 - 12 - 31))),
        bonus_type: Set(bonus_type.to_string()),
        is_exclusive: Set(is_exclusive),
        // later ids are newer
        created_at: Set(T0 + Duration::hours(id)),
        updated_at: Set(None),
    }
    .insert(conn)
    .await?;
    Ok(())
}

/// Seed the fixture directory.
///
/// Countries: es (Legal, casinos 1, 2, 4), mx (Partially legal, casinos 1, 3),
/// us (Restricted, none). Licenses by trust score: 3 (9.8), 1 (9.5), 2 (6.0).
/// Bonuses newest first: 4, 3, 2, 1.
pub async fn seed<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    for casino in &CASINOS {
        insert_casino(conn, casino).await?;
    }

    insert_country(conn, 1, "Spain", "es", "Legal", Some("DGOJ")).await?;
    insert_country(conn, 2, "Mexico", "mx", "Partially legal", None).await?;
    insert_country(conn, 3, "United States", "us", "Restricted", None).await?;

    for (id, (casino_id, country_id)) in [(1, 1), (2, 1), (4, 1), (1, 2), (3, 2)]
        .into_iter()
        .enumerate()
    {
        casino_countries::ActiveModel {
            id: Set(id as i64 + 1),
            casino_id: Set(casino_id),
            country_id: Set(country_id),
            is_restricted: Set(false),
            created_at: Set(T0),
        }
        .insert(conn)
        .await?;
    }

    insert_license(conn, 1, "Malta Gaming Authority", "Malta", "Excellent", 9.5, None).await?;
    insert_license(conn, 2, "Curacao eGaming", "Curacao", "Average", 6.0, None).await?;
    insert_license(
        conn,
        3,
        "UK Gambling Commission",
        "United Kingdom",
        "Excellent",
        9.8,
        Some("£4,000+"),
    )
    .await?;

    for (id, license_id, text) in [
        (1, 1, "Local office"),
        (2, 1, "Audited RNG"),
        (3, 3, "UK bank account"),
    ] {
        license_requirements::ActiveModel {
            id: Set(id),
            license_id: Set(license_id),
            requirement: Set(text.to_string()),
            created_at: Set(T0),
        }
        .insert(conn)
        .await?;
    }
    for (id, license_id, text) in [(1, 1, "Self-exclusion"), (2, 3, "Deposit limits")] {
        license_player_protections::ActiveModel {
            id: Set(id),
            license_id: Set(license_id),
            protection: Set(text.to_string()),
            created_at: Set(T0),
        }
        .insert(conn)
        .await?;
    }
    for (id, license_id, text, is_pro) in [
        (1, 1, "EU recognition", true),
        (2, 1, "Expensive", false),
    ] {
        license_pros_cons::ActiveModel {
            id: Set(id),
            license_id: Set(license_id),
            content: Set(text.to_string()),
            is_pro: Set(is_pro),
            created_at: Set(T0),
        }
        .insert(conn)
        .await?;
    }

    seed_casino_details(conn).await?;

    insert_bonus(conn, 1, 1, "Welcome pack", "welcome", Some(35.0), Some(10.0), false).await?;
    insert_bonus(conn, 2, 2, "Free bet Friday", "free-bets", None, Some(20.0), true).await?;
    insert_bonus(conn, 3, 3, "No deposit spins", "no-deposit", Some(45.0), None, true).await?;
    insert_bonus(conn, 4, 1, "Cashback weekend", "cashback", Some(5.0), Some(50.0), false).await?;

    Ok(())
}

/// Every sub-table populated for casino 1; casino 2 keeps them all empty.
async fn seed_casino_details<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    features::ActiveModel {
        id: Set(1),
        name: Set("Live chat".to_string()),
        description: Set(None),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;
    casino_features::ActiveModel {
        id: Set(1),
        casino_id: Set(1),
        feature_id: Set(1),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;

    payment_methods::ActiveModel {
        id: Set(1),
        name: Set("Visa".to_string()),
        method_type: Set("card".to_string()),
        description: Set(None),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;
    casino_payment_methods::ActiveModel {
        id: Set(1),
        casino_id: Set(1),
        payment_method_id: Set(1),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;

    game_providers::ActiveModel {
        id: Set(1),
        name: Set("NetEnt".to_string()),
        website_url: Set(Some("https://netent.example".to_string())),
        description: Set(None),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;
    casino_game_providers::ActiveModel {
        id: Set(1),
        casino_id: Set(1),
        game_provider_id: Set(1),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;

    security_features::ActiveModel {
        id: Set(1),
        name: Set("SSL encryption".to_string()),
        description: Set(None),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;
    casino_security_features::ActiveModel {
        id: Set(1),
        casino_id: Set(1),
        security_feature_id: Set(1),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;

    casino_licenses::ActiveModel {
        id: Set(1),
        casino_id: Set(1),
        license_id: Set(1),
        license_number: Set(Some("MGA/B2C/123".to_string())),
        issue_date: Set(Some(date!(2019 - 05 - 01))),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;

    for (id, text, is_pro) in [(1, "Fast payouts", true), (2, "Limited support hours", false)] {
        pros_cons::ActiveModel {
            id: Set(id),
            casino_id: Set(1),
            content: Set(text.to_string()),
            is_pro: Set(is_pro),
            created_at: Set(T0),
        }
        .insert(conn)
        .await?;
    }
    for (id, language) in [(1, "English"), (2, "Spanish")] {
        supported_languages::ActiveModel {
            id: Set(id),
            casino_id: Set(1),
            language: Set(language.to_string()),
            created_at: Set(T0),
        }
        .insert(conn)
        .await?;
    }
    support_channels::ActiveModel {
        id: Set(1),
        casino_id: Set(1),
        channel: Set("Live chat".to_string()),
        created_at: Set(T0),
    }
    .insert(conn)
    .await?;

    Ok(())
}
