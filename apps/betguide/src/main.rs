use actix_web::{web, App, HttpServer};
use betguide::config::db::DbKind;
use betguide::config::site::{ServerConfig, SiteConfig};
use betguide::infra::state::build_state;
use betguide::middleware::{cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger};
use betguide::routes;
use betguide::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: docker-compose env_file or docker run --env-file
    // - Local dev: source an env file (e.g., set -a; . ./.env; set +a)
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let site = SiteConfig::from_env();

    println!(
        "🚀 Starting {} backend on http://{}:{}",
        site.site_name, server.host, server.port
    );

    let app_state = match build_state()
        .with_db(DbKind::Postgres)
        .with_site(site)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(SecurityHeaders)
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
