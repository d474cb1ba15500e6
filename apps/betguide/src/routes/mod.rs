use actix_web::web;

pub mod bonuses;
pub mod casinos;
pub mod compare;
pub mod countries;
pub mod health;
pub mod licenses;
pub mod static_params;

/// Register every route. `main.rs` and the tests share this wiring; the
/// middleware stack is applied around it by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    cfg.service(web::scope("/api/casinos").configure(casinos::configure_routes));
    cfg.service(web::scope("/api/bonuses").configure(bonuses::configure_routes));
    cfg.service(web::scope("/api/countries").configure(countries::configure_routes));
    cfg.service(web::scope("/api/licenses").configure(licenses::configure_routes));
    cfg.service(web::scope("/api/compare").configure(compare::configure_routes));
    cfg.service(web::scope("/api/static-params").configure(static_params::configure_routes));
}
