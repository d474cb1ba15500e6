use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use betguide::middleware::{RequestTrace, SecurityHeaders, StructuredLogger};
use betguide::routes;
use betguide::state::app_state::AppState;

/// Production routes behind the production middleware stack, minus CORS.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
