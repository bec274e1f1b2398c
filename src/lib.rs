//! The backend API for the YT Rewards platform: stateless handlers that
//! validate input, call the hosted auth/database service and the
//! transactional email provider, and map upstream outcomes to HTTP statuses.
pub mod constants;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod upstream;
pub mod utils;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use state::AppState;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router. Browser calls are only acknowledged for
/// origins on the allow-list; preflight `OPTIONS` requests are answered by
/// the CORS layer.
pub fn app(state: &AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    let api = Router::new()
        .merge(routes::users::create_router(state))
        .merge(routes::support::create_router());
    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .layer(cors)
        .with_state(state.clone())
}

/// The root route, used as a liveness probe.
async fn root() -> String {
    "YT Rewards API is running!".to_owned()
}
