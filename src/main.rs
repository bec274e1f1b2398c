use ytrewards_api::{app, constants::api as constants, state::AppState};

#[tokio::main]
async fn main() {
    let state = AppState::from_env();
    let router = app(&state, &constants::ALLOWED_ORIGINS);
    let listener = tokio::net::TcpListener::bind(constants::BIND_ADDRESS.as_str())
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, router)
        .await
        .expect("Failed to init Axum service");
}
