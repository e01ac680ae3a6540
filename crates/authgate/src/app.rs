use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        account::{login, register},
        oauth::{complete_oauth, initiate_oauth},
        pages::{index, logout_page},
        session::{inspect, logout},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/auth", get(initiate_oauth))
        .route("/success", get(complete_oauth))
        .route("/user", get(inspect))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", get(logout_page).post(logout))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
