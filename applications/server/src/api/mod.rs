/// API route modules
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full HTTP router around `app_state`
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Users
        .route("/user", get(users::list_users))
        .route("/user/", get(users::list_users))
        .route("/user/create", post(users::create_user))
        .route("/user/update", put(users::update_user))
        .route("/user/delete", delete(users::delete_user))
        .route("/user/:user_id", get(users::get_user))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
