pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::analysis::handlers;
use crate::errors::internal_error_response;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/resume/check", post(handlers::handle_resume_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Handler panicked; returning generic error");
    internal_error_response()
}
