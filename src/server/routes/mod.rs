//! API routes

pub mod ingest;
pub mod query;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::server::state::AppState;

pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/ingest",
            post(ingest::ingest_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        .route("/query", post(query::query_documents))
}
