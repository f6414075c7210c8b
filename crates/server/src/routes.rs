use std::sync::Arc;

use axum::{routing::get, Json, Router};
use models::{concentration_unit, country, diagnosis_category, dispensing_unit, medication_type, Lookup};
use sea_orm::DatabaseConnection;
use service::lookup::{LookupRepository, LookupService, SeaOrmLookupRepository};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod lookups;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

fn lookup<T>(db: &DatabaseConnection) -> Router
where
    T: Lookup,
    SeaOrmLookupRepository<T>: LookupRepository<T>,
{
    let repo = Arc::new(SeaOrmLookupRepository::<T>::new(db.clone()));
    lookups::lookup_router(Arc::new(LookupService::new(repo)))
}

/// Build the full application router: health plus one route set per lookup table.
pub fn build_router(db: DatabaseConnection, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(lookup::<concentration_unit::Model>(&db))
        .merge(lookup::<country::Model>(&db))
        .merge(lookup::<diagnosis_category::Model>(&db))
        .merge(lookup::<dispensing_unit::Model>(&db))
        .merge(lookup::<medication_type::Model>(&db))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx is logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
