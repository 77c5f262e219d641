use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::Path, routing::get, Json, Router};
use voyager_catalog::TripData;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/destinations/{slug}", get(get_destination))
}

/// GET /api/destinations/{slug}
/// Pre-baked trip record for the legacy simple flow.
async fn get_destination(Path(slug): Path<String>) -> Result<Json<TripData>, AppError> {
    voyager_catalog::lookup(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown destination: {}", slug)))
}
