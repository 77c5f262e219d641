use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use std::panic::{catch_unwind, AssertUnwindSafe};
use voyager_core::models::{ResultSet, SearchRequest};
use voyager_offer::{ItineraryPlanner, PlanError};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/generate-itinerary", post(generate_itinerary))
}

/// POST /api/generate-itinerary
/// Validate the search request and return the combined, ranked offer set.
async fn generate_itinerary(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ResultSet>, AppError> {
    tracing::info!(
        airports = request.departure_airports.len(),
        destination = request.destination.as_deref().unwrap_or(""),
        num_results = request.num_results,
        "Received itinerary request"
    );

    let mut rng = state.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    // Synthesis is infallible by construction, but an unexpected panic must
    // surface as a server error rather than tearing down the connection.
    let planned = catch_unwind(AssertUnwindSafe(|| {
        ItineraryPlanner::plan(&request, rng.as_mut())
    }));

    match planned {
        Ok(Ok(result)) => Ok(Json(result)),
        Ok(Err(PlanError::MissingField(message))) => {
            Err(AppError::ValidationError(message.to_string()))
        }
        Ok(Err(err @ PlanError::Generation(_))) => Err(AppError::GenerationError {
            message: "Failed to generate itinerary".to_string(),
            details: err.detail().unwrap_or("Unknown error").to_string(),
        }),
        Err(panic) => {
            let details = panic
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| panic.downcast_ref::<&str>().copied())
                .unwrap_or("Unknown error")
                .to_string();
            Err(AppError::GenerationError {
                message: "Failed to generate itinerary".to_string(),
                details,
            })
        }
    }
}
