use crate::flights::generate_flights;
use crate::hotels::generate_hotels;
use crate::rank::{rank_flights, rank_hotels};
use voyager_core::currency::Currency;
use voyager_core::models::{ResultSet, SearchParams, SearchRequest};
use voyager_core::random::RandomSource;

/// Fallback city when the request leaves the destination blank.
pub const DEFAULT_DESTINATION: &str = "Paris";

/// Result count defaults to 10 and is clamped to [1, 20].
pub const DEFAULT_RESULTS: u32 = 10;
pub const MAX_RESULTS: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("{0}")]
    MissingField(&'static str),

    #[error("Failed to generate itinerary")]
    Generation(String),
}

impl PlanError {
    /// Diagnostic detail for internal failures, kept separate from the
    /// client-facing message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            PlanError::MissingField(_) => None,
            PlanError::Generation(detail) => Some(detail),
        }
    }
}

/// Validates a raw search request and orchestrates both generators with a
/// shared currency and result count, so flight and hotel option counts
/// always match.
pub struct ItineraryPlanner;

impl ItineraryPlanner {
    pub fn plan(
        request: &SearchRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<ResultSet, PlanError> {
        if request.departure_airports.is_empty() {
            return Err(PlanError::MissingField(
                "At least one departure airport is required",
            ));
        }

        let departure_date = match request.departure_date.as_deref() {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => return Err(PlanError::MissingField("Departure date is required")),
        };

        let destination = match request.destination.as_deref() {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => DEFAULT_DESTINATION.to_string(),
        };
        let currency = request
            .currency
            .as_deref()
            .map(Currency::from_symbol)
            .unwrap_or_default();
        let num_results = request
            .num_results
            .unwrap_or(DEFAULT_RESULTS)
            .clamp(1, MAX_RESULTS);

        tracing::info!(
            airports = request.departure_airports.len(),
            %destination,
            currency = currency.symbol(),
            num_results,
            "Planning itinerary"
        );

        let mut flights = generate_flights(
            &request.departure_airports,
            &destination,
            currency,
            num_results,
            rng,
        );
        let mut hotels = generate_hotels(&destination, currency, num_results, rng);

        rank_flights(&mut flights);
        rank_hotels(&mut hotels);

        tracing::info!(
            flights = flights.len(),
            hotels = hotels.len(),
            "Generated offer set"
        );

        Ok(ResultSet {
            flights,
            hotels,
            search_params: SearchParams {
                destination,
                departure_date,
                return_date: request.return_date.clone(),
                trip_type: request.trip_type,
                currency,
                departure_airports: request.departure_airports.clone(),
            },
        })
    }
}
