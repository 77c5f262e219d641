use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use voyager_workflow::TripDetails;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/send-booking-email", post(send_booking_email))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEmailRequest {
    pub trip_details: TripDetails,
    #[serde(default)]
    pub gdpr_consent: bool,
}

/// POST /api/send-booking-email
/// Demo booking-confirmation delivery: renders the email and logs it. No
/// side effect happens without consent.
async fn send_booking_email(
    State(state): State<AppState>,
    Json(request): Json<BookingEmailRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !request.gdpr_consent {
        return Err(AppError::ConsentRequired);
    }

    let details = &request.trip_details;
    let content = render_confirmation(details);

    tracing::info!(
        to = %state.settings.booking.notify_address,
        subject = %format!("Trip Booking Confirmation - {}", details.destination),
        "=== EMAIL TO SEND ===\n{}",
        content
    );

    Ok(Json(json!({
        "success": true,
        "message": "Email sent successfully (demo mode - check server logs)"
    })))
}

/// dd/mm/yyyy when the date parses, the raw string otherwise.
fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn render_confirmation(details: &TripDetails) -> String {
    let symbol = details.currency.symbol();
    let mut lines = vec![
        "Project Voyager - Trip Booking Confirmation (DEMO)".to_string(),
        String::new(),
        format!("Destination: {}", details.destination),
        format!("Departure: {}", display_date(&details.departure_date)),
    ];
    if let Some(return_date) = &details.return_date {
        lines.push(format!("Return: {}", display_date(return_date)));
    }
    lines.extend([
        String::new(),
        "Flight:".to_string(),
        format!("- Airline: {}", details.flight.airline),
        format!("- Route: {}", details.flight.route),
        format!("- Time: {}", details.flight.time),
        format!("- Price: {}{}", symbol, details.flight.price),
        String::new(),
        "Hotel:".to_string(),
        format!("- Name: {}", details.hotel.name),
        format!("- Location: {}", details.hotel.location),
        format!("- Rating: {}/5.0", details.hotel.rating),
        format!("- Price: {}{} per night", symbol, details.hotel.price),
        String::new(),
        format!("Total Cost: {}{}", symbol, details.total_cost),
        String::new(),
        "---".to_string(),
        "This is a DEMONSTRATION booking. No payment has been processed.".to_string(),
    ]);
    lines.join("\n")
}
