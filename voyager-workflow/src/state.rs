use crate::total;
use serde::{Deserialize, Serialize};
use voyager_core::currency::Currency;
use voyager_core::models::{FlightOffer, HotelOffer, ResultSet, SearchRequest, TripType};

/// Workflow status for one search session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Idle,
    Loading,
    Success,
    Error,
}

/// The user's single flight/hotel choice, foreign keys into the current
/// result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub flight: Option<String>,
    pub hotel: Option<String>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.flight.is_some() && self.hotel.is_some()
    }
}

/// Booking snapshot handed to the confirmation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub destination: String,
    pub departure_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub flight: FlightOffer,
    pub hotel: HotelOffer,
    pub currency: Currency,
    pub total_cost: i32,
}

/// User and system actions driving the workflow.
#[derive(Debug, Clone)]
pub enum Action {
    Generate(SearchRequest),
    Resolve {
        generation: u64,
        outcome: Result<ResultSet, String>,
    },
    SelectFlight(String),
    SelectHotel(String),
    Book,
    CloseConfirmation,
    Reset,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Generate(_) => "GENERATE",
            Action::Resolve { .. } => "RESOLVE",
            Action::SelectFlight(_) => "SELECT_FLIGHT",
            Action::SelectHotel(_) => "SELECT_HOTEL",
            Action::Book => "BOOK",
            Action::CloseConfirmation => "CLOSE_CONFIRMATION",
            Action::Reset => "RESET",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Action {action} not allowed in state {from}")]
    InvalidTransition { from: String, action: &'static str },

    #[error("Please select both a flight and a hotel before booking")]
    IncompleteSelection,

    #[error("Offer not found: {0}")]
    UnknownOffer(String),
}

/// Selection & booking workflow state machine.
///
/// All mutation goes through [`TripWorkflow::apply`]; the trip total is a
/// derived read. A failed action never corrupts the existing result set or
/// selection. Each `Generate` bumps a generation counter and a `Resolve`
/// carrying a stale counter is dropped, so a superseded in-flight request can
/// never overwrite a newer one.
#[derive(Debug)]
pub struct TripWorkflow {
    status: Status,
    request: Option<SearchRequest>,
    result: Option<ResultSet>,
    selection: Selection,
    error: Option<String>,
    confirmation: Option<TripDetails>,
    generation: u64,
}

impl TripWorkflow {
    pub fn new() -> Self {
        Self {
            status: Status::Idle,
            request: None,
            result: None,
            selection: Selection::default(),
            error: None,
            confirmation: None,
            generation: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Token identifying the most recent generate request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn confirmation(&self) -> Option<&TripDetails> {
        self.confirmation.as_ref()
    }

    pub fn flights(&self) -> &[FlightOffer] {
        self.result.as_ref().map(|r| r.flights.as_slice()).unwrap_or(&[])
    }

    pub fn hotels(&self) -> &[HotelOffer] {
        self.result.as_ref().map(|r| r.hotels.as_slice()).unwrap_or(&[])
    }

    pub fn selected_flight(&self) -> Option<&FlightOffer> {
        let id = self.selection.flight.as_deref()?;
        self.flights().iter().find(|f| f.id == id)
    }

    pub fn selected_hotel(&self) -> Option<&HotelOffer> {
        let id = self.selection.hotel.as_deref()?;
        self.hotels().iter().find(|h| h.id == id)
    }

    /// Derived total for the current selection, recomputed on every read.
    pub fn trip_total(&self) -> Option<i32> {
        let flight = self.selected_flight()?;
        let hotel = self.selected_hotel()?;
        let params = &self.result.as_ref()?.search_params;
        let nights = total::nights(
            params.trip_type,
            &params.departure_date,
            params.return_date.as_deref(),
            self.request.as_ref().and_then(|r| r.duration),
        );
        Some(total::trip_total(flight.price, hotel.price, nights))
    }

    /// Apply one action. Rejected actions leave the state untouched.
    pub fn apply(&mut self, action: Action) -> Result<(), WorkflowError> {
        let name = action.name();
        match action {
            Action::Generate(request) => {
                self.generation += 1;
                self.status = Status::Loading;
                self.request = Some(request);
                self.result = None;
                self.selection = Selection::default();
                self.error = None;
                self.confirmation = None;
                tracing::debug!(generation = self.generation, "Workflow entered loading");
                Ok(())
            }

            Action::Resolve { generation, outcome } => {
                // Last-writer-wins: a response for a superseded request is
                // dropped without touching the state.
                if generation != self.generation || self.status != Status::Loading {
                    tracing::debug!(generation, current = self.generation, "Dropping stale resolve");
                    return Ok(());
                }
                match outcome {
                    Ok(result) => {
                        // Auto-select the top-ranked flight and hotel so the
                        // "trust the ranking" path needs no extra click.
                        self.selection = Selection {
                            flight: result.flights.first().map(|f| f.id.clone()),
                            hotel: result.hotels.first().map(|h| h.id.clone()),
                        };
                        self.result = Some(result);
                        self.status = Status::Success;
                    }
                    Err(message) => {
                        self.error = Some(message);
                        self.status = Status::Error;
                    }
                }
                Ok(())
            }

            Action::SelectFlight(id) => {
                self.require_success(name)?;
                if !self.flights().iter().any(|f| f.id == id) {
                    return Err(WorkflowError::UnknownOffer(id));
                }
                self.selection.flight = Some(id);
                Ok(())
            }

            Action::SelectHotel(id) => {
                self.require_success(name)?;
                if !self.hotels().iter().any(|h| h.id == id) {
                    return Err(WorkflowError::UnknownOffer(id));
                }
                self.selection.hotel = Some(id);
                Ok(())
            }

            Action::Book => {
                self.require_success(name)?;
                if !self.selection.is_complete() {
                    return Err(WorkflowError::IncompleteSelection);
                }
                let total = self.trip_total().ok_or(WorkflowError::IncompleteSelection)?;
                let flight = self.selected_flight().cloned().ok_or(WorkflowError::IncompleteSelection)?;
                let hotel = self.selected_hotel().cloned().ok_or(WorkflowError::IncompleteSelection)?;
                let params = match self.result.as_ref() {
                    Some(result) => &result.search_params,
                    None => return Err(WorkflowError::IncompleteSelection),
                };
                self.confirmation = Some(TripDetails {
                    destination: params.destination.clone(),
                    departure_date: params.departure_date.clone(),
                    return_date: if params.trip_type == Some(TripType::Return) {
                        params.return_date.clone()
                    } else {
                        None
                    },
                    flight,
                    hotel,
                    currency: params.currency,
                    total_cost: total,
                });
                Ok(())
            }

            Action::CloseConfirmation => {
                self.confirmation = None;
                Ok(())
            }

            Action::Reset => {
                *self = TripWorkflow::new();
                Ok(())
            }
        }
    }

    fn require_success(&self, action: &'static str) -> Result<(), WorkflowError> {
        if self.status != Status::Success {
            return Err(WorkflowError::InvalidTransition {
                from: format!("{:?}", self.status),
                action,
            });
        }
        Ok(())
    }
}

impl Default for TripWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyager_core::models::{SearchParams, TravelClass};

    fn flight(id: &str, price: i32) -> FlightOffer {
        FlightOffer {
            id: id.to_string(),
            airline: "KLM".to_string(),
            route: "London Heathrow to Paris".to_string(),
            time: "08:00 - 10:00".to_string(),
            price,
            travel_class: TravelClass::Economy,
            duration: "2h 10m".to_string(),
        }
    }

    fn hotel(id: &str, price: i32) -> HotelOffer {
        HotelOffer {
            id: id.to_string(),
            name: "Novotel Paris".to_string(),
            location: "City Center".to_string(),
            rating: 4.5,
            price,
            amenities: vec!["WiFi".to_string()],
            img: String::new(),
        }
    }

    fn result_set() -> ResultSet {
        ResultSet {
            flights: vec![flight("flight-0", 150), flight("flight-1", 220)],
            hotels: vec![hotel("hotel-0", 96), hotel("hotel-1", 120)],
            search_params: SearchParams {
                destination: "Paris".to_string(),
                departure_date: "2025-06-01".to_string(),
                return_date: Some("2025-06-08".to_string()),
                trip_type: Some(TripType::Return),
                currency: Currency::Eur,
                departure_airports: vec!["London Heathrow (LHR)".to_string()],
            },
        }
    }

    fn request() -> SearchRequest {
        SearchRequest {
            departure_airports: vec!["London Heathrow (LHR)".to_string()],
            departure_date: Some("2025-06-01".to_string()),
            return_date: Some("2025-06-08".to_string()),
            trip_type: Some(TripType::Return),
            ..Default::default()
        }
    }

    fn loaded_workflow() -> TripWorkflow {
        let mut wf = TripWorkflow::new();
        wf.apply(Action::Generate(request())).unwrap();
        let generation = wf.generation();
        wf.apply(Action::Resolve {
            generation,
            outcome: Ok(result_set()),
        })
        .unwrap();
        wf
    }

    #[test]
    fn test_generate_clears_previous_state_and_loads() {
        let mut wf = loaded_workflow();
        wf.apply(Action::Generate(request())).unwrap();
        assert_eq!(wf.status(), Status::Loading);
        assert!(wf.flights().is_empty());
        assert_eq!(wf.selection(), &Selection::default());
        assert!(wf.error_message().is_none());
    }

    #[test]
    fn test_resolve_ok_auto_selects_first_offers() {
        let wf = loaded_workflow();
        assert_eq!(wf.status(), Status::Success);
        assert_eq!(wf.selection().flight.as_deref(), Some("flight-0"));
        assert_eq!(wf.selection().hotel.as_deref(), Some("hotel-0"));
    }

    #[test]
    fn test_resolve_error_keeps_offers_empty() {
        let mut wf = TripWorkflow::new();
        wf.apply(Action::Generate(request())).unwrap();
        let generation = wf.generation();
        wf.apply(Action::Resolve {
            generation,
            outcome: Err("Failed to generate itinerary. Please try again.".to_string()),
        })
        .unwrap();
        assert_eq!(wf.status(), Status::Error);
        assert!(wf.flights().is_empty());
        assert_eq!(
            wf.error_message(),
            Some("Failed to generate itinerary. Please try again.")
        );
    }

    #[test]
    fn test_stale_resolve_is_dropped() {
        let mut wf = TripWorkflow::new();
        wf.apply(Action::Generate(request())).unwrap();
        let first = wf.generation();
        wf.apply(Action::Generate(request())).unwrap();

        // The superseded response arrives late and must not win.
        wf.apply(Action::Resolve {
            generation: first,
            outcome: Err("stale failure".to_string()),
        })
        .unwrap();
        assert_eq!(wf.status(), Status::Loading);

        wf.apply(Action::Resolve {
            generation: wf.generation(),
            outcome: Ok(result_set()),
        })
        .unwrap();
        assert_eq!(wf.status(), Status::Success);
    }

    #[test]
    fn test_reselecting_same_flight_is_idempotent() {
        let mut wf = loaded_workflow();
        wf.apply(Action::SelectFlight("flight-1".to_string())).unwrap();
        let after_one = wf.selection().clone();
        wf.apply(Action::SelectFlight("flight-1".to_string())).unwrap();
        assert_eq!(wf.selection(), &after_one);
    }

    #[test]
    fn test_selecting_unknown_offer_rejected() {
        let mut wf = loaded_workflow();
        let err = wf.apply(Action::SelectFlight("flight-99".to_string())).unwrap_err();
        assert!(matches!(err, WorkflowError::UnknownOffer(_)));
        assert_eq!(wf.selection().flight.as_deref(), Some("flight-0"));
    }

    #[test]
    fn test_select_outside_success_rejected() {
        let mut wf = TripWorkflow::new();
        let err = wf.apply(Action::SelectHotel("hotel-0".to_string())).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    }

    #[test]
    fn test_book_requires_both_selections() {
        let mut wf = loaded_workflow();
        // Simulate a result set with no hotels: selection.hotel stays unset.
        let mut partial = result_set();
        partial.hotels.clear();
        wf.apply(Action::Generate(request())).unwrap();
        let generation = wf.generation();
        wf.apply(Action::Resolve {
            generation,
            outcome: Ok(partial),
        })
        .unwrap();
        assert_eq!(wf.selection().hotel, None);

        let err = wf.apply(Action::Book).unwrap_err();
        assert!(matches!(err, WorkflowError::IncompleteSelection));
        assert!(wf.confirmation().is_none());
        assert_eq!(wf.status(), Status::Success);
    }

    #[test]
    fn test_book_produces_confirmation_snapshot() {
        let mut wf = loaded_workflow();
        wf.apply(Action::Book).unwrap();
        let details = wf.confirmation().expect("booking snapshot");
        assert_eq!(details.destination, "Paris");
        assert_eq!(details.flight.id, "flight-0");
        assert_eq!(details.hotel.id, "hotel-0");
        assert_eq!(details.currency, Currency::Eur);
        // 7 nights between the 1st and the 8th.
        assert_eq!(details.total_cost, 150 + 96 * 7);
        assert_eq!(details.return_date.as_deref(), Some("2025-06-08"));
    }

    #[test]
    fn test_close_confirmation_keeps_results_and_selection() {
        let mut wf = loaded_workflow();
        wf.apply(Action::Book).unwrap();
        wf.apply(Action::CloseConfirmation).unwrap();
        assert!(wf.confirmation().is_none());
        assert_eq!(wf.status(), Status::Success);
        assert_eq!(wf.selection().flight.as_deref(), Some("flight-0"));
    }

    #[test]
    fn test_trip_total_recomputes_on_selection_change() {
        let mut wf = loaded_workflow();
        assert_eq!(wf.trip_total(), Some(150 + 96 * 7));
        wf.apply(Action::SelectFlight("flight-1".to_string())).unwrap();
        wf.apply(Action::SelectHotel("hotel-1".to_string())).unwrap();
        assert_eq!(wf.trip_total(), Some(220 + 120 * 7));
    }

    #[test]
    fn test_reset_returns_to_idle_from_any_state() {
        let mut wf = loaded_workflow();
        wf.apply(Action::Book).unwrap();
        wf.apply(Action::Reset).unwrap();
        assert_eq!(wf.status(), Status::Idle);
        assert!(wf.flights().is_empty());
        assert!(wf.confirmation().is_none());

        let mut errored = TripWorkflow::new();
        errored.apply(Action::Generate(request())).unwrap();
        let generation = errored.generation();
        errored
            .apply(Action::Resolve {
                generation,
                outcome: Err("boom".to_string()),
            })
            .unwrap();
        errored.apply(Action::Reset).unwrap();
        assert_eq!(errored.status(), Status::Idle);
        assert!(errored.error_message().is_none());
    }

    #[test]
    fn test_confirmation_snapshot_wire_format() {
        let mut wf = loaded_workflow();
        wf.apply(Action::Book).unwrap();
        let json = serde_json::to_value(wf.confirmation().unwrap()).unwrap();
        assert_eq!(json["totalCost"], 150 + 96 * 7);
        assert_eq!(json["departureDate"], "2025-06-01");
        assert_eq!(json["currency"], "€");
        assert_eq!(json["flight"]["id"], "flight-0");
    }

    #[test]
    fn test_failed_action_preserves_existing_results() {
        let mut wf = loaded_workflow();
        let before: Vec<String> = wf.flights().iter().map(|f| f.id.clone()).collect();
        let _ = wf.apply(Action::SelectFlight("flight-99".to_string()));
        let after: Vec<String> = wf.flights().iter().map(|f| f.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(wf.status(), Status::Success);
    }
}
