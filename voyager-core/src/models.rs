use crate::currency::Currency;
use serde::{Deserialize, Serialize};

/// One-way trips price the hotel stay with the fallback duration; return
/// trips derive nights from the date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripType {
    #[serde(rename = "one-way")]
    OneWay,
    #[serde(rename = "return")]
    Return,
}

/// Cabin tiers offered by the flight generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TravelClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
}

impl TravelClass {
    /// Base GBP fare before perturbation and conversion.
    pub fn base_price(&self) -> f64 {
        match self {
            TravelClass::Economy => 150.0,
            TravelClass::PremiumEconomy => 300.0,
            TravelClass::Business => 600.0,
        }
    }
}

/// Raw search payload as submitted by the client. Everything except the
/// departure airports and departure date is optional and defaulted by the
/// planner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub departure_airports: Vec<String>,
    pub destination: Option<String>,
    pub trip_type: Option<TripType>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    /// Fallback stay length in nights when no return date is available. The
    /// form submits this as a string, so both representations are accepted.
    #[serde(deserialize_with = "flexible_u32")]
    pub duration: Option<u32>,
    pub currency: Option<String>,
    pub num_results: Option<u32>,
    /// Free text, not interpreted by the planning core.
    pub additional_info: Option<String>,
}

fn flexible_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        None => None,
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
    })
}

/// Search parameters echoed back with defaults applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub destination: String,
    pub departure_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<TripType>,
    pub currency: Currency,
    pub departure_airports: Vec<String>,
}

/// A synthesized flight option. Created fresh per request, immutable once
/// returned, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightOffer {
    pub id: String,
    pub airline: String,
    pub route: String,
    /// "HH:MM - HH:MM", arrival wrapped past midnight.
    pub time: String,
    pub price: i32,
    #[serde(rename = "class")]
    pub travel_class: TravelClass,
    pub duration: String,
}

/// A synthesized per-night hotel option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelOffer {
    pub id: String,
    pub name: String,
    pub location: String,
    /// One fractional digit, in [4.0, 5.0].
    pub rating: f64,
    pub price: i32,
    pub amenities: Vec<String>,
    pub img: String,
}

/// The paired, ranked offer collections for one search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub flights: Vec<FlightOffer>,
    pub hotels: Vec<HotelOffer>,
    pub search_params: SearchParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_deserialization() {
        let json = r#"
            {
                "departureAirports": ["London Heathrow (LHR)"],
                "destination": "Paris",
                "tripType": "return",
                "departureDate": "2025-06-01",
                "returnDate": "2025-06-08",
                "currency": "€",
                "numResults": 5
            }
        "#;
        let req: SearchRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(req.departure_airports.len(), 1);
        assert_eq!(req.trip_type, Some(TripType::Return));
        assert_eq!(req.num_results, Some(5));
        assert_eq!(req.currency.as_deref(), Some("€"));
        assert!(req.additional_info.is_none());
    }

    #[test]
    fn test_search_request_defaults_missing_fields() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.departure_airports.is_empty());
        assert!(req.departure_date.is_none());
    }

    #[test]
    fn test_duration_accepts_string_or_number() {
        let req: SearchRequest =
            serde_json::from_str(r#"{ "duration": "7" }"#).unwrap();
        assert_eq!(req.duration, Some(7));
        let req: SearchRequest = serde_json::from_str(r#"{ "duration": 4 }"#).unwrap();
        assert_eq!(req.duration, Some(4));
        let req: SearchRequest =
            serde_json::from_str(r#"{ "duration": "soon" }"#).unwrap();
        assert_eq!(req.duration, None);
    }

    #[test]
    fn test_flight_offer_wire_format() {
        let offer = FlightOffer {
            id: "flight-0".to_string(),
            airline: "British Airways".to_string(),
            route: "London Heathrow to Paris".to_string(),
            time: "08:14 - 11:14".to_string(),
            price: 187,
            travel_class: TravelClass::PremiumEconomy,
            duration: "3h 20m".to_string(),
        };
        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(json["class"], "Premium Economy");
        assert_eq!(json["price"], 187);
    }
}
