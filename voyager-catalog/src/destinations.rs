use serde::{Deserialize, Serialize};
use voyager_core::currency::Currency;

/// Pre-baked single-option trip record for the legacy simple flow. The
/// generated planning core does not depend on these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripData {
    pub city: String,
    pub country: String,
    pub img: String,
    pub flights: CatalogFlight,
    pub hotel: CatalogHotel,
    pub currency: Currency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFlight {
    pub airline: String,
    pub time: String,
    pub price: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogHotel {
    pub name: String,
    pub rating: String,
    pub price: i32,
}

/// Known city slugs, in catalog order.
pub fn slugs() -> &'static [&'static str] {
    &["london", "paris", "newyork"]
}

/// Read-only lookup keyed by city slug.
pub fn lookup(slug: &str) -> Option<TripData> {
    let record = match slug {
        "london" => TripData {
            city: "London".to_string(),
            country: "United Kingdom".to_string(),
            img: "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad?auto=format&fit=crop&w=100&q=80".to_string(),
            flights: CatalogFlight {
                airline: "British Airways".to_string(),
                time: "08:45 - 10:00".to_string(),
                price: 120,
            },
            hotel: CatalogHotel {
                name: "The Hoxton, Southwark".to_string(),
                rating: "4.8".to_string(),
                price: 210,
            },
            currency: Currency::Gbp,
        },
        "paris" => TripData {
            city: "Paris".to_string(),
            country: "France".to_string(),
            img: "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?auto=format&fit=crop&w=100&q=80".to_string(),
            flights: CatalogFlight {
                airline: "Air France".to_string(),
                time: "10:30 - 13:15".to_string(),
                price: 185,
            },
            hotel: CatalogHotel {
                name: "CitizenM Gare de Lyon".to_string(),
                rating: "4.6".to_string(),
                price: 195,
            },
            currency: Currency::Eur,
        },
        "newyork" => TripData {
            city: "New York".to_string(),
            country: "USA".to_string(),
            img: "https://images.unsplash.com/photo-1496442226666-8d4a0e2907eb?auto=format&fit=crop&w=100&q=80".to_string(),
            flights: CatalogFlight {
                airline: "Virgin Atlantic".to_string(),
                time: "11:00 - 14:30".to_string(),
                price: 540,
            },
            hotel: CatalogHotel {
                name: "Arlo NoMad".to_string(),
                rating: "4.5".to_string(),
                price: 280,
            },
            currency: Currency::Usd,
        },
        _ => return None,
    };

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_slugs_resolve() {
        for slug in slugs() {
            assert!(lookup(slug).is_some(), "missing catalog entry {}", slug);
        }
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert!(lookup("atlantis").is_none());
    }

    #[test]
    fn test_paris_record() {
        let paris = lookup("paris").unwrap();
        assert_eq!(paris.city, "Paris");
        assert_eq!(paris.currency, Currency::Eur);
        assert_eq!(paris.flights.airline, "Air France");
        assert_eq!(paris.hotel.price, 195);
    }
}
