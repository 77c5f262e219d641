use voyager_core::currency::{convert, Currency};
use voyager_core::models::{FlightOffer, TravelClass};
use voyager_core::random::RandomSource;

/// Fixed airline catalog, cycled by generation index.
pub const AIRLINES: [&str; 8] = [
    "British Airways",
    "easyJet",
    "Ryanair",
    "Lufthansa",
    "Air France",
    "KLM",
    "Emirates",
    "Virgin Atlantic",
];

/// Cabin tier for a given generation index.
///
/// Tiering is a function of generation order, not of price: the first six
/// offers are always Economy and positions 6-7 Premium Economy, so a result
/// set always carries at least six economy options before any business one.
fn class_for_index(i: usize) -> TravelClass {
    if i < 6 {
        TravelClass::Economy
    } else if i < 8 {
        TravelClass::PremiumEconomy
    } else {
        TravelClass::Business
    }
}

/// Display name of an airport entry: the free text before any "(IATA)" code.
fn airport_display_name(airport: &str) -> &str {
    airport.split('(').next().unwrap_or(airport).trim()
}

/// Synthesize exactly `n` priced flight offers.
///
/// Departure airports are round-robined so every selected airport appears
/// roughly n / len(airports) times. Prices are the tier base fare perturbed
/// by a uniform [-50, +50) offset, converted, then rounded once here.
pub fn generate_flights(
    departure_airports: &[String],
    destination: &str,
    currency: Currency,
    n: u32,
    rng: &mut dyn RandomSource,
) -> Vec<FlightOffer> {
    let mut flights = Vec::with_capacity(n as usize);

    for i in 0..n as usize {
        let airport = &departure_airports[i % departure_airports.len()];
        let airline = AIRLINES[i % AIRLINES.len()];
        let travel_class = class_for_index(i);

        let base_price = travel_class.base_price() + rng.range_f64(-50.0, 50.0);
        let price = convert(base_price, currency).round() as i32;

        let hour = rng.range_u32(6, 18);
        let minute = rng.range_u32(0, 60);
        let duration_hours = rng.range_u32(2, 5);
        let duration_minutes = rng.range_u32(0, 60);

        flights.push(FlightOffer {
            id: format!("flight-{}", i),
            airline: airline.to_string(),
            route: format!("{} to {}", airport_display_name(airport), destination),
            time: format!(
                "{:02}:{:02} - {:02}:{:02}",
                hour,
                minute,
                (hour + duration_hours) % 24,
                minute
            ),
            price,
            travel_class,
            duration: format!("{}h {}m", duration_hours, duration_minutes),
        });
    }

    flights
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyager_core::random::{SeededRandom, SequenceRandom};

    fn airports(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generates_exact_count() {
        let aps = airports(&["London Heathrow (LHR)"]);
        for k in [1u32, 5, 10, 20] {
            let mut rng = SeededRandom::new(1);
            let flights = generate_flights(&aps, "Paris", Currency::Gbp, k, &mut rng);
            assert_eq!(flights.len(), k as usize);
        }
    }

    #[test]
    fn test_round_robins_departure_airports() {
        let aps = airports(&["London Heathrow (LHR)", "Manchester (MAN)"]);
        let mut rng = SeededRandom::new(2);
        let flights = generate_flights(&aps, "Paris", Currency::Gbp, 4, &mut rng);
        assert_eq!(flights[0].route, "London Heathrow to Paris");
        assert_eq!(flights[1].route, "Manchester to Paris");
        assert_eq!(flights[2].route, "London Heathrow to Paris");
        assert_eq!(flights[3].route, "Manchester to Paris");
    }

    #[test]
    fn test_class_tiers_follow_generation_order() {
        let aps = airports(&["LHR"]);
        let mut rng = SeededRandom::new(3);
        let flights = generate_flights(&aps, "Paris", Currency::Gbp, 10, &mut rng);
        for (i, f) in flights.iter().enumerate() {
            let expected = match i {
                0..=5 => TravelClass::Economy,
                6 | 7 => TravelClass::PremiumEconomy,
                _ => TravelClass::Business,
            };
            assert_eq!(f.travel_class, expected, "index {}", i);
        }
    }

    #[test]
    fn test_prices_are_positive() {
        let aps = airports(&["LHR"]);
        let mut rng = SeededRandom::new(4);
        let flights = generate_flights(&aps, "Paris", Currency::Gbp, 20, &mut rng);
        assert!(flights.iter().all(|f| f.price > 0));
    }

    #[test]
    fn test_exact_offer_with_scripted_source() {
        // Draws per offer: jitter, hour, minute, duration hours, duration minutes.
        let mut rng = SequenceRandom::new(&[0.5, 0.0, 0.25, 0.0, 0.5]);
        let aps = airports(&["London Heathrow (LHR)"]);
        let flights = generate_flights(&aps, "Paris", Currency::Gbp, 1, &mut rng);
        let f = &flights[0];
        // Economy base 150, zero jitter at draw 0.5.
        assert_eq!(f.price, 150);
        assert_eq!(f.time, "06:15 - 08:15");
        assert_eq!(f.duration, "2h 30m");
        assert_eq!(f.airline, "British Airways");
        assert_eq!(f.id, "flight-0");
    }

    #[test]
    fn test_latest_departure_and_longest_leg() {
        // Highest draws: hour 17, duration 4h. Arrival stays within the day
        // for the [6,18) x [2,5) ranges; the mod-24 wrap is exercised in the
        // formatter regardless.
        let mut rng = SequenceRandom::new(&[0.0, 0.999, 0.0, 0.999, 0.0]);
        let aps = airports(&["LHR"]);
        let flights = generate_flights(&aps, "Paris", Currency::Gbp, 1, &mut rng);
        assert_eq!(flights[0].time, "17:00 - 21:00");
    }

    #[test]
    fn test_currency_conversion_applied_per_offer() {
        let aps = airports(&["LHR"]);
        let mut rng = SequenceRandom::new(&[0.5, 0.0, 0.0, 0.0, 0.0]);
        let gbp = generate_flights(&aps, "Paris", Currency::Gbp, 1, &mut rng);
        let mut rng = SequenceRandom::new(&[0.5, 0.0, 0.0, 0.0, 0.0]);
        let usd = generate_flights(&aps, "Paris", Currency::Usd, 1, &mut rng);
        assert_eq!(gbp[0].price, 150);
        assert_eq!(usd[0].price, 195);
    }
}
