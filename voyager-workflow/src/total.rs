use chrono::NaiveDate;
use voyager_core::models::TripType;

/// Stay length used when no usable return date is available.
pub const DEFAULT_NIGHTS: i64 = 7;

/// Number of hotel nights for a trip.
///
/// Return trips with parseable dates use the calendar-day difference;
/// everything else (one-way trips, missing or malformed dates) uses the
/// requested fallback duration, defaulting to seven nights.
pub fn nights(
    trip_type: Option<TripType>,
    departure_date: &str,
    return_date: Option<&str>,
    fallback: Option<u32>,
) -> i64 {
    if trip_type == Some(TripType::Return) {
        if let (Ok(dep), Some(Ok(ret))) = (
            NaiveDate::parse_from_str(departure_date, "%Y-%m-%d"),
            return_date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d")),
        ) {
            let days = (ret - dep).num_days();
            if days > 0 {
                return days;
            }
        }
    }

    fallback.map(i64::from).unwrap_or(DEFAULT_NIGHTS)
}

/// Total trip cost: flight price plus hotel per-night price times nights.
/// Derived on every read, never stored.
pub fn trip_total(flight_price: i32, hotel_price: i32, nights: i64) -> i32 {
    flight_price + hotel_price * nights as i32
}
