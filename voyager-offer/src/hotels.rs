use voyager_core::currency::{convert, Currency};
use voyager_core::models::HotelOffer;
use voyager_core::random::RandomSource;

/// Fixed hotel name catalog, cycled by generation index.
pub const HOTEL_NAMES: [&str; 10] = [
    "CitizenM Hotel",
    "Premier Inn",
    "Holiday Inn Express",
    "Hilton Garden Inn",
    "Marriott Hotel",
    "Radisson Blu",
    "Novotel",
    "Ibis Styles",
    "Mercure Hotel",
    "DoubleTree by Hilton",
];

pub const LOCATIONS: [&str; 5] = [
    "City Center",
    "Near Station",
    "Business District",
    "Historic Quarter",
    "Waterfront",
];

pub const AMENITIES: [&str; 5] = ["WiFi", "Breakfast", "Air Conditioning", "24h Reception", "Gym"];

const HOTEL_IMG: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=400&q=80";

/// Synthesize exactly `n` per-night hotel offers.
///
/// The base price climbs 15 GBP per generation index, so later-generated
/// hotels are deliberately pricier before conversion. Ratings land in
/// [4.0, 5.0] with one fractional digit.
pub fn generate_hotels(
    destination: &str,
    currency: Currency,
    n: u32,
    rng: &mut dyn RandomSource,
) -> Vec<HotelOffer> {
    let mut hotels = Vec::with_capacity(n as usize);

    for i in 0..n as usize {
        let name = HOTEL_NAMES[i % HOTEL_NAMES.len()];
        let location = LOCATIONS[i % LOCATIONS.len()];

        let base_price = 80.0 + 15.0 * i as f64;
        let price = convert(base_price, currency).round() as i32;

        let rating = ((4.0 + rng.unit()) * 10.0).round() / 10.0;
        let amenity_count = rng.range_u32(3, 6) as usize;

        hotels.push(HotelOffer {
            id: format!("hotel-{}", i),
            name: format!("{} {}", name, destination),
            location: location.to_string(),
            rating,
            price,
            amenities: AMENITIES[..amenity_count].iter().map(|a| a.to_string()).collect(),
            img: HOTEL_IMG.to_string(),
        });
    }

    hotels
}
