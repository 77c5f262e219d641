use voyager_core::models::{FlightOffer, HotelOffer};

/// Ratings this close to the best remaining rating are treated as tied and
/// ordered by price instead.
pub const RATING_TIE_TOLERANCE: f64 = 0.2;

/// Order flights by ascending price. The sort is stable, so equal prices keep
/// their generation order.
pub fn rank_flights(flights: &mut [FlightOffer]) {
    flights.sort_by_key(|f| f.price);
}

/// Order hotels by rating descending, falling back to price ascending inside
/// the tie band. Quality wins first, but a near-identical rating never
/// overrides a materially cheaper option.
///
/// The tolerance relation is not a total order, so this is a repeated band
/// selection rather than a comparator sort: take the best remaining rating,
/// collect everything within the tolerance of it, emit the cheapest. The
/// result satisfies, for every adjacent pair (a, b):
/// rating(a) - rating(b) > tolerance, or price(a) <= price(b).
pub fn rank_hotels(hotels: &mut Vec<HotelOffer>) {
    let mut pool = std::mem::take(hotels);
    let mut ranked = Vec::with_capacity(pool.len());

    while !pool.is_empty() {
        let top = pool.iter().map(|h| h.rating).fold(f64::MIN, f64::max);
        let pick = pool
            .iter()
            .enumerate()
            .filter(|(_, h)| top - h.rating <= RATING_TIE_TOLERANCE)
            .min_by(|(i, a), (j, b)| a.price.cmp(&b.price).then(i.cmp(j)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        ranked.push(pool.remove(pick));
    }

    *hotels = ranked;
}
