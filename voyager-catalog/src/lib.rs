pub mod destinations;

pub use destinations::{lookup, slugs, CatalogFlight, CatalogHotel, TripData};
