pub mod currency;
pub mod models;
pub mod random;

pub use currency::{convert, Currency};
pub use models::{
    FlightOffer, HotelOffer, ResultSet, SearchParams, SearchRequest, TravelClass, TripType,
};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
