pub mod flights;
pub mod hotels;
pub mod planner;
pub mod rank;

pub use planner::{ItineraryPlanner, PlanError};
