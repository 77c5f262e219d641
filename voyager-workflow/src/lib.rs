pub mod progress;
pub mod session;
pub mod state;
pub mod total;

pub use session::{OfferPlanner, Planner, TripSession};
pub use state::{Action, Selection, Status, TripDetails, TripWorkflow, WorkflowError};
