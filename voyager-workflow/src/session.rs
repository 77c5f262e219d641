use crate::progress::{ProgressTicker, SEARCH_MESSAGES, SEARCH_MESSAGE_INTERVAL};
use crate::state::{Action, TripWorkflow, WorkflowError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;
use voyager_core::models::{ResultSet, SearchRequest};
use voyager_core::random::RandomSource;
use voyager_offer::{ItineraryPlanner, PlanError};

/// Message shown to the user when a generation round-trip fails.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate itinerary. Please try again.";

/// The asynchronous collaborator the workflow talks to. Errors are already
/// user-facing strings; the session stores them verbatim.
#[async_trait]
pub trait Planner: Send + Sync {
    async fn plan(&self, request: SearchRequest) -> Result<ResultSet, String>;
}

/// In-process planner backed by the offer generation engine.
pub struct OfferPlanner {
    rng: StdMutex<Box<dyn RandomSource>>,
}

impl OfferPlanner {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng: StdMutex::new(rng),
        }
    }
}

#[async_trait]
impl Planner for OfferPlanner {
    async fn plan(&self, request: SearchRequest) -> Result<ResultSet, String> {
        let mut rng = self.rng.lock().map_err(|_| GENERATION_FAILED_MESSAGE.to_string())?;
        ItineraryPlanner::plan(&request, rng.as_mut()).map_err(|e: PlanError| {
            if let Some(detail) = e.detail() {
                tracing::error!(%detail, "Itinerary generation failed");
            }
            GENERATION_FAILED_MESSAGE.to_string()
        })
    }
}

/// Drives one user session: owns the workflow state machine, runs the
/// asynchronous planner round-trip, and scopes the progress ticker to the
/// loading state.
///
/// At most one outstanding generation request is meaningful at a time; a new
/// `generate` supersedes the previous one and the stale response is dropped
/// by the workflow's generation token. No retries: a failed call surfaces as
/// the error state until the user generates again.
pub struct TripSession {
    id: Uuid,
    planner: Arc<dyn Planner>,
    workflow: Arc<Mutex<TripWorkflow>>,
    progress: Option<watch::Receiver<String>>,
    in_flight: Option<JoinHandle<()>>,
    ticker_interval: Duration,
}

impl TripSession {
    pub fn new(planner: Arc<dyn Planner>) -> Self {
        Self {
            id: Uuid::new_v4(),
            planner,
            workflow: Arc::new(Mutex::new(TripWorkflow::new())),
            progress: None,
            in_flight: None,
            ticker_interval: SEARCH_MESSAGE_INTERVAL,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn with_ticker_interval(mut self, interval: Duration) -> Self {
        self.ticker_interval = interval;
        self
    }

    /// Kick off a search. Clears prior results, enters loading, and resolves
    /// asynchronously; await [`TripSession::settled`] to observe the outcome.
    pub async fn generate(&mut self, request: SearchRequest) {
        let generation = {
            let mut wf = self.workflow.lock().await;
            // Generate is always legal; it supersedes any in-flight request.
            let _ = wf.apply(Action::Generate(request.clone()));
            wf.generation()
        };
        tracing::debug!(session = %self.id, generation, "Starting itinerary search");

        // Ticker is scoped to this loading state; the previous one (if any)
        // is torn down with the superseded task.
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        let ticker = ProgressTicker::start(&SEARCH_MESSAGES, self.ticker_interval);
        self.progress = Some(ticker.subscribe());

        let planner = self.planner.clone();
        let workflow = self.workflow.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = planner.plan(request).await;
            let mut wf = workflow.lock().await;
            let _ = wf.apply(Action::Resolve { generation, outcome });
            // Dropping the ticker here stops ticks the moment we leave
            // loading.
            drop(ticker);
        }));
    }

    /// Wait for the current round-trip, if any, to land.
    pub async fn settled(&mut self) {
        if let Some(task) = self.in_flight.take() {
            let _ = task.await;
        }
        self.progress = None;
    }

    /// Current loading message, when a search is in flight.
    pub fn progress_message(&self) -> Option<String> {
        self.progress.as_ref().map(|rx| rx.borrow().clone())
    }

    pub async fn select_flight(&self, id: &str) -> Result<(), WorkflowError> {
        self.workflow.lock().await.apply(Action::SelectFlight(id.to_string()))
    }

    pub async fn select_hotel(&self, id: &str) -> Result<(), WorkflowError> {
        self.workflow.lock().await.apply(Action::SelectHotel(id.to_string()))
    }

    pub async fn book(&self) -> Result<(), WorkflowError> {
        self.workflow.lock().await.apply(Action::Book)
    }

    pub async fn reset(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        self.progress = None;
        let _ = self.workflow.lock().await.apply(Action::Reset);
    }

    /// Read access to the workflow state.
    pub async fn inspect<R>(&self, read: impl FnOnce(&TripWorkflow) -> R) -> R {
        read(&*self.workflow.lock().await)
    }
}
