use crate::app_config::Settings;
use std::sync::{Arc, Mutex};
use voyager_core::random::{RandomSource, ThreadRandom};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    /// Shared randomness for offer synthesis; tests inject a seeded source.
    pub rng: Arc<Mutex<Box<dyn RandomSource>>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_random(settings, Box::new(ThreadRandom))
    }

    pub fn with_random(settings: Settings, rng: Box<dyn RandomSource>) -> Self {
        Self {
            settings,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
