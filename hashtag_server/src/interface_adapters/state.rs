use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::{Clock, VideoCatalog};
use crate::use_cases::TrendingSettings;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub catalog: Arc<dyn VideoCatalog>,
    pub clock: Arc<dyn Clock>,
    pub settings: TrendingSettings,
}

// System clock adapter used by the trending use case.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
