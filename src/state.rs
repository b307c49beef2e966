use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::domain::repositories::ShortRecordRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
    /// Kept alongside the services for the health endpoint's storage probe.
    pub records: Arc<dyn ShortRecordRepository>,
}

impl AppState {
    pub fn new(
        shorten_service: Arc<ShortenService>,
        resolve_service: Arc<ResolveService>,
        records: Arc<dyn ShortRecordRepository>,
    ) -> Self {
        Self {
            shorten_service,
            resolve_service,
            records,
        }
    }
}
