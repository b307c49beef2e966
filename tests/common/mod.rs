#![allow(dead_code)]

use chrono::Duration;
use std::sync::Arc;
use tinylink::application::services::{ResolveService, ShortenService, ShortenSettings};
use tinylink::domain::repositories::CounterRepository;
use tinylink::infrastructure::persistence::{
    MemoryCounterRepository, MemoryShortRecordRepository,
};
use tinylink::state::AppState;
use tinylink::utils::encoding::Alphabet;

pub const BASE_URL: &str = "https://s.test";

/// Application state wired against in-memory repositories, with direct
/// handles to the repositories for seeding and assertions.
pub struct TestContext {
    pub state: AppState,
    pub records: Arc<MemoryShortRecordRepository>,
    pub counter: Arc<MemoryCounterRepository>,
}

pub async fn create_test_state() -> TestContext {
    create_test_state_with_expiry(None).await
}

pub async fn create_test_state_with_expiry(default_expiry: Option<Duration>) -> TestContext {
    let records = Arc::new(MemoryShortRecordRepository::new());
    let counter = Arc::new(MemoryCounterRepository::new());
    counter.ensure_initialized(0).await.unwrap();

    let settings = ShortenSettings {
        alphabet: Alphabet::base62(),
        min_code_length: 4,
        base_url: BASE_URL.to_string(),
        default_expiry,
    };

    let shorten_service = Arc::new(ShortenService::new(
        records.clone(),
        counter.clone(),
        settings,
    ));
    let resolve_service = Arc::new(ResolveService::new(records.clone()));

    let state = AppState::new(shorten_service, resolve_service, records.clone());

    TestContext {
        state,
        records,
        counter,
    }
}
