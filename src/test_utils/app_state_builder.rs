//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistStore, WaitlistUseCases},
    infra::config::{AppConfig, StoreBackend},
    test_utils::InMemoryWaitlistStore,
};

/// Config equivalent to an empty environment, with assets resolved from the
/// crate root so tests do not depend on the working directory.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        store_backend: StoreBackend::Postgres,
        database_url: None,
        supabase_url: None,
        supabase_anon_key: None,
        contact_email: "contact@shiftly.com".to_string(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        log_file: std::env::temp_dir().join("shiftly-waitlist-test.log"),
    }
}

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// ```ignore
/// let store = Arc::new(InMemoryWaitlistStore::with_emails(&["dup@x.com"]));
/// let app_state = TestAppStateBuilder::new().with_store(store.clone()).build();
/// ```
pub struct TestAppStateBuilder {
    config: AppConfig,
    store: Arc<dyn WaitlistStore>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            config: test_config(),
            store: Arc::new(InMemoryWaitlistStore::new()),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn WaitlistStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_contact_email(mut self, email: &str) -> Self {
        self.config.contact_email = email.to_string();
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(self.config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.store)),
        }
    }
}
