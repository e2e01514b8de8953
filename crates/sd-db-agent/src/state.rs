//! Shared application state for the Axum server.

use std::sync::Arc;

use sd_scenarios::ScenarioEngine;

use crate::mock::MemoryStore;
use crate::registry::ToolRegistry;
use crate::store::SupportStore;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SupportStore>,
    /// Process flow, loaded once at startup.
    pub scenarios: Arc<ScenarioEngine>,
    pub registry: Arc<ToolRegistry>,
    /// Base URL advertised on the agent card.
    pub public_url: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SupportStore>,
        scenarios: ScenarioEngine,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            scenarios: Arc::new(scenarios),
            registry: Arc::new(ToolRegistry::with_defaults()),
            public_url: public_url.into(),
        }
    }

    /// In-memory state with the demo records, for tests and development.
    pub fn with_sample_data(scenarios: ScenarioEngine) -> Self {
        Self::new(
            Arc::new(MemoryStore::with_sample_data()),
            scenarios,
            "http://127.0.0.1:8000",
        )
    }
}
