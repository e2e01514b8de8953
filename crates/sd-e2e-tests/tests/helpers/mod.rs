//! Shared harness: a real database agent served on a local port with an
//! in-memory store, and support agents pointed at it.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use sd_db_agent::{AppState, MemoryStore, build_router};
use sd_scenarios::ScenarioEngine;
use sd_support_agent::inference::{IntentParser, KeywordParser};
use sd_support_agent::{DbAgentClient, SupportAgent};

/// The process flow shipped in `scenarios/`.
pub fn shipped_scenarios() -> ScenarioEngine {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenarios/process_flow.json");
    sd_scenarios::load_file(path).unwrap()
}

pub struct TestHarness {
    /// The store behind the database agent, for asserting side effects.
    pub store: Arc<MemoryStore>,
    pub base_url: String,
    server: JoinHandle<()>,
}

impl TestHarness {
    pub async fn start() -> Self {
        Self::start_with(shipped_scenarios()).await
    }

    pub async fn start_with(scenarios: ScenarioEngine) -> Self {
        let store = Arc::new(MemoryStore::with_sample_data());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let state = AppState::new(store.clone(), scenarios, base_url.clone());
        let app = build_router(state);
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            store,
            base_url,
            server,
        }
    }

    pub fn client(&self) -> DbAgentClient {
        DbAgentClient::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }

    /// Support agent using keyword parsing only.
    pub fn agent(&self) -> SupportAgent {
        self.agent_with(Box::new(KeywordParser::new()))
    }

    pub fn agent_with(&self, parser: Box<dyn IntentParser>) -> SupportAgent {
        SupportAgent::new(parser, self.client())
    }
}

impl Drop for TestHarness {
    fn drop(&mut self) {
        self.server.abort();
    }
}
