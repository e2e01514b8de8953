//! Support desk database agent.
//!
//! Serves the five support actions over HTTP. Each action reads the customer
//! database and lets the process flow scenario table decide the reply.

pub mod card;
pub mod config;
pub mod db;
pub mod error;
pub mod mock;
pub mod registry;
pub mod routes;
pub mod state;
pub mod store;
pub mod tools;
pub mod types;

pub use config::DbAgentConfig;
pub use db::SqliteStore;
pub use mock::MemoryStore;
pub use registry::ToolRegistry;
pub use routes::build_router;
pub use state::AppState;
pub use store::{StoreError, StoreResult, SupportStore};
pub use tools::{SupportTool, ToolContext, ToolError};
