//! Customer-facing support agent.
//!
//! Parses free-text messages into support actions, calls the database agent
//! and phrases its answers, remembering the customer across turns.

pub mod agent;
pub mod client;
pub mod config;
pub mod inference;
pub mod session;

pub use agent::SupportAgent;
pub use client::{ClientError, DbAgentClient};
pub use config::AgentConfig;
pub use session::Session;
