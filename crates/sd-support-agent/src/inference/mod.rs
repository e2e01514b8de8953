//! Natural-language intent parsing.
//!
//! Converts a customer message ("where is my order ORD001?") into a
//! `ParsedIntent` naming one of the five support actions and the ids found
//! in the text.
//!
//! Two tiers:
//! - **Ollama** (model): a local LLM asked to answer in JSON.
//! - **Keywords** (local): word and id patterns, used when the model is
//!   disabled, unreachable or unsure.

pub mod keywords;
pub mod ollama;
pub mod tiered;

use async_trait::async_trait;
use sd_protocol::ParsedIntent;

/// Parsed intent plus the tier that produced it.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub intent: ParsedIntent,
    pub tier: String,
}

#[async_trait]
pub trait IntentParser: Send + Sync {
    /// Returns `None` if this parser cannot make sense of the message.
    async fn parse(&self, text: &str) -> Option<ParseResult>;

    /// Name of this tier, for logging.
    fn tier_name(&self) -> &str;
}

pub use keywords::KeywordParser;
pub use ollama::{OllamaConfig, OllamaParser};
pub use tiered::TieredParser;
