//! Tiered parser: model first, keywords as the fallback.

use async_trait::async_trait;

use super::{IntentParser, ParseResult};

pub struct TieredParser {
    primary: Box<dyn IntentParser>,
    fallback: Box<dyn IntentParser>,
}

impl TieredParser {
    pub fn new(primary: Box<dyn IntentParser>, fallback: Box<dyn IntentParser>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl IntentParser for TieredParser {
    async fn parse(&self, text: &str) -> Option<ParseResult> {
        if let Some(result) = self.primary.parse(text).await {
            return Some(result);
        }

        tracing::debug!(
            primary = self.primary.tier_name(),
            fallback = self.fallback.tier_name(),
            "primary parser missed, falling back"
        );
        self.fallback.parse(text).await
    }

    fn tier_name(&self) -> &str {
        "tiered"
    }
}
