//! Keyword intent parser: word patterns plus id extraction.
//!
//! Always available and free. Used alone when the model tier is disabled and
//! as the fallback when the model cannot answer.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use sd_protocol::{ActionParameters, ParsedIntent, SupportAction};

use super::{IntentParser, ParseResult};

static ORDER_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bORD\d+\b").unwrap());
static SUBSCRIPTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSUB\d+\b").unwrap());
static CUSTOMER_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bC\d+\b").unwrap());

/// Confidence reported for keyword matches.
const KEYWORD_CONFIDENCE: f64 = 0.6;

pub struct KeywordParser;

impl KeywordParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntentParser for KeywordParser {
    async fn parse(&self, text: &str) -> Option<ParseResult> {
        parse_message(text).map(|intent| ParseResult {
            intent,
            tier: "keywords".into(),
        })
    }

    fn tier_name(&self) -> &str {
        "keywords"
    }
}

fn parse_message(text: &str) -> Option<ParsedIntent> {
    let lower = text.to_lowercase();
    let lower = lower.trim();

    let action = if lower.contains("cancel") && lower.contains("sub") {
        SupportAction::CancelService
    } else if matches_any(lower, &["renew", "expire", "subscription status"]) {
        SupportAction::SubscriptionStatus
    } else if matches_any(lower, &["support", "help"]) {
        SupportAction::SupportRequest
    } else if lower.contains("my orders") {
        SupportAction::GetCustomerOrders
    } else if lower.contains("order") || ORDER_ID.is_match(text) {
        SupportAction::GetOrderStatus
    } else {
        return None;
    };

    Some(ParsedIntent {
        action,
        parameters: extract_ids(text),
        confidence: KEYWORD_CONFIDENCE,
    })
}

/// Pull order, subscription and customer ids out of free text, upper-cased.
pub fn extract_ids(text: &str) -> ActionParameters {
    let find = |re: &Regex| re.find(text).map(|m| m.as_str().to_uppercase());
    ActionParameters {
        order_id: find(&ORDER_ID),
        customer_id: find(&CUSTOMER_ID),
        subscription_id: find(&SUBSCRIPTION_ID),
    }
}

fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
