//! First-match scenario evaluation.

use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::error::RenderError;
use crate::scenario::Scenario;

/// Immutable, ordered scenario table.
///
/// Table order is the only priority: the first scenario whose action scope
/// and conditions match wins. Evaluation holds no state between calls, so a
/// single engine can be shared behind an `Arc` by concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ScenarioEngine {
    scenarios: Vec<Scenario>,
}

impl ScenarioEngine {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// The first scenario in table order that applies to `action` and whose
    /// conditions hold for `context` on `today`.
    pub fn find_match(&self, action: &str, context: &Value, today: NaiveDate) -> Option<&Scenario> {
        self.scenarios
            .iter()
            .filter(|scenario| scenario.action.applies_to(action))
            .find(|scenario| scenario.matches(context, today))
    }

    /// Evaluate against the local calendar date.
    ///
    /// `Ok(None)` means no scenario matched and the caller should fall back to
    /// its default response.
    pub fn evaluate(&self, action: &str, context: &Value) -> Result<Option<String>, RenderError> {
        self.evaluate_on(action, context, Local::now().date_naive())
    }

    pub fn evaluate_on(
        &self,
        action: &str,
        context: &Value,
        today: NaiveDate,
    ) -> Result<Option<String>, RenderError> {
        let Some(scenario) = self.find_match(action, context, today) else {
            tracing::debug!(action, "no scenario matched");
            return Ok(None);
        };

        tracing::debug!(action, scenario = %scenario.name, "scenario matched");
        match scenario.template.render(context) {
            Ok(message) => Ok(Some(message)),
            Err(e) => {
                tracing::warn!(
                    action,
                    scenario = %scenario.name,
                    error = %e,
                    "matched scenario failed to render"
                );
                Err(e)
            }
        }
    }
}
