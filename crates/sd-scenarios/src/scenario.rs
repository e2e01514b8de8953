use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::path::FieldPath;
use crate::predicate::Predicate;
use crate::template::Template;

/// Action value that makes a scenario apply to every action.
pub const ANY_ACTION: &str = "any";

/// Key inside `conditions` that carries the action scope.
const ACTION_KEY: &str = "action";

/// Which actions a scenario participates in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionScope {
    Any,
    Named(String),
}

impl ActionScope {
    pub fn applies_to(&self, action: &str) -> bool {
        match self {
            ActionScope::Any => true,
            ActionScope::Named(name) => name == action,
        }
    }
}

/// One `path: predicate` entry of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub path: FieldPath,
    pub predicate: Predicate,
}

impl Condition {
    /// An unresolvable path leaves the condition unsatisfied.
    pub fn is_satisfied(&self, context: &Value, today: NaiveDate) -> bool {
        self.path
            .resolve(context)
            .is_some_and(|value| self.predicate.matches(value, today))
    }
}

/// A loaded scenario: action scope, AND-ed conditions and a response template.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Label used in logs. Taken from the document's `id`, else `#<index>`.
    pub name: String,
    pub action: ActionScope,
    pub conditions: Vec<Condition>,
    pub template: Template,
}

impl Scenario {
    /// Whether every condition holds. An empty condition set always holds.
    pub fn matches(&self, context: &Value, today: NaiveDate) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.is_satisfied(context, today))
    }
}

/// Scenario as written in the rule document.
#[derive(Debug, Deserialize)]
pub(crate) struct RawScenario {
    #[serde(default)]
    id: Option<String>,
    conditions: Map<String, Value>,
    response_template: String,
}

impl RawScenario {
    pub(crate) fn into_scenario(self, index: usize) -> Result<Scenario, LoadError> {
        let mut conditions = self.conditions;

        let action = match conditions.remove(ACTION_KEY) {
            Some(Value::String(name)) if name == ANY_ACTION => ActionScope::Any,
            Some(Value::String(name)) if !name.is_empty() => ActionScope::Named(name),
            Some(other) => {
                return Err(LoadError::invalid(
                    index,
                    format!("`conditions.action` must be a non-empty string, found {other}"),
                ));
            }
            None => {
                return Err(LoadError::invalid(
                    index,
                    "`conditions.action` is required (use \"any\" for every action)",
                ));
            }
        };

        let conditions = conditions
            .into_iter()
            .map(|(key, raw)| {
                let path = FieldPath::parse(&key).ok_or_else(|| {
                    LoadError::invalid(index, format!("invalid field path `{key}`"))
                })?;
                let predicate = Predicate::from_value(&raw)
                    .map_err(|reason| LoadError::invalid(index, format!("`{key}`: {reason}")))?;
                Ok(Condition { path, predicate })
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        let template = Template::parse(&self.response_template).map_err(|e| {
            LoadError::invalid(index, format!("`response_template`: {e}"))
        })?;

        Ok(Scenario {
            name: self.id.unwrap_or_else(|| format!("#{index}")),
            action,
            conditions,
            template,
        })
    }
}
