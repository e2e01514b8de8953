//! Scenario table loading.
//!
//! The document is either a bare array of scenarios or an object with a
//! `scenarios` array. Loading is all-or-nothing: one invalid scenario fails
//! the whole table.

use std::path::Path;

use serde_json::Value;

use crate::engine::ScenarioEngine;
use crate::error::LoadError;
use crate::scenario::{RawScenario, Scenario};

/// Read and validate the scenario table at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<ScenarioEngine, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    let engine = parse_document(&contents, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        scenarios = engine.len(),
        "scenario table loaded"
    );
    Ok(engine)
}

/// Validate a scenario table held in memory.
pub fn load_str(source: &str) -> Result<ScenarioEngine, LoadError> {
    parse_document(source, "<inline>")
}

fn parse_document(source: &str, origin: &str) -> Result<ScenarioEngine, LoadError> {
    let document: Value = serde_json::from_str(source).map_err(|e| LoadError::Parse {
        origin: origin.to_string(),
        source: e,
    })?;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("scenarios") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(LoadError::Shape {
                    origin: origin.to_string(),
                });
            }
        },
        _ => {
            return Err(LoadError::Shape {
                origin: origin.to_string(),
            });
        }
    };

    let scenarios = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let raw: RawScenario = serde_json::from_value(item)
                .map_err(|e| LoadError::invalid(index, e.to_string()))?;
            raw.into_scenario(index)
        })
        .collect::<Result<Vec<Scenario>, LoadError>>()?;

    Ok(ScenarioEngine::new(scenarios))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ActionScope;

    const FLOW: &str = r#"{
        "scenarios": [
            {
                "conditions": {"action": "get_order_status", "order.eta_date": {"within_days": 2}},
                "response_template": "Order {order.id} arrives soon."
            },
            {
                "conditions": {"action": "any", "customer.loyalty_tier": "platinum"},
                "response_template": "Welcome back, {customer.name}."
            }
        ]
    }"#;

    #[test]
    fn loads_wrapped_document_in_order() {
        let engine = load_str(FLOW).unwrap();
        assert_eq!(engine.len(), 2);
        let scenarios = engine.scenarios();
        assert_eq!(
            scenarios[0].action,
            ActionScope::Named("get_order_status".into())
        );
        assert_eq!(scenarios[1].action, ActionScope::Any);
    }

    #[test]
    fn loads_bare_array() {
        let engine = load_str(
            r#"[{"conditions": {"action": "any"}, "response_template": "Hello!"}]"#,
        )
        .unwrap();
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn empty_table_is_valid() {
        assert!(load_str(r#"{"scenarios": []}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_fails() {
        let err = load_str("{\"scenarios\": [").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn wrong_shape_fails() {
        assert!(matches!(
            load_str(r#"{"rules": []}"#).unwrap_err(),
            LoadError::Shape { .. }
        ));
        assert!(matches!(
            load_str(r#""scenarios""#).unwrap_err(),
            LoadError::Shape { .. }
        ));
    }

    #[test]
    fn missing_template_fails_with_index() {
        let err = load_str(
            r#"[
                {"conditions": {"action": "any"}, "response_template": "ok"},
                {"conditions": {"action": "any"}}
            ]"#,
        )
        .unwrap_err();
        match err {
            LoadError::InvalidScenario { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("response_template"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_conditions_fails() {
        let err = load_str(r#"[{"response_template": "ok"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidScenario { index: 0, .. }));
    }

    #[test]
    fn missing_file_fails() {
        let err = load_file("/definitely/not/here/process_flow.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "sd-scenarios-loader-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, FLOW).unwrap();
        let engine = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(engine.len(), 2);
    }
}
