//! Scenario engine error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the scenario table. All of them are fatal at
/// startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read scenarios from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenarios from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("scenario document from {origin} must be an array or an object with a \"scenarios\" array")]
    Shape { origin: String },

    #[error("scenario #{index} is invalid: {reason}")]
    InvalidScenario { index: usize, reason: String },
}

impl LoadError {
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into().display().to_string(),
            source,
        }
    }

    pub fn invalid(index: usize, reason: impl Into<String>) -> Self {
        LoadError::InvalidScenario {
            index,
            reason: reason.into(),
        }
    }
}

/// Malformed template text, detected when the template is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at byte {offset}")]
    Unclosed { offset: usize },

    #[error("unmatched '}}' at byte {offset}")]
    UnmatchedClose { offset: usize },

    #[error("invalid placeholder {{{0}}}")]
    InvalidPlaceholder(String),
}

/// A template could not be rendered against the supplied context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("placeholder {{{placeholder}}} could not be resolved against the context")]
    Unresolved { placeholder: String },

    #[error("placeholder {{{placeholder}}} resolves to a nested value, not a scalar")]
    NotScalar { placeholder: String },

    #[error("malformed template: {0}")]
    Syntax(#[from] TemplateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_names_placeholder() {
        let err = RenderError::Unresolved {
            placeholder: "customer.name".into(),
        };
        assert_eq!(
            err.to_string(),
            "placeholder {customer.name} could not be resolved against the context"
        );
    }

    #[test]
    fn invalid_scenario_message() {
        let err = LoadError::invalid(3, "missing field `response_template`");
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("response_template"));
    }
}
