//! Error handling for the Firmdex server

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use firmdex::RegistryError;

/// Reason prepended to the evaluator's reasons when the gate rejects a company
const NOT_RELEVANT_MESSAGE: &str = "Company name is not relevant to website URL.";

/// Structured validation response: `{message, errors: {field -> [messages]}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: HashMap<String, Vec<String>>,
}

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    /// Validation error, field-keyed
    #[error("validation failed")]
    Validation { errors: HashMap<String, Vec<String>> },

    /// Not found error
    #[error("{0} with id '{1}' not found")]
    NotFound(&'static str, String),

    /// Internal server error
    #[error("internal server error: {0}")]
    Internal(String),
}

impl From<RegistryError> for ServerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Validation(errors) => ServerError::Validation {
                errors: HashMap::from([("company".to_string(), errors)]),
            },
            RegistryError::NotRelevant(evaluation) => {
                let mut reasons = vec![NOT_RELEVANT_MESSAGE.to_string()];
                reasons.extend(evaluation.reasons);
                ServerError::Validation {
                    errors: HashMap::from([("company".to_string(), reasons)]),
                }
            }
            // Contract violations and storage failures are defects, not
            // user-facing validation messages.
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    message: "Validation failed.".to_string(),
                    errors,
                }),
            )
                .into_response(),
            ServerError::NotFound(..) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({ "message": self.to_string() })))
                    .into_response()
            }
            ServerError::Internal(ref details) => {
                error!(details = %details, "unhandled server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "message": "An unexpected error occurred." })),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

/// Helper function to create a not found error
pub fn not_found(resource: &'static str, id: impl Into<String>) -> ServerError {
    ServerError::NotFound(resource, id.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmdex::relevance::RelevanceEvaluation;

    #[test]
    fn registry_validation_maps_to_company_keyed_errors() {
        let err: ServerError =
            RegistryError::Validation(vec!["Company name is required.".to_string()]).into();

        match err {
            ServerError::Validation { errors } => {
                assert_eq!(errors["company"], vec!["Company name is required.".to_string()]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn not_relevant_prepends_synthetic_reason() {
        let evaluation = RelevanceEvaluation {
            is_relevant: false,
            score: 0.0,
            reasons: vec!["No meaningful token overlap between company name and website domain."
                .to_string()],
        };
        let err: ServerError = RegistryError::NotRelevant(evaluation).into();

        match err {
            ServerError::Validation { errors } => {
                let reasons = &errors["company"];
                assert_eq!(reasons[0], NOT_RELEVANT_MESSAGE);
                assert_eq!(reasons.len(), 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
