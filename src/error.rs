//! Error types shared by the menu domain, the REST handlers and the MCP tools.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// A rejected dish draft. Each variant names the first field that failed.
///
/// The `Display` text is the message shown to the user; [`ValidationError::title`]
/// is the heading of the dialog that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a course type before adding a dish.")]
    CourseNotSelected,

    #[error("Please enter the dish name.")]
    MissingName,

    #[error("Please describe your dish.")]
    MissingDescription,

    #[error("Please enter the dish price.")]
    MissingPrice,

    #[error("Please enter a valid price for the dish.")]
    InvalidPrice,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CourseNotSelected => "Selection Required",
            Self::MissingName | Self::MissingDescription | Self::MissingPrice => {
                "Missing Information"
            }
            Self::InvalidPrice => "Invalid Price",
        }
    }

    /// Wire name of the offending draft field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::CourseNotSelected => "courseType",
            Self::MissingName => "dishName",
            Self::MissingDescription => "dishDescription",
            Self::MissingPrice | Self::InvalidPrice => "dishPrice",
        }
    }
}

/// Failure of an MCP `tools/call` request.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error("{}: {}", .0.title(), .0)]
    Validation(#[from] ValidationError),
}

/// Error body returned by the REST surface.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": {
                        "title": err.title(),
                        "message": err.to_string(),
                        "field": err.field(),
                    }
                }),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": {
                        "title": "Bad Request",
                        "message": message,
                        "field": null,
                    }
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_group_missing_fields() {
        assert_eq!(ValidationError::CourseNotSelected.title(), "Selection Required");
        assert_eq!(ValidationError::MissingName.title(), "Missing Information");
        assert_eq!(ValidationError::MissingPrice.title(), "Missing Information");
        assert_eq!(ValidationError::InvalidPrice.title(), "Invalid Price");
    }

    #[test]
    fn tool_error_carries_validation_title() {
        let err = ToolError::from(ValidationError::InvalidPrice);
        assert_eq!(
            err.to_string(),
            "Invalid Price: Please enter a valid price for the dish."
        );
    }

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let response = ApiError::from(ValidationError::MissingName).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
