//! Error Types
//!
//! Failures surfaced by the REST client, the dashboard operations and startup config.

use thiserror::Error;

/// REST request failures
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or an undecodable response body
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }
}

/// Errors returned by dashboard operations. State is untouched whenever one is returned.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// `update` was called before `begin_edit`
    #[error("No food is being edited")]
    NotEditing,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid app config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
