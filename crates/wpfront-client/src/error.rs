//! Error types for the content client.

use wpfront_schema::{UnknownSchemaType, ValidationError};

/// Error from a content fetch.
#[derive(Debug, thiserror::Error)]
pub enum WpError {
    /// HTTP request failed (connection refused, DNS, broken body, etc).
    #[error("HTTP request failed")]
    Request(#[from] ureq::Error),

    /// Server answered with a status outside 200-299.
    #[error("HTTP error! status: {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body is not valid JSON.
    #[error("invalid JSON response")]
    Json(#[from] serde_json::Error),

    /// Response was `null` or an empty collection.
    #[error("No data found for endpoint: {endpoint}")]
    NotFound {
        /// Endpoint as passed by the caller.
        endpoint: String,
    },

    /// Schema type name outside the supported set.
    #[error(transparent)]
    InvalidSchemaType(#[from] UnknownSchemaType),

    /// Single resource did not match its schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Blog listing did not match the post schema. Issues are logged, not returned.
    #[error("Invalid blog data format")]
    InvalidBlogData,

    /// Menu listing did not match the product schema. Issues are logged, not returned.
    #[error("Invalid menu data format")]
    InvalidMenuData,
}
