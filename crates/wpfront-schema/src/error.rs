//! Validation error types.

use std::fmt;

/// A single schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the offending value (`$` is the document root, `$[2]` the third element).
    pub path: String,
    /// What was wrong, e.g. ``missing field `slug` ``.
    pub message: String,
}

impl Issue {
    /// Create an issue at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// JSON value did not match the expected resource shape.
///
/// Always carries at least one [`Issue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    /// Build an error from collected issues.
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// Build an error with a single issue.
    pub(crate) fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![Issue::new(path, message)])
    }

    /// All mismatches found.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("schema validation failed: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Error produced while shaping a response for a [`SchemaType`](crate::SchemaType).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// Strict validation of a single resource failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// At least one post in a blog listing failed validation.
    #[error("Invalid blog data format")]
    InvalidBlogData(ValidationError),

    /// At least one product in a menu listing failed validation.
    #[error("Invalid menu data format")]
    InvalidMenuData(ValidationError),
}

/// Schema type name outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Invalid schema type: {0}. Must be 'base', 'process', 'blogs', 'categories', 'galeria', or 'menu'"
)]
pub struct UnknownSchemaType(pub String);

/// Menu price that is neither a number nor a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price {0:?}: expected a number or a numeric string")]
pub struct PriceError(pub String);
