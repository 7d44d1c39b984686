//! Structural validation of JSON values against resource types.
//!
//! Validation is total: a value either converts into the fully-typed record
//! or yields a [`ValidationError`] describing every mismatch. Nothing
//! partial is ever returned.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Issue, ValidationError};

/// Path of the document root in issue reports.
const ROOT: &str = "$";

/// Validate a whole JSON value as `T`.
///
/// # Errors
///
/// Returns [`ValidationError`] with a single issue at `$` on mismatch.
pub fn validate<T: DeserializeOwned>(value: &Value) -> Result<T, ValidationError> {
    validate_at(value, ROOT)
}

/// Validate every element of a JSON array as `T`.
///
/// All elements are checked so the error reports each failing index.
///
/// # Errors
///
/// Returns [`ValidationError`] if the value is not an array or any element
/// does not match.
pub fn validate_array<T: DeserializeOwned>(value: &Value) -> Result<Vec<T>, ValidationError> {
    let Some(elements) = value.as_array() else {
        return Err(ValidationError::single(
            ROOT,
            format!("expected an array, found {}", kind_of(value)),
        ));
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut issues = Vec::new();
    for (index, element) in elements.iter().enumerate() {
        match T::deserialize(element) {
            Ok(record) => records.push(record),
            Err(e) => issues.push(Issue::new(element_path(index), e.to_string())),
        }
    }

    if issues.is_empty() {
        Ok(records)
    } else {
        Err(ValidationError::new(issues))
    }
}

/// Validate the first element of a collection response as `T`.
///
/// WordPress answers slug queries with an array even when one resource matches.
///
/// # Errors
///
/// Returns [`ValidationError`] at `$[0]` if there is no first element or it
/// does not match.
pub fn validate_first<T: DeserializeOwned>(value: &Value) -> Result<T, ValidationError> {
    match value.as_array().and_then(|elements| elements.first()) {
        Some(first) => validate_at(first, &element_path(0)),
        None => Err(ValidationError::single(
            element_path(0),
            format!("expected a resource, found {}", kind_of(value)),
        )),
    }
}

fn validate_at<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T, ValidationError> {
    T::deserialize(value).map_err(|e| ValidationError::single(path, e.to_string()))
}

fn element_path(index: usize) -> String {
    format!("{ROOT}[{index}]")
}

/// Human-readable JSON type name for issue messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(elements) if elements.is_empty() => "an empty array",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Image};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_validate_success() {
        let image: Image = validate(&json!({
            "url": "https://cdn.example.com/a.jpg",
            "width": 300,
            "height": 200,
        }))
        .unwrap();
        assert_eq!(
            image,
            Image {
                url: "https://cdn.example.com/a.jpg".to_owned(),
                width: 300.0,
                height: 200.0,
            }
        );
    }

    #[test]
    fn test_validate_missing_field() {
        let err = validate::<Image>(&json!({ "url": "a.jpg", "width": 300 })).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].path, "$");
        assert!(err.issues()[0].message.contains("height"));
    }

    #[test]
    fn test_validate_wrong_type() {
        let err =
            validate::<Image>(&json!({ "url": "a.jpg", "width": "300", "height": 1 })).unwrap_err();
        assert!(err.issues()[0].message.contains("invalid type"));
    }

    #[test]
    fn test_validate_array_collects_every_bad_element() {
        let value = json!([
            { "id": 1, "name": "News", "slug": "news", "link": "https://example.com/news" },
            { "id": 2, "name": "Food" },
            { "id": "3", "name": "Events", "slug": "events", "link": "https://example.com/events" },
        ]);
        let err = validate_array::<Category>(&value).unwrap_err();
        let paths: Vec<&str> = err.issues().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["$[1]", "$[2]"]);
    }

    #[test]
    fn test_validate_array_rejects_non_array() {
        let err = validate_array::<Category>(&json!({ "id": 1 })).unwrap_err();
        assert_eq!(err.issues()[0].path, "$");
        assert!(err.issues()[0].message.contains("an object"));
    }

    #[test]
    fn test_validate_array_empty_is_valid() {
        let categories = validate_array::<Category>(&json!([])).unwrap();
        assert!(categories.is_empty());
    }

    #[test]
    fn test_validate_first_uses_element_zero() {
        let value = json!([
            { "id": 7, "name": "News", "slug": "news", "link": "https://example.com/news" },
            { "broken": true },
        ]);
        let category: Category = validate_first(&value).unwrap();
        assert_eq!(category.id, 7);
    }

    #[test]
    fn test_validate_first_on_object_fails() {
        let err = validate_first::<Category>(&json!({ "id": 7 })).unwrap_err();
        assert_eq!(err.issues()[0].path, "$[0]");
    }

    #[test]
    fn test_validate_first_reports_element_path() {
        let err = validate_first::<Category>(&json!([{ "id": 7 }])).unwrap_err();
        assert_eq!(err.issues()[0].path, "$[0]");
        assert!(err.issues()[0].message.contains("missing field"));
    }
}
