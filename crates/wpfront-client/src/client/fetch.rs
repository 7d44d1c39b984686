//! Fetch-and-normalize pipeline.
//!
//! Every entry point runs the same steps: build URL, GET, status check,
//! JSON parse, empty check, then shape with the selected schema. Failures
//! are logged once with the endpoint and returned unchanged.

use serde_json::Value;
use tracing::{debug, error};
use wpfront_schema::{
    BasePageResponse, BlogPostResponse, CategoryResponse, ContentResponse, GalleryPageResponse,
    MenuResponse, ProcessPageResponse, SchemaType, ShapeError, shape_base, shape_blogs,
    shape_category, shape_category_slugs, shape_gallery, shape_menu, shape_process,
};

use super::WpClient;
use crate::endpoint::{FetchOptions, build_url};
use crate::error::WpError;

impl WpClient {
    /// Fetch `endpoint` and shape it with `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`WpError`] if the request, status check, JSON parse, empty
    /// check, or validation fails.
    pub fn fetch(
        &self,
        endpoint: &str,
        schema: SchemaType,
        options: &FetchOptions,
    ) -> Result<ContentResponse, WpError> {
        self.fetch_shaped(endpoint, options, |json| {
            schema.shape(json).map_err(from_shape_error)
        })
    }

    /// Fetch `endpoint` and shape it with the schema named `schema_name`.
    ///
    /// The name is checked after the response passed the empty check, so an
    /// empty collection reports [`WpError::NotFound`] even for a bad name.
    ///
    /// # Errors
    ///
    /// Returns [`WpError::InvalidSchemaType`] for an unknown name, otherwise
    /// as [`fetch`](Self::fetch).
    pub fn fetch_named(
        &self,
        endpoint: &str,
        schema_name: &str,
        options: &FetchOptions,
    ) -> Result<ContentResponse, WpError> {
        self.fetch_shaped(endpoint, options, |json| {
            let schema: SchemaType = schema_name.parse()?;
            schema.shape(json).map_err(from_shape_error)
        })
    }

    /// Fetch a plain page from a slug query.
    pub fn fetch_base(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<BasePageResponse, WpError> {
        self.fetch_shaped(endpoint, options, |json| Ok(shape_base(json)?))
    }

    /// Fetch a process page from a slug query.
    pub fn fetch_process(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<ProcessPageResponse, WpError> {
        self.fetch_shaped(endpoint, options, |json| Ok(shape_process(json)?))
    }

    /// Fetch a gallery page from a slug query.
    pub fn fetch_gallery(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<GalleryPageResponse, WpError> {
        self.fetch_shaped(endpoint, options, |json| Ok(shape_gallery(json)?))
    }

    /// Fetch the first category of a category query.
    pub fn fetch_category(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<CategoryResponse, WpError> {
        self.fetch_shaped(endpoint, options, |json| Ok(shape_category(json)?))
    }

    /// Fetch a post listing; one invalid post fails the whole call.
    pub fn fetch_blogs(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<Vec<BlogPostResponse>, WpError> {
        self.fetch_shaped(endpoint, options, |json| {
            shape_blogs(json).map_err(from_shape_error)
        })
    }

    /// Fetch a product listing; one invalid product fails the whole call.
    pub fn fetch_menu(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<MenuResponse, WpError> {
        self.fetch_shaped(endpoint, options, |json| {
            shape_menu(json).map_err(from_shape_error)
        })
    }

    /// Fetch a category listing and keep only the slugs.
    pub fn fetch_category_slugs(
        &self,
        endpoint: &str,
        options: &FetchOptions,
    ) -> Result<Vec<String>, WpError> {
        self.fetch_shaped(endpoint, options, |json| Ok(shape_category_slugs(json)?))
    }

    /// Run the pipeline with `shape` as the final step and log any failure.
    fn fetch_shaped<T>(
        &self,
        endpoint: &str,
        options: &FetchOptions,
        shape: impl FnOnce(&Value) -> Result<T, WpError>,
    ) -> Result<T, WpError> {
        let result = self
            .fetch_json(endpoint, options)
            .and_then(|json| shape(&json));

        if let Err(err) = &result {
            error!(endpoint, error = %err, "Error fetching data");
        }
        result
    }

    /// GET the endpoint and return its non-empty JSON body.
    fn fetch_json(&self, endpoint: &str, options: &FetchOptions) -> Result<Value, WpError> {
        let url = build_url(&self.base_url, endpoint, options);
        debug!(%url, "Fetching content");

        let response = self.transport.get(&url)?;
        if !response.is_success() {
            return Err(WpError::Http {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let json: Value = serde_json::from_slice(&response.body)?;
        if is_empty_payload(&json) {
            return Err(WpError::NotFound {
                endpoint: endpoint.to_owned(),
            });
        }

        Ok(json)
    }
}

/// `null` and `[]` mean nothing matched the query.
fn is_empty_payload(json: &Value) -> bool {
    match json {
        Value::Null => true,
        Value::Array(elements) => elements.is_empty(),
        _ => false,
    }
}

/// Convert a shaping failure, logging listing issues that are not returned.
fn from_shape_error(err: ShapeError) -> WpError {
    match err {
        ShapeError::Validation(validation) => WpError::Validation(validation),
        ShapeError::InvalidBlogData(validation) => {
            error!(issues = ?validation.issues(), "Blog validation errors");
            WpError::InvalidBlogData
        }
        ShapeError::InvalidMenuData(validation) => {
            error!(issues = ?validation.issues(), "Menu validation errors");
            WpError::InvalidMenuData
        }
    }
}
