//! WordPress resource schemas for wpfront.
//!
//! This crate is the validation half of the content client:
//! - [`types`]: raw REST resource shapes (pages, posts, categories, products)
//! - [`validate`], [`validate_array`], [`validate_first`]: total validation of
//!   JSON values with structured [`Issue`] reports
//! - [`response`]: flat records templates consume, with one pure `From`
//!   transform per resource
//! - [`SchemaType`]: the resource shape an endpoint is expected to return
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wpfront_schema::{ContentResponse, SchemaType};
//!
//! let json = json!([{
//!     "id": 4,
//!     "name": "News",
//!     "slug": "news",
//!     "link": "https://example.com/news/",
//! }]);
//! let ContentResponse::Category(category) = SchemaType::Categories.shape(&json)? else {
//!     unreachable!();
//! };
//! assert_eq!(category.slug, "news");
//! # Ok::<(), wpfront_schema::ShapeError>(())
//! ```

mod error;
mod price;
pub mod response;
mod schema_type;
pub mod types;
mod validate;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use error::{Issue, PriceError, ShapeError, UnknownSchemaType, ValidationError};
pub use price::parse_price;
pub use response::{
    BasePageResponse, BlogPostResponse, CategoryResponse, GalleryPageResponse,
    MenuItemTransformed, MenuResponse, PageResponse, ProcessPageResponse,
};
pub use schema_type::{
    ContentResponse, SchemaType, shape_base, shape_blogs, shape_category, shape_category_slugs,
    shape_gallery, shape_menu, shape_process,
};
pub use validate::{validate, validate_array, validate_first};
