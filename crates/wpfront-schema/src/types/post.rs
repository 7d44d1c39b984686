//! WordPress post and taxonomy types.

use serde::{Deserialize, Serialize};

use super::image::FeatureImages;
use super::page::Rendered;

/// Post category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    /// Term ID.
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// Public archive URL.
    pub link: String,
}

/// Category reduced to its slug, as returned by `?_fields=slug`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategorySlug {
    pub slug: String,
}

/// Blog post.
///
/// Posts carry no `acf` block. `category_details` is added to the REST
/// response by the site's theme.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlogPost {
    /// Post ID.
    pub id: u64,
    pub slug: String,
    pub title: Rendered,
    pub content: Rendered,
    pub feature_images: FeatureImages,
    /// Publication date as sent by WordPress (site-local ISO 8601).
    pub date: String,
    pub category_details: Vec<Category>,
}
