//! Menu product types.

use serde::{Deserialize, Serialize};

use super::image::FeatureImages;
use super::page::Rendered;

/// Custom fields of a menu product.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MenuAcf {
    pub description: String,
    /// Price, coerced from a number or a numeric string.
    #[serde(deserialize_with = "crate::price::deserialize_price")]
    pub price: f64,
}

/// Product as returned by `/products`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MenuItem {
    /// Product ID.
    pub id: u64,
    pub title: Rendered,
    pub feature_images: FeatureImages,
    pub acf: MenuAcf,
}
