//! Media types shared by every page-like resource.

use serde::{Deserialize, Serialize};

/// One rendered size of a media attachment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Image {
    /// Absolute URL of the file.
    pub url: String,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// The size variants WordPress generates for a featured image.
///
/// All five sizes are required.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeatureImages {
    pub thumbnail: Image,
    pub medium: Image,
    pub medium_large: Image,
    pub large: Image,
    pub full: Image,
}

/// Entry of a gallery page's `gallery` field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GalleryImage {
    /// Attachment ID.
    pub id: u64,
    pub large: Image,
    pub full: Image,
}
