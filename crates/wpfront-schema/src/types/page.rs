//! WordPress page types.

use serde::{Deserialize, Serialize};

use super::image::{FeatureImages, GalleryImage};

/// WordPress `{ "rendered": ... }` wrapper used for titles and content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rendered {
    /// HTML as rendered by WordPress.
    pub rendered: String,
}

/// Custom fields present on every page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BaseAcf {
    pub subtitle: String,
}

/// One step of a process page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
    /// Image URL.
    pub image: String,
}

/// Custom fields of a process page: the base fields plus ordered steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessAcf {
    pub subtitle: String,
    pub process: Vec<ProcessStep>,
}

/// Custom field block that can sit under a page's `acf` key.
pub trait PageAcf {
    /// Page subtitle.
    fn subtitle(&self) -> &str;
}

impl PageAcf for BaseAcf {
    fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

impl PageAcf for ProcessAcf {
    fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

/// WordPress page, generic over its custom field block.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page<A> {
    /// Page ID.
    pub id: u64,
    pub slug: String,
    pub title: Rendered,
    pub content: Rendered,
    pub feature_images: FeatureImages,
    pub acf: A,
}

/// Plain page.
pub type BasePage = Page<BaseAcf>;

/// Page describing a step-by-step process.
pub type ProcessPage = Page<ProcessAcf>;

/// Page with an image gallery.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GalleryPage {
    #[serde(flatten)]
    pub page: BasePage,
    pub gallery: Vec<GalleryImage>,
}
