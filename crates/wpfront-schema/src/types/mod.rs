//! Raw WordPress REST resource types.
//!
//! Only the fields a template needs are modeled.
//! Serde ignores the many other fields WordPress returns.

mod image;
mod menu;
mod page;
mod post;

pub use image::{FeatureImages, GalleryImage, Image};
pub use menu::{MenuAcf, MenuItem};
pub use page::{
    BaseAcf, BasePage, GalleryPage, Page, PageAcf, ProcessAcf, ProcessPage, ProcessStep, Rendered,
};
pub use post::{BlogPost, Category, CategorySlug};
