//! Flat response records handed to templates.
//!
//! Each `From` impl is a pure transform from a validated raw resource:
//! `rendered` wrappers are unwrapped and the featured image sizes templates
//! use are lifted to the top level.

use serde::Serialize;

use crate::types::{
    BaseAcf, BlogPost, Category, FeatureImages, GalleryImage, GalleryPage, Image, MenuAcf,
    MenuItem, Page, PageAcf, ProcessAcf,
};

/// Flattened page, generic over its custom field block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResponse<A> {
    pub title: String,
    pub slug: String,
    /// Copy of `acf.subtitle`.
    pub subtitle: String,
    pub thumbnail: Image,
    pub large: Image,
    pub medium_large: Image,
    pub full: Image,
    /// Rendered HTML body.
    pub content: String,
    pub acf: A,
}

/// Flattened plain page.
pub type BasePageResponse = PageResponse<BaseAcf>;

/// Flattened process page; `acf.process` holds the steps.
pub type ProcessPageResponse = PageResponse<ProcessAcf>;

impl<A: PageAcf> From<Page<A>> for PageResponse<A> {
    fn from(page: Page<A>) -> Self {
        let FeatureImages {
            thumbnail,
            large,
            medium_large,
            full,
            ..
        } = page.feature_images;

        Self {
            title: page.title.rendered,
            slug: page.slug,
            subtitle: page.acf.subtitle().to_owned(),
            thumbnail,
            large,
            medium_large,
            full,
            content: page.content.rendered,
            acf: page.acf,
        }
    }
}

/// Flattened gallery page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryPageResponse {
    #[serde(flatten)]
    pub page: BasePageResponse,
    pub gallery: Vec<GalleryImage>,
}

impl From<GalleryPage> for GalleryPageResponse {
    fn from(gallery_page: GalleryPage) -> Self {
        Self {
            page: gallery_page.page.into(),
            gallery: gallery_page.gallery,
        }
    }
}

/// Category as returned to callers; identical to the raw record.
pub type CategoryResponse = Category;

/// Flattened blog post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPostResponse {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub thumbnail: Image,
    pub large: Image,
    pub medium_large: Image,
    pub full: Image,
    pub date: String,
    pub category_details: Vec<Category>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        let FeatureImages {
            thumbnail,
            large,
            medium_large,
            full,
            ..
        } = post.feature_images;

        Self {
            id: post.id,
            slug: post.slug,
            title: post.title.rendered,
            content: post.content.rendered,
            thumbnail,
            large,
            medium_large,
            full,
            date: post.date,
            category_details: post.category_details,
        }
    }
}

/// Menu product ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemTransformed {
    pub id: u64,
    pub title: String,
    pub medium: Image,
    pub full: Image,
    /// Description and numeric price.
    pub acf: MenuAcf,
}

impl From<MenuItem> for MenuItemTransformed {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            title: item.title.rendered,
            medium: item.feature_images.medium,
            full: item.feature_images.full,
            acf: item.acf,
        }
    }
}

/// Menu listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuResponse {
    pub items: Vec<MenuItemTransformed>,
}

impl FromIterator<MenuItem> for MenuResponse {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(MenuItemTransformed::from).collect(),
        }
    }
}
