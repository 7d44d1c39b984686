//! Schema selection and response shaping.
//!
//! [`SchemaType`] names one resource shape. Each variant knows how to
//! validate a collection response and flatten it into its response record.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ShapeError, UnknownSchemaType, ValidationError};
use crate::response::{
    BasePageResponse, BlogPostResponse, CategoryResponse, GalleryPageResponse, MenuResponse,
    ProcessPageResponse,
};
use crate::types::{
    BasePage, BlogPost, Category, CategorySlug, GalleryPage, MenuItem, ProcessPage,
};
use crate::validate::{validate_array, validate_first};

/// Resource shape expected from an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemaType {
    /// Plain page.
    #[default]
    Base,
    /// Page with process steps.
    Process,
    /// Listing of blog posts.
    Blogs,
    /// Single category.
    Categories,
    /// Page with an image gallery.
    Galeria,
    /// Listing of menu products.
    Menu,
}

impl SchemaType {
    /// Every schema type, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Base,
        Self::Process,
        Self::Blogs,
        Self::Categories,
        Self::Galeria,
        Self::Menu,
    ];

    /// Name used in configuration and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Process => "process",
            Self::Blogs => "blogs",
            Self::Categories => "categories",
            Self::Galeria => "galeria",
            Self::Menu => "menu",
        }
    }

    /// Validate a non-empty collection response and flatten it.
    ///
    /// Single-resource schemas read element 0 strictly. `Blogs` and `Menu`
    /// validate the whole array and report failures as
    /// [`ShapeError::InvalidBlogData`] / [`ShapeError::InvalidMenuData`].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] when the value does not match the schema.
    pub fn shape(self, json: &Value) -> Result<ContentResponse, ShapeError> {
        Ok(match self {
            Self::Base => ContentResponse::Base(shape_base(json)?),
            Self::Process => ContentResponse::Process(shape_process(json)?),
            Self::Blogs => ContentResponse::Blogs(shape_blogs(json)?),
            Self::Categories => ContentResponse::Category(shape_category(json)?),
            Self::Galeria => ContentResponse::Gallery(shape_gallery(json)?),
            Self::Menu => ContentResponse::Menu(shape_menu(json)?),
        })
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = UnknownSchemaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|schema| schema.as_str() == s)
            .ok_or_else(|| UnknownSchemaType(s.to_owned()))
    }
}

/// Shaped response, one variant per [`SchemaType`].
///
/// Serializes as the bare record so templates see the same JSON regardless
/// of how the request was dispatched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentResponse {
    Base(BasePageResponse),
    Process(ProcessPageResponse),
    Blogs(Vec<BlogPostResponse>),
    Category(CategoryResponse),
    Gallery(GalleryPageResponse),
    Menu(MenuResponse),
}

impl ContentResponse {
    /// Schema type that produced this response.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Self::Base(_) => SchemaType::Base,
            Self::Process(_) => SchemaType::Process,
            Self::Blogs(_) => SchemaType::Blogs,
            Self::Category(_) => SchemaType::Categories,
            Self::Gallery(_) => SchemaType::Galeria,
            Self::Menu(_) => SchemaType::Menu,
        }
    }
}

/// Shape element 0 as a plain page.
pub fn shape_base(json: &Value) -> Result<BasePageResponse, ValidationError> {
    validate_first::<BasePage>(json).map(Into::into)
}

/// Shape element 0 as a process page.
pub fn shape_process(json: &Value) -> Result<ProcessPageResponse, ValidationError> {
    validate_first::<ProcessPage>(json).map(Into::into)
}

/// Shape element 0 as a gallery page.
pub fn shape_gallery(json: &Value) -> Result<GalleryPageResponse, ValidationError> {
    validate_first::<GalleryPage>(json).map(Into::into)
}

/// Shape element 0 as a category.
pub fn shape_category(json: &Value) -> Result<CategoryResponse, ValidationError> {
    validate_first::<Category>(json)
}

/// Shape every post of a listing; one bad post fails the whole listing.
pub fn shape_blogs(json: &Value) -> Result<Vec<BlogPostResponse>, ShapeError> {
    let posts = validate_array::<BlogPost>(json).map_err(ShapeError::InvalidBlogData)?;
    Ok(posts.into_iter().map(BlogPostResponse::from).collect())
}

/// Shape every product of a listing; one bad product fails the whole listing.
pub fn shape_menu(json: &Value) -> Result<MenuResponse, ShapeError> {
    let items = validate_array::<MenuItem>(json).map_err(ShapeError::InvalidMenuData)?;
    Ok(items.into_iter().collect())
}

/// Extract the slugs of a category listing.
pub fn shape_category_slugs(json: &Value) -> Result<Vec<String>, ValidationError> {
    let slugs = validate_array::<CategorySlug>(json)?;
    Ok(slugs.into_iter().map(|c| c.slug).collect())
}
