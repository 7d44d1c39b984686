//! Page helpers.

use wpfront_schema::{BasePageResponse, GalleryPageResponse, ProcessPageResponse};

use super::WpClient;
use crate::endpoint::{self, FetchOptions};
use crate::error::WpError;

impl WpClient {
    /// Get a plain page by slug, with embedded resources.
    pub fn get_base_page(&self, slug: &str) -> Result<BasePageResponse, WpError> {
        self.fetch_base(&endpoint::page_by_slug(slug), &FetchOptions::default())
    }

    /// Get a process page by slug, with embedded resources.
    pub fn get_process_page(&self, slug: &str) -> Result<ProcessPageResponse, WpError> {
        self.fetch_process(&endpoint::page_by_slug(slug), &FetchOptions::default())
    }

    /// Get a gallery page by slug, with embedded resources.
    pub fn get_gallery_page(&self, slug: &str) -> Result<GalleryPageResponse, WpError> {
        self.fetch_gallery(&endpoint::page_by_slug(slug), &FetchOptions::default())
    }
}
