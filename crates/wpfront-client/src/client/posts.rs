//! Blog post helpers.

use wpfront_schema::BlogPostResponse;

use super::WpClient;
use crate::endpoint::{self, FetchOptions};
use crate::error::WpError;

impl WpClient {
    /// Get the most recent posts, with embedded resources.
    ///
    /// `limit` maps to `per_page`; `None` or `Some(0)` uses the WordPress default.
    pub fn get_blog_posts(&self, limit: Option<u32>) -> Result<Vec<BlogPostResponse>, WpError> {
        self.fetch_blogs(&endpoint::blog_posts(limit), &FetchOptions::default())
    }

    /// Get the posts matching `slug`, with embedded resources.
    pub fn get_blog_post_by_slug(&self, slug: &str) -> Result<Vec<BlogPostResponse>, WpError> {
        self.fetch_blogs(&endpoint::post_by_slug(slug), &FetchOptions::default())
    }
}
