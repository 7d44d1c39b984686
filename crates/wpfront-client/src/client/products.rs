//! Menu helpers.

use wpfront_schema::MenuResponse;

use super::WpClient;
use crate::endpoint::{self, FetchOptions};
use crate::error::WpError;

impl WpClient {
    /// Get menu products, optionally limited to one product category.
    pub fn get_menu_items(&self, category_id: Option<u64>) -> Result<MenuResponse, WpError> {
        self.fetch_menu(&endpoint::products(category_id), &FetchOptions::default())
    }
}
