//! WordPress content client for wpfront.
//!
//! This crate is the fetch half of the content layer:
//! - [`WpClient`]: one GET per call, validated against a
//!   [`SchemaType`] and flattened into template-ready records
//! - [`endpoint`]: URL building and the conventional endpoint paths
//! - [`Transport`]: HTTP seam, backed by `ureq` in production and
//!   [`MockTransport`] in tests (behind the `mock` feature)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wpfront_client::{ApiConfig, FetchOptions, SchemaType, WpClient};
//!
//! let client = WpClient::new(&ApiConfig::from_env());
//!
//! let about = client.get_base_page("about")?;
//! println!("{}: {}", about.title, about.subtitle);
//!
//! let latest = client.get_blog_posts(Some(3))?;
//! let menu = client.get_menu_items(None)?;
//!
//! // Or pick the schema at runtime
//! let page = client.fetch("/pages?slug=about", SchemaType::Base, &FetchOptions::embedded())?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod endpoint;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod transport;

pub use client::WpClient;
pub use endpoint::FetchOptions;
pub use error::WpError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
pub use transport::{HttpResponse, Transport, UreqTransport};
pub use wpfront_config::ApiConfig;
pub use wpfront_schema::{ContentResponse, SchemaType};
