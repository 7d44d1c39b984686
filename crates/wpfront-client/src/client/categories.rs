//! Category helpers.

use wpfront_schema::CategoryResponse;

use super::WpClient;
use crate::endpoint::{self, FetchOptions};
use crate::error::WpError;

impl WpClient {
    /// Get a category by slug.
    pub fn get_category_by_slug(&self, slug: &str) -> Result<CategoryResponse, WpError> {
        self.fetch_category(&endpoint::category_by_slug(slug), &FetchOptions::default())
    }

    /// List every category slug, e.g. to enumerate archive pages at build time.
    pub fn get_category_slugs(&self) -> Result<Vec<String>, WpError> {
        self.fetch_category_slugs(endpoint::CATEGORY_SLUGS, &FetchOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wpfront_schema::fixtures;

    use crate::client::test_support::{client_with, url};
    use crate::error::WpError;
    use crate::mock::MockTransport;

    #[test]
    fn test_get_category_by_slug() {
        let transport = Arc::new(MockTransport::new().with_json(
            url("/categories?slug=news"),
            200,
            &json!([fixtures::category(4, "news")]),
        ));
        let category = client_with(&transport).get_category_by_slug("news").unwrap();
        assert_eq!(category.id, 4);
        assert_eq!(category.name, "NEWS");
        assert_eq!(category.link, "http://localhost:8080/category/news/");
    }

    #[test]
    fn test_get_category_by_slug_wrong_shape() {
        let transport = Arc::new(MockTransport::new().with_json(
            url("/categories?slug=news"),
            200,
            &json!([{ "id": 4, "name": "News" }]),
        ));
        let err = client_with(&transport)
            .get_category_by_slug("news")
            .unwrap_err();
        assert!(matches!(err, WpError::Validation(_)));
    }

    #[test]
    fn test_get_category_slugs() {
        let transport = Arc::new(MockTransport::new().with_json(
            url("/categories?_fields=slug"),
            200,
            &json!([{ "slug": "news" }, { "slug": "events" }]),
        ));
        let slugs = client_with(&transport).get_category_slugs().unwrap();
        assert_eq!(slugs, vec!["news".to_owned(), "events".to_owned()]);
    }
}
