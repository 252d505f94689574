//! Controller for the article detail page.
//!
//! Loads one article by slug together with the category list, then fills
//! the related-articles rail: the server's curated `related_articles` when
//! present, otherwise the latest articles minus the article itself.
//!
//! Callers must distinguish two failure shapes of [`ArticleView::load`]:
//! [`ContentError::NotFound`] means the article does not exist (render the
//! empty state), while a transport error means the page could not load at
//! all (render a generic error).
//!
//! [`ContentError::NotFound`]: crate::error::ContentError::NotFound

use futures::try_join;
use tracing::{debug, instrument};

use crate::client::ContentClient;
use crate::error::Result;
use crate::models::{Article, Category};

/// Articles fetched for the related rail when none are curated.
pub const RELATED_LIMIT: u32 = 4;

/// State of an article detail page.
pub struct ArticleView<'a> {
    client: &'a ContentClient,
    slug: String,
    article: Option<Article>,
    related: Vec<Article>,
    categories: Vec<Category>,
}

impl<'a> ArticleView<'a> {
    pub fn new(client: &'a ContentClient, slug: impl Into<String>) -> Self {
        Self {
            client,
            slug: slug.into(),
            article: None,
            related: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Load the article and categories concurrently (fail-fast), then
    /// resolve the related rail. The fallback fetch happens only when the
    /// article carries no curated related articles.
    #[instrument(level = "info", skip(self), fields(slug = %self.slug))]
    pub async fn load(&mut self) -> Result<()> {
        let (article, categories) =
            try_join!(self.client.article(&self.slug), self.client.categories())?;
        self.categories = categories;

        self.related = match &article.related_articles {
            Some(curated) if !curated.is_empty() => {
                debug!(count = curated.len(), "using curated related articles");
                curated.clone()
            }
            _ => {
                let latest = self.client.latest(RELATED_LIMIT).await?;
                let related: Vec<Article> =
                    latest.into_iter().filter(|a| a.id != article.id).collect();
                debug!(count = related.len(), "filled related rail from latest");
                related
            }
        };
        self.article = Some(article);
        Ok(())
    }

    /// The loaded article. `None` until [`ArticleView::load`] succeeds.
    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    pub fn related(&self) -> &[Article] {
        &self.related
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{article_run, article_value, categories_body};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_with_categories() -> MockServer {
        crate::testing::init_test_tracing();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories_body()))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_curated_related_articles_skip_latest_fetch() {
        let server = server_with_categories().await;
        let mut article = article_value(1, "nota-principal");
        article["related_articles"] = json!(article_run(50, 3));
        Mock::given(method("GET"))
            .and(path("/article/nota-principal"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": article})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ContentClient::with_base_url(&server.uri()).unwrap();
        let mut view = ArticleView::new(&client, "nota-principal");
        view.load().await.unwrap();

        assert_eq!(view.article().unwrap().slug, "nota-principal");
        assert_eq!(view.related().len(), 3);
        assert_eq!(view.related()[0].id, 50);
    }

    #[tokio::test]
    async fn test_related_fallback_excludes_the_article_itself() {
        let server = server_with_categories().await;
        Mock::given(method("GET"))
            .and(path("/article/nota-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": article_value(2, "nota-2"),
            })))
            .mount(&server)
            .await;
        // Latest includes the article being viewed (id 2).
        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": article_run(1, 4),
            })))
            .mount(&server)
            .await;

        let client = ContentClient::with_base_url(&server.uri()).unwrap();
        let mut view = ArticleView::new(&client, "nota-2");
        view.load().await.unwrap();

        let related = view.related();
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|a| a.id != 2));
    }

    #[tokio::test]
    async fn test_missing_article_surfaces_not_found() {
        let server = server_with_categories().await;
        Mock::given(method("GET"))
            .and(path("/article/missing-slug"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": "not found",
            })))
            .mount(&server)
            .await;

        let client = ContentClient::with_base_url(&server.uri()).unwrap();
        let mut view = ArticleView::new(&client, "missing-slug");
        let err = view.load().await.unwrap_err();
        assert!(err.is_not_found());
        assert!(view.article().is_none());
    }

    #[tokio::test]
    async fn test_dropped_connection_is_not_a_not_found() {
        let client = ContentClient::with_base_url("http://127.0.0.1:9").unwrap();
        let mut view = ArticleView::new(&client, "any-slug");
        let err = view.load().await.unwrap_err();
        assert!(err.is_transport());
        assert!(!err.is_not_found());
    }
}
