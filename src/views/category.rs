//! Controller for a single category's listing page.
//!
//! Same accumulation rules as the full listing, scoped to one category
//! slug. The current category is resolved against the fetched category
//! list; a slug that matches nothing is an explicit not-found empty state,
//! not an error.

use futures::try_join;
use tracing::{debug, instrument};

use crate::client::{ContentClient, ListQuery};
use crate::error::Result;
use crate::models::{Article, Category};
use crate::utils::next_page;

/// Articles fetched per page.
pub const PAGE_SIZE: u32 = 12;

/// State of a category page.
pub struct CategoryView<'a> {
    client: &'a ContentClient,
    slug: String,
    articles: Vec<Article>,
    categories: Vec<Category>,
    total: u64,
}

impl<'a> CategoryView<'a> {
    pub fn new(client: &'a ContentClient, slug: impl Into<String>) -> Self {
        Self {
            client,
            slug: slug.into(),
            articles: Vec::new(),
            categories: Vec::new(),
            total: 0,
        }
    }

    /// Load the first category-filtered page and the category list,
    /// concurrently and fail-fast.
    #[instrument(level = "info", skip(self), fields(slug = %self.slug))]
    pub async fn load(&mut self) -> Result<()> {
        let query = ListQuery {
            limit: Some(PAGE_SIZE),
            category: Some(self.slug.clone()),
            ..ListQuery::default()
        };
        let (page, categories) = try_join!(self.client.list(&query), self.client.categories())?;

        self.articles = page.items;
        self.total = page.total;
        self.categories = categories;
        debug!(
            count = self.articles.len(),
            total = self.total,
            found = self.current_category().is_some(),
            "category page loaded"
        );
        Ok(())
    }

    /// Append the next page; page number derived from the accumulated
    /// count, filter unchanged.
    #[instrument(level = "info", skip(self), fields(slug = %self.slug))]
    pub async fn load_more(&mut self) -> Result<()> {
        let page = next_page(self.articles.len(), PAGE_SIZE as usize);
        let query = ListQuery {
            page: Some(page),
            limit: Some(PAGE_SIZE),
            category: Some(self.slug.clone()),
            ..ListQuery::default()
        };
        let more = self.client.list(&query).await?;
        debug!(page, appended = more.items.len(), "loaded more articles");
        self.articles.extend(more.items);
        Ok(())
    }

    /// The category this page is scoped to, resolved by slug against the
    /// fetched list. `None` after a successful load means the category does
    /// not exist: render the not-found empty state.
    pub fn current_category(&self) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == self.slug)
    }

    /// The remaining categories, for the "explore others" strip.
    pub fn other_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.slug != self.slug)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Authoritative total for this category.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn has_more(&self) -> bool {
        (self.articles.len() as u64) < self.total
    }
}
