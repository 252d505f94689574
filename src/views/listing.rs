//! Controller for the full "all news" listing page.
//!
//! Holds the accumulated article list, the category filter chips, and the
//! search overlay state. This is where the pagination-accumulation and
//! search-precedence rules are most visible; the other listing-style pages
//! reproduce them identically.

use futures::try_join;
use tracing::{debug, instrument, warn};

use crate::client::{ContentClient, ListQuery};
use crate::error::Result;
use crate::models::{Article, Category};
use crate::utils::next_page;

/// Articles fetched per listing page.
pub const PAGE_SIZE: u32 = 12;
/// Maximum results requested per search.
pub const SEARCH_LIMIT: u32 = 20;

/// State of the "all news" page.
pub struct ListingView<'a> {
    client: &'a ContentClient,
    articles: Vec<Article>,
    categories: Vec<Category>,
    total: u64,
    selected_category: Option<String>,
    search_results: Vec<Article>,
    search_query: String,
}

impl<'a> ListingView<'a> {
    pub fn new(client: &'a ContentClient) -> Self {
        Self {
            client,
            articles: Vec::new(),
            categories: Vec::new(),
            total: 0,
            selected_category: None,
            search_results: Vec::new(),
            search_query: String::new(),
        }
    }

    /// Load the first page and the category chips, concurrently and
    /// fail-fast: if either request fails, the view keeps no partial state
    /// from this load.
    #[instrument(level = "info", skip(self), fields(category = ?self.selected_category))]
    pub async fn load(&mut self) -> Result<()> {
        let query = ListQuery {
            page: Some(1),
            limit: Some(PAGE_SIZE),
            category: self.selected_category.clone(),
            ..ListQuery::default()
        };
        let (page, categories) = try_join!(self.client.list(&query), self.client.categories())?;

        self.articles = page.items;
        self.total = page.total;
        self.categories = categories;
        debug!(
            count = self.articles.len(),
            total = self.total,
            "listing loaded"
        );
        Ok(())
    }

    /// Append the next page to the accumulated list.
    ///
    /// The page number is derived from how many articles are already held,
    /// and new items are appended in arrival order with no deduplication.
    #[instrument(level = "info", skip(self))]
    pub async fn load_more(&mut self) -> Result<()> {
        let page = next_page(self.articles.len(), PAGE_SIZE as usize);
        let query = ListQuery {
            page: Some(page),
            limit: Some(PAGE_SIZE),
            category: self.selected_category.clone(),
            ..ListQuery::default()
        };
        let more = self.client.list(&query).await?;
        debug!(page, appended = more.items.len(), "loaded more articles");
        self.articles.extend(more.items);
        Ok(())
    }

    /// Switch the category filter and reload.
    ///
    /// Resets pagination to page 1 and clears any active search: category
    /// filtering and searching are mutually exclusive states. `None` means
    /// "all categories".
    #[instrument(level = "info", skip(self))]
    pub async fn filter_category(&mut self, slug: Option<&str>) -> Result<()> {
        self.selected_category = slug.filter(|s| !s.is_empty()).map(str::to_string);
        self.clear_search();
        self.load().await
    }

    /// Run a search. A blank query clears the search state instead of
    /// issuing a request. On failure the stale results are dropped before
    /// the error propagates, so the caller never renders results for a
    /// query that failed.
    #[instrument(level = "info", skip(self))]
    pub async fn search(&mut self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            self.clear_search();
            return Ok(());
        }

        self.search_query = query.to_string();
        match self.client.search(query, SEARCH_LIMIT).await {
            Ok(results) => {
                self.search_results = results.items;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "search failed; dropping stale results");
                self.search_results.clear();
                Err(e)
            }
        }
    }

    /// Drop the search state and fall back to the held listing. No refetch:
    /// the previously accumulated list is still in memory.
    pub fn clear_search(&mut self) {
        self.search_results.clear();
        self.search_query.clear();
    }

    /// The articles the page should currently display: search results when
    /// a non-empty set exists, otherwise the accumulated listing. Search
    /// results are never merged into the listing.
    pub fn displayed(&self) -> &[Article] {
        if self.search_results.is_empty() {
            &self.articles
        } else {
            &self.search_results
        }
    }

    /// Whether the page is in search mode (results shown, or a query typed
    /// whose search came back empty).
    pub fn is_searching(&self) -> bool {
        !self.search_results.is_empty() || !self.search_query.is_empty()
    }

    /// Whether more pages exist, judged against the authoritative server
    /// total, never the accumulated length alone. Always false in search
    /// mode: search results do not paginate.
    pub fn has_more(&self) -> bool {
        !self.is_searching() && (self.articles.len() as u64) < self.total
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Authoritative total of the current filtered set.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}
