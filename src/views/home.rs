//! Controller for the home page.
//!
//! The home page composes four independent fetches for its initial render
//! (featured article, latest rail, first "all news" page, categories), a
//! load-more on the news grid, a search overlay, and the session-gated
//! one-time promotional prompt.

use futures::try_join;
use tracing::{debug, instrument, warn};

use crate::client::{ContentClient, ListQuery};
use crate::error::Result;
use crate::models::{Article, Category, PromotionalModal};
use crate::session::SessionContext;
use crate::utils::next_page;

/// Articles in the latest-news rail.
pub const LATEST_LIMIT: u32 = 8;
/// Articles per page of the "all news" grid.
pub const PAGE_SIZE: u32 = 12;
/// Maximum results requested per search.
pub const SEARCH_LIMIT: u32 = 20;

/// State of the home page.
pub struct HomeView<'a> {
    client: &'a ContentClient,
    featured: Option<Article>,
    latest: Vec<Article>,
    all_articles: Vec<Article>,
    total: u64,
    categories: Vec<Category>,
    search_results: Vec<Article>,
    search_query: String,
}

impl<'a> HomeView<'a> {
    pub fn new(client: &'a ContentClient) -> Self {
        Self {
            client,
            featured: None,
            latest: Vec::new(),
            all_articles: Vec::new(),
            total: 0,
            categories: Vec::new(),
            search_results: Vec::new(),
            search_query: String::new(),
        }
    }

    /// Load the initial batch: featured, latest, first listing page, and
    /// categories, all concurrently. The join is fail-fast: if any one
    /// fetch fails the whole load fails and nothing is rendered partially.
    #[instrument(level = "info", skip(self))]
    pub async fn load(&mut self) -> Result<()> {
        let query = ListQuery {
            limit: Some(PAGE_SIZE),
            ..ListQuery::default()
        };
        let (featured, latest, page, categories) = try_join!(
            self.client.featured(),
            self.client.latest(LATEST_LIMIT),
            self.client.list(&query),
            self.client.categories(),
        )?;

        self.featured = featured;
        self.latest = latest;
        self.all_articles = page.items;
        self.total = page.total;
        self.categories = categories;
        debug!(
            latest = self.latest.len(),
            articles = self.all_articles.len(),
            categories = self.categories.len(),
            "home loaded"
        );
        Ok(())
    }

    /// Append the next page to the "all news" grid; page number derived
    /// from the accumulated count.
    #[instrument(level = "info", skip(self))]
    pub async fn load_more(&mut self) -> Result<()> {
        let page = next_page(self.all_articles.len(), PAGE_SIZE as usize);
        let more = self
            .client
            .list(&ListQuery {
                page: Some(page),
                limit: Some(PAGE_SIZE),
                ..ListQuery::default()
            })
            .await?;
        debug!(page, appended = more.items.len(), "loaded more articles");
        self.all_articles.extend(more.items);
        Ok(())
    }

    /// Run a search; same contract as the listing page. A blank query
    /// clears the overlay without a request; a failure drops stale results
    /// before propagating.
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

    /// Drop the search overlay and return to the normal home content. The
    /// previously loaded state is still held; no refetch happens.
    pub fn clear_search(&mut self) {
        self.search_results.clear();
        self.search_query.clear();
    }

    /// Fetch the promotional modal if this session has not been prompted
    /// yet. Returns the modal to show at most once per session; the flag is
    /// only marked when a modal actually exists, so a failed or empty fetch
    /// leaves a later attempt possible.
    #[instrument(level = "info", skip(self, session))]
    pub async fn promotional_prompt(
        &mut self,
        session: &mut SessionContext,
    ) -> Result<Option<PromotionalModal>> {
        if !session.prompt_pending() {
            return Ok(None);
        }
        let modal = self.client.promotional_modal().await?;
        if modal.is_some() {
            session.mark_prompt_shown();
        }
        Ok(modal)
    }

    pub fn featured(&self) -> Option<&Article> {
        self.featured.as_ref()
    }

    pub fn latest(&self) -> &[Article] {
        &self.latest
    }

    /// The articles the news grid should display: search results when a
    /// non-empty set exists, otherwise the accumulated grid.
    pub fn displayed(&self) -> &[Article] {
        if self.search_results.is_empty() {
            &self.all_articles
        } else {
            &self.search_results
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search_results.is_empty() || !self.search_query.is_empty()
    }

    /// More pages available, judged against the authoritative total.
    pub fn has_more(&self) -> bool {
        !self.is_searching() && (self.all_articles.len() as u64) < self.total
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }
}
