//! Typed client for the content API.
//!
//! [`ContentClient`] translates query intents into HTTP calls against the
//! content API's fixed base URL and unwraps the `{success, data, ...}`
//! envelope into plain values or a [`ContentError`]. Every page view goes
//! through this one client.
//!
//! # Failure semantics
//!
//! There is no retry or backoff anywhere: a single failed request surfaces
//! immediately and the caller decides what to render. The one exception is
//! [`ContentClient::subscribe_newsletter`], which swallows failures into
//! `false` so signup forms can show an inline retryable error instead of
//! crashing.

use reqwest::{StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Instant;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::error::{ContentError, Result};
use crate::models::{
    ApiResponse, Article, Category, PromotionalModal, SiteStats, Sponsor,
};
use crate::utils::{truncate_for_log, valid_email};

/// Production base URL of the content API.
pub const BASE_URL: &str = "https://sanluisopina.com/api";

/// Filters for the paginated `/news` listing.
///
/// Omitted fields are not sent; the server default applies. `page` is
/// 1-based.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
}

impl ListQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(featured) = self.featured {
            params.push(("featured", featured.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

/// One page of a filtered listing.
///
/// `total` comes from the envelope's pagination block and is the
/// authoritative count of the whole filtered set, not of this page.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<Article>,
    pub total: u64,
}

/// Result of a search request.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub items: Vec<Article>,
    pub total: u64,
    /// The query as the server echoed it back.
    pub echoed_query: String,
}

impl SearchResults {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            echoed_query: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, serde::Deserialize)]
struct SubscribeResponse {
    success: bool,
}

/// Typed request/response layer over the content API.
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client against the production base URL.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL).expect("production base URL is valid")
    }

    /// Create a client against an explicit base URL. Used by tests to point
    /// at a mock server; production code uses [`ContentClient::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Url::parse(base_url).map_err(|e| ContentError::Validation {
            reason: format!("invalid base URL {base_url:?}: {e}"),
        })?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Latest articles, most-recent-first, at most `limit` of them.
    #[instrument(level = "info", skip(self))]
    pub async fn latest(&self, limit: u32) -> Result<Vec<Article>> {
        let envelope = self
            .get_envelope::<Vec<Article>>("/latest", &[("limit", limit.to_string())])
            .await?;
        unwrap_data(envelope)
    }

    /// The currently featured article, if any. An absent featured item is
    /// not an error.
    #[instrument(level = "info", skip(self))]
    pub async fn featured(&self) -> Result<Option<Article>> {
        let envelope = self.get_envelope::<Article>("/featured", &[]).await?;
        if !envelope.success {
            return Err(api_failure(envelope.error));
        }
        Ok(envelope.data)
    }

    /// One page of the filtered `/news` listing.
    #[instrument(level = "info", skip(self, query), fields(page = ?query.page, category = ?query.category))]
    pub async fn list(&self, query: &ListQuery) -> Result<Page> {
        let envelope = self
            .get_envelope::<Vec<Article>>("/news", &query.to_params())
            .await?;
        let total = envelope.pagination.map(|p| p.total).unwrap_or(0);
        let items = unwrap_data(envelope)?;
        debug!(count = items.len(), total, "fetched listing page");
        Ok(Page { items, total })
    }

    /// A single article by slug.
    ///
    /// A failure envelope or HTTP 404 maps to [`ContentError::NotFound`] so
    /// callers can show an empty state instead of a generic error.
    #[instrument(level = "info", skip(self))]
    pub async fn article(&self, slug: &str) -> Result<Article> {
        let path = format!("/article/{slug}");
        match self.get_envelope::<Article>(&path, &[]).await {
            Ok(envelope) if envelope.success => envelope
                .data
                .ok_or_else(|| api_failure(Some("missing data".to_string()))),
            Ok(envelope) => {
                warn!(slug, error = ?envelope.error, "article lookup missed");
                Err(ContentError::NotFound {
                    slug: slug.to_string(),
                })
            }
            Err(ContentError::Status { status }) if status == StatusCode::NOT_FOUND => {
                warn!(slug, "article lookup returned 404");
                Err(ContentError::NotFound {
                    slug: slug.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Full-text search over articles.
    ///
    /// An empty or whitespace-only query short-circuits to an empty result
    /// without touching the network, so a cleared search box never issues a
    /// request or overwrites a still-valid listing total.
    #[instrument(level = "info", skip(self))]
    pub async fn search(&self, query: &str, limit: u32) -> Result<SearchResults> {
        if query.trim().is_empty() {
            debug!("blank search query; skipping request");
            return Ok(SearchResults::empty());
        }

        let envelope = self
            .get_envelope::<Vec<Article>>(
                "/search",
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;
        let total = envelope.total.unwrap_or(0);
        let echoed_query = envelope
            .query
            .clone()
            .unwrap_or_else(|| query.to_string());
        let items = unwrap_data(envelope)?;
        debug!(count = items.len(), total, "search completed");
        Ok(SearchResults {
            items,
            total,
            echoed_query,
        })
    }

    /// All categories, in the server's `sort_order`. The order is
    /// authoritative; it is returned as received.
    #[instrument(level = "info", skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let envelope = self.get_envelope::<Vec<Category>>("/categories", &[]).await?;
        unwrap_data(envelope)
    }

    /// Aggregate site counters.
    #[instrument(level = "info", skip(self))]
    pub async fn site_stats(&self) -> Result<SiteStats> {
        let envelope = self.get_envelope::<SiteStats>("/stats", &[]).await?;
        unwrap_data(envelope)
    }

    /// Sponsors, in server priority order.
    #[instrument(level = "info", skip(self))]
    pub async fn sponsors(&self) -> Result<Vec<Sponsor>> {
        let envelope = self.get_envelope::<Vec<Sponsor>>("/sponsors", &[]).await?;
        unwrap_data(envelope)
    }

    /// The active promotional modal campaign, if one is configured.
    #[instrument(level = "info", skip(self))]
    pub async fn promotional_modal(&self) -> Result<Option<PromotionalModal>> {
        let envelope = self
            .get_envelope::<PromotionalModal>("/promotional-modal", &[])
            .await?;
        if !envelope.success {
            return Err(api_failure(envelope.error));
        }
        Ok(envelope.data)
    }

    /// Subscribe an email address to the newsletter.
    ///
    /// The address must pass a basic `localpart@domain.tld` shape check
    /// before any request is attempted; a malformed address returns `false`
    /// without touching the network. Transport and parse failures also
    /// resolve to `false` so the signup form can render an inline retryable
    /// error.
    #[instrument(level = "info", skip_all, fields(has_name = name.is_some()))]
    pub async fn subscribe_newsletter(&self, email: &str, name: Option<&str>) -> bool {
        if !valid_email(email) {
            warn!("rejected newsletter signup with malformed email shape");
            return false;
        }

        let body = SubscribeRequest {
            email: email.trim(),
            name,
        };
        match self.post_subscribe(&body).await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "newsletter subscription failed");
                false
            }
        }
    }

    async fn post_subscribe(&self, body: &SubscribeRequest<'_>) -> Result<bool> {
        let url = format!("{}/newsletter/subscribe", self.base_url);
        let response = self.http.post(&url).json(body).send().await?;
        let text = response.text().await?;
        let parsed: SubscribeResponse =
            serde_json::from_str(&text).map_err(|e| {
                warn!(
                    error = %e,
                    preview = %truncate_for_log(&text, 300),
                    "subscription response did not parse"
                );
                ContentError::Decode { source: e }
            })?;
        Ok(parsed.success)
    }

    /// GET `path` with `params` and decode the response envelope.
    ///
    /// Any deviation from the envelope shape is a hard fetch failure; the
    /// offending body is logged truncated.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<ApiResponse<T>> {
        let t0 = Instant::now();
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "content API returned error status");
            return Err(ContentError::Status { status });
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str::<ApiResponse<T>>(&body).map_err(|e| {
            warn!(
                %url,
                error = %e,
                preview = %truncate_for_log(&body, 300),
                "content API body did not match the envelope"
            );
            ContentError::Decode { source: e }
        })?;

        debug!(
            %url,
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "content API call completed"
        );
        Ok(envelope)
    }
}

impl Default for ContentClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn unwrap_data<T>(envelope: ApiResponse<T>) -> Result<T> {
    if !envelope.success {
        return Err(api_failure(envelope.error));
    }
    envelope
        .data
        .ok_or_else(|| api_failure(Some("missing data".to_string())))
}

fn api_failure(message: Option<String>) -> ContentError {
    ContentError::Api {
        message: message.unwrap_or_else(|| "unspecified failure".to_string()),
    }
}
