//! Data models for the content API wire format.
//!
//! This module defines the payload types served by the remote content API:
//! - [`Article`]: a published news article with its denormalized category fields
//! - [`Category`], [`Tag`], [`Sponsor`], [`SiteStats`], [`PromotionalModal`]
//! - [`ApiResponse`]: the `{success, data, ...}` envelope every endpoint uses
//!
//! All of these are read-only display payloads. Articles are immutable once
//! fetched; a page's in-memory list of articles only ever grows by append
//! (pagination) or is replaced wholesale (new filter or search).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published news article.
///
/// Carries both the canonical data (timestamps, counters) and the
/// presentational strings the API pre-renders for display
/// (`published_at_formatted`, `time_ago`). The category fields are
/// denormalized copies owned by the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Full body; only present on the article-detail endpoint.
    pub content: Option<String>,
    pub featured_image: String,
    pub featured_image_alt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: String,
    pub featured: bool,
    pub views: u64,
    pub published_at: DateTime<Utc>,
    pub published_at_formatted: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub time_ago: String,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub category_name: String,
    pub category_slug: String,
    pub category_color: String,
    pub category_description: Option<String>,
    pub tags: Option<Vec<Tag>>,
    /// Editor-curated related articles; only present on the detail endpoint.
    pub related_articles: Option<Vec<Article>>,
    pub url: String,
}

/// A topic tag attached to an article.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// An article category.
///
/// `article_count` is a denormalized counter owned by the API; it is never
/// recomputed client-side. The server's ordering (by `sort_order`) is
/// authoritative and must not be re-sorted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub article_count: u64,
    pub sort_order: u32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A site sponsor shown in the sponsors rail.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sponsor {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub website_url: String,
    pub priority: u32,
}

/// Aggregate site counters for the stats section.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SiteStats {
    pub total_articles: u64,
    pub total_categories: u64,
    pub total_views: u64,
    pub articles_today: u64,
}

/// A promotional modal campaign, shown at most once per session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromotionalModal {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub button_text: String,
    pub button_url: String,
    pub display_frequency: String,
    pub position: String,
    pub size: String,
    pub auto_close_seconds: Option<u32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The response envelope every content API endpoint uses.
///
/// `data` is optional on the wire: failure envelopes
/// (`{"success": false, "error": "..."}`) omit it entirely, and the
/// featured-article endpoint returns `data: null` when nothing is featured.
///
/// When present, `pagination.total` is the authoritative count of the
/// filtered set; the length of a client-accumulated list is never a
/// substitute for it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub pagination: Option<Pagination>,
    /// Echoed search query (`/search` only).
    pub query: Option<String>,
    /// Total match count (`/search` only).
    pub total: Option<u64>,
}

/// Pagination block attached to listing responses.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}
