//! # Opina Content
//!
//! Client library for a regional news site's content API, plus the page
//! view-controllers that consume it: home, full news listing, category
//! listing, article detail, and newsletter signup.
//!
//! ## Architecture
//!
//! - [`ContentClient`] is the single typed request/response layer over the
//!   HTTP JSON API: endpoint construction, pagination-parameter encoding,
//!   and `{success, data, ...}` envelope unwrapping.
//! - Each page is an independent controller in [`views`], holding that
//!   page's in-memory state for the lifetime of the view. State is
//!   discarded on navigation; nothing is persisted.
//! - [`SessionContext`] carries the one piece of cross-view state, the
//!   one-time promotional prompt flag.
//!
//! ## Example
//!
//! ```no_run
//! use opina_content::{ContentClient, views::ListingView};
//!
//! # async fn run() -> opina_content::Result<()> {
//! let client = ContentClient::new();
//! let mut listing = ListingView::new(&client);
//! listing.load().await?;
//! while listing.has_more() {
//!     listing.load_more().await?;
//! }
//! println!("{} of {} articles", listing.displayed().len(), listing.total());
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//!
//! No retry, no backoff, no timeouts: a failed request surfaces immediately
//! as a [`ContentError`] and the caller decides whether to show an error or
//! keep stale content. Initial per-view batches are joined fail-fast; an
//! empty result set is a legitimate `Ok` value, never an error.

pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod utils;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{BASE_URL, ContentClient, ListQuery, Page, SearchResults};
pub use error::{ContentError, Result};
pub use models::{
    ApiResponse, Article, Category, Pagination, PromotionalModal, SiteStats, Sponsor, Tag,
};
pub use session::{PromptState, SessionContext};
