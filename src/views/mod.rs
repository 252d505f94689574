//! Page view-controllers.
//!
//! One controller per page, each consuming the same [`ContentClient`]
//! independently. A controller owns its page's in-memory state for the
//! lifetime of the view; nothing here persists or crosses view boundaries
//! (the one exception, the session prompt flag, lives in
//! [`crate::session::SessionContext`] and is passed in explicitly).
//!
//! # Pages
//!
//! | Page | Module | Initial batch |
//! |------|--------|---------------|
//! | Home | [`home`] | featured + latest + first listing page + categories |
//! | All news | [`listing`] | first listing page + categories |
//! | Category | [`category`] | category-filtered page + categories |
//! | Article detail | [`article`] | article + categories |
//! | Newsletter | [`newsletter`] | categories |
//!
//! # Common rules
//!
//! Every controller follows the same contract:
//! - The initial batch is issued concurrently and joined fail-fast: if any
//!   request in it fails, the whole load fails and no partial state is kept.
//! - "Load more" appends the next page in arrival order, never deduplicates,
//!   and derives the page number from the accumulated count
//!   ([`crate::utils::next_page`]).
//! - A non-empty search result set fully replaces the displayed listing;
//!   clearing the search restores the held listing without a refetch.
//! - Selecting a category resets pagination and clears any active search;
//!   the two filters are mutually exclusive.
//!
//! [`ContentClient`]: crate::client::ContentClient

pub mod article;
pub mod category;
pub mod home;
pub mod listing;
pub mod newsletter;

pub use article::ArticleView;
pub use category::CategoryView;
pub use home::HomeView;
pub use listing::ListingView;
pub use newsletter::{NewsletterView, SubscribeOutcome};
