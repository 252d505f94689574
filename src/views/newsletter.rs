//! Controller for the newsletter signup page.
//!
//! Loads categories for the page chrome and submits subscriptions. The
//! controller distinguishes a locally rejected address (never sent) from a
//! submission the server or network refused, so the form can show the right
//! inline message.

use tracing::{info, instrument, warn};

use crate::client::ContentClient;
use crate::error::Result;
use crate::models::Category;
use crate::utils::valid_email;

/// Outcome of a signup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The server accepted the subscription.
    Subscribed,
    /// The address failed the local shape check; nothing was sent.
    InvalidEmail,
    /// The request was sent but refused or lost; worth retrying.
    Failed,
}

/// State of the newsletter page.
pub struct NewsletterView<'a> {
    client: &'a ContentClient,
    categories: Vec<Category>,
}

impl<'a> NewsletterView<'a> {
    pub fn new(client: &'a ContentClient) -> Self {
        Self {
            client,
            categories: Vec::new(),
        }
    }

    #[instrument(level = "info", skip(self))]
    pub async fn load(&mut self) -> Result<()> {
        self.categories = self.client.categories().await?;
        Ok(())
    }

    /// Submit a signup. The email is trimmed and shape-checked locally
    /// first; an empty name counts as not provided.
    #[instrument(level = "info", skip_all)]
    pub async fn subscribe(&self, email: &str, name: Option<&str>) -> SubscribeOutcome {
        let email = email.trim();
        if !valid_email(email) {
            warn!("signup rejected locally: malformed email shape");
            return SubscribeOutcome::InvalidEmail;
        }
        let name = name.map(str::trim).filter(|n| !n.is_empty());

        if self.client.subscribe_newsletter(email, name).await {
            info!("newsletter signup accepted");
            SubscribeOutcome::Subscribed
        } else {
            warn!("newsletter signup failed");
            SubscribeOutcome::Failed
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::categories_body;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_invalid_email_never_reaches_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/newsletter/subscribe"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ContentClient::with_base_url(&server.uri()).unwrap();
        let view = NewsletterView::new(&client);
        assert_eq!(
            view.subscribe("not-an-email", None).await,
            SubscribeOutcome::InvalidEmail
        );
        assert_eq!(view.subscribe("", None).await, SubscribeOutcome::InvalidEmail);
    }

    #[tokio::test]
    async fn test_accepted_signup_trims_and_omits_blank_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/newsletter/subscribe"))
            .and(body_partial_json(json!({"email": "a@b.com"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ContentClient::with_base_url(&server.uri()).unwrap();
        let view = NewsletterView::new(&client);
        assert_eq!(
            view.subscribe("  a@b.com  ", Some("   ")).await,
            SubscribeOutcome::Subscribed
        );
    }

    #[tokio::test]
    async fn test_server_refusal_is_retryable_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/newsletter/subscribe"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": false})),
            )
            .mount(&server)
            .await;

        let client = ContentClient::with_base_url(&server.uri()).unwrap();
        let view = NewsletterView::new(&client);
        assert_eq!(
            view.subscribe("a@b.com", None).await,
            SubscribeOutcome::Failed
        );
    }

    #[tokio::test]
    async fn test_load_fetches_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories_body()))
            .mount(&server)
            .await;

        let client = ContentClient::with_base_url(&server.uri()).unwrap();
        let mut view = NewsletterView::new(&client);
        view.load().await.unwrap();
        assert_eq!(view.categories().len(), 3);
    }
}
