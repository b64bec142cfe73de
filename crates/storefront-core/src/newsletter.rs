//! Newsletter signup.

use std::fmt;

use reqwest::Client;
use serde::Serialize;

use crate::error::NewsletterError;
use crate::http::BackendConfig;

pub const NEWSLETTER_PATH: &str = "/api/newsletter";

/// An address that passed basic shape checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, NewsletterError> {
        let email = raw.trim();
        let invalid = || NewsletterError::InvalidEmail(email.to_string());

        if email.is_empty() || email.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(invalid());
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Sends signups to the backend, or just logs them when running local-only
#[derive(Debug, Clone)]
pub struct NewsletterClient {
    target: Option<(Client, reqwest::Url)>,
}

impl NewsletterClient {
    pub fn new(backend: Option<&BackendConfig>) -> Result<Self, NewsletterError> {
        let target = match backend {
            Some(config) => {
                let client = Client::builder().timeout(config.timeout).build()?;
                let url = config
                    .endpoint(NEWSLETTER_PATH)
                    .map_err(|e| NewsletterError::Config(e.to_string()))?;
                Some((client, url))
            }
            None => None,
        };
        Ok(Self { target })
    }

    pub fn is_connected(&self) -> bool {
        self.target.is_some()
    }

    pub async fn subscribe(&self, email: &EmailAddress) -> Result<(), NewsletterError> {
        let Some((client, url)) = &self.target else {
            tracing::info!(%email, "newsletter signup recorded locally (no backend)");
            return Ok(());
        };

        client
            .post(url.clone())
            .json(&SubscribeRequest { email: email.as_str() })
            .send()
            .await?
            .error_for_status()?;
        tracing::info!(%email, "newsletter signup sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert_eq!(EmailAddress::parse(" ada@shop.example ").unwrap().as_str(), "ada@shop.example");
        assert!(EmailAddress::parse("a.b+news@mail.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_addresses() {
        for raw in ["", "   ", "ada", "@shop.example", "ada@", "ada@shop", "ada@@shop.example", "a da@shop.example", "ada@shop..example"] {
            assert!(
                matches!(EmailAddress::parse(raw), Err(NewsletterError::InvalidEmail(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_local_only_subscribe_succeeds() {
        let client = NewsletterClient::new(None).unwrap();
        assert!(!client.is_connected());
        let email = EmailAddress::parse("ada@shop.example").unwrap();
        client.subscribe(&email).await.unwrap();
    }
}
