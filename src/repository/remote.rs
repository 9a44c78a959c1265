use crate::domain::contact::Contact;
use crate::repository::ContactFetcher;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Fixed endpoint the contact directory is served from.
const CONTACTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures a fetch can produce. Any of these makes the list controller
/// substitute the fallback dataset instead of showing an error screen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("server returned status {status}")]
    Http { status: u16 },

    #[error("network error: {message}")]
    Transport { message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// Wire shape of one element of the contacts array. Unknown fields are
/// ignored; `name` and `phone` are carried over verbatim.
#[derive(Debug, Deserialize)]
struct ApiContact {
    id: ApiId,
    name: String,
    phone: String,
}

// The endpoint serves numeric ids; some payloads use strings. Both map to
// the string id of the domain record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiId {
    Number(u64),
    Text(String),
}

impl From<ApiContact> for Contact {
    fn from(raw: ApiContact) -> Self {
        let id = match raw.id {
            ApiId::Number(n) => n.to_string(),
            ApiId::Text(s) => s,
        };
        Self::new(id, raw.name, raw.phone)
    }
}

/// Real implementation that issues the HTTP GET against the fixed endpoint.
pub struct RemoteContactRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for RemoteContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteContactRepository {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: CONTACTS_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl ContactFetcher for RemoteContactRepository {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting contacts");

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let raw: Vec<ApiContact> = response.json().await?;
        Ok(raw.into_iter().map(Contact::from).collect())
    }
}
