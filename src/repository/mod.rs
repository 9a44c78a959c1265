mod mock;
mod remote;

pub use mock::fallback_contacts;
pub use remote::{FetchError, RemoteContactRepository};

use crate::domain::contact::Contact;
use async_trait::async_trait;

/// Trait for the remote contact source - allows for mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactFetcher: Send + Sync {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, FetchError>;
}
