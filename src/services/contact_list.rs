use crate::domain::contact::Contact;
use crate::repository::{ContactFetcher, fallback_contacts};
use crate::services::pagination::PaginationSimulator;
use crate::ui::Notifier;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Mutable list state. Only the service mutates it, and never while a
/// fetch or pagination call is suspended.
#[derive(Debug)]
struct ListState {
    contacts: Vec<Contact>,
    loading: bool,
    loading_more: bool,
    has_more_data: bool,
    disposed: bool,
}

/// Copy of the list state handed across the presentation boundary, so the
/// host renders without holding any lock.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    pub contacts: Vec<Contact>,
    pub loading: bool,
    pub loading_more: bool,
    pub has_more_data: bool,
}

/// Owns the contact collection and the three status flags; orchestrates the
/// initial fetch, pull-to-refresh, and incremental pagination.
#[derive(Clone)]
pub struct ContactListService {
    fetcher: Arc<dyn ContactFetcher>,
    pagination: PaginationSimulator,
    notifier: Arc<dyn Notifier>,
    state: Arc<RwLock<ListState>>,
}

impl ContactListService {
    pub fn new(fetcher: Arc<dyn ContactFetcher>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_pagination(fetcher, notifier, PaginationSimulator::new())
    }

    pub fn with_pagination(
        fetcher: Arc<dyn ContactFetcher>,
        notifier: Arc<dyn Notifier>,
        pagination: PaginationSimulator,
    ) -> Self {
        Self {
            fetcher,
            pagination,
            notifier,
            state: Arc::new(RwLock::new(ListState {
                contacts: Vec::new(),
                loading: true,
                loading_more: false,
                has_more_data: true,
                disposed: false,
            })),
        }
    }

    /// First fetch after the screen mounts.
    pub async fn initial_load(&self) {
        self.load().await;
    }

    /// Pull-to-refresh and the empty-state retry: re-runs the fetch and
    /// replaces the whole collection.
    pub async fn refresh(&self) {
        self.load().await;
    }

    async fn load(&self) {
        {
            let mut state = self.state.write().await;
            if state.disposed {
                return;
            }
            state.loading = true;
        }

        debug!("fetching contacts");
        let result = self.fetcher.fetch_contacts().await;

        let mut state = self.state.write().await;
        if state.disposed {
            debug!("fetch finished after dispose, dropping result");
            return;
        }

        match result {
            Ok(contacts) => {
                info!(count = contacts.len(), "contacts loaded");
                state.contacts = contacts;
                // The real endpoint serves a single page; only the
                // simulated path paginates.
                state.has_more_data = false;
            }
            Err(err) => {
                error!(error = %err, "contact fetch failed, substituting fallback data");
                self.notifier.alert("Error", &err.to_string());
                state.contacts = fallback_contacts();
            }
        }
        state.loading = false;
    }

    /// Scroll-near-end signal. Appends the next synthetic page unless the
    /// list is exhausted or a page is already in flight.
    pub async fn load_more(&self) {
        let current_count = {
            let mut state = self.state.write().await;
            if state.disposed || !state.has_more_data || state.loading_more {
                return;
            }
            state.loading_more = true;
            state.contacts.len()
        };

        debug!(current_count, "loading more contacts");
        let page = self.pagination.load_more(current_count).await;

        let mut state = self.state.write().await;
        if state.disposed {
            debug!("pagination finished after dispose, dropping page");
            return;
        }

        state.contacts.extend(page);
        state.has_more_data = PaginationSimulator::has_more_after(current_count);
        state.loading_more = false;

        info!(
            total = state.contacts.len(),
            has_more = state.has_more_data,
            "page appended"
        );
    }

    /// Tap on one row: raises a notification with the contact's name.
    /// Fire-and-forget, no state change.
    pub fn select(&self, contact: &Contact) {
        self.notifier.alert("Contact", &contact.name);
    }

    /// Current records and flags, copied out for rendering.
    pub async fn snapshot(&self) -> ListSnapshot {
        let state = self.state.read().await;
        ListSnapshot {
            contacts: state.contacts.clone(),
            loading: state.loading,
            loading_more: state.loading_more,
            has_more_data: state.has_more_data,
        }
    }

    /// Tear down the screen: a fetch or pagination still in flight is
    /// discarded instead of updating a dead list.
    pub async fn dispose(&self) {
        let mut state = self.state.write().await;
        state.disposed = true;
    }
}
