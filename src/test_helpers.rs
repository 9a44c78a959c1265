// Test helpers for integration testing

use crate::domain::contact::Contact;
use crate::repository::{ContactFetcher, FetchError};
use crate::ui::Notifier;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

/// Fetcher double with queued responses, an optional simulated delay, and a
/// call counter.
#[derive(Default)]
pub struct StubContactFetcher {
    responses: Mutex<VecDeque<Result<Vec<Contact>, FetchError>>>,
    delay: Mutex<Duration>,
    calls: AtomicUsize,
}

impl StubContactFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&self, contacts: Vec<Contact>) {
        self.responses.lock().unwrap().push_back(Ok(contacts));
    }

    pub fn push_failure(&self, error: FetchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactFetcher for StubContactFetcher {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.lock().unwrap();
        if delay > Duration::ZERO {
            sleep(delay).await;
        }

        // Default to an empty page if nothing was queued
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Notifier double recording every alert it is asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

/// Build `count` distinct contacts with ids `"1"..` for assertions.
pub fn sample_contacts(count: usize) -> Vec<Contact> {
    (1..=count)
        .map(|i| {
            Contact::new(
                i.to_string(),
                format!("User {}", i),
                format!("(555) 000-{:04}", i),
            )
        })
        .collect()
}
