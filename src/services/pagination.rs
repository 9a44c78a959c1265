use crate::domain::contact::Contact;
use std::time::Duration;
use tokio::time::sleep;

/// Synthetic records produced per load-more call.
pub const PAGE_SIZE: usize = 5;

/// Ceiling on the synthetic total; pagination stops once the list reaches it.
pub const MAX_RECORDS: usize = 30;

const SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// Stands in for a real paginated API: produces placeholder contacts after a
/// fixed delay. Stateless; admission control belongs to the list controller.
#[derive(Debug, Clone)]
pub struct PaginationSimulator {
    delay: Duration,
}

impl Default for PaginationSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationSimulator {
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_LATENCY,
        }
    }

    /// Same record generation with a custom latency, for tests.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Produce the next page of placeholder contacts following
    /// `current_count` existing records.
    pub async fn load_more(&self, current_count: usize) -> Vec<Contact> {
        sleep(self.delay).await;

        (0..PAGE_SIZE)
            .map(|offset| {
                let id = current_count + offset + 1;
                let digit = offset % 10;
                Contact::new(
                    id.to_string(),
                    format!("Additional User {}", id),
                    format!("(999) {d}{d}{d}-{d}{d}{d}{d}", d = digit),
                )
            })
            .collect()
    }

    /// Whether another page is available once a full page has been appended
    /// to `current_count` records.
    pub fn has_more_after(current_count: usize) -> bool {
        current_count + PAGE_SIZE < MAX_RECORDS
    }
}
