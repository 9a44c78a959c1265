use rolo::repository::{FetchError, fallback_contacts};
use rolo::services::{ContactListService, MAX_RECORDS, PAGE_SIZE, PaginationSimulator};
use rolo::test_helpers::{RecordingNotifier, StubContactFetcher, sample_contacts};
use rolo::ui::console;
use std::sync::Arc;
use std::time::Duration;

fn build_service(
    fetcher: StubContactFetcher,
) -> (ContactListService, Arc<RecordingNotifier>, Arc<StubContactFetcher>) {
    let fetcher = Arc::new(fetcher);
    let notifier = Arc::new(RecordingNotifier::new());
    let service = ContactListService::with_pagination(
        fetcher.clone(),
        notifier.clone(),
        PaginationSimulator::with_delay(Duration::ZERO),
    );
    (service, notifier, fetcher)
}

#[tokio::test]
async fn test_offline_session_paginates_fallback_to_ceiling() {
    let fetcher = StubContactFetcher::new();
    fetcher.push_failure(FetchError::Transport {
        message: "request to the server failed".to_string(),
    });
    let (service, notifier, _) = build_service(fetcher);

    service.initial_load().await;

    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.contacts, fallback_contacts());
    assert_eq!(notifier.alerts().len(), 1);
    assert!(notifier.alerts()[0].1.contains("request to the server failed"));

    // Scroll to the end repeatedly until the synthetic feed dries up.
    let mut pages = 0;
    while service.snapshot().await.has_more_data {
        service.load_more().await;
        pages += 1;
        assert!(pages <= MAX_RECORDS / PAGE_SIZE, "pagination never exhausted");
    }

    let snapshot = service.snapshot().await;
    assert_eq!(pages, 4);
    assert_eq!(snapshot.contacts.len(), MAX_RECORDS);
    assert_eq!(snapshot.contacts[10].name, "Additional User 11");
    assert_eq!(snapshot.contacts[29].id, "30");
    assert!(!snapshot.has_more_data);

    // One more scroll signal after exhaustion changes nothing.
    service.load_more().await;
    assert_eq!(service.snapshot().await.contacts.len(), MAX_RECORDS);
}

#[tokio::test]
async fn test_online_session_is_single_page() {
    let fetcher = StubContactFetcher::new();
    fetcher.push_success(sample_contacts(7));
    let (service, notifier, fetcher) = build_service(fetcher);

    service.initial_load().await;

    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.contacts.len(), 7);
    assert!(!snapshot.has_more_data);
    assert!(notifier.alerts().is_empty());

    // The real feed never paginates.
    service.load_more().await;
    assert_eq!(service.snapshot().await.contacts.len(), 7);
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_refresh_recovers_after_offline_start() {
    let fetcher = StubContactFetcher::new();
    fetcher.push_failure(FetchError::Http { status: 502 });
    fetcher.push_success(sample_contacts(5));
    let (service, notifier, fetcher) = build_service(fetcher);

    service.initial_load().await;
    assert_eq!(service.snapshot().await.contacts.len(), 10);

    service.refresh().await;

    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.contacts, sample_contacts(5));
    assert!(!snapshot.loading);
    assert!(!snapshot.has_more_data);
    assert_eq!(fetcher.call_count(), 2);
    assert_eq!(notifier.alerts().len(), 1);
}

#[tokio::test]
async fn test_selecting_a_row_raises_one_notification() {
    let fetcher = StubContactFetcher::new();
    fetcher.push_success(sample_contacts(3));
    let (service, notifier, _) = build_service(fetcher);

    service.initial_load().await;
    let snapshot = service.snapshot().await;

    service.select(&snapshot.contacts[1]);

    let alerts = notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].1.contains("User 2"));
    assert_eq!(service.snapshot().await, snapshot);
}

#[tokio::test]
async fn test_console_render_tracks_the_session() {
    let fetcher = StubContactFetcher::new();
    fetcher.push_failure(FetchError::Transport {
        message: "offline".to_string(),
    });
    let (service, _, _) = build_service(fetcher);

    assert_eq!(console::render(&service.snapshot().await), "Loading contacts...");

    service.initial_load().await;
    let rows = console::render(&service.snapshot().await);
    assert!(rows.contains("John Doe"));
    assert!(rows.contains("(555) 012-3456"));

    while service.snapshot().await.has_more_data {
        service.load_more().await;
    }
    assert!(console::render(&service.snapshot().await).contains("end of list"));
}
