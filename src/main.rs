use anyhow::Result;
use rolo::repository::RemoteContactRepository;
use rolo::services::ContactListService;
use rolo::ui::{TracingNotifier, console};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let fetcher = Arc::new(RemoteContactRepository::new());
    let notifier = Arc::new(TracingNotifier);
    let list = ContactListService::new(fetcher, notifier);

    list.initial_load().await;
    println!("{}", console::render(&list.snapshot().await));

    // Walk the simulated pagination to its ceiling, as scrolling would.
    while list.snapshot().await.has_more_data {
        list.load_more().await;
        println!("{}", console::render(&list.snapshot().await));
    }

    list.dispose().await;
    Ok(())
}
