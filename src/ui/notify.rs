use tracing::info;

/// Host-supplied alert surface. The core raises notifications through this
/// instead of owning any dialog rendering.
pub trait Notifier: Send + Sync {
    /// Show one alert with a title and message.
    fn alert(&self, title: &str, message: &str);
}

/// Notifier that writes alerts to the log, for hosts without a dialog.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, title: &str, message: &str) {
        info!(title = %title, message = %message, "alert");
    }
}
