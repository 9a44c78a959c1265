pub mod console;
mod notify;

pub use notify::{Notifier, TracingNotifier};
