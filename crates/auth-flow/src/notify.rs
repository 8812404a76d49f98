//! Notification and reload seams supplied by the host.

use tracing::info;

/// Transient user-facing notifications (the host's toast layer).
///
/// Fire and forget; nothing in the flow state depends on these.
pub trait Notifier: Send + Sync {
    /// A success message (account created, password changed, ...).
    fn success(&self, message: &str);

    /// An informational message (confirmation-required redirects).
    fn info(&self, message: &str);
}

/// Default notifier: structured log lines instead of UI toasts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(kind = "success", message, "Auth notification");
    }

    fn info(&self, message: &str) {
        info!(kind = "info", message, "Auth notification");
    }
}

/// Host hook fired after a completed sign-out; a web host reloads the page.
pub trait ClientReload: Send + Sync {
    fn reload(&self);
}

/// Default reload hook: logs the request and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReload;

impl ClientReload for TracingReload {
    fn reload(&self) {
        info!("Client reload requested after sign-out");
    }
}
