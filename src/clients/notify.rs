//! User-visible notification hooks.
//!
//! The storefront surfaces failures as transient, non-blocking
//! notifications. In a library there is no toast to raise, so the HTTP
//! client dispatches through the [`Notify`] trait and embedders decide how
//! to present it. The default [`TracingNotify`] implementation logs through
//! `tracing`.

/// Sink for user-visible notifications raised by the HTTP client.
///
/// Implementations must be cheap and non-blocking; notifications are
/// best-effort and never affect control flow.
pub trait Notify: Send + Sync {
    /// A transient error notification carrying the server's message.
    fn error(&self, message: &str);

    /// A transient success notification (e.g., after a checkout).
    fn success(&self, message: &str) {
        let _ = message;
    }

    /// The stored session was invalidated by an unauthorized response.
    ///
    /// This is the SDK's analog of a forced page reload: all derived
    /// in-memory state should be discarded. The token store has already
    /// been cleared when this fires.
    fn session_expired(&self) {}
}

/// Default [`Notify`] implementation that logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotify;

impl Notify for TracingNotify {
    fn error(&self, message: &str) {
        tracing::warn!("storefront API error: {message}");
    }

    fn success(&self, message: &str) {
        tracing::info!("storefront API: {message}");
    }

    fn session_expired(&self) {
        tracing::warn!("storefront API session expired; stored credentials cleared");
    }
}
