//! Cooperative shutdown port.

/// Source of a cooperative stop request.
///
/// Polled by the scan loop between markets and during idle waits. Observing a
/// stop request may consume it, so a later request is a fresh signal.
pub trait StopSignal: Send + Sync {
    /// Return `true` if a stop has been requested since the last poll.
    fn stop_requested(&self) -> bool;
}
