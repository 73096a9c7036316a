//! Change notification for store mutations.

/// Subscriber interface for store change notification.
///
/// The store invokes [`on_stats_changed`](Self::on_stats_changed)
/// synchronously after every mutation that actually changed stored state:
/// an accepted `try_set`, a `clear`, and each applied entry during a bulk
/// load. There is no payload — subscribers re-query the store for whatever
/// they render.
///
/// Implementations must be cheap and idempotent: a bulk load fires once
/// per applied entry, in a tight loop. Invocation order across subscribers
/// is unspecified.
pub trait StatsObserver: Send + Sync {
    fn on_stats_changed(&self);
}

/// Blanket impl so plain closures can subscribe.
impl<F> StatsObserver for F
where
    F: Fn() + Send + Sync,
{
    fn on_stats_changed(&self) {
        self()
    }
}
