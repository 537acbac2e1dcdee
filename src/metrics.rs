use std::time::Instant;
use tracing::info;

/// A timer that logs the duration and outcome of an operation when dropped.
///
/// # Example
///
/// ```ignore
/// let mut timer = OperationTimer::new("add_item");
/// let response = handlers::item_add::add_item(&store, req).await;
/// if !response.success {
///     timer.mark_failed();
/// }
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
    failed: bool,
}

impl OperationTimer {
    /// Create a new timer for the given operation name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
            failed: false,
        }
    }

    /// Record that the operation reported an error to the caller.
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    fn outcome(&self) -> &'static str {
        if self.failed {
            "error"
        } else {
            "ok"
        }
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        info!(
            operation = %self.name,
            outcome = %self.outcome(),
            duration_ms = %duration.as_millis(),
            "Operation completed"
        );
    }
}

/// Generate a short request ID for correlation.
#[must_use]
pub fn generate_request_id() -> String {
    let uuid_str = uuid::Uuid::new_v4().simple().to_string();
    uuid_str.get(..8).unwrap_or(&uuid_str).to_string()
}
