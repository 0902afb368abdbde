use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under the `go_farm` target,
/// so `RUST_LOG=go_farm=debug` turns them all on.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "go_farm", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "go_farm", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "go_farm", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "go_farm", "{}", message);
    }
}
