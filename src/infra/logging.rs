//! Process-wide logger bootstrap.
//!
//! # Invariants
//! - Initialization happens at most once per process; later calls are no-ops.
//! - Initialization never panics.

use flexi_logger::{detailed_format, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts the stderr logger with a `RUST_LOG`-style specification.
///
/// # Errors
/// Returns a human-readable message when the spec does not parse or the
/// backend fails to start.
pub fn init_logging(spec: &str) -> Result<(), String> {
    LOGGER
        .get_or_try_init(|| {
            Logger::try_with_str(spec)
                .map_err(|err| format!("invalid log spec `{}`: {err}", spec))?
                .log_to_stderr()
                .format(detailed_format)
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))
        })
        .map(|_| ())
}
