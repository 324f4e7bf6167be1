// ============================================================================
// Logging Setup
// Subscriber installation for binaries and demos (feature = "logging")
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber that prints events at `level` and above.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
