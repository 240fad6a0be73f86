//! Pipeline progress logging.
//!
//! Thin leveled helpers over the `log` facade. The binary installs
//! `env_logger`, which writes to stderr so stdout only ever carries JSON.

pub fn log_info(msg: impl Into<String>) {
    log::info!(target: "ventas2json", "{}", msg.into());
}

/// Completed steps, reported at info level with a check mark.
pub fn log_success(msg: impl Into<String>) {
    log::info!(target: "ventas2json", "✓ {}", msg.into());
}

pub fn log_warning(msg: impl Into<String>) {
    log::warn!(target: "ventas2json", "⚠️ {}", msg.into());
}

pub fn log_error(msg: impl Into<String>) {
    log::error!(target: "ventas2json", "❌ {}", msg.into());
}
