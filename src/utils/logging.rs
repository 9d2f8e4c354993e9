//! Process-wide logger behind the crate-level functions and macros.
//!
//! It always writes to standard output and stamps lines with the system clock.
//! `init_logging` replaces its configuration; until then the defaults apply.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use once_cell::sync::Lazy;

use crate::config::{self, LoggerConfig};
use crate::logger::Logger;
use crate::sink::LogSink;
use crate::time_source::SystemClock;
use crate::types::{CallSite, Severity};


#[cfg(not(test))]
type GlobalSink = crate::sink::StdoutSink;
// Unit tests read the global logger's lines back per thread
#[cfg(test)]
type GlobalSink = tests::CapturedSink;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(config::default_enabled());
static CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Replaces the configuration of the global logger.
pub fn init_logging(config: LoggerConfig) {
    let mut guard = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    ENABLE_LOGGING.store(config.enabled, Ordering::SeqCst);
    *guard = config;
    drop(guard);
    tracing::debug!(?config, "microlog configured");
}

/// Current configuration of the global logger.
pub fn config() -> LoggerConfig {
    let config = *CONFIG.read().unwrap_or_else(PoisonError::into_inner);
    config.with_enabled(ENABLE_LOGGING.load(Ordering::SeqCst))
}

pub fn set_enabled(enabled: bool) {
    ENABLE_LOGGING.store(enabled, Ordering::SeqCst);
    tracing::debug!(enabled, "microlog switched");
}

pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

/// Context default the macros use when no `context:` argument is given.
pub fn include_context_default() -> bool {
    CONFIG.read().unwrap_or_else(PoisonError::into_inner).include_context
}

/// Writes one line through the global logger.
pub fn emit(severity: Severity, message: &str, include_context: bool, call_site: CallSite) {
    emit_to(&GlobalSink::default(), severity, message, include_context, call_site);
}

/// Global configuration and switch, but an explicit sink.
pub(crate) fn emit_to<S: LogSink>(
    sink: &S,
    severity: Severity,
    message: &str,
    include_context: bool,
    call_site: CallSite,
) {
    if !is_enabled() {
        return;
    }
    Logger::with_parts(config(), sink, SystemClock).emit(severity, message, include_context, call_site);
}

pub fn log_info(message: &str, include_context: bool, call_site: CallSite) {
    emit(Severity::Info, message, include_context, call_site);
}

pub fn log_warning(message: &str, include_context: bool, call_site: CallSite) {
    emit(Severity::Warning, message, include_context, call_site);
}

pub fn log_error(message: &str, include_context: bool, call_site: CallSite) {
    emit(Severity::Error, message, include_context, call_site);
}
