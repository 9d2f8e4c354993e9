use std::fmt::Write;

use crate::config::LoggerConfig;
use crate::sink::{LogSink, StdoutSink};
use crate::time_source::{Clock, SystemClock};
use crate::types::{CallSite, Severity};


/// Separates the message from the call site
pub const CONTEXT_MARKER: &str = "➜";

/// Composes log lines and writes each one to its sink.
///
/// A `Logger` holds no per-call state: every emission is independent and
/// `&self` is all it needs, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Logger<S = StdoutSink, C = SystemClock> {
    config: LoggerConfig,
    sink: S,
    clock: C,
}

impl Logger {
    /// Logger writing to standard output, stamped by the system clock
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_parts(config, StdoutSink, SystemClock)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl<S: LogSink, C: Clock> Logger<S, C> {
    pub fn with_parts(config: LoggerConfig, sink: S, clock: C) -> Self {
        Self { config, sink, clock }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Builds the line `emit` would write, without the terminator.
    ///
    /// Layout: `[<timestamp> | ][<glyph> ]<prefix> <message>[ ➜ <file>:<line> <function>]`
    pub fn compose(
        &self,
        severity: Severity,
        message: &str,
        include_context: bool,
        call_site: &CallSite,
    ) -> String {
        let mut line = String::with_capacity(message.len() + 64);

        if self.config.timestamp {
            line.push_str(&self.clock.current_time());
            line.push_str(" | ");
        }
        if self.config.decorated {
            line.push_str(severity.glyph());
            line.push(' ');
        }
        line.push_str(severity.prefix());
        line.push(' ');
        line.push_str(message);

        if include_context {
            line.push(' ');
            line.push_str(CONTEXT_MARKER);
            line.push(' ');
            let _ = write!(line, "{}", call_site);
        }
        line
    }

    /// Writes one line for `message`. Never fails: a sink error is dropped.
    pub fn emit(&self, severity: Severity, message: &str, include_context: bool, call_site: CallSite) {
        if !self.config.enabled {
            return;
        }
        let line = self.compose(severity, message, include_context, &call_site);
        let _ = self.sink.write_line(&line);
    }

    pub fn info(&self, message: &str, include_context: bool, call_site: CallSite) {
        self.emit(Severity::Info, message, include_context, call_site);
    }

    pub fn warning(&self, message: &str, include_context: bool, call_site: CallSite) {
        self.emit(Severity::Warning, message, include_context, call_site);
    }

    pub fn error(&self, message: &str, include_context: bool, call_site: CallSite) {
        self.emit(Severity::Error, message, include_context, call_site);
    }
}
