use serde::{Deserialize, Serialize};

/// Switches that shape every emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Master switch, checked once per emission
    pub enabled: bool,
    /// Write `<timestamp> | ` in front of the line
    pub timestamp: bool,
    /// Write the severity glyph in front of the prefix
    pub decorated: bool,
    /// Whether the macros append the call site when the caller does not say
    pub include_context: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            timestamp: false,
            decorated: false,
            include_context: true,
        }
    }
}

impl LoggerConfig {
    /// Timestamp, glyph and call site on every line.
    pub fn verbose() -> Self {
        Self {
            timestamp: true,
            decorated: true,
            include_context: true,
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    pub fn with_include_context(mut self, include_context: bool) -> Self {
        self.include_context = include_context;
        self
    }
}

/// With the `debug-only` feature, release builds start out silent.
pub(crate) const fn default_enabled() -> bool {
    if cfg!(feature = "debug-only") {
        cfg!(debug_assertions)
    } else {
        true
    }
}
