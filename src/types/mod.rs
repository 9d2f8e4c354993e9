use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeverityError {
    #[error("Unknown severity: {0}")]
    Unknown(String),
}

/// Importance of a log line.
///
/// The set is closed: a `Severity` can only be named through its variants.
/// There is no `FromStr` or `From<&str>` conversion, so this does not compile:
///
/// ```compile_fail
/// let severity: microlog::Severity = "info".parse().unwrap();
/// ```
///
/// Use [`Severity::lookup`] when a name really has to be resolved at runtime.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize)]
pub enum Severity {
    /// General information about the program state
    Info,
    /// Something unexpected that the program can recover from
    Warning,
    /// A failure
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    /// Bracketed label written in front of every message
    pub const fn prefix(self) -> &'static str {
        match self {
            Severity::Info => "[INFO]",
            Severity::Warning => "[WARNING]",
            Severity::Error => "[ERROR]",
        }
    }

    /// Glyph shown before the prefix when decoration is enabled
    pub const fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }

    /// Resolve a lowercase severity name.
    pub fn lookup(name: &str) -> Result<Severity, SeverityError> {
        match name {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(SeverityError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Source location of a logging call.
///
/// Normally built by [`call_site!`](crate::call_site) and dropped right after the
/// line is written.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct CallSite {
    /// Path of the source file, as reported by `file!()`
    pub file: &'static str,
    /// Name of the enclosing function
    pub function: &'static str,
    /// Line of the call
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self { file, function, line }
    }

    /// Last path segment of `file`.
    pub fn file_name(&self) -> &'static str {
        basename(self.file)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file_name(), self.line, self.function)
    }
}

/// Strips every leading path component, accepting both separators since
/// `file!()` reports host-style paths.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Reduces a `type_name` path such as `my_crate::module::run::f` to `run`.
///
/// `path` is the type name of a nested item `f` declared inside the function,
/// so the trailing `::f` is dropped first, then any closure or async-block
/// frames in between.
pub fn trim_function_path(path: &'static str) -> &'static str {
    let mut name = path.strip_suffix("::f").unwrap_or(path);
    loop {
        match name.strip_suffix("::{{closure}}") {
            Some(stripped) => name = stripped,
            None => break,
        }
    }
    match name.rfind("::") {
        Some(pos) => &name[pos + 2..],
        None => name,
    }
}
