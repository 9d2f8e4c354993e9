use chrono::{DateTime, Local, Timelike};

/// Date and time up to seconds; `format_timestamp` appends the `.SSSS` fraction
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the timestamp written in front of a log line.
pub trait Clock: Send + Sync {
    fn current_time(&self) -> String;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_time(&self) -> String {
        current_time()
    }
}

/// Always reports the same timestamp. Useful for comparing whole lines.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn current_time(&self) -> String {
        self.0.clone()
    }
}

/// Returns the current local date and time with four fractional digits.
pub fn current_time() -> String {
    format_timestamp(Local::now())
}

/// `yyyy-MM-dd HH:mm:ss.SSSS` for `moment`.
pub fn format_timestamp(moment: DateTime<Local>) -> String {
    // nanosecond() exceeds 999_999_999 during a leap second
    let fraction = (moment.nanosecond() / 100_000).min(9_999);
    format!("{}.{:04}", moment.format(DATE_TIME_FORMAT), fraction)
}
