pub mod types;
pub mod time_source;
pub mod sink;
pub mod config;
pub mod logger;
pub mod utils;
mod macros;

pub use config::LoggerConfig;
pub use logger::Logger;
pub use sink::{LogSink, MemorySink, StdoutSink};
pub use time_source::{current_time, Clock, FixedClock, SystemClock};
pub use types::{CallSite, Severity, SeverityError};
pub use utils::logging::{emit, init_logging, log_error, log_info, log_warning};
