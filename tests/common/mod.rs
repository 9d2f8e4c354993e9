use microlog::{FixedClock, Logger, LoggerConfig, MemorySink};
use std::sync::Arc;

pub const NOW: &str = "2024-05-01 12:30:45.1234";

/// Helper function to create a logger whose output the test can read back
pub fn setup_capturing_logger(config: LoggerConfig) -> (Arc<Logger<Arc<MemorySink>, FixedClock>>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_parts(config, sink.clone(), FixedClock(NOW.to_string()));
    (Arc::new(logger), sink)
}
