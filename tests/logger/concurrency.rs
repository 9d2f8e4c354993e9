use crate::common::{setup_capturing_logger, NOW};
use futures::future::join_all;
use microlog::{call_site, LoggerConfig, Severity};
use regex::Regex;
use std::collections::HashSet;

/// Tests that concurrent emitters never corrupt each other's lines:
/// - Many tasks log distinct messages at the same time
/// - Every line arrives complete and exactly once
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_emitters_keep_lines_intact() {
    let (logger, sink) = setup_capturing_logger(LoggerConfig::verbose());

    let tasks = (0..16).map(|task| {
        let logger = logger.clone();
        tokio::spawn(async move {
            for i in 0..100 {
                let severity = Severity::ALL[i % 3];
                logger.emit(severity, &format!("task-{}-msg-{}", task, i), true, call_site!());
            }
        })
    });
    for result in join_all(tasks).await {
        result.expect("Emitter task panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 1600);

    let pattern = Regex::new(&format!(
        r"^{} \| \S+ \[(INFO|WARNING|ERROR)\] task-(\d+)-msg-(\d+) ➜ concurrency\.rs:\d+ test_concurrent_emitters_keep_lines_intact$",
        regex::escape(NOW)
    ))
    .unwrap();

    let mut seen = HashSet::new();
    for line in &lines {
        let captures = pattern
            .captures(line)
            .unwrap_or_else(|| panic!("corrupted line {:?}", line));
        let task: usize = captures[2].parse().unwrap();
        let i: usize = captures[3].parse().unwrap();
        assert_eq!(&captures[1], match i % 3 {
            0 => "INFO",
            1 => "WARNING",
            _ => "ERROR",
        });
        assert!(seen.insert((task, i)), "duplicate line {:?}", line);
    }
    assert_eq!(seen.len(), 1600);
}

/// Global emission from many threads must neither panic nor block.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_global_emission() {
    let tasks = (0..8).map(|task| {
        tokio::task::spawn_blocking(move || {
            for i in 0..10 {
                microlog::info!(format!("global task {} line {}", task, i));
            }
        })
    });
    for result in join_all(tasks).await {
        result.expect("Global emitter panicked");
    }
}
