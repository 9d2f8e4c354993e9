use microlog::{call_site, CallSite, Severity};

/// Every entry point of the global logger must return without panicking.
/// Run with `cargo test -- --nocapture` to see the lines.
#[test]
fn test_global_entry_points_do_not_panic() {
    microlog::info!("This is a test info message.");
    microlog::warning!("This is a test warning message.");
    microlog::error!("This is a test error message.");

    microlog::info!("brief info", context: false);
    microlog::warning!(String::from("owned warning"), context: true);
    microlog::error!("", context: false);
    microlog::log!(Severity::Warning, "explicit severity");

    microlog::log_info("function info", true, call_site!());
    microlog::log_warning("function warning", false, call_site!());
    microlog::log_error("function error", true, CallSite::new("/src/App/Main.ext", "run", 42));

    for severity in Severity::ALL {
        microlog::emit(severity, "emitted", true, call_site!());
    }
}

#[test]
fn test_call_site_from_integration_test() {
    let call_site = call_site!();
    assert_eq!(call_site.file_name(), "smoke.rs");
    assert_eq!(call_site.function, "test_call_site_from_integration_test");
    assert_eq!(call_site.to_string(), format!("smoke.rs:{} test_call_site_from_integration_test", call_site.line));
}

#[tokio::test]
async fn test_function_name_in_async_test() {
    assert_eq!(microlog::function_name!(), "test_function_name_in_async_test");
}
