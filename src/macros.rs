//! Call-site capture and the severity macros.
//!
//! ```
//! microlog::info!("starting up");
//! microlog::warning!("cache miss", context: false);
//! microlog::error!(String::from("disk full"));
//! ```

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::types::trim_function_path(type_name_of(f))
    }};
}

/// [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::file!(), $crate::function_name!(), ::std::line!())
    };
}

/// Logs `message` with the given severity through the global logger.
#[macro_export]
macro_rules! log {
    ($severity:expr, $message:expr, context: $context:expr $(,)?) => {
        $crate::utils::logging::emit(
            $severity,
            ::core::convert::AsRef::<str>::as_ref(&$message),
            $context,
            $crate::call_site!(),
        )
    };
    ($severity:expr, $message:expr $(,)?) => {
        $crate::utils::logging::emit(
            $severity,
            ::core::convert::AsRef::<str>::as_ref(&$message),
            $crate::utils::logging::include_context_default(),
            $crate::call_site!(),
        )
    };
}

#[macro_export]
macro_rules! info {
    ($message:expr, context: $context:expr $(,)?) => {
        $crate::log!($crate::Severity::Info, $message, context: $context)
    };
    ($message:expr $(,)?) => {
        $crate::log!($crate::Severity::Info, $message)
    };
}

#[macro_export]
macro_rules! warning {
    ($message:expr, context: $context:expr $(,)?) => {
        $crate::log!($crate::Severity::Warning, $message, context: $context)
    };
    ($message:expr $(,)?) => {
        $crate::log!($crate::Severity::Warning, $message)
    };
}

#[macro_export]
macro_rules! error {
    ($message:expr, context: $context:expr $(,)?) => {
        $crate::log!($crate::Severity::Error, $message, context: $context)
    };
    ($message:expr $(,)?) => {
        $crate::log!($crate::Severity::Error, $message)
    };
}
