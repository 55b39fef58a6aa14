//! Small crate-wide convenience macros.

/// Debug-only console logging.
///
/// Expands to `web_sys::console::log_1` in debug builds running inside the
/// browser and to nothing everywhere else, so reducer and content code can
/// log freely while still running under native `cargo test`.
///
/// ```rust,ignore
/// debug_log!("navigated to {}", route.path());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Quick helper to embed CSS custom-properties (`var(--token)`) without
/// sprinkling `format!("var(--{})", token)` everywhere in the page builders.
///
/// ```rust,ignore
/// let accent = css_var!("accent");   // "var(--accent)"
/// ```
#[macro_export]
macro_rules! css_var {
    ($name:expr) => {
        format!("var(--{})", $name)
    };
}
