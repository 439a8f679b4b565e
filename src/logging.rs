//! Debug tracing for the widget.
//!
//! The widget's `debug` option turns on verbose tracing of every tag-store
//! operation. Tracing is fully side-effect-free with respect to widget state:
//! it only writes to the browser console on WASM targets or to stderr on
//! native targets.

/// Logs a trace message when the first argument evaluates to `true`.
///
/// The guard is the widget's runtime `debug` flag, so tracing costs one branch
/// when disabled.
///
/// # Example
///
/// ```ignore
/// trace_log!(options.debug, "add_tag {:?}", value);
/// ```
#[macro_export]
macro_rules! trace_log {
	($enabled:expr, $($arg:tt)*) => {{
		if $enabled {
			$crate::logging::emit(&format!($($arg)*));
		}
	}};
}

/// Writes one trace line to the host environment's diagnostic channel.
#[cfg(target_arch = "wasm32")]
pub fn emit(message: &str) {
	web_sys::console::debug_1(&message.into());
}

/// Writes one trace line to the host environment's diagnostic channel.
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(message: &str) {
	eprintln!("[tags-input] {message}");
}
