//! Pipeline warnings, deduplicated and routed through the `log` facade.
//!
//! Used by the style and layout stages to report input they accept but do
//! not fully support (unknown `display` keywords, non-`px` lengths, inline
//! layout). Each unique message is logged once until [`clear_warnings`].

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already logged (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about unsupported input (logs once per unique message).
///
/// Returns `true` if this call emitted the warning, `false` if the same
/// message had already been logged.
///
/// The record of logged messages is process-wide and outlives any single
/// pipeline run. Only [`clear_warnings`] resets it, and only the browser
/// crate's `render` calls that. Code driving the style or layout stages
/// directly sees a message logged once per process (or per
/// `clear_warnings`), not once per document, and concurrent pipelines
/// share the record. The record only gates logging; no pipeline output
/// depends on it.
///
/// # Example
/// ```
/// use larch_common::warning::warn_once;
///
/// let first = warn_once("layout", "inline layout is not supported");
/// let second = warn_once("layout", "inline layout is not supported");
/// assert!(first);
/// assert!(!second);
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_log = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_log {
        log::warn!(target: component, "{message}");
    }
    should_log
}

/// Clear all recorded warnings (call before rendering a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
