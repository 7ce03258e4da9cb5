//! Deduplicated warnings with colored terminal output.
//!
//! Style resolution runs many times per document, so a malformed value
//! would otherwise be reported once per query.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed by `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Print a warning for `component` unless the same message was already
/// printed since the last [`clear_warnings`].
///
/// # Example
/// ```ignore
/// warn_once("Style", "unknown length unit 'vmax' in '3vmax'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[Koala {component}] ⚠ {message}").yellow());
    }
}

/// Insert the message into the seen set, returning true the first time.
fn record(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(format!("[{component}] {message}"))
}

/// Forget every recorded warning. Call between documents.
pub fn clear_warnings() {
    if let Some(set) = WARNED.lock().unwrap_or_else(PoisonError::into_inner).as_mut() {
        set.clear();
    }
}
