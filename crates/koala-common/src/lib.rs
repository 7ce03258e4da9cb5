//! Common utilities for the Koala style engine.
//!
//! - **Warnings** - deduplicated, colored stderr diagnostics for input the
//!   engine tolerates but does not understand (unknown units, malformed
//!   inline declarations, unknown browser profiles).

pub mod warning;
