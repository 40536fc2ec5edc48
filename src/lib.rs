//! Kitbag - a grab-bag of small general-purpose helpers
//!
//! This library collects independent utility functions with no shared
//! state and no architecture between them: calendar date comparison and
//! arithmetic, lenient parsing of human-entered numeric strings, and a
//! best-effort shim for opening the system web browser.
//!
//! # Modules
//!
//! * [`utils::date`] - Date predicates, arithmetic and normalization
//! * [`utils::numeric`] - Locale-tolerant numeric and boolean parsing
//! * [`browser`] - Platform detection and browser launching

/// Platform detection and system browser launching
pub mod browser;

/// Utility functions for dates and numeric parsing
pub mod utils;

// Re-export the utility modules for convenient access
pub use utils::{date, numeric};
