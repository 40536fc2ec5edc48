//! Utility modules shared by consumers of this crate.
//!
//! Each module is a bag of free functions with no state between calls:
//!
//! - [`date`] - Calendar date comparison, arithmetic and normalization
//! - [`numeric`] - Lenient locale-aware string-to-number parsing
//!
//! All utilities are pure apart from the functions that read the system
//! clock, and every clock-reading function has a `*_at` variant taking the
//! current moment explicitly for testability.

pub mod date;
pub mod numeric;
