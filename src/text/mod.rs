//! Text normalization for page records
//!
//! Page text is reduced to a single line drawn from a restricted character
//! set before it is persisted.

mod sanitize;

pub use sanitize::{requires_javascript, sanitize, JAVASCRIPT_REQUIRED_MARKER};
