//! State module for tracking crawl progress
//!
//! `PageState` follows a single URL from discovery to its record on disk.

mod page_state;

pub use page_state::PageState;
