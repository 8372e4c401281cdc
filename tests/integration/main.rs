//! Integration tests for Docsweep
//!
//! These tests use wiremock to create mock HTTP servers and drive full
//! crawls end-to-end into temporary record directories.

mod crawl_tests;
