//! Integration tests for genre-reel
//!
//! Tests are organized by component:
//! - router_test: dispatch of all actions against the built-in catalog
//! - cli_test: argument parsing, catalog/config files, output rendering

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
