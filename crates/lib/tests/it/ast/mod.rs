//! Projection layer integration tests
//!
//! Node validation per kind, ordered-trial value decoding, lazy ranges and
//! resolved paths.

mod node_tests;
mod path_tests;
mod range_tests;
