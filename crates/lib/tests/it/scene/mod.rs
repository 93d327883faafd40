//! Scene reconciliation integration tests
//!
//! Covers the reference add-then-keep scenario, the action partition over
//! mixed live pools, and every condition that aborts a pass.

mod object_tests;
