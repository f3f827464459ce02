//! Unit tests for interact.

mod registry_tests;
