//! Edge case tests

pub mod error_handling_tests;
