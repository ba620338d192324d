//! Backend-agnostic test suites for the database traits.
//!
//! Each backend wires these in through the `*_db_tests!` macros with its own setup expression.

pub mod coverage_tests;
pub mod product_tests;
