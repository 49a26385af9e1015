//! Tests for the CLI module
//!
//! Argument parsing and manifest discovery tests.
