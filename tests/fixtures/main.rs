//! Provider fixture integration tests.
//!
//! These tests drive the CLI command handlers end to end against temporary
//! directories: generate -> read back -> verify.

mod generate_test;
mod verify_test;
