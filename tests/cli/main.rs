//! CLI integration tests for fancylists.
//!
//! These tests execute the compiled binary and verify:
//! - Subcommand behavior (render, parse, classify)
//! - Stdin/stdout handling
//! - Config discovery and errors

mod classify;
mod common;
mod parse;
mod render;
