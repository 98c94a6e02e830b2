//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece destination rules
//! - `game.rs` - Move orchestration, turn management, win conditions
//! - `proptest.rs` - Property-based tests

mod proptest;
