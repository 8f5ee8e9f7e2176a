//! bmfont End-to-End Test Infrastructure
//!
//! This crate provides shared fixtures for integration tests covering:
//!
//! - Layout: descriptor text -> font -> measurement and draw commands
//! - Properties: measurement/draw consistency, kerning locality, robustness
//! - CLI: font loading and command output records
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bmfont-tests
//! ```

pub mod fixtures;
