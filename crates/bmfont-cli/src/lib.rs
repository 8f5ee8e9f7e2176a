//! bmfont CLI library.
//!
//! This crate provides the functionality behind the `bmfont` binary: loading
//! fonts from descriptors or manifests, and the inspect, validate, measure,
//! and layout commands.

pub mod commands;
pub mod input;
