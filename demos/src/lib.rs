//! Shared helpers for the crest demos.

pub mod common;
