//! Common utilities for the Larch rendering pipeline.
//!
//! This crate provides shared infrastructure used by all pipeline stages:
//! - **Warning System** - deduplicated diagnostics for unsupported input

pub mod warning;
