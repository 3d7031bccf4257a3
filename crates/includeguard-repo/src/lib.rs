//! Repository adapters: find candidate headers under the configured roots.
//!
//! This crate is allowed to do filesystem IO. It should not spawn external processes; parsing
//! headers is the frontend's job.

#![forbid(unsafe_code)]

mod discover;

pub use discover::{discover_headers, discover_root};
