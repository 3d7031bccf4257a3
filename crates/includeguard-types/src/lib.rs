//! Stable DTOs and IDs used across the includeguard workspace.
//!
//! This crate is intentionally boring:
//! - source locations, diagnostics and include edges as reported by a compiler frontend
//! - per-header violations with their evidence
//! - the emitted JSON report envelope
//! - stable string IDs and codes

#![forbid(unsafe_code)]

pub mod ids;
pub mod include;
pub mod report;

pub use include::{Diagnostic, IncludeEdge, Location, Severity, Violation};
pub use report::{
    IncludeguardReport, ParseFailureReport, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
