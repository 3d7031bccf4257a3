//! Use case orchestration for includeguard.
//!
//! This crate provides the application layer: it resolves configuration, wires the compiler
//! frontend to the scanner and the engine, and turns the outcome into a report. It is
//! intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;
mod report;

pub use check::{CheckInput, CheckOutput, check_with_frontend, resolve_input, run_check};
pub use render::{
    escape_annotation, render_annotations, render_markdown, render_text, write_report, write_text,
};
pub use report::{build_report, serialize_report};
