//! Rendering utilities for terminals and CI surfaces (classic text, GitHub annotations, Markdown).
//!
//! Renderers are pure: they take a finished [`IncludeguardReport`] and return text.
//!
//! [`IncludeguardReport`]: includeguard_types::IncludeguardReport

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod text;

pub use gha::{escape_annotation, render_github_annotations};
pub use markdown::render_markdown;
pub use text::{render_parse_failure, render_text, render_violations};

#[cfg(test)]
mod fixtures;
