//! Render use cases and artifact writers.

use anyhow::Context;
use camino::Utf8Path;
use includeguard_types::IncludeguardReport;

use crate::report::serialize_report;

pub use includeguard_render::escape_annotation;

pub fn render_text(report: &IncludeguardReport) -> Vec<String> {
    includeguard_render::render_text(report)
}

pub fn render_markdown(report: &IncludeguardReport) -> String {
    includeguard_render::render_markdown(report)
}

pub fn render_annotations(report: &IncludeguardReport) -> Vec<String> {
    includeguard_render::render_github_annotations(report)
}

/// Write the JSON report to `path`, creating parent directories.
pub fn write_report(path: &Utf8Path, report: &IncludeguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data).with_context(|| format!("write report: {}", path))
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes()).with_context(|| format!("write text: {}", path))
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}
