//! The `check` use case: resolve configuration, scan, evaluate, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use includeguard_domain::{EffectiveConfig, Frontend};
use includeguard_frontend::{CompilerFrontend, discover_system_includes};
use includeguard_settings::{IncludeguardConfigV1, Overrides, ResolvedConfig};
use includeguard_types::IncludeguardReport;
use time::OffsetDateTime;
use tracing::info;

use crate::report::build_report;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Directory relative `dirs` in the config file are anchored at.
    pub config_dir: &'a Utf8Path,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: IncludeguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve configuration. Nothing is scanned or spawned.
pub fn resolve_input(input: &CheckInput<'_>) -> anyhow::Result<ResolvedConfig> {
    // Empty config is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        IncludeguardConfigV1::default()
    } else {
        includeguard_settings::parse_config_toml(input.config_text)?
    };

    let resolved =
        includeguard_settings::resolve_config(cfg, input.overrides.clone(), input.config_dir)?;
    Ok(resolved)
}

/// Run the check use case against the configured host compiler.
///
/// Configuration is resolved before anything touches the filesystem or the compiler, and the
/// compiler's system include directories are discovered once per run.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let resolved = resolve_input(&input)?;

    let program = resolved.effective.compiler.program.clone();
    let system_flags = discover_system_includes(&program)
        .with_context(|| format!("discover system include directories of `{program}`"))?;
    let frontend = CompilerFrontend::new(program);

    let report = check_with_frontend(&resolved.effective, &frontend, &system_flags)?;

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Scan and evaluate with an explicit frontend.
///
/// Every unit gets the configured compiler arguments followed by `system_flags`.
pub fn check_with_frontend<F: Frontend + ?Sized>(
    effective: &EffectiveConfig,
    frontend: &F,
    system_flags: &[String],
) -> anyhow::Result<IncludeguardReport> {
    let started_at = OffsetDateTime::now_utc();

    let candidates = includeguard_repo::discover_headers(&effective.scan, &effective.rules)
        .context("scan header directories")?;
    info!(candidates = candidates.len(), "headers discovered");

    let args: Vec<String> = effective
        .compiler
        .args
        .iter()
        .chain(system_flags)
        .cloned()
        .collect();

    let run = includeguard_domain::evaluate(frontend, &args, &effective.rules, candidates)
        .context("check headers")?;

    let finished_at = OffsetDateTime::now_utc();
    Ok(build_report(run, started_at, finished_at))
}
