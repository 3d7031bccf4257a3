//! CLI entry point for includeguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `includeguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use includeguard_app::{
    CheckInput, escape_annotation, render_annotations, render_markdown, render_text, run_check,
    write_report, write_text,
};
use includeguard_settings::Overrides;
use includeguard_types::ids;
use tracing::{debug, info};

const DEFAULT_CONFIG: &str = "includeguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "includeguard",
    version,
    about = "Enforce header inclusion policies for C and C++ source trees",
    override_usage = "includeguard [OPTIONS] [-- COMPILER_ARGS...]"
)]
struct Cli {
    /// Read headers from DIR (repeatable).
    #[arg(short = 'd', long = "dir", value_name = "DIR", action = clap::ArgAction::Append)]
    dirs: Vec<Utf8PathBuf>,

    /// Substring that must not appear in any included path (repeatable).
    #[arg(short = 'f', long, value_name = "FORBIDDEN", action = clap::ArgAction::Append)]
    forbidden: Vec<String>,

    /// Exceptions for headers under a scope, e.g. some/path:bad/header.h:bad/other.h (repeatable).
    #[arg(short = 'a', long, value_name = "ALLOWED", action = clap::ArgAction::Append)]
    allowed: Vec<String>,

    /// Skip directories with this name (repeatable; default `.h` and `.hxx`).
    #[arg(short = 'i', long, value_name = "IGNORE", action = clap::ArgAction::Append)]
    ignore: Vec<String>,

    /// Check files ending with this suffix (repeatable).
    #[arg(short = 'e', long = "file-extensions", value_name = "EXTENSION", action = clap::ArgAction::Append)]
    file_extensions: Vec<String>,

    /// Compiler driver used to parse headers (default `clang++`).
    #[arg(long, value_name = "PROGRAM", env = "INCLUDEGUARD_COMPILER")]
    compiler: Option<String>,

    /// Path to includeguard config TOML (default `includeguard.toml` if present).
    #[arg(long, value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// How findings are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the JSON report to PATH.
    #[arg(long, value_name = "PATH")]
    report_out: Option<Utf8PathBuf>,

    /// Write a Markdown summary to PATH.
    #[arg(long, value_name = "PATH")]
    markdown_out: Option<Utf8PathBuf>,

    /// Enable verbose logging (info level).
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    /// Arguments forwarded to every compiler run.
    #[arg(last = true, value_name = "COMPILER_ARGS", allow_hyphen_values = true)]
    compiler_args: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Classic text on stderr.
    Text,
    /// Classic text on stderr plus GitHub Actions annotations on stdout.
    Github,
}

fn main() {
    // Usage errors exit 1; exit code 2 is reserved for policy violations.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.verbose, cli.debug);

    let code = match cmd_check(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("includeguard error: {err:#}");
            if cli.format == OutputFormat::Github {
                println!(
                    "::error::{}",
                    escape_annotation(&format!(
                        "[{}:{}] {err:#}",
                        ids::CHECK_TOOL_RUNTIME,
                        ids::CODE_RUNTIME_ERROR
                    ))
                );
            }
            1
        }
    };
    std::process::exit(code);
}

fn cmd_check(cli: &Cli) -> anyhow::Result<i32> {
    let (config_text, config_dir) = load_config(cli.config.as_deref())?;

    let input = CheckInput {
        config_text: &config_text,
        config_dir: &config_dir,
        overrides: Overrides {
            dirs: cli.dirs.clone(),
            forbidden: cli.forbidden.clone(),
            allowed: cli.allowed.clone(),
            ignore: cli.ignore.clone(),
            file_extensions: cli.file_extensions.clone(),
            compiler: cli.compiler.clone(),
            compiler_args: cli.compiler_args.clone(),
        },
    };

    let output = run_check(input)?;
    let report = &output.report;
    info!(
        headers = report.headers_checked,
        verdict = ?report.verdict,
        "check finished"
    );

    for line in render_text(report) {
        eprintln!("{line}");
    }
    if cli.format == OutputFormat::Github {
        for line in render_annotations(report) {
            println!("{line}");
        }
    }

    if let Some(path) = &cli.report_out {
        write_report(path, report).context("write report json")?;
    }
    if let Some(path) = &cli.markdown_out {
        write_text(path, &render_markdown(report)).context("write markdown")?;
    }

    Ok(report.exit_code())
}

/// Config text and the directory its relative paths are anchored at.
///
/// An explicit `--config` must exist; the default `includeguard.toml` is optional.
fn load_config(explicit: Option<&Utf8Path>) -> anyhow::Result<(String, Utf8PathBuf)> {
    let path = explicit.unwrap_or(Utf8Path::new(DEFAULT_CONFIG));
    let config_dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };

    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(config = %path, "loaded config");
            Ok((text, config_dir))
        }
        Err(err) if explicit.is_none() && err.kind() == std::io::ErrorKind::NotFound => {
            Ok((String::new(), config_dir))
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
