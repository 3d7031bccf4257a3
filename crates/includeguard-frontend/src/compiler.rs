use crate::diagnostics::parse_diagnostics;
use crate::linemarkers::parse_includes;
use includeguard_domain::{Frontend, FrontendError, SyntheticUnit, TranslationUnit};
use includeguard_types::IncludeEdge;
use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// [`Frontend`] backed by a GNU-compatible compiler driver (`clang++`, `g++`).
///
/// Each unit costs two runs fed from stdin: `-fsyntax-only` for diagnostics, then, if that was
/// clean, `-E` for the include graph.
#[derive(Clone, Debug)]
pub struct CompilerFrontend {
    program: String,
}

impl CompilerFrontend {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_args(mode: &str, unit: &SyntheticUnit) -> Vec<String> {
        let mut args: Vec<String> = vec!["-x".into(), "c++".into(), mode.into()];
        if mode == "-fsyntax-only" {
            args.push("-fdiagnostics-color=never".into());
        }
        args.extend(unit.args.iter().cloned());
        args.push("-".into());
        args
    }

    fn failed(&self, output: &Output) -> FrontendError {
        FrontendError::Failed {
            program: self.program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

impl Frontend for CompilerFrontend {
    fn parse(&self, unit: &SyntheticUnit) -> Result<TranslationUnit, FrontendError> {
        let syntax = run_compiler(
            &self.program,
            &Self::command_args("-fsyntax-only", unit),
            &unit.source,
        )?;
        let diagnostics = parse_diagnostics(&String::from_utf8_lossy(&syntax.stderr));
        if !diagnostics.is_empty() {
            debug!(header = %unit.header, count = diagnostics.len(), "frontend reported diagnostics");
            return Ok(TranslationUnit {
                diagnostics,
                includes: Vec::new(),
            });
        }
        if !syntax.status.success() {
            return Err(self.failed(&syntax));
        }

        let preprocess = run_compiler(&self.program, &Self::command_args("-E", unit), &unit.source)?;
        if !preprocess.status.success() {
            return Err(self.failed(&preprocess));
        }

        let mut includes = parse_includes(&String::from_utf8_lossy(&preprocess.stdout), &unit.name);
        fill_columns(&mut includes, unit);
        debug!(header = %unit.header, includes = includes.len(), "include graph resolved");

        Ok(TranslationUnit {
            diagnostics: Vec::new(),
            includes,
        })
    }
}

pub(crate) fn run_compiler(
    program: &str,
    args: &[String],
    stdin: &str,
) -> Result<Output, FrontendError> {
    debug!(program, ?args, "running compiler");
    let spawn_err = |source| FrontendError::Spawn {
        program: program.to_string(),
        source,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_err)?;

    if let Some(mut pipe) = child.stdin.take() {
        match pipe.write_all(stdin.as_bytes()) {
            Ok(()) => {}
            // The compiler quit without reading its input; its status and stderr say why.
            Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {
                debug!(program, "compiler closed stdin early");
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(spawn_err(err));
            }
        }
    }

    child.wait_with_output().map_err(spawn_err)
}

/// Point each edge's column at the `#` of its directive, reading includers from disk once per
/// unit. Falls back to column 1 when the includer cannot be read.
fn fill_columns(edges: &mut [IncludeEdge], unit: &SyntheticUnit) {
    let mut sources: HashMap<String, Option<Vec<String>>> = HashMap::new();

    for edge in edges.iter_mut() {
        let lines = sources.entry(edge.includer.clone()).or_insert_with(|| {
            if edge.includer == unit.name {
                Some(unit.source.lines().map(str::to_string).collect())
            } else {
                std::fs::read_to_string(&edge.includer)
                    .ok()
                    .map(|text| text.lines().map(str::to_string).collect())
            }
        });

        edge.location.col = lines
            .as_ref()
            .and_then(|l| l.get((edge.location.line as usize).checked_sub(1)?))
            .and_then(|text| directive_column(text))
            .unwrap_or(1);
    }
}

fn directive_column(line: &str) -> Option<u32> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('#') {
        return None;
    }
    Some((line.len() - trimmed.len()) as u32 + 1)
}
