use crate::compiler::run_compiler;
use includeguard_domain::FrontendError;
use tracing::debug;

const SEARCH_START: &str = "#include <...> search starts here:";
const SEARCH_END: &str = "End of search list";
const FRAMEWORK_MARKER: &str = "(framework directory)";

/// Ask `program` for its default `#include <...>` search path, as `-isystem DIR` flag pairs.
///
/// Runs `PROGRAM -v -E -x c++ -` on empty input once; the listing is read from stdout and
/// stderr together since compilers disagree on where it goes.
pub fn discover_system_includes(program: &str) -> Result<Vec<String>, FrontendError> {
    let args: Vec<String> = ["-v", "-E", "-x", "c++", "-"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let output = run_compiler(program, &args, "")?;

    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    match parse_search_list(&text) {
        Some(dirs) => {
            debug!(program, dirs = dirs.len(), "discovered system include directories");
            Ok(system_include_flags(&dirs))
        }
        None if !output.status.success() => Err(FrontendError::Failed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
        None => Err(FrontendError::Output(format!(
            "`{program} -v` printed no include search list"
        ))),
    }
}

/// Directories listed between the search-list delimiters, minus framework directories.
pub fn parse_search_list(text: &str) -> Option<Vec<String>> {
    let start = text.find(SEARCH_START)? + SEARCH_START.len();
    let len = text[start..].find(SEARCH_END)?;

    Some(
        text[start..start + len]
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.contains(FRAMEWORK_MARKER))
            .map(str::to_string)
            .collect(),
    )
}

pub fn system_include_flags(dirs: &[String]) -> Vec<String> {
    dirs.iter()
        .flat_map(|d| ["-isystem".to_string(), d.clone()])
        .collect()
}
