//! Shared test utilities for the includeguard workspace.
//!
//! Several crates need the same three things in their tests: a throwaway tree of headers, a
//! host C++ compiler (or a reason to skip), and JSON reports with run-specific fields blanked.

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Stdio};

/// Environment variable that pins the compiler used by end-to-end tests.
pub const COMPILER_ENV: &str = "INCLUDEGUARD_TEST_COMPILER";

const CANDIDATE_COMPILERS: &[&str] = &["clang++", "g++", "c++"];

/// First usable C++ compiler driver on this host, if any.
///
/// `INCLUDEGUARD_TEST_COMPILER` wins when set. Tests that need a compiler should return early
/// when this is `None`.
pub fn find_compiler() -> Option<String> {
    if let Ok(pinned) = std::env::var(COMPILER_ENV)
        && !pinned.trim().is_empty()
    {
        return Some(pinned);
    }

    CANDIDATE_COMPILERS
        .iter()
        .find(|c| responds_to_version(c))
        .map(|c| c.to_string())
}

fn responds_to_version(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Write `files` (relative path, contents) under `root`, creating parent directories.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture directory");
        }
        std::fs::write(&path, contents).expect("write fixture file");
    }
}

/// The two-header tree most end-to-end tests start from.
///
/// `pub/a.h` reaches `priv/x.h`; `pub/b.h` only reaches `pub/c.h`.
pub fn write_pub_priv_tree(root: &Path) {
    write_tree(
        root,
        &[
            ("pub/a.h", "#pragma once\n\n#include \"../priv/x.h\"\n\ninline int a() { return x(); }\n"),
            ("pub/b.h", "#pragma once\n\n#include \"c.h\"\n\ninline int b() { return c(); }\n"),
            ("pub/c.h", "#pragma once\n\ninline int c() { return 2; }\n"),
            ("priv/x.h", "#pragma once\n\ninline int x() { return 1; }\n"),
        ],
    );
}

/// Normalize run-specific JSON fields for golden comparison.
///
/// `tool.version` is only replaced on a root report envelope (`schema`, `tool`, `verdict`).
/// `started_at` / `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope =
            obj.contains_key("schema") && obj.contains_key("tool") && obj.contains_key("verdict");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_only_touches_envelope_tool_version() {
        let input = json!({
            "schema": "includeguard.report.v1",
            "tool": { "name": "includeguard", "version": "0.1.0" },
            "started_at": "2025-01-01T00:00:00Z",
            "finished_at": "2025-01-01T00:00:01Z",
            "verdict": "fail",
            "violations": [
                { "header": "a.h", "evidence": [], "tool": { "version": "9.9.9" } }
            ]
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "includeguard");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");
        assert_eq!(result["violations"][0]["tool"]["version"], "9.9.9");
    }

    #[test]
    fn root_without_envelope_keys_keeps_version() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "run": { "started_at": "2025-01-01T00:00:00Z" }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        assert_eq!(result["run"]["started_at"], "__TIMESTAMP__");
    }

    #[test]
    fn write_tree_creates_parents() {
        let tmp = std::env::temp_dir().join(format!("includeguard-test-util-{}", std::process::id()));
        write_tree(&tmp, &[("deep/er/x.h", "int x;\n")]);
        assert_eq!(
            std::fs::read_to_string(tmp.join("deep/er/x.h")).expect("read back"),
            "int x;\n"
        );
        std::fs::remove_dir_all(&tmp).expect("cleanup");
    }
}
