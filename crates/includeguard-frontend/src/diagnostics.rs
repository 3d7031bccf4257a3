use includeguard_types::{Diagnostic, Location, Severity};

const LABELS: &[&str] = &["fatal error", "error", "warning", "note"];

/// Extract diagnostics from compiler stderr.
///
/// Only `FILE:LINE[:COL]: SEVERITY: MESSAGE` lines count. Context lines (`In file included
/// from`, source excerpts, carets, summaries) and driver messages without a source position
/// are skipped. A note after another diagnostic belongs to it and is dropped.
pub fn parse_diagnostics(stderr: &str) -> Vec<Diagnostic> {
    let mut out: Vec<Diagnostic> = Vec::new();

    for line in stderr.lines() {
        let Some(diag) = parse_line(line) else {
            continue;
        };
        if diag.severity == Severity::Note && !out.is_empty() {
            continue;
        }
        out.push(diag);
    }

    out
}

fn parse_line(line: &str) -> Option<Diagnostic> {
    let (pos, label) = LABELS
        .iter()
        .filter_map(|label| line.find(&format!(": {label}: ")).map(|pos| (pos, *label)))
        .min_by_key(|(pos, _)| *pos)?;

    let location = parse_location(&line[..pos])?;
    let severity = Severity::from_label(label)?;
    let message = line[pos + label.len() + 4..].trim_end().to_string();

    Some(Diagnostic {
        location: Some(location),
        severity,
        message,
    })
}

fn parse_location(prefix: &str) -> Option<Location> {
    let mut parts = prefix.rsplitn(3, ':');
    let last = parts.next()?;
    let middle = parts.next()?;

    match parts.next() {
        Some(file) if !file.is_empty() => {
            if let (Ok(line), Ok(col)) = (middle.parse::<u32>(), last.parse::<u32>()) {
                return Some(Location::new(file, line, col));
            }
            // `C:\dir\a.h:12` style: the drive colon split off the last field.
            let line = last.parse::<u32>().ok()?;
            Some(Location::new(format!("{file}:{middle}"), line, 0))
        }
        _ => {
            let line = last.parse::<u32>().ok()?;
            if middle.is_empty() {
                return None;
            }
            Some(Location::new(middle, line, 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CLANG_MISMATCHED_BRACE: &str = r#"In file included from <stdin>:1:
/work/pub/broken.h:5:2: error: expected '}'
    5 | }
      |  ^
/work/pub/broken.h:2:15: note: to match this '{'
    2 | namespace foo {
      |               ^
1 error generated.
"#;

    #[test]
    fn clang_error_with_attached_note() {
        let diags = parse_diagnostics(CLANG_MISMATCHED_BRACE);
        assert_eq!(diags.len(), 1);
        let d = &diags[0];
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.message, "expected '}'");
        assert_eq!(d.location, Some(Location::new("/work/pub/broken.h", 5, 2)));
    }

    #[test]
    fn gcc_fatal_error_for_missing_header() {
        let stderr = "\
In file included from <stdin>:1:
/work/pub/a.h:3:10: fatal error: missing.h: No such file or directory
    3 | #include \"missing.h\"
      |          ^~~~~~~~~~~
compilation terminated.
";
        let diags = parse_diagnostics(stderr);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Fatal);
        assert_eq!(diags[0].message, "missing.h: No such file or directory");
        assert_eq!(diags[0].location.as_ref().map(|l| l.line), Some(3));
    }

    #[test]
    fn warnings_count_as_diagnostics() {
        let stderr = "/work/a.h:1:9: warning: #pragma once in main file [-Wpragma-once-outside-header]\n";
        let diags = parse_diagnostics(stderr);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.starts_with("#pragma once in main file"));
    }

    #[test]
    fn driver_messages_without_position_are_ignored() {
        let stderr = "clang: error: unknown argument: '-fbogus'\ncc1plus: warning: command-line option '-Wfoo' is valid for C\n";
        assert!(parse_diagnostics(stderr).is_empty());
    }

    #[test]
    fn missing_column_is_zero() {
        let diags = parse_diagnostics("<stdin>:1: error: something odd\n");
        assert_eq!(diags[0].location, Some(Location::new("<stdin>", 1, 0)));
    }

    #[test]
    fn message_containing_label_uses_first_marker() {
        let diags = parse_diagnostics("/a.h:2:3: error: saw ': warning: ' in text\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].message, "saw ': warning: ' in text");
    }

    #[test]
    fn leading_note_is_kept() {
        let diags = parse_diagnostics("/a.h:1:1: note: standalone\n/a.h:2:1: note: follow-up\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "standalone");
    }

    #[test]
    fn windows_drive_paths() {
        let diags = parse_diagnostics("C:\\src\\a.h:4:7: error: boom\n");
        assert_eq!(diags[0].location, Some(Location::new("C:\\src\\a.h", 4, 7)));
    }

    proptest! {
        #[test]
        fn never_panics(text in "(?s).{0,256}") {
            let _ = parse_diagnostics(&text);
        }
    }
}
