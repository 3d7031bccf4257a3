use anyhow::Context;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use includeguard_domain::{CandidateHeader, RuleSet, ScanSettings};
use std::cmp::Ordering;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Discover candidate headers under every configured root, roots in configuration order.
pub fn discover_headers(
    scan: &ScanSettings,
    rules: &RuleSet,
) -> anyhow::Result<Vec<CandidateHeader>> {
    let mut out: Vec<CandidateHeader> = Vec::new();
    for root in &scan.roots {
        out.extend(discover_root(root, scan, rules)?);
    }
    Ok(out)
}

/// Walk one root.
///
/// Behavior:
/// - the root is made absolute and `.`/`..` are folded lexically (symlinks are not resolved, so
///   scope suffixes see the path as configured)
/// - directories named in `scan.ignore` are not descended into; the root itself is never pruned
/// - within a directory, files come before subdirectories, each sorted by name
/// - each header's allow exceptions are resolved once, from its directory and full path
pub fn discover_root(
    root: &Utf8Path,
    scan: &ScanSettings,
    rules: &RuleSet,
) -> anyhow::Result<Vec<CandidateHeader>> {
    let abs = absolute(root)?;
    if !abs.is_dir() {
        anyhow::bail!("not a directory: {}", abs);
    }
    debug!(root = %abs, "scanning");

    let mut out: Vec<CandidateHeader> = Vec::new();
    let walker = WalkDir::new(&abs)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e, scan));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        let Some(path) = Utf8Path::from_path(entry.path()) else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        let Some(name) = path.file_name() else { continue };
        if !scan.has_extension(name) {
            continue;
        }

        let dir = path.parent().map(Utf8Path::as_str).unwrap_or("");
        let allowed = rules.allowed_for(dir, path.as_str());
        out.push(CandidateHeader::new(path, allowed));
    }

    Ok(out)
}

fn absolute(root: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    let abs = std::path::absolute(root).with_context(|| format!("resolve directory: {root}"))?;
    let abs = Utf8PathBuf::from_path_buf(abs)
        .map_err(|p| anyhow::anyhow!("directory is not valid UTF-8: {}", p.display()))?;
    Ok(normalize_lexically(&abs))
}

/// Drop `.` and fold `..` into its parent without touching the filesystem.
fn normalize_lexically(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match out.components().next_back() {
                Some(Utf8Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`.
                Some(Utf8Component::RootDir | Utf8Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

fn is_ignored_dir(entry: &DirEntry, scan: &ScanSettings) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| scan.is_ignored(name))
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
