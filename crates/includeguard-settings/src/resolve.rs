use crate::{ConfigError, model::IncludeguardConfigV1, parse_allowed_spec};
use camino::{Utf8Path, Utf8PathBuf};
use includeguard_domain::policy::{DEFAULT_COMPILER, DEFAULT_IGNORE};
use includeguard_domain::{AllowScope, CompilerSettings, EffectiveConfig, RuleSet, ScanSettings};
use std::collections::BTreeSet;

/// Values supplied on the command line.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub dirs: Vec<Utf8PathBuf>,
    pub forbidden: Vec<String>,
    /// Raw `SCOPE:STR[:STR...]` specs, parsed during resolution.
    pub allowed: Vec<String>,
    pub ignore: Vec<String>,
    pub file_extensions: Vec<String>,
    pub compiler: Option<String>,
    pub compiler_args: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

/// Merge the config file model with command-line overrides.
///
/// List-valued settings are config entries followed by CLI entries. Allow scopes keep
/// declaration order; a scope declared again replaces the earlier exceptions in place.
/// `config_dir` anchors relative `dirs` from the config file.
pub fn resolve_config(
    cfg: IncludeguardConfigV1,
    overrides: Overrides,
    config_dir: &Utf8Path,
) -> Result<ResolvedConfig, ConfigError> {
    let mut allowed: Vec<AllowScope> = Vec::new();
    let from_config = cfg
        .allowed
        .into_iter()
        .map(|e| {
            if e.exceptions.is_empty() {
                return Err(ConfigError::EmptyAllowed(e.scope));
            }
            Ok(AllowScope::new(e.scope, e.exceptions))
        });
    let from_cli = overrides.allowed.iter().map(|s| parse_allowed_spec(s));
    for scope in from_config.chain(from_cli) {
        insert_scope(&mut allowed, scope?);
    }

    let roots: Vec<Utf8PathBuf> = cfg
        .dirs
        .iter()
        .map(|d| anchor(config_dir, d))
        .chain(overrides.dirs.iter().cloned())
        .collect();
    if roots.is_empty() {
        return Err(ConfigError::NoDirectories);
    }

    let forbidden: BTreeSet<String> = cfg
        .forbidden
        .into_iter()
        .chain(overrides.forbidden)
        .collect();

    let ignore: BTreeSet<String> = if !overrides.ignore.is_empty() {
        overrides.ignore.into_iter().collect()
    } else if let Some(ignore) = cfg.ignore {
        ignore.into_iter().collect()
    } else {
        DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
    };

    let extensions: Vec<String> = cfg
        .file_extensions
        .into_iter()
        .chain(overrides.file_extensions)
        .collect();

    let program = overrides
        .compiler
        .or(cfg.compiler)
        .unwrap_or_else(|| DEFAULT_COMPILER.to_string());
    let args = if overrides.compiler_args.is_empty() {
        cfg.compiler_args
    } else {
        overrides.compiler_args
    };

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            rules: RuleSet { forbidden, allowed },
            scan: ScanSettings {
                roots,
                ignore,
                extensions,
            },
            compiler: CompilerSettings { program, args },
        },
    })
}

fn insert_scope(allowed: &mut Vec<AllowScope>, scope: AllowScope) {
    match allowed.iter_mut().find(|s| s.scope == scope.scope) {
        Some(existing) => existing.exceptions = scope.exceptions,
        None => allowed.push(scope),
    }
}

fn anchor(base: &Utf8Path, dir: &str) -> Utf8PathBuf {
    let dir = Utf8Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        base.join(dir)
    }
}
