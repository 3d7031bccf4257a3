/// Problems with the configuration, all detected before any header is scanned.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ALLOW argument: {0} (expected SCOPE:STR[:STR...])")]
    MalformedAllowed(String),

    #[error("allowed scope `{0}` in config has no exceptions")]
    EmptyAllowed(String),

    #[error("no directories to check (use -d/--dir or `dirs` in the config file)")]
    NoDirectories,

    #[error("parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
