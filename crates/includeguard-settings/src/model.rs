use serde::{Deserialize, Serialize};

/// `includeguard.toml` schema v1.
///
/// Every field is optional; command-line values are merged on top during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncludeguardConfigV1 {
    /// Optional schema string for tooling (`includeguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directories to scan, relative to the config file.
    #[serde(default)]
    pub dirs: Vec<String>,

    /// Substrings that must not appear in any included path.
    #[serde(default)]
    pub forbidden: Vec<String>,

    /// Allow exceptions, in priority order.
    #[serde(default)]
    pub allowed: Vec<AllowedEntry>,

    /// Directory names to skip. Replaces the built-in set when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,

    #[serde(default)]
    pub file_extensions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,

    #[serde(default)]
    pub compiler_args: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllowedEntry {
    /// Suffix matched against a header's directory or full path.
    pub scope: String,
    pub exceptions: Vec<String>,
}
