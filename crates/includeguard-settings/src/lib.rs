//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod allowed;
mod error;
mod model;
mod resolve;

pub use allowed::parse_allowed_spec;
pub use error::ConfigError;
pub use model::{AllowedEntry, IncludeguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig, resolve_config};

/// Parse `includeguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> Result<IncludeguardConfigV1, ConfigError> {
    let cfg: IncludeguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
