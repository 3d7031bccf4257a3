use crate::ConfigError;
use includeguard_domain::AllowScope;

/// Parse one `--allowed` value: `SCOPE:STR[:STR...]`.
///
/// The first field is the scope, the rest are exception substrings, kept verbatim (empty
/// fields included).
pub fn parse_allowed_spec(spec: &str) -> Result<AllowScope, ConfigError> {
    let mut fields = spec.split(':');
    let scope = fields.next().unwrap_or_default();
    let exceptions: Vec<&str> = fields.collect();
    if exceptions.is_empty() {
        return Err(ConfigError::MalformedAllowed(spec.to_string()));
    }
    Ok(AllowScope::new(scope, exceptions))
}
