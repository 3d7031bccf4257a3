//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_INCLUDES_FORBIDDEN: &str = "includes.forbidden";
pub const CHECK_INCLUDES_PARSE: &str = "includes.parse";

// Codes: includes.forbidden
pub const CODE_FORBIDDEN_INCLUDE: &str = "forbidden_include";

// Codes: includes.parse
pub const CODE_PARSE_DIAGNOSTIC: &str = "parse_diagnostic";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Name of the synthetic translation unit fed to the compiler on stdin.
pub const SYNTHETIC_UNIT_NAME: &str = "<stdin>";
