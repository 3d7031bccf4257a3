//! Frontend adapter: runs the host C++ compiler to parse synthetic translation units.
//!
//! This crate is allowed to spawn processes. Everything it learns from the compiler is parsed
//! from text (stderr diagnostics, preprocessor linemarkers, the verbose search list), so the
//! parsers are exposed separately for tests and fuzzing.

#![forbid(unsafe_code)]

mod compiler;
mod diagnostics;
mod linemarkers;
mod system_includes;

pub use compiler::CompilerFrontend;
pub use diagnostics::parse_diagnostics;
pub use linemarkers::{Linemarker, parse_includes, parse_linemarker};
pub use system_includes::{discover_system_includes, parse_search_list, system_include_flags};
