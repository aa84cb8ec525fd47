//! Identifiers shared across the host boundary and helpers for validating them.

use serde::{Deserialize, Serialize};

/// Opaque identity of the code-loading context an extension was loaded into.
///
/// The host hands one out per loaded extension. Two frames whose code came
/// from the same loader belong to the same extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LoaderId(pub u64);

impl LoaderId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for LoaderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "loader#{}", self.0)
    }
}

/// Returns true if `name` can be registered as a top-level command keyword.
///
/// Rules:
/// - Must be non-empty
/// - Must not start with '/' (the slash form is accepted at parse time)
/// - Must not contain whitespace or control characters
pub fn is_valid_command_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with('/') {
        return false;
    }

    !name.chars().any(|c| c.is_whitespace() || c.is_control())
}

/// Strips module paths from a Rust type name, keeping generic arguments intact.
///
/// `my_server::console::RconSource` becomes `RconSource`;
/// `a::Wrapper<b::Inner>` becomes `Wrapper<b::Inner>`.
pub fn simple_type_name(full: &str) -> &str {
    let head_end = full.find('<').unwrap_or(full.len());
    let start = full[..head_end].rfind("::").map(|i| i + 2).unwrap_or(0);
    &full[start..]
}
