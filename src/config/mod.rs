pub mod registry;

use serde::{Deserialize, Serialize};

pub use registry::{Registry, RegistryEntry};

/// Environment variable selecting whether the gated registry entry is injected.
pub const POLICY_ENV: &str = "LOGIC_INDEX_AUTO_INJECT";

/// Root context document, relative to the working directory.
pub const TARGET_FILE: &str = "CLAUDE.md";

/// Written to the target document when it does not exist yet.
pub const DOCUMENT_HEADER: &str = "# System Context\n\n";

/// Inclusion policy for the gated registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjectPolicy {
    Always,
    Ask,
    Never,
    /// Any other value. Treated like `Never`.
    Unrecognized(String),
}

impl InjectPolicy {
    pub fn includes_gated(&self) -> bool {
        matches!(self, InjectPolicy::Always)
    }
}

impl std::fmt::Display for InjectPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InjectPolicy::Always => write!(f, "ALWAYS"),
            InjectPolicy::Ask => write!(f, "ASK"),
            InjectPolicy::Never => write!(f, "NEVER"),
            InjectPolicy::Unrecognized(raw) => write!(f, "{raw}"),
        }
    }
}

/// Map a raw environment value to a policy. Unset means `Always`; matching is exact.
pub fn resolve_policy(raw: Option<&str>) -> InjectPolicy {
    match raw {
        None | Some("ALWAYS") => InjectPolicy::Always,
        Some("ASK") => InjectPolicy::Ask,
        Some("NEVER") => InjectPolicy::Never,
        Some(other) => {
            tracing::warn!(
                "Unrecognized {POLICY_ENV} value {other:?}; gated entry will not be injected"
            );
            InjectPolicy::Unrecognized(other.to_string())
        }
    }
}

/// Injector configuration, assembled from fixed defaults + environment.
#[derive(Debug, Clone)]
pub struct InjectorConfig {
    pub target_file: String,
    pub header: String,
    pub policy: InjectPolicy,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            target_file: TARGET_FILE.to_string(),
            header: DOCUMENT_HEADER.to_string(),
            policy: InjectPolicy::Always,
        }
    }
}

impl InjectorConfig {
    /// Load config, reading the policy from the process environment.
    pub fn from_env() -> Self {
        let raw = std::env::var(POLICY_ENV).ok();
        Self::with_policy_value(raw.as_deref())
    }

    pub fn with_policy_value(raw: Option<&str>) -> Self {
        Self {
            policy: resolve_policy(raw),
            ..Self::default()
        }
    }
}
