use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::InjectPolicy;
use crate::error::hook_error::{ParseRegistrySnafu, RegistrySnafu};
use crate::error::Result;
use snafu::{ensure, ResultExt};

const BUILTIN_REGISTRY: &str = include_str!("../../embedded/registry.toml");

/// One reference block maintained in the target document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub tag: String,
    pub path: String,
    /// Only included when the policy is `Always`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub gated: bool,
}

impl RegistryEntry {
    pub fn new(tag: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            path: path.into(),
            gated: false,
        }
    }

    pub fn gated(tag: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            gated: true,
            ..Self::new(tag, path)
        }
    }

    /// The `@path` line that marks this entry as present.
    pub fn reference_line(&self) -> String {
        format!("@{}", self.path)
    }

    pub fn open_tag(&self) -> String {
        format!("<{}>", self.tag)
    }

    pub fn close_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default, rename = "entry")]
    entries: Vec<RegistryEntry>,
}

/// Ordered, validated set of registry entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// The registry compiled into the binary from `embedded/registry.toml`.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_REGISTRY)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(source).context(ParseRegistrySnafu)?;
        Self::from_entries(file.entries)
    }

    /// Build a registry, rejecting empty or duplicate tags and more than one gated entry.
    pub fn from_entries(entries: Vec<RegistryEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            ensure!(
                !entry.tag.trim().is_empty(),
                RegistrySnafu {
                    message: format!("entry for {} has an empty tag", entry.path),
                }
            );
            ensure!(
                !entry.path.trim().is_empty(),
                RegistrySnafu {
                    message: format!("entry {} has an empty path", entry.tag),
                }
            );
            ensure!(
                seen.insert(entry.tag.as_str()),
                RegistrySnafu {
                    message: format!("duplicate tag: {}", entry.tag),
                }
            );
        }

        let gated = entries.iter().filter(|e| e.gated).count();
        ensure!(
            gated <= 1,
            RegistrySnafu {
                message: format!("{gated} gated entries (at most one allowed)"),
            }
        );

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The gated entry, if the registry has one.
    pub fn gated_entry(&self) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.gated)
    }

    /// Entries that apply for this run, in registry order.
    pub fn active(&self, policy: &InjectPolicy) -> Vec<&RegistryEntry> {
        let include_gated = policy.includes_gated();
        self.entries
            .iter()
            .filter(|e| include_gated || !e.gated)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags<'a>(entries: &[&'a RegistryEntry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.tag.as_str()).collect()
    }

    #[test]
    fn test_builtin_registry_order() {
        let registry = Registry::builtin().unwrap();
        let all: Vec<&str> = registry.entries().iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(all, ["project_structure", "history_timeline", "logic_tree"]);
        assert_eq!(registry.entries()[1].path, ".claude/history/timeline.md");
    }

    #[test]
    fn test_builtin_gated_entry_is_logic_tree() {
        let registry = Registry::builtin().unwrap();
        let gated = registry.gated_entry().unwrap();
        assert_eq!(gated.tag, "logic_tree");
        assert_eq!(gated.path, ".claude/logic_tree.md");
    }

    #[test]
    fn test_active_always_keeps_gated() {
        let registry = Registry::builtin().unwrap();
        let active = registry.active(&InjectPolicy::Always);
        assert_eq!(
            tags(&active),
            ["project_structure", "history_timeline", "logic_tree"]
        );
    }

    #[test]
    fn test_active_drops_gated_otherwise() {
        let registry = Registry::builtin().unwrap();
        for policy in [
            InjectPolicy::Ask,
            InjectPolicy::Never,
            InjectPolicy::Unrecognized("sometimes".to_string()),
        ] {
            let active = registry.active(&policy);
            assert_eq!(tags(&active), ["project_structure", "history_timeline"]);
        }
    }

    #[test]
    fn test_reference_line_and_tags() {
        let entry = RegistryEntry::new("logic_tree", ".claude/logic_tree.md");
        assert_eq!(entry.reference_line(), "@.claude/logic_tree.md");
        assert_eq!(entry.open_tag(), "<logic_tree>");
        assert_eq!(entry.close_tag(), "</logic_tree>");
    }

    #[test]
    fn test_rejects_duplicate_tags() {
        let err = Registry::from_entries(vec![
            RegistryEntry::new("a", "one.md"),
            RegistryEntry::new("a", "two.md"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate tag: a"));
    }

    #[test]
    fn test_rejects_multiple_gated() {
        let err = Registry::from_entries(vec![
            RegistryEntry::gated("a", "one.md"),
            RegistryEntry::gated("b", "two.md"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("at most one"));
    }

    #[test]
    fn test_rejects_empty_tag() {
        assert!(Registry::from_entries(vec![RegistryEntry::new(" ", "one.md")]).is_err());
    }

    #[test]
    fn test_empty_toml_is_empty_registry() {
        let registry = Registry::from_toml("").unwrap();
        assert!(registry.is_empty());
        assert!(registry.active(&InjectPolicy::Always).is_empty());
    }

    #[test]
    fn test_malformed_toml() {
        let err = Registry::from_toml("[[entry]]\ntag = 3\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse registry"));
    }
}
