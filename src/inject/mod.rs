pub mod document;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{InjectPolicy, InjectorConfig, Registry, RegistryEntry};
use crate::error::Result;

/// Result of one injector run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub path: PathBuf,
    pub policy: InjectPolicy,
    /// The document did not exist and was created with the header.
    pub created: bool,
    /// The document was (or, in a dry run, would be) rewritten with new blocks.
    pub changed: bool,
    /// Tags appended this run, in registry order.
    pub injected: Vec<String>,
    /// Tags left alone because their opening tag exists without the reference line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drifted: Vec<String>,
}

/// In-memory result of injecting references into document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub content: String,
    pub injected: Vec<String>,
    pub drifted: Vec<String>,
}

impl Injection {
    pub fn changed(&self) -> bool {
        !self.injected.is_empty()
    }
}

/// Ensure every active registry entry is referenced exactly once in the target document
/// under `working_dir`. Writes at most once, and only when something was appended.
pub fn apply(working_dir: &Path, registry: &Registry, config: &InjectorConfig) -> Result<Outcome> {
    run(working_dir, registry, config, false)
}

/// Same as [`apply`] but never creates or writes the document.
pub fn plan(working_dir: &Path, registry: &Registry, config: &InjectorConfig) -> Result<Outcome> {
    run(working_dir, registry, config, true)
}

fn run(
    working_dir: &Path,
    registry: &Registry,
    config: &InjectorConfig,
    dry_run: bool,
) -> Result<Outcome> {
    let path = working_dir.join(&config.target_file);
    let active = registry.active(&config.policy);
    tracing::debug!(
        "Policy {}: {} of {} registry entries active",
        config.policy,
        active.len(),
        registry.entries().len()
    );
    if registry.is_empty() {
        tracing::debug!("Registry is empty, nothing to inject");
    }
    if let Some(gated) = registry.gated_entry() {
        if !config.policy.includes_gated() {
            tracing::debug!("Skipping {} (policy {})", gated.tag, config.policy);
        }
    }

    let (created, content) = if dry_run {
        if path.exists() {
            (false, document::read_document(&path)?)
        } else {
            (true, config.header.clone())
        }
    } else {
        let created = document::ensure_document(&path, &config.header)?;
        (created, document::read_document(&path)?)
    };

    let injection = inject_references(&content, &active);
    let changed = injection.changed();

    if changed && !dry_run {
        document::write_document(&path, &injection.content)?;
        tracing::info!(
            "Injected {} into {}",
            injection.injected.join(", "),
            path.display()
        );
    }

    Ok(Outcome {
        path,
        policy: config.policy.clone(),
        created,
        changed,
        injected: injection.injected,
        drifted: injection.drifted,
    })
}

/// Append a block for each entry whose reference line and opening tag are both absent.
///
/// An entry is satisfied if its `@path` line appears anywhere in the content, inside a
/// tag or not. An entry whose opening tag exists without the reference line is left
/// untouched and reported as drifted.
pub fn inject_references(content: &str, entries: &[&RegistryEntry]) -> Injection {
    let mut content = content.to_string();
    let mut injected = Vec::new();
    let mut drifted = Vec::new();

    for entry in entries {
        let reference = entry.reference_line();
        if content.contains(&reference) {
            tracing::debug!("{} already references {}", entry.tag, reference);
            continue;
        }

        if content.contains(&entry.open_tag()) {
            tracing::debug!("{} exists with different content, leaving it", entry.open_tag());
            drifted.push(entry.tag.clone());
            continue;
        }

        content.push_str(padding_for(&content));
        content.push_str(&build_block(entry));
        injected.push(entry.tag.clone());
    }

    Injection {
        content,
        injected,
        drifted,
    }
}

/// Newlines needed so exactly one blank line precedes an appended block.
fn padding_for(content: &str) -> &'static str {
    if content.is_empty() || content.ends_with("\n\n") {
        ""
    } else if content.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    }
}

fn build_block(entry: &RegistryEntry) -> String {
    format!(
        "{}\n\n{}\n\n{}\n",
        entry.open_tag(),
        entry.reference_line(),
        entry.close_tag()
    )
}
