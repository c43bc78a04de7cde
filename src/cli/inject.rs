use crate::config::{InjectorConfig, Registry};
use crate::error::hook_error::{CurrentDirSnafu, JsonSnafu};
use crate::error::Result;
use crate::inject::{apply, plan, Outcome};
use snafu::ResultExt;

/// Run `context-hooks inject` against the current directory.
pub fn run(dry_run: bool, json: bool) -> Result<()> {
    let cwd = std::env::current_dir().context(CurrentDirSnafu)?;
    let registry = Registry::builtin()?;
    let config = InjectorConfig::from_env();

    let outcome = if dry_run {
        plan(&cwd, &registry, &config)?
    } else {
        apply(&cwd, &registry, &config)?
    };

    if json {
        let output = serde_json::to_string_pretty(&outcome).context(JsonSnafu)?;
        println!("{output}");
    } else {
        println!("{}", status_line(&outcome, &config.target_file, dry_run));
    }

    for tag in &outcome.drifted {
        eprintln!("warning: <{tag}> exists without its reference line; left unchanged");
    }

    Ok(())
}

fn status_line(outcome: &Outcome, target: &str, dry_run: bool) -> String {
    match (outcome.changed, dry_run) {
        (true, false) => format!("[Injector] Updated {target}"),
        (true, true) => format!(
            "[Injector] Would add {} to {target}",
            outcome.injected.join(", ")
        ),
        (false, _) => format!("[Injector] No changes needed for {target}"),
    }
}
