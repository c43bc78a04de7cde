use clap::Parser;
use context_hooks::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout is captured by the hook runner, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => context_hooks::cli::inject::run(false, false),
        Some(Commands::Inject { dry_run, json }) => context_hooks::cli::inject::run(dry_run, json),
        Some(Commands::Remind { reminder }) => context_hooks::cli::remind::run(reminder),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
