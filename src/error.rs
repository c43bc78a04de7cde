use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(hook_error))]
pub enum HookError {
    #[snafu(display("cannot determine working directory: {source}"))]
    CurrentDir {
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to read {}: {source}", path.display()))]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to resolve {}: {source}", path.display()))]
    ResolveDocument {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to create {}: {source}", path.display()))]
    CreateDocument {
        path: PathBuf,
        source: atomicwrites::Error<std::io::Error>,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteDocument {
        path: PathBuf,
        source: atomicwrites::Error<std::io::Error>,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to parse registry: {source}"))]
    ParseRegistry {
        source: toml::de::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("invalid registry: {message}"))]
    Registry {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to write output: {source}"))]
    Output {
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("JSON error: {source}"))]
    Json {
        source: serde_json::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

pub type Result<T, E = HookError> = std::result::Result<T, E>;
