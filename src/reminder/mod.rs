pub mod embedded;

use std::io::Write;

use clap::ValueEnum;

use crate::error::hook_error::OutputSnafu;
use crate::error::Result;
use snafu::ResultExt;

/// Static reminder payloads for the prompt-submit hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Reminder {
    /// Tool execution, communication and environment directives
    CoreDirectives,
    /// Shell, path and workflow constraints only
    EnvConstraints,
}

impl Reminder {
    /// The exact text written to stdout.
    pub fn payload(self) -> &'static str {
        match self {
            Reminder::CoreDirectives => embedded::CORE_DIRECTIVES.trim_start_matches('\n'),
            Reminder::EnvConstraints => embedded::ENV_CONSTRAINTS,
        }
    }
}

/// Write the payload as UTF-8 with no trailing newline.
pub fn emit<W: Write>(reminder: Reminder, out: &mut W) -> Result<()> {
    out.write_all(reminder.payload().as_bytes()).context(OutputSnafu)?;
    out.flush().context(OutputSnafu)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_directives_wrapped() {
        let text = Reminder::CoreDirectives.payload();
        assert!(text.starts_with("<core_directives>"));
        assert!(text.ends_with("</core_directives>"));
    }

    #[test]
    fn test_env_constraints_wrapped() {
        let text = Reminder::EnvConstraints.payload();
        assert!(text.starts_with("<system_reminder>"));
        assert!(text.ends_with("</system_reminder>"));
    }

    #[test]
    fn test_emit_is_byte_exact() {
        let mut out = Vec::new();
        emit(Reminder::EnvConstraints, &mut out).unwrap();
        assert_eq!(out, embedded::ENV_CONSTRAINTS.as_bytes());
    }

    #[test]
    fn test_emit_core_directives_is_byte_exact() {
        let mut out = Vec::new();
        emit(Reminder::CoreDirectives, &mut out).unwrap();
        assert!(out.starts_with(
            b"<core_directives>\n[System Command: STRICT ENFORCEMENT REQUIRED]\n---\n"
        ));
        assert!(out.ends_with(b"---\n</core_directives>"));
        assert_eq!(out, embedded::CORE_DIRECTIVES.as_bytes());
    }

    #[test]
    fn test_value_names() {
        assert_eq!(
            Reminder::from_str("core-directives", false).unwrap(),
            Reminder::CoreDirectives
        );
        assert_eq!(
            Reminder::from_str("env-constraints", false).unwrap(),
            Reminder::EnvConstraints
        );
    }
}
