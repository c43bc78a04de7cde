pub const CORE_DIRECTIVES: &str = include_str!("../../embedded/reminders/core-directives.md");
pub const ENV_CONSTRAINTS: &str = include_str!("../../embedded/reminders/env-constraints.md");
