use crate::error::Result;
use crate::reminder::{emit, Reminder};

/// Run `context-hooks remind <name>`.
pub fn run(reminder: Reminder) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit(reminder, &mut out)
}
